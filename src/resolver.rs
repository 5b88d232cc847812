//! Path → language resolution over indexes derived from the registry.
//!
//! The indexes are built exactly once and never mutated afterwards, so the
//! query functions are plain lock-free reads and safe to call from any task.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::registry::{PLAIN_TEXT_ID, PLAINTEXT_MONACO, REGISTRY};

struct LookupIndex {
    by_extension: HashMap<&'static str, &'static str>,
    by_filename: HashMap<&'static str, &'static str>,
    monaco_by_id: HashMap<&'static str, &'static str>,
}

static INDEX: LazyLock<LookupIndex> = LazyLock::new(|| {
    let mut by_extension = HashMap::new();
    let mut by_filename = HashMap::new();
    let mut monaco_by_id = HashMap::new();

    // Registry order governs insertion: a later entry sharing an extension or
    // filename with an earlier one silently supersedes it.
    for spec in REGISTRY {
        for ext in spec.extensions {
            by_extension.insert(*ext, spec.id);
        }
        for name in spec.filenames {
            by_filename.insert(*name, spec.id);
        }
        if let Some(monaco) = spec.monaco {
            monaco_by_id.insert(spec.id, monaco);
        }
    }

    debug!(
        languages = REGISTRY.len(),
        extensions = by_extension.len(),
        filenames = by_filename.len(),
        "language lookup index built"
    );

    LookupIndex {
        by_extension,
        by_filename,
        monaco_by_id,
    }
});

/// Force the lookup index at startup so the first request does not build it.
pub fn init() {
    LazyLock::force(&INDEX);
}

/// Resolve the language id for a file path.
///
/// The last '/'-separated segment is the filename (the whole string when there
/// is no separator). Exact filename matches take priority over extension
/// matches, which lets extension-less names like `dockerfile` resolve. A name
/// with no dot, a leading dot (dotfile) or a trailing dot has no extension and
/// yields no match. Matching is case-insensitive.
pub fn language_from_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return None;
    }

    let file_name = path.rsplit('/').next().unwrap_or(path).to_lowercase();

    if let Some(id) = INDEX.by_filename.get(file_name.as_str()) {
        return Some(*id);
    }

    let dot = file_name.rfind('.')?;
    if dot == 0 || dot + 1 == file_name.len() {
        return None;
    }

    INDEX.by_extension.get(&file_name[dot + 1..]).copied()
}

/// Resolve the Monaco editor language for a file path.
///
/// Unlike [`language_from_path`] this always produces an identifier: unknown
/// paths, the plain-text language, and languages without a declared
/// highlighter all fall back to `"plaintext"`.
pub fn monaco_language_from_path(path: &str) -> &'static str {
    match language_from_path(path) {
        None => PLAINTEXT_MONACO,
        Some(id) if id == PLAIN_TEXT_ID => PLAINTEXT_MONACO,
        Some(id) => INDEX
            .monaco_by_id
            .get(id)
            .copied()
            .unwrap_or(PLAINTEXT_MONACO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_extension_resolves_to_its_language() {
        for spec in REGISTRY {
            for ext in spec.extensions {
                let path = format!("any/path/file.{}", ext);
                assert_eq!(
                    language_from_path(&path),
                    Some(spec.id),
                    "extension {} did not resolve to {}",
                    ext,
                    spec.id
                );
            }
        }
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(language_from_path("Config.YML"), Some("yaml"));
        assert_eq!(language_from_path("SRC/App.TSX"), Some("tsx"));
        assert_eq!(language_from_path("schema.Prisma"), Some("prisma"));
    }

    #[test]
    fn dockerfile_matches_by_filename_in_any_case() {
        assert_eq!(language_from_path("Dockerfile"), Some("dockerfile"));
        assert_eq!(language_from_path("dockerfile"), Some("dockerfile"));
        assert_eq!(language_from_path("deploy/DOCKERFILE"), Some("dockerfile"));
    }

    #[test]
    fn empty_path_has_no_match() {
        assert_eq!(language_from_path(""), None);
    }

    #[test]
    fn leading_dot_filename_has_no_extension() {
        assert_eq!(language_from_path(".gitignore"), None);
        assert_eq!(language_from_path("home/.yaml"), None);
    }

    #[test]
    fn trailing_dot_has_no_extension() {
        assert_eq!(language_from_path("file."), None);
    }

    #[test]
    fn dotless_filename_has_no_match() {
        assert_eq!(language_from_path("Makefile"), None);
        assert_eq!(language_from_path("src/LICENSE"), None);
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert_eq!(language_from_path("archive.tar.gz"), None);
        assert_eq!(language_from_path("archive.tar.yml"), Some("yaml"));
    }

    #[test]
    fn unknown_extension_has_no_match() {
        assert_eq!(language_from_path("binary.exe"), None);
    }

    #[test]
    fn monaco_defaults_to_plaintext() {
        // No match at all.
        assert_eq!(monaco_language_from_path(""), "plaintext");
        assert_eq!(monaco_language_from_path("binary.exe"), "plaintext");
        // The plain-text language itself.
        assert_eq!(monaco_language_from_path("notes.text"), "plaintext");
        // Known language without a declared highlighter.
        assert_eq!(monaco_language_from_path("main.go"), "plaintext");
        assert_eq!(monaco_language_from_path("script.rb"), "plaintext");
    }

    #[test]
    fn monaco_follows_declared_mappings() {
        assert_eq!(monaco_language_from_path("src/app.tsx"), "typescript");
        assert_eq!(monaco_language_from_path("deploy.sh.bash"), "shell");
        assert_eq!(monaco_language_from_path("query.sql"), "sql");
        assert_eq!(monaco_language_from_path("Dockerfile"), "dockerfile");
        assert_eq!(monaco_language_from_path("index.html"), "html");
    }

    #[test]
    fn filename_index_is_checked_before_extensions() {
        // "dockerfile" carries no extension, so only the filename index can
        // match it; a path that nests it still resolves.
        assert_eq!(language_from_path("a/b/dockerfile"), Some("dockerfile"));
    }
}
