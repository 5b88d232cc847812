//! Static registry of recognized languages.
//!
//! Single source of truth for language identification: every lookup index in
//! [`crate::resolver`] is derived from this table, so the resolver and the
//! `/api/languages` listing never diverge.

use serde::Serialize;

/// Id of the built-in plain-text language.
pub const PLAIN_TEXT_ID: &str = "text";

/// Monaco language used when no specific highlighter mapping exists.
pub const PLAINTEXT_MONACO: &str = "plaintext";

/// One supported language: canonical id, the lowercase file extensions
/// (without leading dot) that map to it, exact lowercase filenames that map to
/// it, and the Monaco editor language used to highlight it, if any.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LanguageSpec {
    pub id: &'static str,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub monaco: Option<&'static str>,
}

/// Ordered registry of supported languages.
///
/// Order matters: indexes are built by scanning this slice front to back, so
/// when two entries claim the same extension or filename the later entry wins.
pub const REGISTRY: &[LanguageSpec] = &[
    LanguageSpec { id: "bash", extensions: &["bash"], filenames: &[], monaco: Some("shell") },
    LanguageSpec { id: "c", extensions: &["c"], filenames: &[], monaco: None },
    LanguageSpec { id: "cpp", extensions: &["cpp"], filenames: &[], monaco: None },
    LanguageSpec { id: "css", extensions: &["css"], filenames: &[], monaco: Some("css") },
    LanguageSpec { id: "graphql", extensions: &["graphql"], filenames: &[], monaco: Some("graphql") },
    LanguageSpec { id: "go", extensions: &["go"], filenames: &[], monaco: None },
    LanguageSpec { id: "java", extensions: &["java"], filenames: &[], monaco: None },
    LanguageSpec { id: "javascript", extensions: &["javascript"], filenames: &[], monaco: Some("javascript") },
    LanguageSpec { id: "json", extensions: &["json"], filenames: &[], monaco: Some("json") },
    LanguageSpec { id: "jsx", extensions: &["jsx"], filenames: &[], monaco: Some("javascript") },
    LanguageSpec { id: "kotlin", extensions: &["kotlin"], filenames: &[], monaco: None },
    LanguageSpec { id: "markdown", extensions: &["markdown"], filenames: &[], monaco: Some("markdown") },
    LanguageSpec { id: "php", extensions: &["php"], filenames: &[], monaco: None },
    LanguageSpec { id: "prisma", extensions: &["prisma"], filenames: &[], monaco: Some("prisma") },
    LanguageSpec { id: "rust", extensions: &["rust"], filenames: &[], monaco: None },
    LanguageSpec { id: "scss", extensions: &["sass", "scss"], filenames: &[], monaco: Some("scss") },
    LanguageSpec { id: "sql", extensions: &["sql"], filenames: &[], monaco: Some("sql") },
    LanguageSpec { id: "swift", extensions: &["swift"], filenames: &[], monaco: None },
    LanguageSpec { id: "terraform", extensions: &["tf", "tfvars", "hcl"], filenames: &[], monaco: Some("terraform") },
    LanguageSpec { id: "toml", extensions: &["toml"], filenames: &[], monaco: None },
    LanguageSpec { id: "typescript", extensions: &["typescript"], filenames: &[], monaco: Some("typescript") },
    LanguageSpec { id: "tsx", extensions: &["tsx"], filenames: &[], monaco: Some("typescript") },
    LanguageSpec { id: PLAIN_TEXT_ID, extensions: &["text"], filenames: &[], monaco: Some(PLAINTEXT_MONACO) },
    LanguageSpec { id: "xml", extensions: &["xml"], filenames: &[], monaco: None },
    LanguageSpec { id: "yaml", extensions: &["yaml", "yml"], filenames: &[], monaco: Some("yaml") },
    LanguageSpec { id: "lua", extensions: &["lua"], filenames: &[], monaco: None },
    LanguageSpec { id: "ruby", extensions: &["rb", "rake"], filenames: &[], monaco: None },
    LanguageSpec { id: "markup", extensions: &["html"], filenames: &[], monaco: Some("html") },
    LanguageSpec { id: "dockerfile", extensions: &[], filenames: &["dockerfile"], monaco: Some("dockerfile") },
];
