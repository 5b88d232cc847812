use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::{LanguageSpec, PLAINTEXT_MONACO, REGISTRY};
use crate::resolver;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub path: Option<String>,
    pub language: Option<&'static str>,
    pub monaco: &'static str,
}

/// GET handler for resolving a path via query parameter
pub async fn resolve_language(Query(query): Query<ResolveQuery>) -> Json<ResolveResponse> {
    resolve_inner(query.path)
}

/// POST handler for resolving a path via JSON body
pub async fn resolve_language_body(Json(req): Json<ResolveRequest>) -> Json<ResolveResponse> {
    resolve_inner(req.path)
}

fn resolve_inner(path: Option<String>) -> Json<ResolveResponse> {
    // A missing path is valid input: no match, plaintext highlighter.
    let language = path.as_deref().and_then(resolver::language_from_path);
    let monaco = path
        .as_deref()
        .map(resolver::monaco_language_from_path)
        .unwrap_or(PLAINTEXT_MONACO);

    debug!(path = path.as_deref().unwrap_or(""), ?language, monaco, "path resolved");

    Json(ResolveResponse {
        path,
        language,
        monaco,
    })
}

/// The full registry, as served to the frontend. The table is part of the
/// observable contract: it determines every resolver output.
pub async fn list_languages() -> Json<&'static [LanguageSpec]> {
    Json(REGISTRY)
}
