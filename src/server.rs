use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes;

pub fn create_app() -> Router {
    // The sidecar only listens on loopback; the Electron frontend talks to it
    // from a file:// origin, so CORS stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/shutdown", post(routes::health::shutdown_handler))
        .route("/api/languages", get(routes::language::list_languages))
        .route(
            "/api/language",
            get(routes::language::resolve_language).post(routes::language::resolve_language_body),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
