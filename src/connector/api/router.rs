use std::sync::Arc;

use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{generate_minutes, health};

/// Build the HTTP application around a fully wired [`Container`].
pub fn router(container: Arc<Container>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/health", get(health))
        .route("/generate-minutes", post(generate_minutes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(container)
}
