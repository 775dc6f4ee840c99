//! Application router assembly.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::classify::{ClassifyState, create_classify_router};

/// Creates the full application router: every route lives under `/api` and
/// answers cross-origin requests from any origin.
pub fn create_router(state: ClassifyState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", create_classify_router(state).layer(cors))
}
