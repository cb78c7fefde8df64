//! Router assembly for the contact service.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{self, AppState};

/// Largest accepted request body. A full form is well under 4KB.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the application router.
///
/// - `GET /health`
/// - `/api/contact`: POST handled, every other method answered with 405
/// - anything else falls through to the static site in `config.static_dir`
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_site = ServeDir::new(&state.config.static_dir);

    let api_routes = Router::new()
        .route(
            "/api/contact",
            post(handlers::contact).fallback(handlers::method_not_allowed),
        )
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .fallback_service(static_site)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
