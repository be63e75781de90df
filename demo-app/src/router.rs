use crate::handlers::{
    health_handler, method_not_allowed_handler, metrics_handler, not_found_handler,
};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Builds the service router.
///
/// Each route answers `GET` only. axum routes `HEAD` to the `GET` handler
/// unless a `HEAD` handler exists, so `HEAD` is bound to the 405 handler
/// explicitly; every other method reaches it through the route fallback.
/// Unknown paths fall through to `not_found_handler`.
pub fn build_router() -> Router {
    Router::new()
        .route(
            "/health",
            get(health_handler)
                .head(method_not_allowed_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/metrics",
            get(metrics_handler)
                .head(method_not_allowed_handler)
                .fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}
