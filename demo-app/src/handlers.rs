use crate::models::{ErrorBody, HealthStatus, MetricsSnapshot};
use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

pub async fn health_handler() -> Json<HealthStatus> {
    // Liveness only. No dependency checks.
    Json(HealthStatus::ok())
}

pub async fn metrics_handler() -> Result<Json<MetricsSnapshot>, StatusCode> {
    let snapshot = MetricsSnapshot::now().map_err(|e| {
        error!("Failed to read system clock: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    debug!("Serving metrics snapshot at {}", snapshot.timestamp);
    Ok(Json(snapshot))
}

pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::not_found()))
}

pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET")],
        Json(ErrorBody::method_not_allowed()),
    )
}
