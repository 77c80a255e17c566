//! Health check endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Service status
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` while the service is running
    pub status: String,
    /// Crate version (from Cargo.toml)
    pub version: String,
}

/// Plain-text banner for the root path
pub async fn root() -> &'static str {
    "Hotel reservation API is running"
}

/// Health check
///
/// Returns the current status and version. No authentication required;
/// intended for availability monitoring.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
