use axum::Json;
use chrono::{SecondsFormat, Utc};

use super::super::container::APP_VERSION;
use super::super::dto::HealthResponse;

/// Liveness check used by monitors and orchestrators.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}
