//! Health check route handler.

use axum::Json;
use sentiment_core::HealthStatus;

/// GET / - Report that the API is up.
pub async fn index() -> Json<HealthStatus> {
    Json(HealthStatus::default())
}
