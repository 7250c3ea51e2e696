//! Health check handler.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /api/v1/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}
