//! File registration handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use filetree_core::error::AppError;

use crate::dto::request::CreateFileRequest;
use crate::dto::response::FileEnvelope;
use crate::error::ApiResult;
use crate::extractors::path::parent_or_root;
use crate::state::AppState;

/// POST /api/v1/files
pub async fn create_file(
    State(state): State<AppState>,
    body: Option<Json<CreateFileRequest>>,
) -> ApiResult<(StatusCode, Json<FileEnvelope>)> {
    let Json(req) = body.unwrap_or_default();
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let parent_id = parent_or_root(req.parent_id.as_deref())?;

    let file = state
        .item_service
        .create_file(parent_id, req.name.as_deref(), req.size_bytes)
        .await?;

    Ok((StatusCode::CREATED, Json(FileEnvelope { file: file.into() })))
}
