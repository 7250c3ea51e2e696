//! Folder listing and creation handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::dto::request::{ChildrenQuery, CreateFolderRequest};
use crate::dto::response::{FolderChildrenResponse, FolderEnvelope};
use crate::error::ApiResult;
use crate::extractors::FolderPath;
use crate::extractors::path::parent_or_root;
use crate::state::AppState;

/// GET /api/v1/folders/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    FolderPath(folder): FolderPath,
    Query(query): Query<ChildrenQuery>,
) -> ApiResult<Json<FolderChildrenResponse>> {
    let listing = state
        .tree_service
        .list(folder, query.include_trashed())
        .await?;
    Ok(Json(listing.into()))
}

/// POST /api/v1/folders
pub async fn create_folder(
    State(state): State<AppState>,
    body: Option<Json<CreateFolderRequest>>,
) -> ApiResult<(StatusCode, Json<FolderEnvelope>)> {
    let Json(req) = body.unwrap_or_default();
    let parent_id = parent_or_root(req.parent_id.as_deref())?;

    let folder = state
        .item_service
        .create_folder(parent_id, req.name.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FolderEnvelope {
            folder: folder.into(),
        }),
    ))
}
