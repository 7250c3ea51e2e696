//! Single-item handlers: read, rename, trash, restore, delete.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use validator::Validate;

use filetree_core::error::AppError;

use crate::dto::request::RenameItemRequest;
use crate::dto::response::{ItemEnvelope, SuccessResponse};
use crate::error::ApiResult;
use crate::extractors::ItemPath;
use crate::state::AppState;

/// GET /api/v1/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
) -> ApiResult<Json<ItemEnvelope>> {
    let item = state.item_service.get_item(id).await?;
    Ok(Json(ItemEnvelope { item: item.into() }))
}

/// PATCH /api/v1/items/{id}
///
/// Any body that does not carry a usable `name`, including a missing or
/// unparsable one, is a 400.
pub async fn rename_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
    body: Result<Json<RenameItemRequest>, JsonRejection>,
) -> ApiResult<Json<ItemEnvelope>> {
    let Json(req) = body.map_err(|_| AppError::validation("name is required"))?;
    req.validate()
        .map_err(|_| AppError::validation("name is required"))?;
    let name = req.name.unwrap_or_default();

    let item = state.item_service.rename(id, &name).await?;
    Ok(Json(ItemEnvelope { item: item.into() }))
}

/// POST /api/v1/items/{id}/trash
pub async fn trash_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
) -> ApiResult<Json<SuccessResponse>> {
    state.lifecycle_service.trash(id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/v1/items/{id}/restore
pub async fn restore_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
) -> ApiResult<Json<ItemEnvelope>> {
    let item = state.lifecycle_service.restore(id).await?;
    Ok(Json(ItemEnvelope { item: item.into() }))
}

/// DELETE /api/v1/items/{id}
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete_item(
    State(state): State<AppState>,
    ItemPath(id): ItemPath,
) -> ApiResult<Json<SuccessResponse>> {
    state.lifecycle_service.delete(id).await?;
    Ok(Json(SuccessResponse::ok()))
}
