//! Search handler.

use axum::Json;
use axum::extract::{Query, State};

use filetree_core::types::parse_item_id;

use crate::dto::request::SearchQuery;
use crate::dto::response::SearchResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/search?q=&scope=&folderId=
///
/// A blank `q` answers with no results before `folderId` is looked at.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    if query.is_blank() {
        return Ok(Json(SearchResponse::default()));
    }

    let folder_id = query
        .folder_id
        .as_deref()
        .map(parse_item_id)
        .transpose()?;

    let results = state
        .search_service
        .search(&query.q, query.scope(), folder_id)
        .await?;
    Ok(Json(results.into()))
}
