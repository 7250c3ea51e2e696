//! Typed path parameters.
//!
//! Path ids are read as strings and resolved here so the `root` and
//! `trash` tokens never reach a handler as text.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use filetree_core::error::AppError;
use filetree_core::types::{FolderRef, parse_item_id};

use crate::error::ApiError;

async fn raw_segment<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<String, ApiError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| AppError::validation(e.body_text()))?;
    Ok(raw)
}

/// An item id from `{id}`; `root` resolves to the root folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPath(pub Uuid);

impl<S: Send + Sync> FromRequestParts<S> for ItemPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_segment(parts, state).await?;
        Ok(Self(parse_item_id(&raw)?))
    }
}

/// A folder reference from `{id}`; accepts `root` and `trash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderPath(pub FolderRef);

impl<S: Send + Sync> FromRequestParts<S> for FolderPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_segment(parts, state).await?;
        Ok(Self(raw.parse::<FolderRef>()?))
    }
}

/// Parse an optional parent id from a request body, defaulting to root.
pub fn parent_or_root(raw: Option<&str>) -> Result<Uuid, AppError> {
    match raw {
        None => Ok(filetree_core::types::ROOT_FOLDER_ID),
        Some(s) => FolderRef::parse_concrete(s),
    }
}
