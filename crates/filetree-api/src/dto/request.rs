//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use filetree_core::types::SearchScope;

/// Body of `POST /folders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Parent folder id or `root`; defaults to root.
    pub parent_id: Option<String>,
    /// Requested name; blank falls back to "New Folder".
    pub name: Option<String>,
}

/// Body of `POST /files`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// Parent folder id or `root`; defaults to root.
    pub parent_id: Option<String>,
    /// Requested name; blank falls back to "New File".
    pub name: Option<String>,
    /// Size of the file in bytes.
    #[validate(range(min = 0, message = "sizeBytes cannot be negative"))]
    pub size_bytes: Option<i64>,
}

/// Body of `PATCH /items/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RenameItemRequest {
    /// New name.
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    pub name: Option<String>,
}

/// Query of `GET /folders/{id}/children`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildrenQuery {
    /// Only the literal `true` includes trashed children.
    pub include_trashed: Option<String>,
}

impl ChildrenQuery {
    /// Whether trashed children should be listed.
    pub fn include_trashed(&self) -> bool {
        self.include_trashed.as_deref() == Some("true")
    }
}

/// Query of `GET /search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Substring to look for.
    #[serde(default)]
    pub q: String,
    /// `current` narrows to one folder; any other value is global.
    pub scope: Option<String>,
    /// Folder id or `root` for `current` scope.
    pub folder_id: Option<String>,
}

impl SearchQuery {
    /// Whether the query has nothing to search for.
    pub fn is_blank(&self) -> bool {
        self.q.trim().is_empty()
    }

    /// Requested scope.
    pub fn scope(&self) -> SearchScope {
        SearchScope::from_param(self.scope.as_deref())
    }
}
