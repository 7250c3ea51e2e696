//! Item entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use filetree_core::types::ROOT_FOLDER_ID;

/// Kind of tree node. Names only need to be unique among siblings of
/// the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A container of other items.
    Folder,
    /// A leaf carrying a size.
    File,
}

impl ItemType {
    /// Name used when the caller supplies none (or only whitespace).
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Folder => "New Folder",
            Self::File => "New File",
        }
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a stored item. `Deleted` has no representation:
/// a deleted item has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    /// Visible in its parent folder.
    Active,
    /// Hidden from its parent folder, listed in the trash.
    Trashed,
}

/// A folder or file in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// Display name, unique among live siblings of the same type.
    pub name: String,
    /// Folder or file.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Containing folder (null only for root).
    pub parent_id: Option<Uuid>,
    /// Stored size for files; null for folders.
    pub size_bytes: Option<i64>,
    /// Live (non-trashed) direct children; computed for folders at query
    /// time, null for files.
    #[sqlx(default)]
    pub items_count: Option<i64>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last renamed or restored.
    pub modified_at: DateTime<Utc>,
    /// Soft-delete flag.
    pub is_trashed: bool,
    /// Parent captured at trash time, consulted by restore.
    pub original_parent_id: Option<Uuid>,
    /// When the item was trashed.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Whether this is the well-known root folder.
    pub fn is_root(&self) -> bool {
        self.id == ROOT_FOLDER_ID
    }

    /// Whether this item is a folder.
    pub fn is_folder(&self) -> bool {
        self.item_type == ItemType::Folder
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ItemState {
        if self.is_trashed {
            ItemState::Trashed
        } else {
            ItemState::Active
        }
    }
}

/// Data required to insert a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Containing folder.
    pub parent_id: Uuid,
    /// Final, already de-duplicated name.
    pub name: String,
    /// Folder or file.
    pub item_type: ItemType,
    /// Size for files.
    pub size_bytes: Option<i64>,
}

impl CreateItem {
    /// A new folder under `parent_id`.
    pub fn folder(parent_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            parent_id,
            name: name.into(),
            item_type: ItemType::Folder,
            size_bytes: None,
        }
    }

    /// A new file record under `parent_id`.
    pub fn file(parent_id: Uuid, name: impl Into<String>, size_bytes: Option<i64>) -> Self {
        Self {
            parent_id,
            name: name.into(),
            item_type: ItemType::File,
            size_bytes,
        }
    }
}
