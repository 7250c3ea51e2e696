//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use filetree_core::types::TRASH_TOKEN;
use filetree_entity::item::{FolderListing, Item, ItemType, ListedFolder};

/// Display name of the trash view.
pub const TRASH_NAME: &str = "Trash";

/// Item as rendered to clients.
///
/// `id` is a string because the trash view is described with the literal
/// id `trash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub parent_id: Option<Uuid>,
    pub size_bytes: Option<i64>,
    pub items_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub is_trashed: bool,
    pub original_parent_id: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            item_type: item.item_type,
            parent_id: item.parent_id,
            size_bytes: item.size_bytes,
            items_count: item.items_count,
            created_at: Some(item.created_at),
            modified_at: Some(item.modified_at),
            is_trashed: item.is_trashed,
            original_parent_id: item.original_parent_id,
            deleted_at: item.deleted_at,
        }
    }
}

impl From<ListedFolder> for ItemResponse {
    fn from(folder: ListedFolder) -> Self {
        match folder {
            ListedFolder::Concrete(item) => item.into(),
            ListedFolder::Trash { items_count } => Self {
                id: TRASH_TOKEN.to_string(),
                name: TRASH_NAME.to_string(),
                item_type: ItemType::Folder,
                parent_id: None,
                size_bytes: None,
                items_count: Some(items_count),
                created_at: None,
                modified_at: None,
                is_trashed: false,
                original_parent_id: None,
                deleted_at: None,
            },
        }
    }
}

fn render_all(items: Vec<Item>) -> Vec<ItemResponse> {
    items.into_iter().map(ItemResponse::from).collect()
}

/// `{ folder, children }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderChildrenResponse {
    pub folder: ItemResponse,
    pub children: Vec<ItemResponse>,
}

impl From<FolderListing> for FolderChildrenResponse {
    fn from(listing: FolderListing) -> Self {
        Self {
            folder: listing.folder.into(),
            children: render_all(listing.children),
        }
    }
}

/// `{ item }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub item: ItemResponse,
}

/// `{ folder }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEnvelope {
    pub folder: ItemResponse,
}

/// `{ file }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEnvelope {
    pub file: ItemResponse,
}

/// `{ results }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ItemResponse>,
}

impl From<Vec<Item>> for SearchResponse {
    fn from(items: Vec<Item>) -> Self {
        Self {
            results: render_all(items),
        }
    }
}

/// `{ success: true }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ ok: true }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
