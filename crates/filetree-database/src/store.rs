//! Item store trait shared by the PostgreSQL and in-memory backends.

use async_trait::async_trait;
use uuid::Uuid;

use filetree_core::result::AppResult;
use filetree_entity::item::{CreateItem, Item, ItemType};

/// Query and mutation primitives over the item table.
///
/// Every item returned carries `items_count` computed live for folders
/// (`None` for files). Writes that would give two live siblings of the
/// same type the same name fail with a `Conflict` error; callers that
/// de-duplicate names beforehand treat that as a lost race and retry.
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an item by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>>;

    /// Whether a live sibling with exactly this name exists.
    ///
    /// `exclude` removes one item (the one being renamed) from the check.
    async fn name_taken(
        &self,
        parent_id: Uuid,
        item_type: ItemType,
        name: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<bool>;

    /// Direct children of a folder ordered by name ascending.
    async fn list_children(&self, parent_id: Uuid, include_trashed: bool) -> AppResult<Vec<Item>>;

    /// Every trashed item, most recently trashed first.
    async fn list_trashed(&self) -> AppResult<Vec<Item>>;

    /// Case-insensitive substring match over live item names.
    ///
    /// With `parent_id`, only direct children of that folder are matched.
    async fn search(&self, query: &str, parent_id: Option<Uuid>) -> AppResult<Vec<Item>>;

    /// Insert a new live item.
    async fn insert(&self, data: &CreateItem) -> AppResult<Item>;

    /// Set a new name and bump `modified_at`. `None` if the item is gone.
    async fn rename(&self, id: Uuid, name: &str) -> AppResult<Option<Item>>;

    /// Mark an item trashed, capturing its parent unless one is already
    /// captured. `None` if the item is gone.
    async fn trash(&self, id: Uuid) -> AppResult<Option<Item>>;

    /// Bring a trashed item back under `parent_id` with `name`, clearing
    /// the captured parent. `None` if the item is gone.
    async fn restore(&self, id: Uuid, parent_id: Uuid, name: &str) -> AppResult<Option<Item>>;

    /// Remove an item and its descendants. Returns whether a row existed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Check backend connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}
