//! In-memory item store for development and tests.
//!
//! Mirrors the PostgreSQL schema: the root row is seeded on creation,
//! live sibling names are unique per type, deletes cascade to
//! descendants, and references to a deleted captured parent are nulled.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use filetree_core::error::AppError;
use filetree_core::result::AppResult;
use filetree_core::types::ROOT_FOLDER_ID;
use filetree_entity::item::{CreateItem, Item, ItemType};

use crate::store::ItemStore;

/// Name of the seeded root row.
const ROOT_NAME: &str = "Root";

/// Rows keyed by id.
#[derive(Debug, Default)]
struct InnerState {
    items: HashMap<Uuid, Item>,
}

impl InnerState {
    fn seeded() -> Self {
        let now = Utc::now();
        let root = Item {
            id: ROOT_FOLDER_ID,
            name: ROOT_NAME.to_string(),
            item_type: ItemType::Folder,
            parent_id: None,
            size_bytes: None,
            items_count: None,
            created_at: now,
            modified_at: now,
            is_trashed: false,
            original_parent_id: None,
            deleted_at: None,
        };
        let mut items = HashMap::new();
        items.insert(root.id, root);
        Self { items }
    }

    fn live_count(&self, parent_id: Uuid) -> i64 {
        self.items
            .values()
            .filter(|c| c.parent_id == Some(parent_id) && !c.is_trashed)
            .count() as i64
    }

    /// Copy of a row with `items_count` filled in the way reads expect.
    fn view(&self, item: &Item) -> Item {
        let mut out = item.clone();
        out.items_count = match item.item_type {
            ItemType::Folder => Some(self.live_count(item.id)),
            ItemType::File => None,
        };
        out
    }

    fn name_taken(
        &self,
        parent_id: Uuid,
        item_type: ItemType,
        name: &str,
        exclude: Option<Uuid>,
    ) -> bool {
        self.items.values().any(|i| {
            i.parent_id == Some(parent_id)
                && i.item_type == item_type
                && !i.is_trashed
                && i.name == name
                && Some(i.id) != exclude
        })
    }

    fn ensure_unique(
        &self,
        parent_id: Uuid,
        item_type: ItemType,
        name: &str,
        id: Uuid,
    ) -> AppResult<()> {
        if self.name_taken(parent_id, item_type, name, Some(id)) {
            return Err(AppError::conflict(format!(
                "A live {item_type} named '{name}' already exists in {parent_id}"
            )));
        }
        Ok(())
    }

    fn descendants_and_self(&self, id: Uuid) -> HashSet<Uuid> {
        let mut doomed = HashSet::from([id]);
        let mut frontier = vec![id];
        while let Some(parent) = frontier.pop() {
            for child in self.items.values().filter(|i| i.parent_id == Some(parent)) {
                if doomed.insert(child.id) {
                    frontier.push(child.id);
                }
            }
        }
        doomed
    }
}

/// Item store backed by a process-local map.
#[derive(Debug, Clone)]
pub struct MemoryItemStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryItemStore {
    /// Creates a store holding only the root folder.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(InnerState::seeded())),
        }
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).map(|i| state.view(i)))
    }

    async fn name_taken(
        &self,
        parent_id: Uuid,
        item_type: ItemType,
        name: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<bool> {
        let state = self.state.read().await;
        Ok(state.name_taken(parent_id, item_type, name, exclude))
    }

    async fn list_children(&self, parent_id: Uuid, include_trashed: bool) -> AppResult<Vec<Item>> {
        let state = self.state.read().await;
        let mut children: Vec<Item> = state
            .items
            .values()
            .filter(|i| i.parent_id == Some(parent_id) && (include_trashed || !i.is_trashed))
            .map(|i| state.view(i))
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    async fn list_trashed(&self) -> AppResult<Vec<Item>> {
        let state = self.state.read().await;
        let mut trashed: Vec<Item> = state
            .items
            .values()
            .filter(|i| i.is_trashed)
            .map(|i| state.view(i))
            .collect();
        // Descending with nulls last: `None` sorts below every `Some`.
        trashed.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
        Ok(trashed)
    }

    async fn search(&self, query: &str, parent_id: Option<Uuid>) -> AppResult<Vec<Item>> {
        let needle = query.to_lowercase();
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .filter(|i| !i.is_trashed)
            .filter(|i| parent_id.is_none_or(|p| i.parent_id == Some(p)))
            .filter(|i| i.name.to_lowercase().contains(&needle))
            .map(|i| state.view(i))
            .collect())
    }

    async fn insert(&self, data: &CreateItem) -> AppResult<Item> {
        let mut state = self.state.write().await;
        if !state.items.contains_key(&data.parent_id) {
            return Err(AppError::database(format!(
                "Parent {} does not exist",
                data.parent_id
            )));
        }

        let id = Uuid::new_v4();
        state.ensure_unique(data.parent_id, data.item_type, &data.name, id)?;

        let now = Utc::now();
        let item = Item {
            id,
            name: data.name.clone(),
            item_type: data.item_type,
            parent_id: Some(data.parent_id),
            size_bytes: data.size_bytes,
            items_count: None,
            created_at: now,
            modified_at: now,
            is_trashed: false,
            original_parent_id: None,
            deleted_at: None,
        };
        let view = state.view(&item);
        state.items.insert(id, item);
        Ok(view)
    }

    async fn rename(&self, id: Uuid, name: &str) -> AppResult<Option<Item>> {
        let mut state = self.state.write().await;
        let Some(current) = state.items.get(&id) else {
            return Ok(None);
        };
        if !current.is_trashed {
            if let Some(parent_id) = current.parent_id {
                state.ensure_unique(parent_id, current.item_type, name, id)?;
            }
        }

        let Some(item) = state.items.get_mut(&id) else {
            return Ok(None);
        };
        item.name = name.to_string();
        item.modified_at = Utc::now();
        let item = item.clone();
        Ok(Some(state.view(&item)))
    }

    async fn trash(&self, id: Uuid) -> AppResult<Option<Item>> {
        let mut state = self.state.write().await;
        let Some(item) = state.items.get_mut(&id) else {
            return Ok(None);
        };
        item.is_trashed = true;
        if item.original_parent_id.is_none() {
            item.original_parent_id = item.parent_id;
        }
        item.deleted_at = Some(Utc::now());
        let item = item.clone();
        Ok(Some(state.view(&item)))
    }

    async fn restore(&self, id: Uuid, parent_id: Uuid, name: &str) -> AppResult<Option<Item>> {
        let mut state = self.state.write().await;
        let Some(current) = state.items.get(&id) else {
            return Ok(None);
        };
        state.ensure_unique(parent_id, current.item_type, name, id)?;

        let Some(item) = state.items.get_mut(&id) else {
            return Ok(None);
        };
        item.is_trashed = false;
        item.parent_id = Some(parent_id);
        item.name = name.to_string();
        item.original_parent_id = None;
        item.deleted_at = None;
        item.modified_at = Utc::now();
        let item = item.clone();
        Ok(Some(state.view(&item)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut state = self.state.write().await;
        if !state.items.contains_key(&id) {
            return Ok(false);
        }

        let doomed = state.descendants_and_self(id);
        state.items.retain(|k, _| !doomed.contains(k));
        for item in state.items.values_mut() {
            if item.original_parent_id.is_some_and(|p| doomed.contains(&p)) {
                item.original_parent_id = None;
            }
        }
        Ok(true)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
