//! Item lookup, creation, and rename.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use filetree_core::error::AppError;
use filetree_database::ItemStore;
use filetree_entity::item::{CreateItem, Item, ItemType};

use crate::naming::{NameResolver, base_name};

/// Manages item creation and renaming.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Item store.
    store: Arc<dyn ItemStore>,
    /// Sibling name resolver.
    resolver: NameResolver,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        let resolver = NameResolver::new(Arc::clone(&store));
        Self { store, resolver }
    }

    /// Gets an item by ID.
    pub async fn get_item(&self, id: Uuid) -> Result<Item, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    /// Creates a folder under `parent_id`, de-duplicating the name.
    pub async fn create_folder(
        &self,
        parent_id: Uuid,
        name: Option<&str>,
    ) -> Result<Item, AppError> {
        self.create(parent_id, name, ItemType::Folder, None).await
    }

    /// Registers a file record under `parent_id`, de-duplicating the name.
    pub async fn create_file(
        &self,
        parent_id: Uuid,
        name: Option<&str>,
        size_bytes: Option<i64>,
    ) -> Result<Item, AppError> {
        if size_bytes.is_some_and(|s| s < 0) {
            return Err(AppError::validation("sizeBytes cannot be negative"));
        }
        self.create(parent_id, name, ItemType::File, size_bytes)
            .await
    }

    async fn create(
        &self,
        parent_id: Uuid,
        name: Option<&str>,
        item_type: ItemType,
        size_bytes: Option<i64>,
    ) -> Result<Item, AppError> {
        self.require_live_folder(parent_id).await?;

        let base = base_name(name, item_type);
        let item = self
            .resolver
            .write_with_unique_name(&base, parent_id, item_type, None, |final_name| {
                let store = Arc::clone(&self.store);
                let data = CreateItem {
                    parent_id,
                    name: final_name,
                    item_type,
                    size_bytes,
                };
                async move { store.insert(&data).await }
            })
            .await?;

        info!(
            item_id = %item.id,
            parent_id = %parent_id,
            item_type = %item_type,
            name = %item.name,
            "Item created"
        );

        Ok(item)
    }

    /// Renames an item, de-duplicating against its live siblings.
    ///
    /// A name that is blank after trimming, or equal to the current name,
    /// leaves the item untouched.
    pub async fn rename(&self, id: Uuid, new_name: &str) -> Result<Item, AppError> {
        let item = self.get_item(id).await?;

        let base = new_name.trim();
        if base.is_empty() || base == item.name {
            return Ok(item);
        }

        // Root has no siblings to collide with.
        let Some(parent_id) = item.parent_id else {
            return self
                .store
                .rename(id, base)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Item {id} not found")));
        };

        let renamed = self
            .resolver
            .write_with_unique_name(base, parent_id, item.item_type, Some(id), |final_name| {
                let store = Arc::clone(&self.store);
                async move { store.rename(id, &final_name).await }
            })
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        info!(
            item_id = %id,
            old_name = %item.name,
            new_name = %renamed.name,
            "Item renamed"
        );

        Ok(renamed)
    }

    /// Loads `id` and checks it can hold new children.
    async fn require_live_folder(&self, id: Uuid) -> Result<Item, AppError> {
        let parent = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Parent folder {id} not found")))?;

        if !parent.is_folder() {
            return Err(AppError::validation(format!("Parent {id} is not a folder")));
        }
        if parent.is_trashed {
            return Err(AppError::validation(format!("Parent folder {id} is in the trash")));
        }
        Ok(parent)
    }
}
