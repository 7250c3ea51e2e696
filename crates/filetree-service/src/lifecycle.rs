//! Trash, restore, and permanent delete.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use filetree_core::error::AppError;
use filetree_core::types::ROOT_FOLDER_ID;
use filetree_database::ItemStore;
use filetree_entity::item::{Item, ItemState};

use crate::naming::NameResolver;

/// Moves items between the live tree and the trash.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    store: Arc<dyn ItemStore>,
    resolver: NameResolver,
}

impl LifecycleService {
    /// Creates a new lifecycle service.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        let resolver = NameResolver::new(Arc::clone(&store));
        Self { store, resolver }
    }

    /// Soft-deletes an item.
    ///
    /// The parent at the moment of the first trash is captured; trashing an
    /// already trashed item keeps that capture and refreshes `deleted_at`.
    /// Descendants are left untouched.
    pub async fn trash(&self, id: Uuid) -> Result<Item, AppError> {
        if id == ROOT_FOLDER_ID {
            return Err(AppError::validation("The root folder cannot be trashed"));
        }

        let item = self
            .store
            .trash(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        info!(
            item_id = %id,
            original_parent_id = ?item.original_parent_id,
            "Item moved to trash"
        );

        Ok(item)
    }

    /// Brings a trashed item back into the live tree.
    ///
    /// The item returns to the parent captured when it was trashed, even if
    /// that parent is itself in the trash. Only a missing parent sends it to
    /// the root. Its name is
    /// re-resolved against its new siblings. Restoring a live item returns
    /// it unchanged.
    pub async fn restore(&self, id: Uuid) -> Result<Item, AppError> {
        let item = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        if item.state() == ItemState::Active {
            return Ok(item);
        }

        let target = self.restore_target(&item).await?;
        let item_type = item.item_type;

        let restored = self
            .resolver
            .write_with_unique_name(&item.name, target, item_type, Some(id), |final_name| {
                let store = Arc::clone(&self.store);
                async move { store.restore(id, target, &final_name).await }
            })
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        info!(
            item_id = %id,
            parent_id = %target,
            name = %restored.name,
            "Item restored"
        );

        Ok(restored)
    }

    /// Permanently removes an item and everything beneath it.
    ///
    /// Returns `false` when nothing was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        if id == ROOT_FOLDER_ID {
            return Err(AppError::validation("The root folder cannot be deleted"));
        }

        let deleted = self.store.delete(id).await?;
        if deleted {
            info!(item_id = %id, "Item permanently deleted");
        }
        Ok(deleted)
    }

    /// Where a trashed item goes back to.
    async fn restore_target(&self, item: &Item) -> Result<Uuid, AppError> {
        let Some(original) = item.original_parent_id else {
            return Ok(ROOT_FOLDER_ID);
        };

        match self.store.find_by_id(original).await? {
            Some(parent) => Ok(parent.id),
            None => {
                warn!(
                    item_id = %item.id,
                    original_parent_id = %original,
                    "Original parent unavailable, restoring to root"
                );
                Ok(ROOT_FOLDER_ID)
            }
        }
    }
}
