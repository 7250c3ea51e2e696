//! Folder listings, including the synthetic trash view.

use std::sync::Arc;

use tracing::debug;

use filetree_core::error::AppError;
use filetree_core::types::FolderRef;
use filetree_database::ItemStore;
use filetree_entity::item::FolderListing;

/// Resolves a folder reference to the folder and its visible children.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Item store.
    store: Arc<dyn ItemStore>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Lists a folder.
    ///
    /// The trash view holds every trashed item regardless of parent, most
    /// recently deleted first, and ignores `include_trashed`. Real folders
    /// list their direct children by name, hiding trashed ones unless
    /// `include_trashed` is set.
    pub async fn list(
        &self,
        folder: FolderRef,
        include_trashed: bool,
    ) -> Result<FolderListing, AppError> {
        let Some(id) = folder.item_id() else {
            let children = self.store.list_trashed().await?;
            debug!(count = children.len(), "Listed trash");
            return Ok(FolderListing::trash(children));
        };

        let row = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder} not found")))?;

        let children = self.store.list_children(id, include_trashed).await?;
        debug!(folder_id = %id, count = children.len(), include_trashed, "Listed folder");

        Ok(FolderListing::concrete(row, children))
    }
}
