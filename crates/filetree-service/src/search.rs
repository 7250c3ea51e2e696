//! Name search over live items.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use filetree_core::error::AppError;
use filetree_core::types::SearchScope;
use filetree_database::ItemStore;
use filetree_entity::item::Item;

/// Case-insensitive substring search on item names.
#[derive(Debug, Clone)]
pub struct SearchService {
    /// Item store.
    store: Arc<dyn ItemStore>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Searches live items whose name contains `query`.
    ///
    /// A blank query matches nothing and never reaches the store. With
    /// [`SearchScope::Current`] and a folder, only that folder's direct
    /// children are searched; without a folder the scope is global.
    pub async fn search(
        &self,
        query: &str,
        scope: SearchScope,
        folder_id: Option<Uuid>,
    ) -> Result<Vec<Item>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let parent_id = match scope {
            SearchScope::Current => folder_id,
            SearchScope::Global => None,
        };

        let results = self.store.search(query, parent_id).await?;
        debug!(
            query = %query,
            scope = ?scope,
            parent_id = ?parent_id,
            count = results.len(),
            "Search completed"
        );
        Ok(results)
    }
}
