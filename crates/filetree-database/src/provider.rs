//! Selects the item store backend from configuration.

use std::sync::Arc;

use tracing::info;

use filetree_core::config::{DatabaseConfig, StoreProvider};
use filetree_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryItemStore;
use crate::migration::run_migrations;
use crate::repositories::ItemRepository;
use crate::store::ItemStore;

/// Build the configured store. PostgreSQL stores are migrated before
/// they are handed out.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn ItemStore>> {
    match config.provider {
        StoreProvider::Postgres => {
            let db = DatabasePool::connect(config).await?;
            run_migrations(db.pool()).await?;
            Ok(Arc::new(ItemRepository::new(db.into_pool())))
        }
        StoreProvider::Memory => {
            info!("Using in-memory item store; data is not persisted");
            Ok(Arc::new(MemoryItemStore::new()))
        }
    }
}
