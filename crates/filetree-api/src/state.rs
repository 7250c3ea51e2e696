//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use filetree_core::config::AppConfig;
use filetree_database::ItemStore;
use filetree_service::{ItemService, LifecycleService, SearchService, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Item store (PostgreSQL or in-memory)
    pub store: Arc<dyn ItemStore>,

    // ── Services ─────────────────────────────────────────────
    /// Lookup, creation, and rename
    pub item_service: Arc<ItemService>,
    /// Trash, restore, and delete
    pub lifecycle_service: Arc<LifecycleService>,
    /// Folder listings
    pub tree_service: Arc<TreeService>,
    /// Name search
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// Wire every service over one shared store.
    pub fn new(config: AppConfig, store: Arc<dyn ItemStore>) -> Self {
        Self {
            config: Arc::new(config),
            item_service: Arc::new(ItemService::new(Arc::clone(&store))),
            lifecycle_service: Arc::new(LifecycleService::new(Arc::clone(&store))),
            tree_service: Arc::new(TreeService::new(Arc::clone(&store))),
            search_service: Arc::new(SearchService::new(Arc::clone(&store))),
            store,
        }
    }
}
