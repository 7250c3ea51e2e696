//! # filetree-service
//!
//! Business logic for the item tree. Services share one
//! [`ItemStore`](filetree_database::ItemStore) handed in at construction.

pub mod item;
pub mod lifecycle;
pub mod naming;
pub mod search;
pub mod tree;

pub use item::ItemService;
pub use lifecycle::LifecycleService;
pub use naming::NameResolver;
pub use search::SearchService;
pub use tree::TreeService;
