//! # filetree-database
//!
//! The [`ItemStore`] abstraction over the `items` table, its PostgreSQL
//! implementation, an in-memory implementation with the same semantics,
//! connection management, and migrations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryItemStore;
pub use provider::open_store;
pub use repositories::ItemRepository;
pub use store::ItemStore;
