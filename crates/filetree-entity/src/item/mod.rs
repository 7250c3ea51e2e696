//! Item domain entities.

pub mod listing;
pub mod model;

pub use listing::{FolderListing, ListedFolder};
pub use model::{CreateItem, Item, ItemState, ItemType};
