//! Custom Axum extractors.

pub mod path;

pub use path::{FolderPath, ItemPath};
