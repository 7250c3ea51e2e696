//! Core type definitions used across the FileTree workspace.

pub mod folder_ref;
pub mod search;

pub use folder_ref::{FolderRef, ROOT_FOLDER_ID, ROOT_TOKEN, TRASH_TOKEN, parse_item_id};
pub use search::SearchScope;
