//! Folder listings returned by the tree query service.

use serde::{Deserialize, Serialize};

use super::model::Item;

/// The folder half of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListedFolder {
    /// A real folder row (including root).
    Concrete(Item),
    /// The synthetic trash view; carries only the number of rows listed.
    Trash {
        /// Number of trashed items returned.
        items_count: i64,
    },
}

/// A folder together with its visible children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderListing {
    /// The folder being listed.
    pub folder: ListedFolder,
    /// Children in listing order.
    pub children: Vec<Item>,
}

impl FolderListing {
    /// Listing of the trash view; the descriptor count follows the rows.
    pub fn trash(children: Vec<Item>) -> Self {
        Self {
            folder: ListedFolder::Trash {
                items_count: children.len() as i64,
            },
            children,
        }
    }

    /// Listing of a real folder.
    pub fn concrete(folder: Item, children: Vec<Item>) -> Self {
        Self {
            folder: ListedFolder::Concrete(folder),
            children,
        }
    }
}
