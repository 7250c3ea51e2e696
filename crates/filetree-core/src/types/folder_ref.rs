//! Folder references as they arrive from the outside world.
//!
//! Path segments and query parameters may carry the reserved tokens
//! `root` and `trash` instead of a UUID. They are resolved exactly once,
//! here, into a [`FolderRef`]; nothing downstream compares strings.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::AppError;

/// Well-known identifier of the root folder row.
pub const ROOT_FOLDER_ID: Uuid = Uuid::from_u128(1);

/// Reserved token for the root folder.
pub const ROOT_TOKEN: &str = "root";

/// Reserved token for the synthetic trash view.
pub const TRASH_TOKEN: &str = "trash";

/// A resolved reference to a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderRef {
    /// The root folder (a real row with [`ROOT_FOLDER_ID`]).
    Root,
    /// The trash pseudo-folder. It has no backing row.
    Trash,
    /// Any other folder, by id.
    Concrete(Uuid),
}

impl FolderRef {
    /// The backing row id, or `None` for the trash view.
    pub fn item_id(&self) -> Option<Uuid> {
        match self {
            Self::Root => Some(ROOT_FOLDER_ID),
            Self::Trash => None,
            Self::Concrete(id) => Some(*id),
        }
    }

    /// Parse a reference that must point at a real row.
    ///
    /// `root` is accepted, `trash` is rejected.
    pub fn parse_concrete(s: &str) -> Result<Uuid, AppError> {
        match s.parse::<Self>()? {
            Self::Trash => Err(AppError::validation(
                "The trash folder cannot be used here",
            )),
            other => Ok(other.item_id().unwrap_or(ROOT_FOLDER_ID)),
        }
    }
}

impl From<Uuid> for FolderRef {
    fn from(id: Uuid) -> Self {
        if id == ROOT_FOLDER_ID {
            Self::Root
        } else {
            Self::Concrete(id)
        }
    }
}

impl FromStr for FolderRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROOT_TOKEN => Ok(Self::Root),
            TRASH_TOKEN => Ok(Self::Trash),
            other => Uuid::parse_str(other)
                .map(Self::from)
                .map_err(|_| AppError::validation(format!("Invalid folder id: {other}"))),
        }
    }
}

impl fmt::Display for FolderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "{ROOT_TOKEN}"),
            Self::Trash => write!(f, "{TRASH_TOKEN}"),
            Self::Concrete(id) => write!(f, "{id}"),
        }
    }
}

/// Parse an item id from a path segment, honoring the `root` token.
pub fn parse_item_id(s: &str) -> Result<Uuid, AppError> {
    if s == ROOT_TOKEN {
        return Ok(ROOT_FOLDER_ID);
    }
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid item id: {s}")))
}
