//! Collision-free naming within a folder.
//!
//! A name is free when no live sibling of the same type carries it. The
//! first free candidate in the sequence `base`, `base (1)`, `base (2)`, ...
//! wins; gaps left by later deletions are not reused ahead of that order.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use filetree_core::error::AppError;
use filetree_database::ItemStore;
use filetree_entity::item::ItemType;

/// How many times a write is attempted when a concurrent writer takes the
/// resolved name first.
pub const MAX_WRITE_ATTEMPTS: usize = 5;

/// Trim a requested name, falling back to the type's default when nothing
/// is left.
pub fn base_name(requested: Option<&str>, item_type: ItemType) -> String {
    match requested.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => item_type.default_name().to_string(),
    }
}

/// The `n`-th candidate for `base`; `0` is the base itself.
pub fn candidate_name(base: &str, n: u64) -> String {
    if n == 0 {
        base.to_string()
    } else {
        format!("{base} ({n})")
    }
}

/// Resolves names against the live siblings in the store.
#[derive(Debug, Clone)]
pub struct NameResolver {
    store: Arc<dyn ItemStore>,
}

impl NameResolver {
    /// Creates a resolver over `store`.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// First candidate for `base` not used by a live sibling.
    ///
    /// `exclude` keeps an item from colliding with itself on rename.
    pub async fn resolve(
        &self,
        base: &str,
        parent_id: Uuid,
        item_type: ItemType,
        exclude: Option<Uuid>,
    ) -> Result<String, AppError> {
        let mut n = 0;
        loop {
            let candidate = candidate_name(base, n);
            if !self
                .store
                .name_taken(parent_id, item_type, &candidate, exclude)
                .await?
            {
                return Ok(candidate);
            }
            debug!(parent_id = %parent_id, name = %candidate, "Sibling name taken");
            n += 1;
        }
    }

    /// Resolve a name and hand it to `write`.
    ///
    /// The store rejects a write that would duplicate a live sibling name
    /// with a `Conflict`; that means another writer took the name between
    /// resolution and write, so the name is resolved again. After
    /// [`MAX_WRITE_ATTEMPTS`] the conflict is returned.
    pub async fn write_with_unique_name<T, F, Fut>(
        &self,
        base: &str,
        parent_id: Uuid,
        item_type: ItemType,
        exclude: Option<Uuid>,
        mut write: F,
    ) -> Result<T, AppError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let mut attempt = 1;
        loop {
            let name = self.resolve(base, parent_id, item_type, exclude).await?;
            match write(name).await {
                Err(e) if e.is_conflict() && attempt < MAX_WRITE_ATTEMPTS => {
                    warn!(
                        parent_id = %parent_id,
                        base = %base,
                        attempt,
                        "Name taken concurrently, retrying"
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
