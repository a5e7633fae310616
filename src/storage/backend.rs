//! Favorites store abstraction.
//!
//! The store is a single named slot holding the full set of favorited photo ids.
//! It is read once at startup and rewritten after every favorites mutation; a
//! write always replaces the whole slot.

use crate::domain::{PhotoId, Result};
use std::collections::BTreeSet;

/// Persistent slot for the favorites set.
///
/// # Implementations
///
/// - [`JsonFavoritesStore`](super::JsonFavoritesStore): JSON file with atomic writes (default)
/// - [`MemoryFavoritesStore`](super::MemoryFavoritesStore): process-local fallback
///
/// # Examples
///
/// ```no_run
/// use lumina::storage::{FavoritesStore, JsonFavoritesStore};
/// use std::path::PathBuf;
///
/// let store = JsonFavoritesStore::new(PathBuf::from("/tmp/lumina-favorites.json"))?;
/// let favorites = store.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait FavoritesStore: Send {
    /// Reads the slot.
    ///
    /// An absent slot yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or parsed.
    fn load(&self) -> Result<BTreeSet<PhotoId>>;

    /// Replaces the slot's content with `favorites`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous content is left intact.
    fn save(&mut self, favorites: &BTreeSet<PhotoId>) -> Result<()>;
}

/// Loads favorites, treating any failure as "no favorites".
///
/// Corrupt or unreadable data is logged and never propagated.
pub fn load_favorites(store: &dyn FavoritesStore) -> BTreeSet<PhotoId> {
    match store.load() {
        Ok(favorites) => {
            tracing::debug!(count = favorites.len(), "favorites loaded");
            favorites
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load favorites, starting empty");
            BTreeSet::new()
        }
    }
}
