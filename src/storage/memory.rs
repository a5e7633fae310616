//! In-memory favorites store.
//!
//! Used when no data directory is available: favorites live for the session
//! only. Also handy for exercising the runtime without touching disk.

use crate::domain::{PhotoId, Result};
use crate::storage::backend::FavoritesStore;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Process-local favorites slot.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the runtime persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryFavoritesStore {
    slot: Arc<Mutex<Option<BTreeSet<PhotoId>>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryFavoritesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose slot already holds `favorites`.
    #[must_use]
    pub fn with_favorites(favorites: BTreeSet<PhotoId>) -> Self {
        let store = Self::default();
        if let Ok(mut slot) = store.slot.lock() {
            *slot = Some(favorites);
        }
        store
    }

    /// Number of saves performed so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }

    /// Current slot content, `None` if nothing was ever written.
    #[must_use]
    pub fn snapshot(&self) -> Option<BTreeSet<PhotoId>> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn load(&self) -> Result<BTreeSet<PhotoId>> {
        Ok(self.snapshot().unwrap_or_default())
    }

    fn save(&mut self, favorites: &BTreeSet<PhotoId>) -> Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(favorites.clone());
        }
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
        Ok(())
    }
}
