//! JSON file-based favorites store.
//!
//! The slot is a file containing a JSON array of integer photo ids, e.g.
//! `[3, 17, 42]`. Writes go to a temporary sibling file which is then renamed
//! over the slot, so a crash mid-write never leaves a truncated file behind.

use crate::domain::{LuminaError, PhotoId, Result};
use crate::storage::backend::FavoritesStore;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the favorites slot.
pub const FAVORITES_SLOT: &str = "lumina-favorites";

/// JSON file favorites store.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`; it is owned by the runtime and only
/// touched from the controller's logical thread.
#[derive(Debug)]
pub struct JsonFavoritesStore {
    /// Path to the slot file on disk.
    file_path: PathBuf,
}

impl JsonFavoritesStore {
    /// Opens a store backed by `file_path`, creating parent directories.
    ///
    /// The file itself is not created until the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing favorites store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    /// Opens the default slot file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be created.
    pub fn in_dir(dir: &Path) -> Result<Self> {
        Self::new(dir.join(format!("{FAVORITES_SLOT}.json")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn load(&self) -> Result<BTreeSet<PhotoId>> {
        let _span = tracing::debug_span!("json_load_favorites", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no favorites slot yet");
            return Ok(BTreeSet::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let ids: Vec<PhotoId> = serde_json::from_str(&contents)
            .map_err(|e| LuminaError::Storage(format!("failed to parse favorites: {e}")))?;

        Ok(ids.into_iter().collect())
    }

    fn save(&mut self, favorites: &BTreeSet<PhotoId>) -> Result<()> {
        let _span = tracing::debug_span!("json_save_favorites", count = favorites.len()).entered();

        let ids: Vec<PhotoId> = favorites.iter().copied().collect();
        let json = serde_json::to_string(&ids)
            .map_err(|e| LuminaError::Storage(format!("failed to serialize favorites: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("favorites saved");
        Ok(())
    }
}
