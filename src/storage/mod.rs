//! Favorites Store: persistence for the favorites set.
//!
//! # Modules
//!
//! - `backend`: [`FavoritesStore`] trait and best-effort loading
//! - `json`: JSON file slot with atomic writes
//! - `memory`: Session-only fallback

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{load_favorites, FavoritesStore};
pub use json::{JsonFavoritesStore, FAVORITES_SLOT};
pub use memory::MemoryFavoritesStore;
