//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry display-ready data only.
//!
//! # Example
//!
//! ```rust
//! use lumina::app::AppState;
//!
//! let state = AppState::new(Default::default());
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.header.title, "Lumina");
//! assert!(vm.items.is_empty());
//! ```

use crate::domain::{Orientation, PhotoId, PhotoShape};
use crate::download::ResolutionOption;

/// Complete gallery view model.
#[derive(Debug, Clone)]
pub struct GalleryViewModel {
    pub header: HeaderInfo,

    /// Category chips; only shown on the home view.
    pub categories: Vec<String>,

    /// Active orientation filter.
    pub orientation: Orientation,

    /// Photos in display order.
    pub items: Vec<PhotoItem>,

    /// Fetch error banner.
    pub error: Option<String>,

    /// Whether a loading indicator is shown.
    pub loading: bool,

    /// Whether the "load more" control is offered.
    pub load_more: bool,

    pub empty_state: Option<EmptyState>,

    /// Detail modal content.
    pub preview: Option<PreviewInfo>,

    /// Resolution sheet content.
    pub download: Option<DownloadSheet>,

    pub footer: FooterInfo,
}

/// One photo row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoItem {
    pub id: PhotoId,
    pub photographer: String,
    pub alt: String,
    pub size: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,

    /// Result count line, e.g. "Found 8,000 wallpapers (showing 24)".
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hints for the current view.
    pub keybindings: String,
}

/// Message shown instead of an empty list.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,

    /// Suggested searches, empty when none apply.
    pub suggestions: Vec<&'static str>,
}

/// Detail modal for the selected photo.
#[derive(Debug, Clone)]
pub struct PreviewInfo {
    pub id: PhotoId,
    pub title: String,
    pub photographer: String,
    pub photographer_url: String,
    pub size: String,
    pub shape: PhotoShape,
    pub avg_color: Option<String>,
    pub is_favorite: bool,
}

/// Resolution sheet for the photo being downloaded.
#[derive(Debug, Clone)]
pub struct DownloadSheet {
    pub photo_id: PhotoId,

    /// Screen summary, e.g. "Desktop • 1920x1080 (1x DPI)".
    pub device: String,

    pub options: Vec<ResolutionOption>,
}
