//! User interface layer.
//!
//! ```text
//! AppState → compute_viewmodel → GalleryViewModel → render → text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain text renderer

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_notifications};
pub use viewmodel::{
    DownloadSheet, EmptyState, FooterInfo, GalleryViewModel, HeaderInfo, PhotoItem, PreviewInfo,
};
