//! Domain layer for Lumina.
//!
//! Core types independent of HTTP, storage or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`photo`]: Photo record, resolution variants, orientation filter
//! - [`category`]: Curated browse categories and fuzzy lookup
//! - [`screen`]: Screen/device descriptor
//!
//! # Examples
//!
//! ```
//! use lumina::domain::{Orientation, ScreenInfo};
//!
//! let screen = ScreenInfo::new(2560, 1440, 1.0);
//! assert_eq!(screen.physical_pixels(), (2560, 1440));
//! assert_eq!(Orientation::default(), Orientation::All);
//! ```

pub mod category;
pub mod error;
pub mod photo;
pub mod screen;

pub use category::{resolve_category, Category, CATEGORIES, SEARCH_SUGGESTIONS};
pub use error::{LuminaError, Result};
pub use photo::{Orientation, Photo, PhotoId, PhotoShape, PhotoSources, Variant};
pub use screen::{DeviceType, ScreenInfo};
