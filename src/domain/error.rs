//! Error types for Lumina.
//!
//! This module defines the centralized error type [`LuminaError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Only listing-fetch failures are ever promoted into visible application state
//! (as their `Display` text). Every other variant is contained where it occurs
//! and logged.

use thiserror::Error;

/// The main error type for Lumina operations.
///
/// # Examples
///
/// ```
/// use lumina::domain::LuminaError;
///
/// let err = LuminaError::FetchFailed { status: 503 };
/// assert_eq!(err.to_string(), "Failed to fetch photos (HTTP 503)");
/// ```
#[derive(Debug, Error)]
pub enum LuminaError {
    /// The photo API answered with a non-success status code.
    #[error("Failed to fetch photos (HTTP {status})")]
    FetchFailed {
        /// HTTP status code returned by the API.
        status: u16,
    },

    /// Transport-level failure talking to the photo API or an image host.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Favorites store read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A binary download could not be completed.
    #[error("Download error: {0}")]
    Download(String),

    /// Every share strategy failed or none was available.
    #[error("Share error: {0}")]
    Share(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Lumina operations.
pub type Result<T> = std::result::Result<T, LuminaError>;
