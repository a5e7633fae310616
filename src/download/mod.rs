//! Wallpaper downloads.
//!
//! # Modules
//!
//! - `resolution`: Pure recommendation of a variant for the current screen
//!
//! This module also owns download file naming and the [`Downloader`] that
//! fetches the image bytes and writes them into the download directory.
//! Downloads are best-effort: failures are reported back to the caller for
//! logging and never reach application state.

pub mod resolution;

pub use resolution::{recommended_option, resolution_options, ResolutionOption};

use crate::domain::{Photo, PhotoId, Result, Variant};
use crate::source::PhotoSource;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Prefix of every saved file.
pub const FILE_PREFIX: &str = "lumina-wallpaper";

/// Pause between showing the download popup and starting the transfer.
pub const POPUP_DELAY: Duration = Duration::from_millis(1000);

/// Name of the saved file for a photo, optionally suffixed by its variant.
///
/// The variant label is lower-cased and its first space replaced by `-`.
///
/// # Examples
///
/// ```
/// use lumina::domain::{PhotoId, Variant};
/// use lumina::download::file_name;
///
/// assert_eq!(file_name(PhotoId(42), None), "lumina-wallpaper-42.jpg");
/// assert_eq!(file_name(PhotoId(42), Some(Variant::Large2x)), "lumina-wallpaper-42-large-2x.jpg");
/// ```
#[must_use]
pub fn file_name(id: PhotoId, variant: Option<Variant>) -> String {
    match variant {
        None => format!("{FILE_PREFIX}-{id}.jpg"),
        Some(variant) => {
            let label = variant.label().to_lowercase().replacen(' ', "-", 1);
            format!("{FILE_PREFIX}-{id}-{label}.jpg")
        }
    }
}

/// One download to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub photo_id: PhotoId,
    /// Chosen variant, `None` for the direct "download original" action.
    pub variant: Option<Variant>,
    pub url: String,
    pub file_name: String,
    /// Delay before the transfer starts, used when a popup is shown first.
    pub delay: Option<Duration>,
}

impl DownloadRequest {
    /// Direct download of the original image, without popup or delay.
    ///
    /// Returns `None` when the photo has no original URL.
    #[must_use]
    pub fn original(photo: &Photo) -> Option<Self> {
        if photo.src.original.is_empty() {
            return None;
        }
        Some(Self {
            photo_id: photo.id,
            variant: None,
            url: photo.src.original.clone(),
            file_name: file_name(photo.id, None),
            delay: None,
        })
    }

    /// Download of a resolution chosen from the download sheet.
    #[must_use]
    pub fn for_option(photo_id: PhotoId, option: &ResolutionOption) -> Self {
        Self {
            photo_id,
            variant: Some(option.variant),
            url: option.url.clone(),
            file_name: file_name(photo_id, Some(option.variant)),
            delay: Some(POPUP_DELAY),
        }
    }

    /// Message for the popup shown while the download is prepared.
    #[must_use]
    pub fn popup_message(&self) -> String {
        let label = self.variant.map_or("Original", Variant::label);
        format!("📥 Downloading {label} quality...\nYour wallpaper will be ready in a few seconds!")
    }
}

/// Fetches image bytes and saves them under the download directory.
#[derive(Clone)]
pub struct Downloader {
    source: Arc<dyn PhotoSource>,
    dir: PathBuf,
}

impl Downloader {
    #[must_use]
    pub fn new(source: Arc<dyn PhotoSource>, dir: PathBuf) -> Self {
        Self { source, dir }
    }

    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Performs the download and returns the saved path.
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer fails or the file cannot be written.
    pub async fn download(&self, request: &DownloadRequest) -> Result<PathBuf> {
        if let Some(delay) = request.delay {
            tokio::time::sleep(delay).await;
        }

        let bytes = self.source.fetch_image(&request.url).await?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&request.file_name);
        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!(
            photo_id = %request.photo_id,
            path = ?path,
            bytes = bytes.len(),
            "wallpaper saved"
        );
        Ok(path)
    }
}

impl std::fmt::Debug for Downloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Downloader").field("dir", &self.dir).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_file_names_follow_label() {
        let id = PhotoId(5);
        assert_eq!(file_name(id, Some(Variant::Original)), "lumina-wallpaper-5-original.jpg");
        assert_eq!(file_name(id, Some(Variant::Large)), "lumina-wallpaper-5-large.jpg");
        assert_eq!(file_name(id, Some(Variant::Medium)), "lumina-wallpaper-5-medium.jpg");
    }

    #[test]
    fn original_request_requires_url() {
        let mut photo: Photo = serde_json::from_str(r#"{"id": 9, "width": 10, "height": 10}"#).unwrap();
        assert!(DownloadRequest::original(&photo).is_none());

        photo.src.original = "https://img/9.jpg".into();
        let request = DownloadRequest::original(&photo).unwrap();
        assert_eq!(request.file_name, "lumina-wallpaper-9.jpg");
        assert_eq!(request.delay, None);
    }

    #[test]
    fn popup_message_names_quality() {
        let option = ResolutionOption {
            variant: Variant::Large2x,
            url: "u".into(),
            width: 1920,
            height: 1280,
            file_size: "~1-3 MB",
            recommended: true,
        };
        let request = DownloadRequest::for_option(PhotoId(1), &option);
        assert!(request.popup_message().starts_with("📥 Downloading Large 2x quality..."));
        assert_eq!(request.delay, Some(POPUP_DELAY));
    }
}
