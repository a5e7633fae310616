//! Sharing a photo link.
//!
//! Share strategies are tried in order until one succeeds. When every strategy
//! fails the share is dropped; the failure is returned for logging only.

use crate::domain::{LuminaError, Photo, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What gets shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Builds the payload for a photo.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumina::domain::Photo;
    /// use lumina::share::SharePayload;
    ///
    /// let photo: Photo = serde_json::from_str(
    ///     r#"{"id": 12, "width": 1, "height": 1, "photographer": "Lin"}"#,
    /// ).unwrap();
    /// let payload = SharePayload::for_photo(&photo);
    /// assert_eq!(payload.url, "https://www.pexels.com/photo/12/");
    /// assert_eq!(
    ///     payload.message(),
    ///     "Check out this amazing wallpaper by Lin - https://www.pexels.com/photo/12/"
    /// );
    /// ```
    #[must_use]
    pub fn for_photo(photo: &Photo) -> Self {
        let title = match photo.alt_text() {
            "" => "Beautiful Wallpaper from Lumina".to_string(),
            alt => alt.to_string(),
        };
        Self {
            title,
            text: format!("Check out this amazing wallpaper by {}", photo.photographer),
            url: photo.share_url(),
        }
    }

    /// Single-line form written to clipboards and link files.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{} - {}", self.text, self.url)
    }
}

/// How a share was delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareMethod {
    /// Copied to the system clipboard.
    Clipboard,
    /// Appended to a link file for manual copying.
    LinkFile(PathBuf),
}

/// One share strategy.
pub trait ShareTarget: Send {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Delivers the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if this strategy is unavailable or fails.
    fn share(&mut self, payload: &SharePayload) -> Result<ShareMethod>;
}

/// Copies the share message to the system clipboard.
///
/// A clipboard handle is opened per share, so the target holds no
/// platform state between shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ShareTarget for SystemClipboard {
    fn name(&self) -> &str {
        "clipboard"
    }

    fn share(&mut self, payload: &SharePayload) -> Result<ShareMethod> {
        arboard::Clipboard::new()
            .and_then(|mut cb| cb.set_text(payload.message()))
            .map_err(|e| LuminaError::Share(e.to_string()))?;
        Ok(ShareMethod::Clipboard)
    }
}

/// Appends share messages to a text file.
#[derive(Debug, Clone)]
pub struct LinkFile {
    path: PathBuf,
}

impl LinkFile {
    /// Default file name inside the data directory.
    pub const FILE_NAME: &'static str = "lumina-shared-links.txt";

    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(Self::FILE_NAME),
        }
    }
}

impl ShareTarget for LinkFile {
    fn name(&self) -> &str {
        "link-file"
    }

    fn share(&mut self, payload: &SharePayload) -> Result<ShareMethod> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", payload.message())?;
        Ok(ShareMethod::LinkFile(self.path.clone()))
    }
}

/// Ordered list of share strategies.
#[derive(Default)]
pub struct ShareCascade {
    targets: Vec<Box<dyn ShareTarget>>,
}

impl ShareCascade {
    #[must_use]
    pub fn new(targets: Vec<Box<dyn ShareTarget>>) -> Self {
        Self { targets }
    }

    /// Clipboard first, then a link file in `data_dir`.
    #[must_use]
    pub fn with_defaults(data_dir: &Path) -> Self {
        Self::new(vec![
            Box::new(SystemClipboard),
            Box::new(LinkFile::in_dir(data_dir)),
        ])
    }

    /// Tries every strategy in order and returns the first success.
    ///
    /// # Errors
    ///
    /// Returns a share error when no strategy succeeded.
    pub fn share(&mut self, payload: &SharePayload) -> Result<ShareMethod> {
        let _span = tracing::debug_span!("share", url = %payload.url).entered();

        for target in &mut self.targets {
            match target.share(payload) {
                Ok(method) => {
                    tracing::debug!(strategy = target.name(), "shared");
                    return Ok(method);
                }
                Err(e) => {
                    tracing::debug!(strategy = target.name(), error = %e, "share strategy failed");
                }
            }
        }

        Err(LuminaError::Share("no share strategy succeeded".to_string()))
    }
}

impl std::fmt::Debug for ShareCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.targets.iter().map(|t| t.name()).collect();
        f.debug_struct("ShareCascade").field("targets", &names).finish()
    }
}
