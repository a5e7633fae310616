//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in order: fetches and downloads are spawned and report
//! back as events, persistence and sharing run inline, and the remaining
//! actions are handed to the view layer.
//!
//! # Example
//!
//! ```rust
//! use lumina::app::Action;
//! use lumina::domain::Orientation;
//! use lumina::source::FetchRequest;
//!
//! let actions = vec![Action::FetchPage(FetchRequest {
//!     token: 1,
//!     query: String::new(),
//!     page: 1,
//!     reset: true,
//!     orientation: Orientation::All,
//! })];
//! assert!(matches!(actions[0], Action::FetchPage(_)));
//! ```

use crate::domain::PhotoId;
use crate::download::DownloadRequest;
use crate::notify::NotificationKind;
use crate::share::SharePayload;
use crate::source::FetchRequest;
use std::collections::BTreeSet;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues one listing request. Its completion arrives as
    /// [`Event::PageLoaded`](super::Event::PageLoaded) carrying the same token.
    FetchPage(FetchRequest),

    /// Rewrites the favorites slot with the full set.
    PersistFavorites(BTreeSet<PhotoId>),

    /// Asks the view to scroll back to the top of the results.
    ScrollToTop,

    /// Starts a best-effort download.
    Download(DownloadRequest),

    /// Shows a toast or popup.
    Notify {
        kind: NotificationKind,
        /// Message text; empty selects the kind's default.
        message: String,
    },

    /// Runs the share cascade for a photo link.
    Share(SharePayload),

    /// Ends the session.
    Quit,
}
