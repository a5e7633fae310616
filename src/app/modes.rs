//! Query and view mode types for the controller.
//!
//! # State Machine
//!
//! The active query is exactly one of:
//! - **None**: browsing curated photos
//! - **Search**: a trimmed, non-empty free-text query
//! - **Category**: a catalogue category, searched by its lower-cased name
//!
//! Holding both in one enum keeps search and category mutually exclusive:
//! setting one necessarily clears the other.
//!
//! The view mode decides whether the result list or the favorites collection
//! is shown.
//!
//! # Example
//!
//! ```rust
//! use lumina::app::modes::ActiveQuery;
//!
//! let query = ActiveQuery::Category("Nature".to_string());
//! assert_eq!(query.term(), "nature");
//! assert_eq!(query.search_text(), "");
//! assert_eq!(query.category(), Some("Nature"));
//! ```

/// The currently active listing query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveQuery {
    /// No query: the curated endpoint is used.
    #[default]
    None,

    /// Free-text search.
    Search(String),

    /// A category, shown by its display name.
    Category(String),
}

impl ActiveQuery {
    /// Term sent to the photo source; empty for [`ActiveQuery::None`].
    #[must_use]
    pub fn term(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::Search(text) => text.clone(),
            Self::Category(name) => name.to_lowercase(),
        }
    }

    /// Free-text query, empty unless a search is active.
    #[must_use]
    pub fn search_text(&self) -> &str {
        match self {
            Self::Search(text) => text,
            _ => "",
        }
    }

    /// Selected category name, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Category(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Which collection the gallery shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Search/home results.
    #[default]
    Browse,

    /// Only favorited photos; the results view is suppressed.
    Favorites,
}
