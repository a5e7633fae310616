//! Request and response types for the photo listing endpoints.

use crate::domain::{Orientation, Photo};
use serde::{Deserialize, Serialize};

/// Fixed page size for every listing request.
pub const PAGE_SIZE: u32 = 24;

/// Which listing endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Editor-curated photos, used when no query is active.
    Curated,
    /// Keyword search.
    Search,
}

impl Endpoint {
    /// Path segment appended to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Curated => "curated",
            Self::Search => "search",
        }
    }
}

/// One outbound listing fetch, as issued by the controller.
///
/// The `token` identifies the fetch; the controller only applies the completion
/// whose token matches the most recently issued one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic request token allocated by the controller.
    pub token: u64,
    /// Search term; empty means "browse curated".
    pub query: String,
    /// 1-based page number.
    pub page: u32,
    /// Whether the result replaces the list (`true`) or extends it.
    pub reset: bool,
    pub orientation: Orientation,
}

impl FetchRequest {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        if self.query.is_empty() {
            Endpoint::Curated
        } else {
            Endpoint::Search
        }
    }

    /// Query-string parameters in the order they are sent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumina::domain::Orientation;
    /// use lumina::source::FetchRequest;
    ///
    /// let request = FetchRequest {
    ///     token: 1,
    ///     query: "ocean".into(),
    ///     page: 2,
    ///     reset: false,
    ///     orientation: Orientation::Portrait,
    /// };
    /// let params: Vec<_> = request.query_params().into_iter().map(|(k, _)| k).collect();
    /// assert_eq!(params, ["page", "per_page", "query", "orientation"]);
    /// ```
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
        ];

        if !self.query.is_empty() {
            params.push(("query", self.query.clone()));
        }

        if let Some(orientation) = self.orientation.as_query_param() {
            params.push(("orientation", orientation.to_string()));
        }

        params
    }
}

/// Body of a listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotosPage {
    #[serde(default)]
    pub photos: Vec<Photo>,

    #[serde(default)]
    pub total_results: u64,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl PhotosPage {
    /// A full page means more results are likely available.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.photos.len() == PAGE_SIZE as usize
    }
}
