//! HTTP client for the Pexels photo API.
//!
//! [`PhotoSource`] is the seam the runtime talks to; [`PexelsClient`] is the
//! production implementation. Tests substitute an in-process fake.

use crate::domain::{LuminaError, Result};
use crate::source::models::{FetchRequest, PhotosPage};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1";

/// Remote source of photo listings and image bytes.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Performs exactly one listing request (curated or search).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status or an
    /// unparseable body.
    async fn fetch_page(&self, request: &FetchRequest) -> Result<PhotosPage>;

    /// Downloads the image payload at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}

/// Pexels API client.
pub struct PexelsClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl PexelsClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Builds the full listing URL for a request.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is not a valid URL.
    pub fn listing_url(&self, request: &FetchRequest) -> Result<Url> {
        let endpoint = format!("{}/{}", self.base_url, request.endpoint().path());
        Url::parse_with_params(&endpoint, request.query_params())
            .map_err(|e| LuminaError::Config(format!("invalid API base URL {}: {e}", self.base_url)))
    }
}

impl std::fmt::Debug for PexelsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PhotoSource for PexelsClient {
    async fn fetch_page(&self, request: &FetchRequest) -> Result<PhotosPage> {
        let url = self.listing_url(request)?;

        tracing::debug!(
            token = request.token,
            endpoint = request.endpoint().path(),
            page = request.page,
            "requesting photo listing"
        );

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LuminaError::FetchFailed {
                status: status.as_u16(),
            });
        }

        let page: PhotosPage = response.json().await?;
        tracing::debug!(
            token = request.token,
            received = page.photos.len(),
            total_results = page.total_results,
            "photo listing received"
        );
        Ok(page)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
