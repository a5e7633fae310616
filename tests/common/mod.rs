//! Shared fixtures for integration tests: an in-process photo source that
//! records every request.

#![allow(dead_code)]

use async_trait::async_trait;
use lumina::domain::{LuminaError, Photo, Result};
use lumina::share::ShareCascade;
use lumina::source::{FetchRequest, PhotoSource, PhotosPage};
use lumina::storage::MemoryFavoritesStore;
use lumina::{AppState, Runtime};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Builds a landscape 6000x4000 photo with every tier URL filled in.
pub fn photo(id: u64, photographer: &str) -> Photo {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "width": 6000,
        "height": 4000,
        "photographer": photographer,
        "src": {
            "original": format!("https://img.test/{id}/original.jpg"),
            "large2x": format!("https://img.test/{id}/large2x.jpg"),
            "large": format!("https://img.test/{id}/large.jpg"),
            "medium": format!("https://img.test/{id}/medium.jpg"),
        }
    }))
    .unwrap()
}

/// Photo source double.
///
/// Pages are synthesized: each photo's photographer is `"{query}#{page}"`
/// (`curated` when the query is empty) so tests can tell responses apart.
#[derive(Default)]
pub struct FakeSource {
    requests: Mutex<Vec<FetchRequest>>,
    images: Mutex<Vec<String>>,
    page_sizes: Mutex<HashMap<u32, usize>>,
    delays: Mutex<HashMap<String, Duration>>,
    fail_status: Mutex<Option<u16>>,
    fail_images: Mutex<bool>,
    total: Mutex<u64>,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        let source = Self::default();
        *source.total.lock().unwrap() = 1000;
        Arc::new(source)
    }

    /// Number of photos returned for `page`; 24 unless overridden.
    pub fn set_page_size(&self, page: u32, count: usize) {
        self.page_sizes.lock().unwrap().insert(page, count);
    }

    /// Delays every response for `query`.
    pub fn set_delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn fail_listings_with(&self, status: Option<u16>) {
        *self.fail_status.lock().unwrap() = status;
    }

    pub fn fail_images(&self, fail: bool) {
        *self.fail_images.lock().unwrap() = fail;
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.images.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoSource for FakeSource {
    async fn fetch_page(&self, request: &FetchRequest) -> Result<PhotosPage> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = self.delays.lock().unwrap().get(&request.query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(status) = *self.fail_status.lock().unwrap() {
            return Err(LuminaError::FetchFailed { status });
        }

        let count = self
            .page_sizes
            .lock()
            .unwrap()
            .get(&request.page)
            .copied()
            .unwrap_or(24);
        let label = if request.query.is_empty() {
            "curated"
        } else {
            request.query.as_str()
        };
        let base = u64::from(request.page) * 100;
        let photos = (0..count as u64)
            .map(|i| photo(base + i, &format!("{label}#{}", request.page)))
            .collect();

        Ok(PhotosPage {
            photos,
            total_results: *self.total.lock().unwrap(),
            page: request.page,
            per_page: 24,
            next_page: None,
        })
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        self.images.lock().unwrap().push(url.to_string());
        if *self.fail_images.lock().unwrap() {
            return Err(LuminaError::Download(format!("refused {url}")));
        }
        Ok(format!("bytes of {url}").into_bytes())
    }
}

/// Runtime over `source` with in-memory favorites and downloads into `dir`.
pub fn runtime(source: &Arc<FakeSource>, dir: &Path) -> (AppState, Runtime, MemoryFavoritesStore) {
    let store = MemoryFavoritesStore::new();
    let runtime = Runtime::new(
        Arc::clone(source) as Arc<dyn PhotoSource>,
        Box::new(store.clone()),
        dir.to_path_buf(),
        ShareCascade::default(),
    );
    (AppState::new(Default::default()), runtime, store)
}

/// Photographers of the loaded list, in order, deduplicated.
pub fn labels(state: &AppState) -> Vec<String> {
    let mut labels: Vec<String> = vec![];
    for photo in &state.photos {
        if labels.last() != Some(&photo.photographer) {
            labels.push(photo.photographer.clone());
        }
    }
    labels
}
