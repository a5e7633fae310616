//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of every piece of
//! controller state: the result list, loading and error flags, pagination
//! cursor, active query and orientation, favorites, view mode, the two modal
//! selections and the screen descriptor. It is mutated only by
//! [`handle_event`](super::handle_event).
//!
//! # Request Tokens
//!
//! Every fetch issued through [`AppState::issue_fetch`] gets a fresh token from
//! a monotonic counter, and the state remembers the most recent one. A
//! completion is applied only when its token is still the latest
//! ([`AppState::is_latest`]); anything older is stale and is dropped.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`GalleryViewModel`] for the renderer.
//!
//! # Example
//!
//! ```rust
//! use lumina::app::AppState;
//! use std::collections::BTreeSet;
//!
//! let mut state = AppState::new(BTreeSet::new());
//! let first = state.issue_fetch(1, true);
//! let second = state.issue_fetch(1, true);
//! assert!(!state.is_latest(first.token));
//! assert!(state.is_latest(second.token));
//! ```

use super::modes::{ActiveQuery, ViewMode};
use crate::domain::{Orientation, Photo, PhotoId, ScreenInfo, CATEGORIES, SEARCH_SUGGESTIONS};
use crate::download::{resolution_options, ResolutionOption};
use crate::source::{FetchRequest, PhotosPage};
use crate::ui::viewmodel::{
    DownloadSheet, EmptyState, FooterInfo, GalleryViewModel, HeaderInfo, PhotoItem, PreviewInfo,
};
use std::collections::{BTreeSet, HashSet};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ordered result list. Replaced by reset fetches, extended by appends.
    pub photos: Vec<Photo>,

    /// True while the latest issued fetch has not completed.
    pub loading: bool,

    /// Message of the last failed listing fetch; cleared when a fetch starts.
    pub error: Option<String>,

    /// Search text or category, never both.
    pub query: ActiveQuery,

    pub orientation: Orientation,

    /// 1-based page cursor of the current session.
    pub page: u32,

    /// False once a page came back with fewer than [`PAGE_SIZE`](crate::source::PAGE_SIZE) photos.
    pub has_more: bool,

    pub favorites: BTreeSet<PhotoId>,

    /// True while a search or category is being shown instead of home.
    pub search_mode: bool,

    pub view_mode: ViewMode,

    /// Photo shown in the detail modal.
    pub preview: Option<Photo>,

    /// Photo whose resolution sheet is open.
    pub download: Option<Photo>,

    /// Total reported by the fetch that started the current session.
    pub total_results: u64,

    pub screen: ScreenInfo,

    /// Last token handed out.
    next_token: u64,

    /// Token of the most recently issued fetch, if any.
    latest_token: Option<u64>,
}

impl AppState {
    /// Creates the initial state around a previously persisted favorites set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumina::app::AppState;
    /// use lumina::domain::PhotoId;
    ///
    /// let state = AppState::new([PhotoId(3)].into());
    /// assert_eq!(state.page, 1);
    /// assert!(state.has_more);
    /// assert!(state.is_favorite(PhotoId(3)));
    /// ```
    #[must_use]
    pub fn new(favorites: BTreeSet<PhotoId>) -> Self {
        Self {
            photos: vec![],
            loading: false,
            error: None,
            query: ActiveQuery::None,
            orientation: Orientation::All,
            page: 1,
            has_more: true,
            favorites,
            search_mode: false,
            view_mode: ViewMode::Browse,
            preview: None,
            download: None,
            total_results: 0,
            screen: ScreenInfo::default(),
            next_token: 0,
            latest_token: None,
        }
    }

    /// Starts a fetch for `page` of the active query and orientation.
    ///
    /// Sets `loading`, clears `error`, and makes the returned request the only
    /// one whose completion will be applied. A reset fetch also drops the
    /// current result list so stale entries never outlive a query change.
    pub fn issue_fetch(&mut self, page: u32, reset: bool) -> FetchRequest {
        self.next_token += 1;
        let token = self.next_token;
        self.latest_token = Some(token);

        self.loading = true;
        self.error = None;

        if reset {
            self.photos.clear();
            self.total_results = 0;
        }

        let request = FetchRequest {
            token,
            query: self.query.term(),
            page,
            reset,
            orientation: self.orientation,
        };

        tracing::debug!(
            token,
            query = %request.query,
            page,
            reset,
            orientation = %request.orientation,
            "fetch issued"
        );

        request
    }

    /// Whether `token` belongs to the most recently issued fetch.
    #[must_use]
    pub fn is_latest(&self, token: u64) -> bool {
        self.latest_token == Some(token)
    }

    /// Applies a successful listing response.
    ///
    /// The caller must have checked [`AppState::is_latest`].
    pub fn apply_page(&mut self, request: &FetchRequest, page: PhotosPage) {
        let received = page.photos.len();
        let full = page.is_full();

        if request.reset {
            self.photos = page.photos;
            self.total_results = page.total_results;
        } else {
            self.photos.extend(page.photos);
        }

        self.has_more = full;
        self.search_mode = !request.query.is_empty();
        self.loading = false;

        tracing::debug!(
            token = request.token,
            received,
            total_loaded = self.photos.len(),
            has_more = self.has_more,
            "page applied"
        );
    }

    /// Records a failed listing fetch. List, page and `has_more` are kept.
    pub fn apply_failure(&mut self, message: String) {
        tracing::debug!(error = %message, "fetch failed");
        self.error = Some(message);
        self.loading = false;
    }

    /// Finds a loaded photo by id.
    #[must_use]
    pub fn find_photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: PhotoId) -> bool {
        self.favorites.contains(&id)
    }

    /// Loaded photos that are favorites, first occurrence of each id only.
    #[must_use]
    pub fn favorite_photos(&self) -> Vec<&Photo> {
        let mut seen = HashSet::new();
        self.photos
            .iter()
            .filter(|photo| self.favorites.contains(&photo.id) && seen.insert(photo.id))
            .collect()
    }

    /// Resolution options for the open download sheet.
    #[must_use]
    pub fn download_options(&self) -> Vec<ResolutionOption> {
        self.download
            .as_ref()
            .map(|photo| resolution_options(photo, &self.screen))
            .unwrap_or_default()
    }

    /// Label of the active query as shown to the user.
    #[must_use]
    pub fn display_query(&self) -> &str {
        match &self.query {
            ActiveQuery::None => "",
            ActiveQuery::Search(text) => text,
            ActiveQuery::Category(name) => name,
        }
    }

    /// Computes the renderable view of the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> GalleryViewModel {
        let favorites_view = self.view_mode == ViewMode::Favorites;

        let items: Vec<PhotoItem> = if favorites_view {
            self.favorite_photos()
                .into_iter()
                .map(|photo| self.compute_photo_item(photo))
                .collect()
        } else {
            self.photos.iter().map(|photo| self.compute_photo_item(photo)).collect()
        };

        let empty_state = self.compute_empty_state(favorites_view, items.is_empty());

        GalleryViewModel {
            header: self.compute_header(favorites_view),
            categories: if favorites_view || self.search_mode {
                vec![]
            } else {
                CATEGORIES.iter().map(|c| format!("{} {}", c.emoji, c.name)).collect()
            },
            orientation: self.orientation,
            items,
            error: if favorites_view { None } else { self.error.clone() },
            loading: self.loading && !favorites_view,
            load_more: !favorites_view && self.has_more && !self.loading && !self.photos.is_empty(),
            empty_state,
            preview: self.preview.as_ref().map(|photo| self.compute_preview(photo)),
            download: self.download.as_ref().map(|photo| DownloadSheet {
                photo_id: photo.id,
                device: self.screen.describe(),
                options: resolution_options(photo, &self.screen),
            }),
            footer: self.compute_footer(favorites_view),
        }
    }

    fn compute_photo_item(&self, photo: &Photo) -> PhotoItem {
        PhotoItem {
            id: photo.id,
            photographer: photo.photographer.clone(),
            alt: photo.alt_text().to_string(),
            size: format!("{}x{}", photo.width, photo.height),
            is_favorite: self.is_favorite(photo.id),
        }
    }

    fn compute_header(&self, favorites_view: bool) -> HeaderInfo {
        if favorites_view {
            return HeaderInfo {
                title: format!("My Favorites ({})", self.favorites.len()),
                subtitle: None,
            };
        }

        if !self.search_mode {
            return HeaderInfo {
                title: "Lumina".to_string(),
                subtitle: Some("Discover stunning wallpapers for every screen".to_string()),
            };
        }

        let shown = self.photos.len() as u64;
        let subtitle = (shown > 0).then(|| {
            let mut line = format!("Found {} wallpapers", format_count(self.total_results));
            if shown < self.total_results {
                line.push_str(&format!(" (showing {shown})"));
            }
            line
        });

        HeaderInfo {
            title: format!("Search Results for: \"{}\"", self.display_query()),
            subtitle,
        }
    }

    fn compute_empty_state(&self, favorites_view: bool, no_items: bool) -> Option<EmptyState> {
        if !no_items {
            return None;
        }

        if favorites_view {
            return Some(EmptyState {
                message: "No favorites yet".to_string(),
                subtitle: "Start exploring and click the heart icon on wallpapers you love to add them to your favorites!".to_string(),
                suggestions: vec![],
            });
        }

        if self.search_mode && !self.loading && self.error.is_none() {
            return Some(EmptyState {
                message: format!("No wallpapers found for \"{}\"", self.display_query()),
                subtitle: "Don't worry! Try searching with different keywords or explore our suggestions below."
                    .to_string(),
                suggestions: SEARCH_SUGGESTIONS.to_vec(),
            });
        }

        None
    }

    fn compute_preview(&self, photo: &Photo) -> PreviewInfo {
        PreviewInfo {
            id: photo.id,
            title: match photo.alt_text() {
                "" => "Beautiful Wallpaper".to_string(),
                alt => alt.to_string(),
            },
            photographer: photo.photographer.clone(),
            photographer_url: photo.photographer_url.clone(),
            size: format!("{}x{}", photo.width, photo.height),
            shape: photo.shape(),
            avg_color: photo.avg_color.clone(),
            is_favorite: self.is_favorite(photo.id),
        }
    }

    fn compute_footer(&self, favorites_view: bool) -> FooterInfo {
        let keybindings = if self.download.is_some() {
            "get [variant]: download | close: close sheet | help"
        } else if self.preview.is_some() {
            "fav <id>: favorite | download <id> | share | close | help"
        } else if favorites_view {
            "browse: back to gallery | preview <id> | fav <id> | help"
        } else if self.search_mode {
            "more | clear | home | orientation <all|landscape|portrait> | preview <id> | help"
        } else {
            "search <text> | category <name> | more | favorites | preview <id> | help"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Formats a count with thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
