//! Event handling and state transition logic.
//!
//! This module implements the controller's reducer: every user operation and
//! every completion reported by the runtime arrives as an [`Event`], and
//! [`handle_event`] applies it to [`AppState`] and returns the side effects to
//! run.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front end or from completed runtime tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` fields and methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Browsing**: `Init`, `Search`, `SelectCategory`, `SetOrientation`,
//!   `LoadMore`, `ClearSearch`, `ReturnToHome`
//! - **Favorites**: `ToggleFavorite`, `ShowFavorites`
//! - **Modals**: `OpenPreview`, `ClosePreview`, `OpenDownload`, `CloseDownload`,
//!   `Close`
//! - **Effects**: `DownloadOriginal`, `DownloadVariant`, `DownloadRecommended`, `Share`
//! - **System**: `ScreenChanged`, `Quit`
//! - **Completions**: `PageLoaded`, `DownloadFinished`
//!
//! # Example
//!
//! ```rust
//! use lumina::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new(Default::default());
//! let (render, actions) = handle_event(&mut state, Event::SelectCategory("Nature".into()))?;
//! assert!(render);
//! assert!(matches!(&actions[0], Action::FetchPage(request) if request.query == "nature"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{ActiveQuery, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::{Orientation, PhotoId, Result, ScreenInfo, Variant};
use crate::download::{recommended_option, DownloadRequest};
use crate::notify::NotificationKind;
use crate::share::SharePayload;
use crate::source::{FetchRequest, PhotosPage};
use std::path::PathBuf;

/// Events triggered by user input or by completed runtime tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Loads curated page 1 at startup.
    Init,

    /// Submits a search. Blank input returns home.
    Search(String),

    /// Browses a category by display name.
    SelectCategory(String),

    SetOrientation(Orientation),

    /// Fetches the next page and appends it.
    ///
    /// Callers only send this while `has_more && !loading`; the handler does
    /// not re-check.
    LoadMore,

    /// Drops the query but keeps the orientation.
    ClearSearch,

    /// Drops the query and resets the orientation.
    ReturnToHome,

    ToggleFavorite(PhotoId),

    /// Enters (`true`) or leaves (`false`) the favorites view.
    ShowFavorites(bool),

    OpenPreview(PhotoId),
    ClosePreview,
    OpenDownload(PhotoId),
    CloseDownload,

    /// Closes the topmost sheet: the download sheet if open, else the preview.
    Close,

    /// Saves the original image directly, without popup or delay.
    DownloadOriginal(PhotoId),

    /// Downloads one variant of the photo in the download sheet.
    DownloadVariant(Variant),

    /// Downloads the recommended variant of the photo in the download sheet.
    DownloadRecommended,

    /// Shares a photo; `None` shares the one in the preview.
    Share(Option<PhotoId>),

    ScreenChanged {
        width: u32,
        height: u32,
        pixel_ratio: f64,
    },

    Quit,

    /// A listing fetch completed.
    PageLoaded {
        request: FetchRequest,
        /// The page, or the error's display text.
        outcome: std::result::Result<PhotosPage, String>,
    },

    /// A download completed.
    DownloadFinished {
        request: DownloadRequest,
        /// Saved path, or the error's display text.
        outcome: std::result::Result<PathBuf, String>,
    },
}

impl Event {
    /// Short name for logs and spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Search(_) => "search",
            Self::SelectCategory(_) => "select_category",
            Self::SetOrientation(_) => "set_orientation",
            Self::LoadMore => "load_more",
            Self::ClearSearch => "clear_search",
            Self::ReturnToHome => "return_to_home",
            Self::ToggleFavorite(_) => "toggle_favorite",
            Self::ShowFavorites(_) => "show_favorites",
            Self::OpenPreview(_) => "open_preview",
            Self::ClosePreview => "close_preview",
            Self::OpenDownload(_) => "open_download",
            Self::CloseDownload => "close_download",
            Self::Close => "close",
            Self::DownloadOriginal(_) => "download_original",
            Self::DownloadVariant(_) => "download_variant",
            Self::DownloadRecommended => "download_recommended",
            Self::Share(_) => "share",
            Self::ScreenChanged { .. } => "screen_changed",
            Self::Quit => "quit",
            Self::PageLoaded { .. } => "page_loaded",
            Self::DownloadFinished { .. } => "download_finished",
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Every operation is total: unknown photo ids, missing selections and stale
/// completions are ignored rather than reported. The returned flag tells the
/// front end whether the view changed.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for transitions that
/// validate their input.
///
/// # Tracing
///
/// Each call runs inside a `handle_event` debug span tagged with the event name.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = event.name()).entered();

    match event {
        Event::Init => {
            state.query = ActiveQuery::None;
            state.orientation = Orientation::All;
            state.page = 1;
            let request = state.issue_fetch(1, true);
            Ok((true, vec![Action::FetchPage(request)]))
        }
        Event::Search(input) => {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                tracing::debug!("blank search, returning home");
                return Ok(return_to_home(state));
            }

            tracing::debug!(query = %trimmed, "search submitted");
            state.query = ActiveQuery::Search(trimmed.to_string());
            Ok(restart_session(state))
        }
        Event::SelectCategory(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Ok((false, vec![]));
            }

            tracing::debug!(category = %name, "category selected");
            state.query = ActiveQuery::Category(name.to_string());
            state.search_mode = true;
            Ok(restart_session(state))
        }
        Event::SetOrientation(orientation) => {
            tracing::debug!(orientation = %orientation, "orientation changed");
            state.orientation = orientation;
            Ok(restart_session(state))
        }
        Event::LoadMore => {
            state.page += 1;
            let request = state.issue_fetch(state.page, false);
            Ok((true, vec![Action::FetchPage(request)]))
        }
        Event::ClearSearch => {
            let (render, mut actions) = go_home(state);
            actions.push(Action::ScrollToTop);
            Ok((render, actions))
        }
        Event::ReturnToHome => Ok(return_to_home(state)),
        Event::ToggleFavorite(id) => {
            let added = if state.favorites.remove(&id) {
                false
            } else {
                state.favorites.insert(id)
            };

            tracing::debug!(photo_id = %id, added, total = state.favorites.len(), "favorite toggled");
            Ok((true, vec![Action::PersistFavorites(state.favorites.clone())]))
        }
        Event::ShowFavorites(show) => {
            let mode = if show { ViewMode::Favorites } else { ViewMode::Browse };
            if state.view_mode == mode {
                return Ok((false, vec![]));
            }
            state.view_mode = mode;
            Ok((true, vec![]))
        }
        Event::OpenPreview(id) => {
            let Some(photo) = state.find_photo(id).cloned() else {
                tracing::debug!(photo_id = %id, "preview requested for unknown photo");
                return Ok((false, vec![]));
            };
            state.preview = Some(photo);
            Ok((true, vec![]))
        }
        Event::ClosePreview => Ok((state.preview.take().is_some(), vec![])),
        Event::OpenDownload(id) => {
            let Some(photo) = state
                .find_photo(id)
                .or_else(|| state.preview.as_ref().filter(|p| p.id == id))
                .cloned()
            else {
                tracing::debug!(photo_id = %id, "download sheet requested for unknown photo");
                return Ok((false, vec![]));
            };
            state.download = Some(photo);
            Ok((true, vec![]))
        }
        Event::CloseDownload => Ok((state.download.take().is_some(), vec![])),
        Event::Close => {
            let closed = state.download.take().is_some() || state.preview.take().is_some();
            Ok((closed, vec![]))
        }
        Event::DownloadOriginal(id) => {
            let photo = state
                .find_photo(id)
                .or_else(|| state.preview.as_ref().filter(|p| p.id == id))
                .or_else(|| state.download.as_ref().filter(|p| p.id == id));

            match photo.and_then(DownloadRequest::original) {
                Some(request) => Ok((false, vec![Action::Download(request)])),
                None => {
                    tracing::debug!(photo_id = %id, "nothing to download");
                    Ok((false, vec![]))
                }
            }
        }
        Event::DownloadVariant(variant) => {
            let Some(photo_id) = state.download.as_ref().map(|p| p.id) else {
                return Ok((false, vec![]));
            };
            let options = state.download_options();
            let Some(option) = options.iter().find(|o| o.variant == variant) else {
                tracing::debug!(photo_id = %photo_id, variant = variant.label(), "variant not offered");
                return Ok((false, vec![]));
            };
            Ok((false, start_download(DownloadRequest::for_option(photo_id, option))))
        }
        Event::DownloadRecommended => {
            let Some(photo_id) = state.download.as_ref().map(|p| p.id) else {
                return Ok((false, vec![]));
            };
            let options = state.download_options();
            let Some(option) = recommended_option(&options) else {
                tracing::debug!(photo_id = %photo_id, "no resolution available");
                return Ok((false, vec![]));
            };
            Ok((false, start_download(DownloadRequest::for_option(photo_id, option))))
        }
        Event::Share(target) => {
            let photo = match target {
                Some(id) => state
                    .find_photo(id)
                    .or_else(|| state.preview.as_ref().filter(|p| p.id == id)),
                None => state.preview.as_ref(),
            };

            let Some(photo) = photo else {
                tracing::debug!(photo_id = ?target, "nothing to share");
                return Ok((false, vec![]));
            };
            Ok((false, vec![Action::Share(SharePayload::for_photo(photo))]))
        }
        Event::ScreenChanged {
            width,
            height,
            pixel_ratio,
        } => {
            let screen = ScreenInfo::new(width, height, pixel_ratio);
            tracing::debug!(screen = %screen.describe(), "screen changed");
            state.screen = screen;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::PageLoaded { request, outcome } => {
            if !state.is_latest(request.token) {
                tracing::debug!(token = request.token, "discarding stale page");
                return Ok((false, vec![]));
            }

            match outcome {
                Ok(page) => {
                    state.apply_page(&request, page);
                    let mut actions = vec![];
                    if request.reset && !request.query.is_empty() {
                        actions.push(Action::ScrollToTop);
                    }
                    Ok((true, actions))
                }
                Err(message) => {
                    state.apply_failure(message);
                    Ok((true, vec![]))
                }
            }
        }
        Event::DownloadFinished { request, outcome } => match outcome {
            Ok(path) => {
                tracing::info!(photo_id = %request.photo_id, path = ?path, "download complete");
                let from_sheet = request.variant.is_some()
                    && state.download.as_ref().is_some_and(|p| p.id == request.photo_id);
                if from_sheet {
                    state.download = None;
                }
                Ok((from_sheet, vec![]))
            }
            Err(message) => {
                tracing::warn!(photo_id = %request.photo_id, error = %message, "download failed");
                Ok((false, vec![]))
            }
        },
    }
}

/// Starts a fresh session for the current query and orientation.
fn restart_session(state: &mut AppState) -> (bool, Vec<Action>) {
    state.page = 1;
    state.view_mode = ViewMode::Browse;
    let request = state.issue_fetch(1, true);
    (true, vec![Action::FetchPage(request)])
}

/// Clears the query and reloads curated photos.
fn go_home(state: &mut AppState) -> (bool, Vec<Action>) {
    state.query = ActiveQuery::None;
    state.search_mode = false;
    restart_session(state)
}

fn return_to_home(state: &mut AppState) -> (bool, Vec<Action>) {
    state.orientation = Orientation::All;
    let (render, mut actions) = go_home(state);
    actions.push(Action::ScrollToTop);
    (render, actions)
}

/// Download popup first, then the transfer itself.
fn start_download(request: DownloadRequest) -> Vec<Action> {
    vec![
        Action::Notify {
            kind: NotificationKind::DownloadPopup,
            message: request.popup_message(),
        },
        Action::Download(request),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Photo;
    use std::collections::BTreeSet;

    fn photo(id: u64) -> Photo {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "width": 6000, "height": 4000, "photographer": "P{id}",
                "src": {{"original": "https://img/{id}.jpg", "large2x": "https://img/{id}-l2.jpg",
                         "large": "https://img/{id}-l.jpg", "medium": "https://img/{id}-m.jpg"}}}}"#
        ))
        .unwrap()
    }

    fn loaded(ids: std::ops::Range<u64>, total: u64) -> PhotosPage {
        PhotosPage {
            photos: ids.map(photo).collect(),
            total_results: total,
            ..PhotosPage::default()
        }
    }

    fn fetch_of(actions: &[Action]) -> FetchRequest {
        actions
            .iter()
            .find_map(|a| match a {
                Action::FetchPage(r) => Some(r.clone()),
                _ => None,
            })
            .expect("fetch action")
    }

    fn complete(state: &mut AppState, request: FetchRequest, page: PhotosPage) -> Vec<Action> {
        handle_event(
            state,
            Event::PageLoaded {
                request,
                outcome: Ok(page),
            },
        )
        .unwrap()
        .1
    }

    #[test]
    fn category_and_search_are_mutually_exclusive() {
        let mut state = AppState::new(BTreeSet::new());
        handle_event(&mut state, Event::Search("sky".into())).unwrap();
        handle_event(&mut state, Event::SelectCategory("Ocean".into())).unwrap();
        assert_eq!(state.query.search_text(), "");
        assert_eq!(state.query.category(), Some("Ocean"));

        handle_event(&mut state, Event::Search("forest".into())).unwrap();
        assert_eq!(state.query.category(), None);
        assert_eq!(state.query.search_text(), "forest");
    }

    #[test]
    fn search_trims_and_fetches_search_endpoint() {
        let mut state = AppState::new(BTreeSet::new());
        state.view_mode = ViewMode::Favorites;
        state.page = 4;

        let (_, actions) = handle_event(&mut state, Event::Search("  night sky ".into())).unwrap();
        let request = fetch_of(&actions);
        assert_eq!(request.query, "night sky");
        assert_eq!(request.page, 1);
        assert!(request.reset);
        assert_eq!(state.page, 1);
        assert_eq!(state.view_mode, ViewMode::Browse);
    }

    #[test]
    fn category_forces_search_mode_even_without_results() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, actions) = handle_event(&mut state, Event::SelectCategory("Space".into())).unwrap();
        assert!(state.search_mode);

        complete(&mut state, fetch_of(&actions), loaded(0..0, 0));
        assert!(state.search_mode);
        assert!(state.photos.is_empty());
        assert!(!state.has_more);
    }

    #[test]
    fn orientation_refetches_active_category() {
        let mut state = AppState::new(BTreeSet::new());
        handle_event(&mut state, Event::SelectCategory("Mountains".into())).unwrap();
        let (_, actions) =
            handle_event(&mut state, Event::SetOrientation(Orientation::Portrait)).unwrap();

        let request = fetch_of(&actions);
        assert_eq!(request.query, "mountains");
        assert_eq!(request.orientation, Orientation::Portrait);
        assert!(request.reset);
    }

    #[test]
    fn reset_success_with_query_scrolls_to_top() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, actions) = handle_event(&mut state, Event::Search("ocean".into())).unwrap();
        let follow_up = complete(&mut state, fetch_of(&actions), loaded(0..24, 500));
        assert_eq!(follow_up, vec![Action::ScrollToTop]);

        let (_, actions) = handle_event(&mut state, Event::LoadMore).unwrap();
        let follow_up = complete(&mut state, fetch_of(&actions), loaded(24..48, 500));
        assert!(follow_up.is_empty());
        assert_eq!(state.photos.len(), 48);
        assert_eq!(state.total_results, 500);
    }

    #[test]
    fn curated_reset_does_not_scroll() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, actions) = handle_event(&mut state, Event::Init).unwrap();
        let follow_up = complete(&mut state, fetch_of(&actions), loaded(0..24, 8000));
        assert!(follow_up.is_empty());
        assert!(!state.search_mode);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, first) = handle_event(&mut state, Event::Search("cats".into())).unwrap();
        let (_, second) = handle_event(&mut state, Event::Search("dogs".into())).unwrap();

        complete(&mut state, fetch_of(&second), loaded(100..110, 10));
        let (render, actions) = handle_event(
            &mut state,
            Event::PageLoaded {
                request: fetch_of(&first),
                outcome: Ok(loaded(0..24, 999)),
            },
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.photos.len(), 10);
        assert_eq!(state.photos[0].id, PhotoId(100));
        assert_eq!(state.total_results, 10);
    }

    #[test]
    fn stale_completion_does_not_clear_loading() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, first) = handle_event(&mut state, Event::Search("cats".into())).unwrap();
        handle_event(&mut state, Event::Search("dogs".into())).unwrap();

        complete(&mut state, fetch_of(&first), loaded(0..24, 999));
        assert!(state.loading);
        assert!(state.photos.is_empty());
    }

    #[test]
    fn failed_fetch_surfaces_message() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, actions) = handle_event(&mut state, Event::Init).unwrap();
        complete(&mut state, fetch_of(&actions), loaded(0..24, 100));

        let (_, actions) = handle_event(&mut state, Event::LoadMore).unwrap();
        handle_event(
            &mut state,
            Event::PageLoaded {
                request: fetch_of(&actions),
                outcome: Err("Failed to fetch photos (HTTP 429)".into()),
            },
        )
        .unwrap();

        assert_eq!(state.error.as_deref(), Some("Failed to fetch photos (HTTP 429)"));
        assert_eq!(state.photos.len(), 24);
        assert!(state.has_more);
        assert!(!state.loading);

        handle_event(&mut state, Event::Search("retry".into())).unwrap();
        assert_eq!(state.error, None);
    }

    #[test]
    fn blank_search_matches_return_to_home() {
        let mut via_search = AppState::new(BTreeSet::new());
        handle_event(&mut via_search, Event::SelectCategory("Nature".into())).unwrap();
        handle_event(&mut via_search, Event::SetOrientation(Orientation::Landscape)).unwrap();
        let (_, search_actions) = handle_event(&mut via_search, Event::Search("   ".into())).unwrap();

        let mut via_home = AppState::new(BTreeSet::new());
        handle_event(&mut via_home, Event::SelectCategory("Nature".into())).unwrap();
        handle_event(&mut via_home, Event::SetOrientation(Orientation::Landscape)).unwrap();
        let (_, home_actions) = handle_event(&mut via_home, Event::ReturnToHome).unwrap();

        for state in [&via_search, &via_home] {
            assert!(state.query.is_none());
            assert!(!state.search_mode);
            assert_eq!(state.orientation, Orientation::All);
            assert_eq!(state.page, 1);
        }
        assert_eq!(fetch_of(&search_actions).query, "");
        assert_eq!(fetch_of(&search_actions).orientation, Orientation::All);
        assert_eq!(search_actions.len(), home_actions.len());
        assert!(search_actions.contains(&Action::ScrollToTop));
    }

    #[test]
    fn clear_search_keeps_orientation() {
        let mut state = AppState::new(BTreeSet::new());
        handle_event(&mut state, Event::SetOrientation(Orientation::Portrait)).unwrap();
        handle_event(&mut state, Event::Search("rain".into())).unwrap();
        let (_, actions) = handle_event(&mut state, Event::ClearSearch).unwrap();

        let request = fetch_of(&actions);
        assert_eq!(request.query, "");
        assert_eq!(request.orientation, Orientation::Portrait);
        assert!(actions.contains(&Action::ScrollToTop));
        assert!(!state.search_mode);
    }

    #[test]
    fn double_toggle_restores_membership_and_persists_each_time() {
        let mut state = AppState::new([PhotoId(3)].into());
        let (_, first) = handle_event(&mut state, Event::ToggleFavorite(PhotoId(5))).unwrap();
        let (_, second) = handle_event(&mut state, Event::ToggleFavorite(PhotoId(5))).unwrap();

        assert_eq!(state.favorites, BTreeSet::from([PhotoId(3)]));
        assert_eq!(first, vec![Action::PersistFavorites([PhotoId(3), PhotoId(5)].into())]);
        assert_eq!(second, vec![Action::PersistFavorites([PhotoId(3)].into())]);
    }

    #[test]
    fn modals_are_independent() {
        let mut state = AppState::new(BTreeSet::new());
        state.photos = vec![photo(1), photo(2)];

        handle_event(&mut state, Event::OpenPreview(PhotoId(1))).unwrap();
        handle_event(&mut state, Event::OpenDownload(PhotoId(2))).unwrap();
        assert_eq!(state.preview.as_ref().map(|p| p.id), Some(PhotoId(1)));
        assert_eq!(state.download.as_ref().map(|p| p.id), Some(PhotoId(2)));

        handle_event(&mut state, Event::CloseDownload).unwrap();
        assert!(state.download.is_none());
        assert_eq!(state.preview.as_ref().map(|p| p.id), Some(PhotoId(1)));
    }

    #[test]
    fn close_dismisses_download_sheet_before_preview() {
        let mut state = AppState::new(BTreeSet::new());
        state.photos = vec![photo(1), photo(2)];
        handle_event(&mut state, Event::OpenPreview(PhotoId(1))).unwrap();
        handle_event(&mut state, Event::OpenDownload(PhotoId(2))).unwrap();

        let (render, _) = handle_event(&mut state, Event::Close).unwrap();
        assert!(render);
        assert!(state.download.is_none());
        assert_eq!(state.preview.as_ref().map(|p| p.id), Some(PhotoId(1)));

        handle_event(&mut state, Event::Close).unwrap();
        assert!(state.preview.is_none());

        let (render, _) = handle_event(&mut state, Event::Close).unwrap();
        assert!(!render);
    }

    #[test]
    fn unknown_photo_is_ignored() {
        let mut state = AppState::new(BTreeSet::new());
        let (render, actions) = handle_event(&mut state, Event::OpenPreview(PhotoId(404))).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.preview.is_none());
    }

    #[test]
    fn variant_download_shows_popup_then_downloads() {
        let mut state = AppState::new(BTreeSet::new());
        state.photos = vec![photo(8)];
        handle_event(&mut state, Event::OpenDownload(PhotoId(8))).unwrap();

        let (_, actions) = handle_event(&mut state, Event::DownloadVariant(Variant::Large2x)).unwrap();
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            &actions[0],
            Action::Notify { kind: NotificationKind::DownloadPopup, message } if message.contains("Large 2x")
        ));
        let Action::Download(request) = &actions[1] else {
            panic!("expected download action");
        };
        assert_eq!(request.file_name, "lumina-wallpaper-8-large-2x.jpg");
        assert_eq!(request.url, "https://img/8-l2.jpg");

        let (render, _) = handle_event(
            &mut state,
            Event::DownloadFinished {
                request: request.clone(),
                outcome: Ok(PathBuf::from("/tmp/x.jpg")),
            },
        )
        .unwrap();
        assert!(render);
        assert!(state.download.is_none());
    }

    #[test]
    fn failed_download_keeps_sheet_open() {
        let mut state = AppState::new(BTreeSet::new());
        state.photos = vec![photo(8)];
        handle_event(&mut state, Event::OpenDownload(PhotoId(8))).unwrap();
        let (_, actions) = handle_event(&mut state, Event::DownloadRecommended).unwrap();
        let Some(Action::Download(request)) = actions.into_iter().nth(1) else {
            panic!("expected download action");
        };

        handle_event(
            &mut state,
            Event::DownloadFinished {
                request,
                outcome: Err("connection reset".into()),
            },
        )
        .unwrap();
        assert!(state.download.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn original_download_needs_no_popup() {
        let mut state = AppState::new(BTreeSet::new());
        state.photos = vec![photo(8)];
        let (_, actions) = handle_event(&mut state, Event::DownloadOriginal(PhotoId(8))).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::Download(DownloadRequest { variant: None, delay: None, .. })]
        ));
    }

    #[test]
    fn share_uses_preview_by_default() {
        let mut state = AppState::new(BTreeSet::new());
        let (_, actions) = handle_event(&mut state, Event::Share(None)).unwrap();
        assert!(actions.is_empty());

        state.photos = vec![photo(6)];
        handle_event(&mut state, Event::OpenPreview(PhotoId(6))).unwrap();
        let (_, actions) = handle_event(&mut state, Event::Share(None)).unwrap();
        assert!(matches!(
            &actions[0],
            Action::Share(payload) if payload.text == "Check out this amazing wallpaper by P6"
                && payload.url == "https://www.pexels.com/photo/6/"
        ));
    }

    #[test]
    fn screen_change_updates_recommendation_input() {
        let mut state = AppState::new(BTreeSet::new());
        handle_event(
            &mut state,
            Event::ScreenChanged {
                width: 390,
                height: 844,
                pixel_ratio: 3.0,
            },
        )
        .unwrap();
        assert_eq!(state.screen.physical_pixels(), (1170, 2532));
        assert_eq!(state.screen.device_type, crate::domain::DeviceType::Mobile);
    }
}
