//! Action executor.
//!
//! The runtime performs the side effects requested by
//! [`handle_event`](crate::app::handle_event) and feeds their completions back
//! as events. It plays the part of a background worker for a single-threaded,
//! event-driven front end:
//!
//! - Listing fetches and downloads are spawned as tokio tasks. Each task sends
//!   exactly one completion event over an unbounded channel.
//! - Favorites are written to the store inline, right after the mutation.
//! - Sharing runs inline through the share cascade.
//! - Scroll requests and notifications are held for the view layer.
//!
//! Failures of downloads, shares and persistence are logged and never turn
//! into application state.
//!
//! # Example
//!
//! ```no_run
//! use lumina::app::{AppState, Event};
//! use lumina::runtime::Runtime;
//! use lumina::share::ShareCascade;
//! use lumina::source::PexelsClient;
//! use lumina::storage::MemoryFavoritesStore;
//! use std::sync::Arc;
//!
//! # async fn run() -> lumina::Result<()> {
//! let source = Arc::new(PexelsClient::new("api-key", lumina::source::DEFAULT_BASE_URL));
//! let mut runtime = Runtime::new(
//!     source,
//!     Box::new(MemoryFavoritesStore::new()),
//!     "/tmp/wallpapers".into(),
//!     ShareCascade::default(),
//! );
//! let mut state = AppState::new(Default::default());
//! runtime.dispatch(&mut state, Event::Init)?;
//! runtime.settle(&mut state).await?;
//! # Ok(())
//! # }
//! ```

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::{PhotoId, Result};
use crate::download::{DownloadRequest, Downloader};
use crate::notify::{NotificationKind, NotificationQueue};
use crate::share::{ShareCascade, ShareMethod, SharePayload};
use crate::source::{FetchRequest, PhotoSource};
use crate::storage::FavoritesStore;
use chrono::Utc;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Executes actions and collects task completions.
pub struct Runtime {
    source: Arc<dyn PhotoSource>,
    downloader: Downloader,
    store: Box<dyn FavoritesStore>,
    share: ShareCascade,
    notifications: NotificationQueue,
    scroll_to_top: bool,
    quit: bool,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    /// Spawned tasks whose completion event has not been received yet.
    in_flight: usize,
}

impl Runtime {
    #[must_use]
    pub fn new(
        source: Arc<dyn PhotoSource>,
        store: Box<dyn FavoritesStore>,
        download_dir: PathBuf,
        share: ShareCascade,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            downloader: Downloader::new(Arc::clone(&source), download_dir),
            source,
            store,
            share,
            notifications: NotificationQueue::new(),
            scroll_to_top: false,
            quit: false,
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }

    /// Applies an event to `state` and executes the resulting actions.
    ///
    /// Returns whether the view should be re-rendered.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, state: &mut AppState, event: Event) -> Result<bool> {
        let (render, actions) = handle_event(state, event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(render)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::FetchPage(request) => self.spawn_fetch(request),
            Action::PersistFavorites(favorites) => self.persist_favorites(&favorites),
            Action::ScrollToTop => self.scroll_to_top = true,
            Action::Download(request) => self.spawn_download(request),
            Action::Notify { kind, message } => {
                self.notifications.push(kind, message, Utc::now());
            }
            Action::Share(payload) => self.share(&payload),
            Action::Quit => self.quit = true,
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        let span = tracing::debug_span!("fetch_page", token = request.token, page = request.page);

        self.in_flight += 1;
        tokio::spawn(
            async move {
                let outcome = source.fetch_page(&request).await.map_err(|e| {
                    tracing::warn!(error = %e, "photo listing fetch failed");
                    e.to_string()
                });
                if tx.send(Event::PageLoaded { request, outcome }).is_err() {
                    tracing::debug!("runtime gone, dropping page");
                }
            }
            .instrument(span),
        );
    }

    fn spawn_download(&mut self, request: DownloadRequest) {
        let downloader = self.downloader.clone();
        let tx = self.events_tx.clone();
        let span = tracing::debug_span!(
            "download",
            photo_id = %request.photo_id,
            file_name = %request.file_name
        );

        self.in_flight += 1;
        tokio::spawn(
            async move {
                let outcome = downloader.download(&request).await.map_err(|e| e.to_string());
                if tx.send(Event::DownloadFinished { request, outcome }).is_err() {
                    tracing::debug!("runtime gone, dropping download result");
                }
            }
            .instrument(span),
        );
    }

    fn persist_favorites(&mut self, favorites: &BTreeSet<PhotoId>) {
        match self.store.save(favorites) {
            Ok(()) => tracing::debug!(count = favorites.len(), "favorites persisted"),
            Err(e) => tracing::warn!(error = %e, "failed to persist favorites"),
        }
    }

    fn share(&mut self, payload: &SharePayload) {
        match self.share.share(payload) {
            Ok(ShareMethod::Clipboard) => {
                self.notifications.push(NotificationKind::SharePopup, "", Utc::now());
            }
            Ok(ShareMethod::LinkFile(path)) => {
                let message = format!("📋 Link saved to {}", path.display());
                self.notifications.push(NotificationKind::ShareSuccess, message, Utc::now());
            }
            Err(e) => tracing::warn!(error = %e, "share failed"),
        }
    }

    /// Waits for the next task completion.
    ///
    /// Pending forever while nothing is in flight; meant to be raced against
    /// user input.
    pub async fn next_event(&mut self) -> Option<Event> {
        let event = self.events_rx.recv().await;
        if event.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        event
    }

    /// Dispatches completions until no spawned task is outstanding.
    ///
    /// Returns whether any of them asked for a re-render.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn settle(&mut self, state: &mut AppState) -> Result<bool> {
        let mut render = false;
        while self.in_flight > 0 {
            let Some(event) = self.next_event().await else {
                break;
            };
            render |= self.dispatch(state, event)?;
        }
        Ok(render)
    }

    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Returns and clears a pending scroll-to-top request.
    pub fn take_scroll_to_top(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn download_dir(&self) -> &std::path::Path {
        self.downloader.dir()
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("downloader", &self.downloader)
            .field("share", &self.share)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
