//! Lumina: a terminal wallpaper browser backed by the Pexels photo API.
//!
//! Lumina lets a user:
//! - Browse curated photos, search by text, or pick a curated category
//! - Filter listings by orientation and page through results
//! - Keep a persistent set of favorite photos
//! - Preview a photo and download the resolution that best fits their screen
//! - Share a photo link to the clipboard or a link file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs, input)                │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State controller
//! │  - Event handling, request tokens                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← Side effects
//! └─────────────────────────────────────────────────────┘
//!     │            │             │            │
//! ┌────────┐  ┌─────────┐  ┌──────────┐  ┌────────┐
//! │ source │  │ storage │  │ download │  │ share  │
//! │ HTTP   │  │ JSON    │  │ tiers    │  │ cascade│
//! └────────┘  └─────────┘  └──────────┘  └────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, infrastructure, notify, ui, observability  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every state change goes through [`handle_event`]. It mutates [`AppState`]
//! and returns [`Action`]s; the [`runtime::Runtime`] executes them and turns
//! task completions back into [`Event`]s. Each listing fetch carries a token,
//! and only the completion of the most recently issued fetch is applied.
//!
//! # Configuration
//!
//! Settings are read from `~/.config/lumina/config.toml` and overridden by
//! `PEXELS_API_KEY` and `LUMINA_*` environment variables:
//!
//! ```toml
//! api_key = "your-pexels-key"
//! download_dir = "~/Pictures/Wallpapers"
//! trace_level = "lumina=debug"
//! screen_width = 2560
//! screen_height = 1440
//! pixel_ratio = 2.0
//! ```
//!
//! # Example
//!
//! ```rust
//! use lumina::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(Default::default());
//! let (render, actions) = handle_event(&mut state, Event::Search("forest".into()))?;
//! assert!(render && state.loading);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), lumina::LuminaError>(())
//! ```

pub mod app;
pub mod domain;
pub mod download;
pub mod infrastructure;
pub mod input;
pub mod notify;
pub mod observability;
pub mod runtime;
pub mod share;
pub mod source;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, ActiveQuery, AppState, Event, ViewMode};
pub use domain::{LuminaError, Photo, PhotoId, Result, ScreenInfo};
pub use runtime::Runtime;

use share::ShareCascade;
use source::{PexelsClient, PhotoSource};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storage::{load_favorites, FavoritesStore, JsonFavoritesStore, MemoryFavoritesStore};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pexels API key sent in the `Authorization` header.
    pub api_key: String,

    /// Photo API base URL. Default: [`source::DEFAULT_BASE_URL`]
    pub api_base_url: String,

    /// Favorites slot, shared-link file and traces live here.
    pub data_dir: PathBuf,

    /// Wallpapers are saved here.
    pub download_dir: PathBuf,

    /// `EnvFilter` directive for spans, e.g. `info` or `lumina=debug`.
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// Screen descriptor used for resolution recommendations.
    pub screen: ScreenInfo,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: source::DEFAULT_BASE_URL.to_string(),
            data_dir: infrastructure::get_data_dir(),
            download_dir: infrastructure::get_download_dir(),
            trace_level: None,
            screen: ScreenInfo::default(),
        }
    }
}

impl Config {
    /// Builds a configuration from a flat settings map.
    ///
    /// Missing or unparsable values fall back to their defaults. Paths may
    /// start with `~`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lumina::Config;
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "secret".to_string());
    /// map.insert("screen_width".to_string(), "390".to_string());
    /// map.insert("pixel_ratio".to_string(), "3".to_string());
    ///
    /// let config = Config::from_settings(&map);
    /// assert_eq!(config.api_key, "secret");
    /// assert_eq!(config.screen.physical_pixels(), (1170, 3240));
    /// ```
    #[must_use]
    pub fn from_settings(settings: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            settings
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str| text(key).and_then(|v| v.parse::<u32>().ok());

        let screen = ScreenInfo::new(
            number("screen_width").unwrap_or(defaults.screen.width),
            number("screen_height").unwrap_or(defaults.screen.height),
            text("pixel_ratio")
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(defaults.screen.pixel_ratio),
        );

        Self {
            api_key: text("api_key").map_or(defaults.api_key, String::from),
            api_base_url: text("api_base_url").map_or(defaults.api_base_url, String::from),
            data_dir: text("data_dir").map_or(defaults.data_dir, infrastructure::expand_tilde),
            download_dir: text("download_dir")
                .map_or(defaults.download_dir, infrastructure::expand_tilde),
            trace_level: text("trace_level").map(String::from),
            screen,
        }
    }

    /// Loads the configuration file (if any) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`LuminaError::Config`] if the file exists but is not valid TOML.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let settings = load_settings(file, std::env::vars())?;
        Ok(Self::from_settings(&settings))
    }
}

/// Merges the TOML file and environment overrides into a flat settings map.
///
/// Precedence, lowest first: the file, `PEXELS_API_KEY`, `LUMINA_<KEY>`.
/// Nested tables and arrays in the file are ignored.
///
/// # Errors
///
/// Returns [`LuminaError::Config`] if the file cannot be read or parsed. A
/// missing file is not an error.
pub fn load_settings(
    file: Option<&Path>,
    env: impl IntoIterator<Item = (String, String)>,
) -> Result<BTreeMap<String, String>> {
    let mut settings = BTreeMap::new();

    if let Some(path) = file.filter(|p| p.exists()) {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LuminaError::Config(format!("{}: {e}", path.display())))?;
        let table: toml::Table = contents
            .parse()
            .map_err(|e| LuminaError::Config(format!("{}: {e}", path.display())))?;

        for (key, value) in table {
            let flat = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    tracing::debug!(key = %key, kind = other.type_str(), "ignoring setting");
                    continue;
                }
            };
            settings.insert(key, flat);
        }
    }

    let mut overrides: Vec<(String, String)> = vec![];
    for (name, value) in env {
        if name == "PEXELS_API_KEY" {
            settings.insert("api_key".to_string(), value);
        } else if let Some(key) = name.strip_prefix("LUMINA_") {
            overrides.push((key.to_lowercase(), value));
        }
    }
    settings.extend(overrides);

    Ok(settings)
}

/// Builds the initial state and runtime against the Pexels API.
#[must_use]
pub fn initialize(config: &Config) -> (AppState, Runtime) {
    let source = Arc::new(PexelsClient::new(
        config.api_key.clone(),
        config.api_base_url.clone(),
    ));
    initialize_with_source(config, source)
}

/// Builds the initial state and runtime around an arbitrary photo source.
///
/// Favorites are read once from the JSON slot in `config.data_dir`. If that
/// directory is unusable the session keeps favorites in memory only.
#[must_use]
pub fn initialize_with_source(config: &Config, source: Arc<dyn PhotoSource>) -> (AppState, Runtime) {
    tracing::debug!(data_dir = ?config.data_dir, "initializing lumina");

    let store: Box<dyn FavoritesStore> = match JsonFavoritesStore::in_dir(&config.data_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "favorites slot unavailable, keeping favorites in memory");
            Box::new(MemoryFavoritesStore::new())
        }
    };

    let mut state = AppState::new(load_favorites(store.as_ref()));
    state.screen = config.screen;

    let runtime = Runtime::new(
        source,
        store,
        config.download_dir.clone(),
        ShareCascade::with_defaults(&config.data_dir),
    );

    (state, runtime)
}
