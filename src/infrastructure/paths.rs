//! Platform directory resolution.
//!
//! Lumina keeps its favorites slot, shared-link file and traces in a per-user
//! data directory, saves wallpapers to the user's download directory, and reads
//! an optional TOML configuration file. All three follow the platform
//! conventions reported by the `dirs` crate, with local fallbacks when a
//! platform directory is unknown.

use std::path::PathBuf;

const APP_DIR: &str = "lumina";

/// Returns the data directory for Lumina storage.
///
/// Typically `~/.local/share/lumina` on Linux and
/// `~/Library/Application Support/lumina` on macOS. Falls back to `./.lumina`.
///
/// # Examples
///
/// ```
/// use lumina::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("lumina") || get_data_dir().ends_with(".lumina"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".lumina"), |dir| dir.join(APP_DIR))
}

/// Returns the directory wallpapers are saved to.
///
/// The platform download directory, else the home directory, else the current
/// directory.
#[must_use]
pub fn get_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default configuration file path, e.g. `~/.config/lumina/config.toml`.
#[must_use]
pub fn get_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and all paths when the home directory is unknown,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use lumina::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
