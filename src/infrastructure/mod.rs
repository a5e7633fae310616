//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{expand_tilde, get_config_file, get_data_dir, get_download_dir};
