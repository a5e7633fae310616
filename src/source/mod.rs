//! Remote Photo Source: the paginated curated/search listing API.
//!
//! # Modules
//!
//! - `models`: Listing request and response types
//! - `client`: [`PhotoSource`] trait and the Pexels HTTP client

pub mod client;
pub mod models;

pub use client::{PexelsClient, PhotoSource, DEFAULT_BASE_URL};
pub use models::{Endpoint, FetchRequest, PhotosPage, PAGE_SIZE};
