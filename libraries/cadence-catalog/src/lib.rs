//! Cadence Catalog Client
//!
//! HTTP client for the remote music catalog service.
//!
//! # Features
//!
//! - **Search**: songs and playlists for a free-text query
//! - **Curated collections**: themed lists assembled from several searches
//!   with fallbacks, de-duplication and caps
//! - **Lookups**: playlists and songs by catalog id
//! - **Normalization**: heterogeneous response shapes become strict
//!   [`cadence_core::Track`] values; unplayable entries are dropped
//!
//! # Example
//!
//! ```ignore
//! use cadence_catalog::{CatalogClient, CatalogConfig};
//! use cadence_core::{Catalog, CuratedCollection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!
//!     let trending = client.curated(CuratedCollection::Trending).await;
//!     println!("{} trending songs", trending.tracks.len());
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod curated;
mod error;
mod parse;

pub use client::CatalogClient;
pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use curated::{merge_unique, plan_for, FallbackRule, FetchPlan, SongQuery};
pub use error::{CatalogError, Result};
