//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
///
/// These never escape the [`cadence_core::Catalog`] implementation; they are
/// logged there and turned into empty results with `success = false`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned a non-success HTTP status
    #[error("Catalog error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Invalid service base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse service response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Service is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
