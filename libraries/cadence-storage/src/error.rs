/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error reported by a key-value backend
    #[error(transparent)]
    Core(#[from] cadence_core::CoreError),
}

impl From<StorageError> for cadence_core::CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Core(inner) => inner,
            other => cadence_core::CoreError::store(other.to_string()),
        }
    }
}
