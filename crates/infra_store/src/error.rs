//! Storage error types
//!
//! Failures writing the durable medium. Read failures never surface as
//! errors; adapters treat an unreadable medium as an empty collection.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while persisting a collection
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for PortError {
    fn from(err: StoreError) -> Self {
        PortError::storage("Failed to persist collection", err)
    }
}
