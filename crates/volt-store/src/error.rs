//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or parse the snapshot file.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to read or write the snapshot file.
    #[error("Store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a document.
    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),

    /// Failed to deserialize a stored document.
    #[error("Deserialization error: {0}")]
    Deserialize(serde_json::Error),
}
