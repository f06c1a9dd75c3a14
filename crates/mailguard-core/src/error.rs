//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in local storage and credential operations.
///
/// Backend API failures use [`crate::api::ApiError`] instead; this type
/// covers the client's own durable state.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading or writing local state.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure for persisted state.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Keyring access failure.
    #[error("credential error: {0}")]
    Credential(#[from] keyring::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
