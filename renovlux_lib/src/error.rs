//! Error types for the library layer.

use std::fmt;

use crate::storage::StorageError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding local storage, serialization, and input validation failures.
#[derive(Debug)]
pub enum LibError {
    /// An error from the underlying API client.
    Api(renovlux_api::Error),
    /// The local key-value store failed.
    Storage(StorageError),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation. Never reaches the network.
    InvalidInput(String),
}

impl LibError {
    /// The wrapped API error, if this failure came from the backend.
    pub fn api(&self) -> Option<&renovlux_api::Error> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for LibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for LibError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Storage(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<renovlux_api::Error> for LibError {
    fn from(e: renovlux_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<StorageError> for LibError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<serde_json::Error> for LibError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
