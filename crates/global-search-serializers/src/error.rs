//! Serializer error types.

use global_search_core::RecordFamily;
use thiserror::Error;

/// Errors that can occur while serializing records.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// An error propagated from the core record model.
    #[error("record error: {0}")]
    Core(#[from] global_search_core::Error),

    /// Rendering or parsing JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream schema family is not installed in this deployment.
    #[error("no serializer available for {family} records")]
    Unsupported { family: RecordFamily },

    /// A process-wide registry has already been installed.
    #[error("serializer registry already installed")]
    RegistryAlreadyInstalled,
}

impl SerializeError {
    /// Returns `true` when the error comes from asking an unavailable
    /// adapter to serialize.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Convenience alias for serializer results.
pub type SerializeResult<T> = std::result::Result<T, SerializeError>;
