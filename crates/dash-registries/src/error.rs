//! Error types for registry fetches

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur while fetching registries from the host
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The host rejected or failed the request
    #[error("{command} failed: {message}")]
    Request { command: String, message: String },

    /// The host answered with a payload of the wrong shape
    #[error("failed to decode {command} response: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    pub fn request(command: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Request {
            command: command.into(),
            message: message.into(),
        }
    }
}
