//! Error types for image resolution.

use thiserror::Error;

/// Errors that can occur while resolving an image.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The resolver could not be reached or reported a failure
    #[error("{message}")]
    Transport {
        /// Message reported by the resolver client
        message: String,
    },

    /// The resolver answered with a payload this client cannot use
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what was wrong
        message: String,
    },

    /// Response JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image payload is not valid base64
    #[error("Invalid image data: {0}")]
    ImageData(#[from] base64::DecodeError),
}

impl ResolveError {
    /// Create a transport error with a message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an invalid response error with a message.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
