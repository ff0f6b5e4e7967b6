//! Client error types
//!
//! Three cases matter to a caller: the server answered with an error status
//! (show its `error` text), no answer arrived at all, or something else went
//! wrong.

use reqwest::StatusCode;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server responded with an error status
    #[error("Server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    /// No response received
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Response arrived but could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be built or the request could not be formed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            ClientError::Internal(err.to_string())
        } else {
            ClientError::Network(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}

impl ClientError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Text suitable for showing to a user
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Server { message, .. } => message.clone(),
            ClientError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
