//! Error types for Todoist API calls

use thiserror::Error;

/// Errors that can occur when talking to the Todoist service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-success status
    #[error("todoist request failed ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, usually a short explanation
        message: String,
    },

    /// The request never got a response (DNS, TLS, connection reset, ...)
    #[error("todoist request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("failed to parse todoist response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

/// Result type alias for Todoist API calls
pub type ApiResult<T> = Result<T, ApiError>;
