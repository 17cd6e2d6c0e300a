use thiserror::Error;

use crate::config::MIN_REVIEW_LEN;

/// Local input errors. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a review")]
    Empty,
    #[error("Review must be at least {MIN_REVIEW_LEN} characters")]
    TooShort,
}

/// Failures of the two Analysis Service calls. Everything collapses to a
/// single user-visible message at the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Parse(String),
    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    /// Message shown to the user. Server messages come from the response
    /// body when the service supplied one; everything else gets a generic
    /// retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Timeout => "The request timed out. Please try again.".to_string(),
            ApiError::Network(_) | ApiError::Parse(_) => {
                "Failed to analyze review. Please try again.".to_string()
            }
        }
    }
}
