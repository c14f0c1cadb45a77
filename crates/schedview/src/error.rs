//! Error types for the scheduler client.

use thiserror::Error;

/// Errors that can occur while talking to the scheduler service.
#[derive(Debug, Error, Clone)]
pub enum SchedulerError {
    /// Network/HTTP request failed before a response arrived
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server answered with a non-success status
    #[error("Unexpected response from {endpoint}: status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// Response body could not be decoded as the expected JSON shape
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// URL parsing/construction failed
    #[error("URL error: {message}")]
    Url { message: String },
}

impl SchedulerError {
    /// Returns true if this error is potentially transient and retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SchedulerError::Network { .. } | SchedulerError::UnexpectedStatus { .. }
        )
    }
}

impl From<reqwest::Error> for SchedulerError {
    fn from(err: reqwest::Error) -> Self {
        SchedulerError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for SchedulerError {
    fn from(err: url::ParseError) -> Self {
        SchedulerError::Url {
            message: err.to_string(),
        }
    }
}
