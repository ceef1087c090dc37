use crate::model::ErrorCode;
use std::fmt;

/// Fallback text when a failure envelope carries no message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "API request failed";

#[derive(Clone, Debug)]
pub enum ApiError {
    Config(String),
    Network(String),
    Timeout(String),
    RequestFailed {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },
    Parse(String),
}

impl ApiError {
    /// True when the backend reported a missing record.
    ///
    /// The structured `code` wins; without one, a 404 status decides.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            ApiError::RequestFailed {
                code: Some(code), ..
            } => *code == ErrorCode::NotFound,
            ApiError::RequestFailed {
                status, code: None, ..
            } => *status == 404,
            _ => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(message) => write!(formatter, "Config error: {message}"),
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ApiError::RequestFailed {
                status, message, ..
            } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}
