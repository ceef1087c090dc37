//! Wire types shared by the frontend client and the backend API: the user
//! record, the response envelopes and the structured failure code.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A user record as served by the backend.
#[derive(ToSchema, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Success envelope: `{ "success": true, "data": ..., "count": n }`.
///
/// Only `data` is read; `success` and `count` are informational.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Failure envelope: `{ "success": false, "message": ..., "code": ... }`.
///
/// Both `message` and `code` are optional on the wire.
#[derive(ToSchema, Debug, Default, Serialize, Deserialize)]
pub struct FailureEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub code: Option<ErrorCode>,
}

impl FailureEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            code: Some(code),
        }
    }
}

/// Machine-readable failure code carried in the failure envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// The requested record does not exist.
    NotFound,
    /// No route matches the requested path.
    RouteNotFound,
    Internal,
    /// A code this client does not know about.
    Other(String),
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotFound => "not_found",
            Self::RouteNotFound => "route_not_found",
            Self::Internal => "internal",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.trim() {
            "not_found" => Self::NotFound,
            "route_not_found" => Self::RouteNotFound,
            "internal" => Self::Internal,
            _ => Self::Other(code),
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A user ID typed into the search box, validated before any request is made.
///
/// The trimmed text is kept verbatim so the request path and the
/// "not found" message show exactly what the user entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(String);

/// Why a search input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotPositive,
}

impl InputError {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Please enter a User ID",
            Self::NotPositive => "Please enter a valid User ID (positive number)",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for InputError {}

impl UserId {
    /// Parses raw search input: trims it, then requires ASCII digits with at
    /// least one non-zero digit. There is no upper bound; an ID larger than any
    /// stored one is the backend's "not found", not an input error.
    ///
    /// # Errors
    /// Returns [`InputError::Empty`] for blank input and [`InputError::NotPositive`] otherwise.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }

        if is_digits(trimmed) && trimmed.bytes().any(|b| b != b'0') {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InputError::NotPositive)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// True for a non-empty string of ASCII digits; signs and whitespace are rejected.
#[must_use]
pub fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}
