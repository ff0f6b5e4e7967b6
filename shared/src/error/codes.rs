//! Error codes and their HTTP status mapping

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standardized error codes
///
/// The directory has a deliberately small taxonomy: a request is either
/// malformed, unauthenticated, aimed at a missing row, or failed inside
/// the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required field missing
    ValidationFailed,
    /// Body could not be parsed
    InvalidRequest,
    /// Username/password pair not in the credential set
    InvalidCredentials,
    /// Generic resource not found
    NotFound,
    /// Zero rows affected by an employee update/delete
    EmployeeNotFound,
    /// SQLite reported an error
    DatabaseError,
}

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "All fields are required",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidCredentials => "Invalid username or password",
            Self::NotFound => "Resource not found",
            Self::EmployeeNotFound => "Employee not found",
            Self::DatabaseError => "Database error",
        }
    }

    /// Whether this code represents a server-side failure
    pub fn is_server_error(&self) -> bool {
        self.http_status().is_server_error()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
