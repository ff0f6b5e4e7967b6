//! Unified error system for the employee directory
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes, each mapped to one HTTP status
//! - [`AppError`]: Error type carrying a code and a client-facing message
//! - [`ErrorBody`]: The JSON body every failed request answers with
//!
//! # Status mapping
//!
//! | Code | Status |
//! |------|--------|
//! | ValidationFailed / InvalidRequest | 400 |
//! | InvalidCredentials | 401 |
//! | NotFound / EmployeeNotFound | 404 |
//! | DatabaseError | 500 |
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("All fields are required");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.http_status().as_u16(), 400);
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
