//! Shared types for the employee directory
//!
//! Wire models, the unified error type and the client-side search filter.
//! Used by both `directory-server` and `directory-client`.

pub mod error;
pub mod models;
pub mod search;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use http;
pub use models::{DeleteAck, Employee, EmployeeFields, EmployeeInput, LoginRequest, LoginResponse, LoginUser};
pub use serde::{Deserialize, Serialize};
