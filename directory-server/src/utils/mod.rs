//! Utilities
//!
//! - [`AppError`] / [`AppResult`] - handler error types (from shared::error)
//! - [`logger`] - tracing setup

pub mod logger;

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCode};
