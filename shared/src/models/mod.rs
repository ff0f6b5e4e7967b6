//! Data models
//!
//! Shared between directory-server and directory-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Employee IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod auth;
pub mod employee;

// Re-exports
pub use auth::*;
pub use employee::*;
