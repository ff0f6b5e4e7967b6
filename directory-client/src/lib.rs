//! Directory Client - HTTP client for the employee directory server
//!
//! Wraps the five endpoints, keeps a client-only logged-in flag, and offers
//! an [`EmployeeDirectory`] view that refetches after every change and
//! searches locally.

pub mod config;
pub mod directory;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use directory::EmployeeDirectory;
pub use error::{ClientError, ClientResult};
pub use http::DirectoryClient;

// Re-export shared types for convenience
pub use shared::models::{DeleteAck, Employee, EmployeeInput, LoginResponse, LoginUser};
