//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`auth`] - `POST /login`
//! - [`employees`] - employee CRUD
//!
//! No route requires authentication.

pub mod extract;

pub mod auth;
pub mod employees;
pub mod health;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::ServerState;
use crate::middleware::logging_middleware;

// Re-export common types for handlers
pub use crate::utils::AppResult;
pub use extract::JsonBody;

/// All routes, state not yet applied
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(employees::router())
}

/// Routes with logging, tracing and permissive CORS, ready to serve
pub fn build_app(state: ServerState) -> Router {
    router()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
