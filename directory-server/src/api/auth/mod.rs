//! Login API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::LoginError;

/// Login router
pub fn router() -> Router<ServerState> {
    Router::new().route("/login", post(handler::login))
}
