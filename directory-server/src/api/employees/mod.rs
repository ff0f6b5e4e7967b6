//! Employee API Module
//!
//! | Path | Method | Result |
//! |------|--------|--------|
//! | /employees | GET | all rows, by id |
//! | /employees | POST | created row |
//! | /employees/{id} | PUT | updated row |
//! | /employees/{id} | DELETE | `{ "success": true }` |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employees", get(handler::list).post(handler::create))
        .route("/employees/{id}", put(handler::update).delete(handler::delete))
}
