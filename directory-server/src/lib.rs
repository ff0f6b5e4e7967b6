//! Employee directory server
//!
//! REST backend over a single SQLite table:
//!
//! - **Store** (`db`): SQLite pool, idempotent table setup, employee repository
//! - **Login** (`auth`): fixed credential set, exact-match check, nothing issued
//! - **HTTP API** (`api`): `/login`, `/employees`, `/health`
//!
//! # Module structure
//!
//! ```text
//! directory-server/src/
//! ├── core/          # config, state, server, errors
//! ├── auth/          # credential set
//! ├── api/           # routers and handlers
//! ├── db/            # pool, repository, maintenance
//! ├── middleware/    # request logging
//! └── utils/         # logger, error re-exports
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export public types
pub use auth::{Credential, CredentialStore};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  ___  _            _
 |   \(_)_ _ ___ __| |_ ___ _ _ _  _
 | |) | | '_/ -_) _|  _/ _ \ '_| || |
 |___/|_|_| \___\__|\__\___/_|  \_, |
                                |__/
    "#
    );
}
