use sqlx::SqlitePool;

use crate::auth::CredentialStore;
use crate::core::{Config, Result};
use crate::db::DbService;

/// Server state - shared by every handler
///
/// Cloning is cheap: the pool and the credential set are reference counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | pool | SqlitePool | the store |
/// | credentials | CredentialStore | fixed login set |
///
/// The pool is opened by [`ServerState::initialize`] and closed by
/// [`ServerState::shutdown`].
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub credentials: CredentialStore,
}

impl ServerState {
    /// Build state from already-opened parts
    ///
    /// Usually [`initialize()`](Self::initialize) is what you want; tests use
    /// this with an in-memory database.
    pub fn new(config: Config, db: DbService, credentials: CredentialStore) -> Self {
        Self {
            config,
            pool: db.pool,
            credentials,
        }
    }

    /// Open the database and load the credential set
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(
            &config.database_path,
            config.db_max_connections,
            config.busy_timeout(),
        )
        .await?;

        let credentials = match &config.credentials {
            Some(list) => CredentialStore::new(list.clone()),
            None => CredentialStore::with_defaults(),
        };
        tracing::info!(count = credentials.len(), "Login credentials loaded");

        Ok(Self::new(config.clone(), db, credentials))
    }

    /// Close the connection pool
    pub async fn shutdown(&self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }
}
