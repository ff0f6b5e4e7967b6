use shared::AppError;
use thiserror::Error;

/// Startup and serve errors
///
/// Request-level failures use [`AppError`]; this type only covers what can
/// stop the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AppError> for ServerError {
    fn from(e: AppError) -> Self {
        ServerError::Database(e.message)
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
