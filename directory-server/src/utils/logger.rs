//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise `level` applies to this crate, its
//! binaries and tower_http.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with stdout output
pub fn init_logger(level: &str) {
    init_logger_with_file(level, None);
}

/// Initialize the logger, writing to a daily rolling file under `log_dir`
///
/// The directory is created when missing. If that fails, logs go to stdout
/// and a warning says so.
pub fn init_logger_with_file(level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "directory_server={level},directory_admin={level},tower_http={level},security={level}"
        ))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        match ensure_log_dir(log_path) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(log_path, "directory-server");
                subscriber.with_ansi(false).with_writer(file_appender).init();
            }
            Err(e) => {
                subscriber.init();
                tracing::warn!(log_dir = %dir, error = %e, "Cannot use log directory, logging to stdout");
            }
        }
        return;
    }

    subscriber.init();
}

/// Create the log directory if it is missing
fn ensure_log_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)?;
    if path.is_dir() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            "not a directory",
        ))
    }
}
