//! Tracing subscriber setup for the binary

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::io::configuration::DEFAULT_LOG_FILTER;
use crate::io::error::{GameError, Result};

/// Filter from `RUST_LOG`, falling back to `DEFAULT_LOG_FILTER`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber
///
/// Events go to `log_file` when given so they do not tear the alternate
/// screen; otherwise to stderr. A subscriber that is already installed is
/// left in place.
///
/// # Errors
///
/// Returns an error if the log file cannot be created
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_line_number(true)
        .compact();

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| GameError::FileSystem {
                path: path.to_path_buf(),
                operation: "create log file",
                source: e,
            })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(error) = installed {
        tracing::debug!(%error, "tracing subscriber already installed, keeping it");
    }

    Ok(())
}
