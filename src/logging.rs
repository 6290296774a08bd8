//! Tracing setup
//!
//! The wizard draws on the alternate screen, so nothing may be written to
//! stdout or stderr while it runs. Log records go to a file instead.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{BoilerplateError, Result};

pub const LOG_FILE_NAME: &str = "boilerplate-cli.log";

/// Directory used when `--log-dir` is not given
pub fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "boilerplate-cli")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
}

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered records are lost.
pub fn init(directive: &str, log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the command line level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .map_err(|e| BoilerplateError::Logging(e.to_string()))?;

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| BoilerplateError::Logging(e.to_string()))?;

    tracing::debug!(log_dir = %log_dir.display(), "Tracing initialised");
    Ok(guard)
}
