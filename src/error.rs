use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the application before or while the UI runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
