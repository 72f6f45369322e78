//! Application level errors
//!
//! Everything that can go wrong between reading the command line and
//! joining the last worker ends up as an [`AppError`].

use crate::core::error_handling::ContextualError;
use crate::workers::WorkerError;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the invocation, detected before any worker starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("the specified configuration file does not exist: {}", path.display())]
    ConfigFileMissing { path: PathBuf },

    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse configuration file {}: {source}", path.display())]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot open resize log {}: {source}", path.display())]
    ResizeLogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot start logging: {message}")]
    Logging { message: String },
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Top level error returned by the application entry points
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation failed: {0}")]
    Simulation(#[from] WorkerError),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    fn user_message(&self) -> Option<String> {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Simulation(_) => None,
        }
    }
}
