//! CLI error types.

use std::path::PathBuf;

use lookthrough_ext_file::LoadError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {}: {message}", path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// No table source was given.
    #[error("No input tables given. Pass table files, --dir, --config, or --samples.")]
    NoInput,

    /// Loading tables failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Creates a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
