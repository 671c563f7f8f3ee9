//! CLI error types.

use std::path::PathBuf;

use sampler_core::rng::SamplerError;
use thiserror::Error;

/// Errors reported by the `sampler` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Sampler construction or a global draw failed.
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this tool.
    #[error("Failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Invalid command line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
