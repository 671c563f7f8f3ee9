//! Error types for the sample cache.
//!
//! Reading from an empty cache is a programming error and panics instead of
//! surfacing here.

use thiserror::Error;

/// Errors raised by [`SampleCache`](super::SampleCache) and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    /// The requested operation is not defined for this cache mode.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The participants of a global draw could not agree on a value.
    #[error("Consistency failure: {0}")]
    Consistency(String),

    /// Invalid configuration value with parameter name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidConfig {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Result type for sampler operations.
pub type SamplerResult<T> = Result<T, SamplerError>;
