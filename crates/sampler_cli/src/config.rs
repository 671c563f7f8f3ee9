//! CLI configuration management
//!
//! Settings come from an optional TOML file and are overridden by command
//! line flags:
//!
//! ```toml
//! log_level = "debug"
//!
//! [sampler]
//! seed = 42
//! cache_mode = { cached = 1024 }
//! ```

use std::path::Path;

use sampler_core::rng::{CacheMode, SamplerConfig};
use serde::Deserialize;

use crate::{CliError, Result};

/// Seed used when neither the file nor the command line sets one.
pub const DEFAULT_SEED: u64 = 12345;

/// Cache size used when neither the file nor the command line sets one.
pub const DEFAULT_COUNT: usize = 1024;

/// Contents of the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Tracing filter, e.g. `info` or `sampler_core=trace`
    pub log_level: String,
    /// Stream settings
    pub sampler: Option<SamplerConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            sampler: None,
        }
    }
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Command line overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Seed override
    pub seed: Option<u64>,
    /// Signed sample count override; negative means uncached
    pub count: Option<i64>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Fully resolved settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Tracing filter
    pub log_level: String,
    /// Validated sampler configuration
    pub sampler: SamplerConfig,
}

/// Build settings from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Config file
/// 3. Default values
pub fn build_settings(file: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
    let file_config = match file {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    resolve(file_config, overrides)
}

fn resolve(file_config: FileConfig, overrides: &Overrides) -> Result<Settings> {
    let seed = overrides
        .seed
        .or(file_config.sampler.as_ref().map(SamplerConfig::seed))
        .unwrap_or(DEFAULT_SEED);
    let cache_mode = overrides
        .count
        .map(CacheMode::from_count)
        .or(file_config.sampler.as_ref().map(SamplerConfig::cache_mode))
        .unwrap_or(CacheMode::Cached(DEFAULT_COUNT));

    let sampler = SamplerConfig::builder()
        .seed(seed)
        .cache_mode(cache_mode)
        .build()?;

    Ok(Settings {
        log_level: overrides
            .log_level
            .clone()
            .unwrap_or(file_config.log_level),
        sampler,
    })
}
