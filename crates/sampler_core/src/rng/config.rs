//! Sample cache configuration.
//!
//! This module provides [`SamplerConfig`] and its builder, used to construct
//! caches from validated parameters (e.g. loaded from a configuration file).

use super::error::SamplerError;

/// Maximum number of samples a cache may pre-compute.
pub const MAX_CACHED_SAMPLES: usize = 100_000_000;

/// Whether samples are pre-computed, and how many.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::CacheMode;
///
/// assert_eq!(CacheMode::from_count(-1), CacheMode::Uncached);
/// assert_eq!(CacheMode::from_count(5), CacheMode::Cached(5));
/// assert_eq!(CacheMode::Cached(5).as_count(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CacheMode {
    /// Every read draws a fresh sample from the source.
    #[default]
    Uncached,
    /// A fixed buffer of this many samples is drawn at construction and
    /// reused cyclically.
    Cached(usize),
}

impl CacheMode {
    /// Interprets a signed sample count: any negative count means uncached.
    #[inline]
    pub fn from_count(count: i64) -> Self {
        match usize::try_from(count) {
            Ok(n) => CacheMode::Cached(n),
            Err(_) => CacheMode::Uncached,
        }
    }

    /// Returns the signed count for this mode, `-1` when uncached.
    #[inline]
    pub fn as_count(&self) -> i64 {
        match self {
            CacheMode::Uncached => -1,
            CacheMode::Cached(n) => i64::try_from(*n).unwrap_or(i64::MAX),
        }
    }
}

/// Sample cache configuration.
///
/// Immutable configuration specifying the stream seed and cache mode.
/// Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{CacheMode, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .seed(42)
///     .cache_mode(CacheMode::Cached(1024))
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), 42);
/// assert_eq!(config.cache_mode(), CacheMode::Cached(1024));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Seed identifying the stream.
    seed: u64,
    /// Pre-computation policy.
    #[cfg_attr(feature = "serde", serde(default))]
    cache_mode: CacheMode,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the stream seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the cache mode.
    #[inline]
    pub fn cache_mode(&self) -> CacheMode {
        self.cache_mode
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidConfig` if the cached sample count is
    /// zero or greater than [`MAX_CACHED_SAMPLES`].
    pub fn validate(&self) -> Result<(), SamplerError> {
        match self.cache_mode {
            CacheMode::Cached(0) => Err(SamplerError::InvalidConfig {
                name: "cache_mode",
                value: "cached sample count must be at least 1".to_string(),
            }),
            CacheMode::Cached(n) if n > MAX_CACHED_SAMPLES => Err(SamplerError::InvalidConfig {
                name: "cache_mode",
                value: format!("{} samples exceeds maximum of {}", n, MAX_CACHED_SAMPLES),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    seed: Option<u64>,
    cache_mode: CacheMode,
}

impl SamplerConfigBuilder {
    /// Sets the stream seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the cache mode.
    #[inline]
    pub fn cache_mode(mut self, cache_mode: CacheMode) -> Self {
        self.cache_mode = cache_mode;
        self
    }

    /// Sets the cache mode from a signed count; negative means uncached.
    #[inline]
    pub fn count(self, count: i64) -> Self {
        self.cache_mode(CacheMode::from_count(count))
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidConfig` if the seed is not set or the
    /// cache mode is invalid.
    pub fn build(self) -> Result<SamplerConfig, SamplerError> {
        let seed = self.seed.ok_or(SamplerError::InvalidConfig {
            name: "seed",
            value: "must be specified".to_string(),
        })?;

        let config = SamplerConfig {
            seed,
            cache_mode: self.cache_mode,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SamplerConfig::builder()
            .seed(7)
            .count(100)
            .build()
            .unwrap();

        assert_eq!(config.seed(), 7);
        assert_eq!(config.cache_mode(), CacheMode::Cached(100));
    }

    #[test]
    fn test_config_defaults_to_uncached() {
        let config = SamplerConfig::builder().seed(1).build().unwrap();
        assert_eq!(config.cache_mode(), CacheMode::Uncached);
    }

    #[test]
    fn test_config_missing_seed() {
        let result = SamplerConfig::builder().count(10).build();
        assert!(matches!(
            result,
            Err(SamplerError::InvalidConfig { name: "seed", .. })
        ));
    }

    #[test]
    fn test_config_rejects_empty_cache() {
        let result = SamplerConfig::builder().seed(1).count(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_oversized_cache() {
        let result = SamplerConfig::builder()
            .seed(1)
            .cache_mode(CacheMode::Cached(MAX_CACHED_SAMPLES + 1))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_mode_sign_only() {
        assert_eq!(CacheMode::from_count(-1), CacheMode::Uncached);
        assert_eq!(CacheMode::from_count(-1_000), CacheMode::Uncached);
        assert_eq!(CacheMode::from_count(0), CacheMode::Cached(0));
        assert_eq!(CacheMode::Uncached.as_count(), -1);
    }
}
