//! Position command implementation
//!
//! Prints scalar samples mapped into `[start, end)`.

use sampler_core::rng::{SampleCache, SamplerConfig};
use tracing::info;

use crate::{CliError, Result};

/// Draws `n` positions between `start` and `end`.
pub fn positions(cache: &mut SampleCache, start: f64, end: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| cache.position(&start, &end)).collect()
}

/// Run the position command
pub fn run(config: &SamplerConfig, start: f64, end: f64, n: usize) -> Result<()> {
    if !start.is_finite() || !end.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "range bounds must be finite, got [{}, {})",
            start, end
        )));
    }

    info!("Drawing positions in [{}, {})", start, end);
    let mut cache: SampleCache = SampleCache::from_config(config);
    for (i, value) in positions(&mut cache, start, end, n).iter().enumerate() {
        println!("{:>6}  {:.6}", i, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positions_in_range() {
        let mut cache: SampleCache = SampleCache::new(3, 100);
        for p in positions(&mut cache, -5.0, 5.0, 200) {
            assert!((-5.0..5.0).contains(&p));
        }
    }

    #[test]
    fn test_positions_map_samples() {
        let mut cache: SampleCache = SampleCache::new(3, 2);
        let u = cache.samples().to_vec();
        let p = positions(&mut cache, 10.0, 12.0, 2);
        assert_relative_eq!(p[0], 10.0 + 2.0 * u[0], epsilon = 1e-12);
        assert_relative_eq!(p[1], 10.0 + 2.0 * u[1], epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let config = SamplerConfig::builder().seed(1).count(4).build().unwrap();
        assert!(matches!(
            run(&config, f64::NAN, 1.0, 1),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
