//! Inspect command implementation
//!
//! Summarises the cached buffer of a stream and prints its leading draws.

use sampler_core::rng::{SampleCache, SamplerConfig};
use tracing::info;

use super::format_components;
use crate::Result;

/// Summary statistics of a cached buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferSummary {
    /// Number of cached samples
    pub len: usize,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
}

/// Summarises the cached samples, `None` for an uncached or empty stream.
pub fn summarise(cache: &SampleCache) -> Option<BufferSummary> {
    let samples = cache.samples();
    if samples.is_empty() {
        return None;
    }

    let (min, max, sum) = samples.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &x| (min.min(x), max.max(x), sum + x),
    );
    Some(BufferSummary {
        len: samples.len(),
        min,
        max,
        mean: sum / samples.len() as f64,
    })
}

/// Returns the first `head` values the stream serves.
///
/// A cached stream shows at most its whole buffer; an uncached stream draws
/// `head` fresh values.
pub fn leading_draws(cache: &mut SampleCache, head: usize) -> Vec<f64> {
    if cache.is_cached() {
        let samples = cache.samples();
        samples[..head.min(samples.len())].to_vec()
    } else {
        (0..head).map(|_| cache.next_scalar()).collect()
    }
}

/// Run the inspect command
pub fn run(config: &SamplerConfig, head: usize) -> Result<()> {
    let mut cache: SampleCache = SampleCache::from_config(config);
    info!("Inspecting stream for seed {}", cache.seed());

    println!("seed:     {}", cache.seed());
    match summarise(&cache) {
        Some(summary) => {
            println!("mode:     cached");
            println!("samples:  {}", summary.len);
            println!("min:      {:.6}", summary.min);
            println!("max:      {:.6}", summary.max);
            println!("mean:     {:.6}", summary.mean);
        }
        None => println!("mode:     uncached"),
    }
    println!("head:     {}", format_components(&leading_draws(&mut cache, head)));

    Ok(())
}
