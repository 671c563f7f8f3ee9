//! Draw command implementation
//!
//! Prints typed samples in [0, 1) from a configured stream.

use clap::ValueEnum;
use sampler_core::rng::{Components, SampleCache, SamplerConfig, Tensor3, Vector3};
use tracing::info;

use super::format_components;
use crate::Result;

/// Value type to sample
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Single real value
    Scalar,
    /// Three-component vector
    Vector,
    /// Three-by-three tensor
    Tensor,
    /// Integer label (0 or 1)
    Label,
}

/// Draws `n` values of the given kind, flattened into component lists.
pub fn draw_values(cache: &mut SampleCache, kind: SampleKind, n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| match kind {
            SampleKind::Scalar => flatten(&cache.sample01::<f64>()),
            SampleKind::Vector => flatten(&cache.sample01::<Vector3>()),
            SampleKind::Tensor => flatten(&cache.sample01::<Tensor3>()),
            SampleKind::Label => flatten(&cache.sample01::<i64>()),
        })
        .collect()
}

fn flatten<T: Components>(value: &T) -> Vec<f64> {
    (0..T::N_COMPONENTS).map(|i| value.component(i)).collect()
}

/// Run the draw command
pub fn run(config: &SamplerConfig, kind: SampleKind, n: usize) -> Result<()> {
    info!("Drawing samples...");
    info!("  Seed: {}", config.seed());
    info!("  Cache mode: {:?}", config.cache_mode());
    info!("  Kind: {:?}", kind);

    let mut cache: SampleCache = SampleCache::from_config(config);
    for (i, value) in draw_values(&mut cache, kind, n).iter().enumerate() {
        println!("{:>6}  {}", i, format_components(value));
    }

    info!("Draw complete");
    Ok(())
}
