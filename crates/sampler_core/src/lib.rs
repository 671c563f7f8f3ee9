//! # sampler_core: Cached Uniform Samples for Simulation
//!
//! sampler_core provides deterministic streams of uniform random values for
//! simulation frameworks:
//! - Pre-computed sample caches with cyclic reuse (`rng::SampleCache`)
//! - Uncached streams drawing fresh values on every read
//! - Typed sampling of scalars, vectors and tensors (`rng::Components`)
//! - Process-consistent "global" draws through a narrow collective
//!   interface (`rng::ConsistencyOracle`)
//!
//! This is a reproducibility and performance mechanism; it makes no claim of
//! cryptographic quality.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::SampleCache;
//!
//! let mut a: SampleCache = SampleCache::new(7, 16);
//! let mut b: SampleCache = SampleCache::new(7, 16);
//! assert_eq!(a.samples(), b.samples());
//! assert_eq!(a.sample01::<f64>(), b.sample01::<f64>());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SamplerConfig` and `CacheMode`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
