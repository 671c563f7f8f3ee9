//! # Cached Uniform Sampling
//!
//! This module provides reproducible streams of uniform samples for
//! simulation code, with an optional pre-computed cache and draws that can
//! be agreed across cooperating processes.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a stream is fully determined by its seed and its
//!   [`UniformSource`]
//! - **Bounded cost**: cached streams draw `count` samples once and then
//!   serve O(1) reads, repeating from the start when exhausted
//! - **Static dispatch**: sources and oracles are generic parameters, never
//!   `Box<dyn Trait>`
//!
//! ## British English Convention
//!
//! Documentation in this module uses British English spelling
//! ("randomise", "initialise", "behaviour").
//!
//! ## Module Structure
//!
//! - `cache`: [`SampleCache`], the cache/generation state machine
//! - `components`: [`Components`], typed values built from scalar draws
//! - `consistency`: [`ConsistencyOracle`] and its serial and in-process
//!   implementations
//! - `source`: [`UniformSource`] and the `StdRng`-backed default
//! - `config`: [`SamplerConfig`] builder and validation
//! - `error`: [`SamplerError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{SampleCache, SerialOracle, Vector3};
//!
//! // Cache 1000 samples for seed 12345
//! let mut cache: SampleCache = SampleCache::new(12345, 1000);
//!
//! let u: f64 = cache.sample01();
//! assert!((0.0..1.0).contains(&u));
//!
//! // A point inside an axis-aligned box
//! let p: Vector3 = cache.position(&[0.0, 0.0, 0.0], &[2.0, 4.0, 8.0]);
//! assert!(p[2] >= 0.0 && p[2] < 8.0);
//!
//! // Global draws go through an oracle; serially it is a no-op
//! let g: f64 = cache.global_sample01(&SerialOracle).unwrap();
//! assert!((0.0..1.0).contains(&g));
//! ```

mod cache;
mod components;
mod config;
mod consistency;
mod error;
mod source;

// Public re-exports
pub use cache::SampleCache;
pub use components::{Components, Tensor3, Vector3};
pub use config::{CacheMode, SamplerConfig, SamplerConfigBuilder, MAX_CACHED_SAMPLES};
pub use consistency::{ConsistencyOracle, LocalMember, SerialOracle};
pub use error::{SamplerError, SamplerResult};
pub use source::{StdUniformSource, UniformSource};
