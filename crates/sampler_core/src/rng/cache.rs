//! Pre-computed, cyclically reused uniform samples.
//!
//! [`SampleCache`] draws a fixed number of uniform scalars from a seeded
//! [`UniformSource`] once, at construction, and then serves reads from that
//! buffer in order. After the last sample the sequence repeats from the
//! first. A cache built with a negative count keeps no buffer and draws a
//! fresh scalar from its source on every read instead.
//!
//! Typed reads ([`sample01`](SampleCache::sample01),
//! [`position`](SampleCache::position),
//! [`randomise01`](SampleCache::randomise01)) consume one scalar per
//! component of the requested [`Components`] type. The `global_*` variants
//! additionally pass their draws through a [`ConsistencyOracle`] so that
//! every cooperating process ends up with the same value.

use tracing::{debug, trace, warn};

use super::components::{assemble_between, assemble_unit, Components};
use super::config::{CacheMode, SamplerConfig};
use super::consistency::ConsistencyOracle;
use super::error::{SamplerError, SamplerResult};
use super::source::{StdUniformSource, UniformSource};

#[derive(Debug)]
enum Stream<S> {
    Cached { samples: Vec<f64>, cursor: usize },
    Uncached(S),
}

/// Reproducible provider of uniform samples with an optional fixed cache.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SampleCache;
///
/// let mut cache: SampleCache = SampleCache::new(42, 5);
/// let first: Vec<f64> = (0..5).map(|_| cache.next_scalar()).collect();
///
/// // Reads wrap around once the buffer is exhausted
/// assert_eq!(cache.next_scalar(), first[0]);
/// assert_eq!(cache.sample_index(), Some(1));
///
/// // Composite values take one draw per component
/// let v: [f64; 3] = cache.sample01();
/// assert_eq!(v, [first[1], first[2], first[3]]);
/// ```
#[derive(Debug)]
pub struct SampleCache<S = StdUniformSource> {
    seed: u64,
    stream: Stream<S>,
}

impl<S: UniformSource> SampleCache<S> {
    /// Creates a cache for `seed` holding `count` samples.
    ///
    /// A negative `count` creates an uncached stream; only the sign matters.
    /// A `count` of zero creates an empty cache which must never be read.
    pub fn new(seed: u64, count: i64) -> Self {
        Self::with_mode(seed, CacheMode::from_count(count))
    }

    /// Creates a cache holding `count` samples drawn from `seed`.
    pub fn cached(seed: u64, count: usize) -> Self {
        let mut source = S::from_seed(seed);
        let mut samples = vec![0.0; count];
        source.fill_uniform(&mut samples);
        debug!(seed, count, "sample cache materialised");

        Self {
            seed,
            stream: Stream::Cached { samples, cursor: 0 },
        }
    }

    /// Creates an uncached stream drawing directly from `seed`'s source.
    pub fn uncached(seed: u64) -> Self {
        debug!(seed, "uncached sample stream created");
        Self {
            seed,
            stream: Stream::Uncached(S::from_seed(seed)),
        }
    }

    /// Creates a cache for `seed` with the given mode.
    pub fn with_mode(seed: u64, mode: CacheMode) -> Self {
        match mode {
            CacheMode::Cached(count) => Self::cached(seed, count),
            CacheMode::Uncached => Self::uncached(seed),
        }
    }

    /// Creates a cache from a validated configuration.
    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::with_mode(config.seed(), config.cache_mode())
    }

    /// Copies a cached stream, optionally rewinding the copy to the start.
    ///
    /// The copy shares the seed and sample values of `self`; its cursor is
    /// `0` if `reset_cursor` is set and equal to `self`'s cursor otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::UnsupportedOperation`] for an uncached stream,
    /// whose source state cannot be duplicated.
    pub fn try_clone(&self, reset_cursor: bool) -> SamplerResult<Self> {
        match &self.stream {
            Stream::Cached { samples, cursor } => Ok(Self {
                seed: self.seed,
                stream: Stream::Cached {
                    samples: samples.clone(),
                    cursor: if reset_cursor { 0 } else { *cursor },
                },
            }),
            Stream::Uncached(_) => {
                warn!(seed = self.seed, "refusing to copy an uncached sample stream");
                Err(Self::uncached_copy_error())
            }
        }
    }

    /// Replaces the contents of `self` with a copy of `other`.
    ///
    /// Equivalent to `*self = other.try_clone(false)?`; on error `self` is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::UnsupportedOperation`] if `other` is uncached.
    pub fn assign_from(&mut self, other: &Self) -> SamplerResult<()> {
        *self = other.try_clone(false)?;
        Ok(())
    }

    fn uncached_copy_error() -> SamplerError {
        SamplerError::UnsupportedOperation(
            "an uncached sample stream cannot be copied".to_string(),
        )
    }

    /// Returns the seed the stream was generated from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the cached samples, empty for an uncached stream.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        match &self.stream {
            Stream::Cached { samples, .. } => samples.as_slice(),
            Stream::Uncached(_) => &[],
        }
    }

    /// Returns the index of the next cached sample, `None` when uncached.
    #[inline]
    pub fn sample_index(&self) -> Option<usize> {
        match &self.stream {
            Stream::Cached { cursor, .. } => Some(*cursor),
            Stream::Uncached(_) => None,
        }
    }

    /// Returns a mutable handle on the cursor, `None` when uncached.
    ///
    /// Writing the cursor replays or skips part of the stream. Values past
    /// the end are taken modulo the cache length on the next read.
    #[inline]
    pub fn sample_index_mut(&mut self) -> Option<&mut usize> {
        match &mut self.stream {
            Stream::Cached { cursor, .. } => Some(cursor),
            Stream::Uncached(_) => None,
        }
    }

    /// Returns the number of cached samples (`0` when uncached).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples().len()
    }

    /// Returns `true` if no samples are cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    /// Returns `true` unless the stream was created uncached.
    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(self.stream, Stream::Cached { .. })
    }

    /// Returns the next uniform scalar in [0, 1).
    ///
    /// # Panics
    ///
    /// Panics if the cache was created with a count of zero.
    pub fn next_scalar(&mut self) -> f64 {
        match &mut self.stream {
            Stream::Cached { samples, cursor } => {
                assert!(
                    !samples.is_empty(),
                    "cannot read from a sample cache created with zero samples"
                );
                let index = *cursor % samples.len();
                *cursor = (index + 1) % samples.len();
                if *cursor == 0 {
                    trace!(seed = self.seed, "sample cache wrapped around");
                }
                samples[index]
            }
            Stream::Uncached(source) => source.next_uniform(),
        }
    }

    /// Returns a value whose components each lie in [0, 1).
    ///
    /// Consumes `T::N_COMPONENTS` scalars, one per component in order.
    pub fn sample01<T: Components>(&mut self) -> T {
        assemble_unit(|_| self.next_scalar())
    }

    /// Returns a value between `start` and `end`, component-wise.
    ///
    /// Component `i` is `start[i] + u * (end[i] - start[i])` for a fresh
    /// draw `u`. Real components with `start[i] < end[i]` lie in
    /// `[start[i], end[i])`; integer components may reach `end[i]`.
    pub fn position<T: Components>(&mut self, start: &T, end: &T) -> T {
        assemble_between(start, end, |_| self.next_scalar())
    }

    /// Overwrites every component of `value` with a draw in [0, 1).
    pub fn randomise01<T: Components>(&mut self, value: &mut T) {
        *value = self.sample01();
    }

    /// Like [`sample01`](Self::sample01), with the value agreed by all
    /// processes.
    ///
    /// Every process consumes `T::N_COMPONENTS` local draws, so cursors stay
    /// in step across processes.
    ///
    /// # Errors
    ///
    /// Propagates the oracle's error if the processes cannot agree.
    pub fn global_sample01<T, O>(&mut self, oracle: &O) -> SamplerResult<T>
    where
        T: Components,
        O: ConsistencyOracle + ?Sized,
    {
        let draws = self.agreed_draws(T::N_COMPONENTS, oracle)?;
        Ok(assemble_unit(|i| draws[i]))
    }

    /// Like [`position`](Self::position), with the value agreed by all
    /// processes.
    ///
    /// # Errors
    ///
    /// Propagates the oracle's error if the processes cannot agree.
    pub fn global_position<T, O>(&mut self, start: &T, end: &T, oracle: &O) -> SamplerResult<T>
    where
        T: Components,
        O: ConsistencyOracle + ?Sized,
    {
        let draws = self.agreed_draws(T::N_COMPONENTS, oracle)?;
        Ok(assemble_between(start, end, |i| draws[i]))
    }

    /// Like [`randomise01`](Self::randomise01), with the value agreed by all
    /// processes. `value` is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Propagates the oracle's error if the processes cannot agree.
    pub fn global_randomise01<T, O>(&mut self, value: &mut T, oracle: &O) -> SamplerResult<()>
    where
        T: Components,
        O: ConsistencyOracle + ?Sized,
    {
        *value = self.global_sample01(oracle)?;
        Ok(())
    }

    fn agreed_draws<O>(&mut self, n_draws: usize, oracle: &O) -> SamplerResult<Vec<f64>>
    where
        O: ConsistencyOracle + ?Sized,
    {
        let mut draws: Vec<f64> = (0..n_draws).map(|_| self.next_scalar()).collect();
        oracle.agree(&mut draws)?;
        Ok(draws)
    }
}
