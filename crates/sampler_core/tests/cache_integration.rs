//! Integration tests for the public sampling API.
//!
//! Exercises the crate through absolute paths only, the way a simulation
//! framework would consume it.

use approx::assert_abs_diff_eq;
use sampler_core::rng::{
    CacheMode, Components, ConsistencyOracle, LocalMember, SampleCache, SamplerConfig,
    SamplerError, SamplerResult, SerialOracle, StdUniformSource, Tensor3, UniformSource, Vector3,
};
use std::thread;

/// A user-defined composite value: a particle with position and weight.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    position: Vector3,
    weight: f64,
}

impl Components for Particle {
    const N_COMPONENTS: usize = 4;

    fn zero() -> Self {
        Particle {
            position: [0.0; 3],
            weight: 0.0,
        }
    }

    fn component(&self, index: usize) -> f64 {
        match index {
            0..=2 => self.position[index],
            3 => self.weight,
            _ => panic!("particle component {} out of range", index),
        }
    }

    fn set_component(&mut self, index: usize, value: f64) {
        match index {
            0..=2 => self.position[index] = value,
            3 => self.weight = value,
            _ => panic!("particle component {} out of range", index),
        }
    }
}

/// Oracle that always fails, standing in for a broken collective.
struct BrokenOracle;

impl ConsistencyOracle for BrokenOracle {
    fn agree(&self, _draws: &mut [f64]) -> SamplerResult<()> {
        Err(SamplerError::Consistency("peer did not respond".to_string()))
    }
}

#[test]
fn test_user_defined_components() {
    let mut direct: SampleCache = SampleCache::new(2024, 128);
    let mut typed: SampleCache = SampleCache::new(2024, 128);

    let expected: Vec<f64> = (0..4).map(|_| direct.next_scalar()).collect();
    let particle: Particle = typed.sample01();

    assert_eq!(particle.position.to_vec(), expected[..3].to_vec());
    assert_eq!(particle.weight, expected[3]);

    let lo = Particle {
        position: [-1.0, -1.0, -1.0],
        weight: 0.0,
    };
    let hi = Particle {
        position: [1.0, 1.0, 1.0],
        weight: 10.0,
    };
    let p = typed.position(&lo, &hi);
    for i in 0..3 {
        assert!(p.position[i] >= -1.0 && p.position[i] < 1.0);
    }
    assert!(p.weight >= 0.0 && p.weight < 10.0);
}

#[test]
fn test_replay_sub_sequence() {
    let mut cache: SampleCache = SampleCache::new(55, 20);
    let mark = cache.sample_index().unwrap_or(0);
    let first: Tensor3 = cache.sample01();

    if let Some(cursor) = cache.sample_index_mut() {
        *cursor = mark;
    }
    let replayed: Tensor3 = cache.sample01();
    assert_eq!(first, replayed);
}

#[test]
fn test_copy_diverges_independently() {
    let mut original: SampleCache = SampleCache::new(6, 4);
    let mut copy = original.try_clone(true).unwrap();

    original.next_scalar();
    original.next_scalar();
    assert_eq!(copy.sample_index(), Some(0));
    assert_eq!(copy.next_scalar(), original.samples()[0]);
    assert_eq!(original.sample_index(), Some(2));
}

#[test]
fn test_uncached_does_not_repeat_cycle() {
    let mut uncached: SampleCache = SampleCache::new(42, -1);
    let draws: Vec<f64> = (0..10).map(|_| uncached.sample01::<f64>()).collect();

    let mut cached: SampleCache = SampleCache::new(42, 5);
    let cycled: Vec<f64> = (0..10).map(|_| cached.sample01::<f64>()).collect();

    // Both streams start identically, but only the cache repeats.
    assert_eq!(draws[..5], cycled[..5]);
    assert_eq!(cycled[5..], cycled[..5]);
    assert_ne!(draws[5..], draws[..5]);
    assert!(matches!(
        uncached.try_clone(false),
        Err(SamplerError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_config_round_trip_into_cache() {
    let config = SamplerConfig::builder().seed(3).count(-1).build().unwrap();
    assert_eq!(config.cache_mode(), CacheMode::Uncached);

    let mut cache: SampleCache = SampleCache::from_config(&config);
    let mut source = StdUniformSource::from_seed(3);
    assert_eq!(cache.next_scalar(), source.next_uniform());
}

#[test]
fn test_global_oracle_failure_propagates() {
    let mut cache: SampleCache = SampleCache::new(8, 8);
    let mut value: Vector3 = [9.0, 9.0, 9.0];

    let result = cache.global_randomise01(&mut value, &BrokenOracle);
    assert!(matches!(result, Err(SamplerError::Consistency(_))));
    assert_eq!(value, [9.0, 9.0, 9.0]);
}

#[test]
fn test_global_position_serial() {
    let mut cache: SampleCache = SampleCache::new(12, 12);
    let u = cache.samples()[0];
    let p: f64 = cache.global_position(&10.0, &20.0, &SerialOracle).unwrap();
    assert_abs_diff_eq!(p, 10.0 + 10.0 * u, epsilon = 1e-12);
}

/// Four simulated processes, each with its own seed and cache size, take a
/// sequence of mixed global draws and must stay in lockstep throughout.
#[test]
fn test_four_process_lockstep() {
    let outcomes: Vec<Vec<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = LocalMember::group(4)
            .into_iter()
            .map(|member| {
                scope.spawn(move || {
                    let rank = member.rank();
                    let mut cache: SampleCache = if rank % 2 == 0 {
                        SampleCache::new(rank as u64, 10 + rank as i64)
                    } else {
                        SampleCache::new(rank as u64, -1)
                    };

                    let mut seen = Vec::new();
                    for _ in 0..10 {
                        let s: f64 = cache.global_sample01(&member).unwrap();
                        let v: Vector3 = cache
                            .global_position(&[0.0; 3], &[5.0; 3], &member)
                            .unwrap();
                        seen.push(s);
                        seen.extend_from_slice(&v);
                    }
                    seen
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for outcome in &outcomes[1..] {
        assert_eq!(outcome, &outcomes[0]);
    }
}
