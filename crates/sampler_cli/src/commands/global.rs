//! Global command implementation
//!
//! Simulates a multi-process run in-process: every member gets its own seed
//! and cache, takes the same sequence of global draws, and must end up with
//! identical values.

use std::thread;

use sampler_core::rng::{LocalMember, SampleCache, SamplerConfig, SamplerError, SamplerResult};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Largest group the command will simulate; each member runs on its own thread.
pub const MAX_PROCESSES: usize = 256;

/// Values and final cursor observed by one member of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberOutcome {
    /// Member rank; rank 0 is the master
    pub rank: usize,
    /// Seed of the member's local stream
    pub seed: u64,
    /// Globally agreed draws, in order
    pub values: Vec<f64>,
    /// Local cursor after the run, `None` when uncached
    pub sample_index: Option<usize>,
}

/// Runs `n` global scalar draws on `processes` in-process members.
///
/// Member `r` uses seed `config.seed() + r` with the configured cache mode.
pub fn run_group(config: &SamplerConfig, processes: usize, n: usize) -> Result<Vec<MemberOutcome>> {
    if processes == 0 {
        return Err(CliError::InvalidArgument(
            "at least one process is required".to_string(),
        ));
    }
    if processes > MAX_PROCESSES {
        return Err(CliError::InvalidArgument(format!(
            "at most {} processes are supported, got {}",
            MAX_PROCESSES, processes
        )));
    }

    let results: Vec<SamplerResult<MemberOutcome>> = thread::scope(|scope| {
        let handles: Vec<_> = LocalMember::group(processes)
            .into_iter()
            .map(|member| {
                scope.spawn(move || -> SamplerResult<MemberOutcome> {
                    let seed = config.seed().wrapping_add(member.rank() as u64);
                    let mut cache: SampleCache = SampleCache::with_mode(seed, config.cache_mode());
                    let values = (0..n)
                        .map(|_| cache.global_sample01::<f64, _>(&member))
                        .collect::<SamplerResult<Vec<f64>>>()?;
                    Ok(MemberOutcome {
                        rank: member.rank(),
                        seed,
                        values,
                        sample_index: cache.sample_index(),
                    })
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    Err(SamplerError::Consistency(
                        "group member panicked".to_string(),
                    ))
                })
            })
            .collect()
    });

    results
        .into_iter()
        .collect::<SamplerResult<Vec<_>>>()
        .map_err(CliError::from)
}

/// Run the global command
pub fn run(config: &SamplerConfig, processes: usize, n: usize) -> Result<()> {
    info!("Running {} in-process members, {} global draws each", processes, n);

    let outcomes = run_group(config, processes, n)?;
    for outcome in &outcomes {
        let cursor = outcome
            .sample_index
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        println!(
            "rank {:>3}  seed {:>20}  cursor {:>6}  {}",
            outcome.rank,
            outcome.seed,
            cursor,
            super::format_components(&outcome.values)
        );
    }

    let consistent = outcomes.windows(2).all(|w| w[0].values == w[1].values);
    if !consistent {
        warn!("Members observed different global values");
        return Err(CliError::Sampler(SamplerError::Consistency(
            "members observed different global values".to_string(),
        )));
    }

    info!("All members agree");
    Ok(())
}
