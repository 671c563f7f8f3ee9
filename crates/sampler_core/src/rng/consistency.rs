//! Cross-process agreement for global draws.
//!
//! The cache never talks to other processes itself. A global draw is taken
//! locally by every participant and then handed to a [`ConsistencyOracle`],
//! which overwrites it with the value all participants must use.
//!
//! - [`SerialOracle`]: a run with a single process; the local draw stands.
//! - [`LocalMember`]: one member of an in-process group where each member
//!   runs on its own thread and rank 0 broadcasts its draws.

use std::sync::{Arc, Barrier, Mutex};

use super::error::{SamplerError, SamplerResult};

/// Collective agreement on a block of scalar draws.
///
/// Every participant of a run calls [`agree`](Self::agree) for the same
/// logical draw, passing the draws it took locally. On success every
/// participant's buffer holds the same values.
pub trait ConsistencyOracle {
    /// Replaces `draws` with the values agreed across all participants.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::Consistency`] if the participants cannot agree,
    /// e.g. because they requested different numbers of draws.
    fn agree(&self, draws: &mut [f64]) -> SamplerResult<()>;
}

impl<O: ConsistencyOracle + ?Sized> ConsistencyOracle for &O {
    #[inline]
    fn agree(&self, draws: &mut [f64]) -> SamplerResult<()> {
        (**self).agree(draws)
    }
}

/// Oracle for a single-process run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerialOracle;

impl ConsistencyOracle for SerialOracle {
    #[inline]
    fn agree(&self, _draws: &mut [f64]) -> SamplerResult<()> {
        Ok(())
    }
}

#[derive(Debug)]
struct GroupState {
    barrier: Barrier,
    broadcast: Mutex<Vec<f64>>,
}

/// A member of an in-process group of cooperating participants.
///
/// Members are created together by [`LocalMember::group`] and are meant to
/// be moved onto separate threads. Every member must call `agree` for every
/// global draw; a member that skips a call blocks the rest of the group.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{ConsistencyOracle, LocalMember};
/// use std::thread;
///
/// let handles: Vec<_> = LocalMember::group(2)
///     .into_iter()
///     .map(|member| {
///         thread::spawn(move || {
///             let mut draws = [member.rank() as f64];
///             member.agree(&mut draws).unwrap();
///             draws[0]
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 0.0);
/// }
/// ```
#[derive(Debug)]
pub struct LocalMember {
    rank: usize,
    size: usize,
    state: Arc<GroupState>,
}

impl LocalMember {
    /// Creates the `size` members of a new group, ordered by rank.
    ///
    /// Rank 0 is the master.
    pub fn group(size: usize) -> Vec<LocalMember> {
        let state = Arc::new(GroupState {
            barrier: Barrier::new(size),
            broadcast: Mutex::new(Vec::new()),
        });

        (0..size)
            .map(|rank| LocalMember {
                rank,
                size,
                state: Arc::clone(&state),
            })
            .collect()
    }

    /// Returns this member's rank within the group.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the number of members in the group.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for the member whose draws are broadcast.
    #[inline]
    pub fn is_master(&self) -> bool {
        self.rank == 0
    }

    fn publish(&self, draws: &[f64]) -> SamplerResult<()> {
        let mut slot = self
            .state
            .broadcast
            .lock()
            .map_err(|_| SamplerError::Consistency("broadcast slot poisoned".to_string()))?;
        slot.clear();
        slot.extend_from_slice(draws);
        Ok(())
    }

    fn receive(&self, draws: &mut [f64]) -> SamplerResult<()> {
        let slot = self
            .state
            .broadcast
            .lock()
            .map_err(|_| SamplerError::Consistency("broadcast slot poisoned".to_string()))?;
        if slot.len() != draws.len() {
            return Err(SamplerError::Consistency(format!(
                "rank {} requested {} draws but master broadcast {}",
                self.rank,
                draws.len(),
                slot.len()
            )));
        }
        draws.copy_from_slice(&slot);
        Ok(())
    }
}

impl ConsistencyOracle for LocalMember {
    fn agree(&self, draws: &mut [f64]) -> SamplerResult<()> {
        let published = if self.is_master() {
            self.publish(draws)
        } else {
            Ok(())
        };

        self.state.barrier.wait();
        let received = if self.is_master() {
            Ok(())
        } else {
            self.receive(draws)
        };
        // Keep the slot stable until every member has read it.
        self.state.barrier.wait();

        tracing::trace!(rank = self.rank, n_draws = draws.len(), "global draw agreed");
        published.and(received)
    }
}
