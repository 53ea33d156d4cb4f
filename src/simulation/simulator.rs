//! The simulation driver.

use std::thread;

use log::info;

use crate::common::{Error, PageId, Result};
use crate::memory::{FaultStats, FrameTable};
use crate::policy::{AccessOutcome, PolicyKind};

/// One processed reference, as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessEvent<'a> {
    /// The page referenced.
    pub page: PageId,

    /// Hit, or fault with the frame used and the page evicted.
    pub outcome: AccessOutcome,

    /// Frame occupancy after the reference was handled.
    pub frames: &'a [Option<PageId>],
}

/// Outcome of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    pub policy: PolicyKind,
    pub frame_count: usize,
    pub stats: FaultStats,

    /// Frame occupancy at the end of the trace.
    pub frames: Vec<Option<PageId>>,
}

impl SimulationResult {
    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }
}

/// Runs one replacement policy over reference traces.
///
/// The simulator itself holds only configuration; every run gets a fresh
/// frame table and fresh policy state, so runs never influence each other.
///
/// # Example
/// ```
/// use pagesim::{to_trace, PolicyKind, Simulator};
///
/// let sim = Simulator::new(PolicyKind::Lru, 3).unwrap();
/// let result = sim.run(&to_trace(&[1, 2, 3, 1, 4])).unwrap();
/// assert_eq!(result.faults(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    policy: PolicyKind,
    frame_count: usize,
}

impl Simulator {
    /// Create a simulator.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `frame_count` is zero.
    pub fn new(policy: PolicyKind, frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidConfiguration(
                "frame count must be at least 1".into(),
            ));
        }
        Ok(Self {
            policy,
            frame_count,
        })
    }

    /// The policy each run uses.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Number of physical frames each run starts with.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Run the whole trace and return the aggregate result.
    pub fn run(&self, trace: &[PageId]) -> Result<SimulationResult> {
        self.run_with(trace, |_| {})
    }

    /// Run the whole trace, calling `on_access` after every reference.
    ///
    /// # Errors
    /// Propagates [`Error::InvariantViolation`] from the policy; the run is
    /// abandoned at that reference.
    pub fn run_with<F>(&self, trace: &[PageId], mut on_access: F) -> Result<SimulationResult>
    where
        F: FnMut(&AccessEvent<'_>),
    {
        let mut frames = FrameTable::new(self.frame_count)?;
        let mut policy = self.policy.build(trace);
        let mut stats = FaultStats::new();

        for &page in trace {
            let outcome = policy.access(&mut frames, page)?;
            match outcome {
                AccessOutcome::Hit => stats.hits += 1,
                AccessOutcome::Fault { evicted, .. } => {
                    stats.faults += 1;
                    if evicted.is_some() {
                        stats.evictions += 1;
                    }
                }
            }

            on_access(&AccessEvent {
                page,
                outcome,
                frames: frames.slots(),
            });
        }

        info!(
            "{} with {} frames over {} references: {}",
            self.policy,
            self.frame_count,
            trace.len(),
            stats
        );

        Ok(SimulationResult {
            policy: self.policy,
            frame_count: self.frame_count,
            stats,
            frames: frames.snapshot(),
        })
    }
}

/// Run `policy` with `frame_count` frames over `trace`.
pub fn simulate(
    policy: PolicyKind,
    frame_count: usize,
    trace: &[PageId],
) -> Result<SimulationResult> {
    Simulator::new(policy, frame_count)?.run(trace)
}

/// Run several policies over the same trace, one scoped thread each.
///
/// Results are returned in the order of `policies`.
pub fn compare(
    frame_count: usize,
    trace: &[PageId],
    policies: &[PolicyKind],
) -> Result<Vec<SimulationResult>> {
    let simulators = policies
        .iter()
        .map(|&policy| Simulator::new(policy, frame_count))
        .collect::<Result<Vec<_>>>()?;

    thread::scope(|s| {
        let handles: Vec<_> = simulators
            .iter()
            .map(|sim| s.spawn(move || sim.run(trace)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| Error::InvariantViolation("simulation thread panicked".into()))
                    .and_then(|result| result)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;
    use crate::simulation::to_trace;

    #[test]
    fn test_zero_frames_rejected() {
        for policy in PolicyKind::ALL {
            assert!(matches!(
                Simulator::new(policy, 0),
                Err(Error::InvalidConfiguration(_))
            ));
        }
        assert!(compare(0, &[], &PolicyKind::ALL).is_err());
    }

    #[test]
    fn test_empty_trace_has_no_faults() {
        for policy in PolicyKind::ALL {
            let result = simulate(policy, 3, &[]).unwrap();
            assert_eq!(result.faults(), 0);
            assert_eq!(result.stats, FaultStats::new());
            assert_eq!(result.frames, vec![None, None, None]);
        }
    }

    #[test]
    fn test_run_with_reports_every_access() {
        let trace = to_trace(&[1, 2, 1, 3]);
        let sim = Simulator::new(PolicyKind::Fifo, 2).unwrap();

        let mut events = Vec::new();
        let result = sim
            .run_with(&trace, |event| {
                events.push((event.page, event.outcome, event.frames.to_vec()))
            })
            .unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[2].1, AccessOutcome::Hit);
        assert_eq!(
            events[3].1,
            AccessOutcome::Fault {
                frame: FrameId::new(0),
                evicted: Some(PageId::new(1)),
            }
        );
        assert_eq!(events[3].2, result.frames);
        assert_eq!(result.stats.hits, 1);
        assert_eq!(result.stats.faults, 3);
        assert_eq!(result.stats.evictions, 1);
    }

    #[test]
    fn test_compare_preserves_order() {
        let trace = to_trace(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        let policies = [PolicyKind::Optimal, PolicyKind::Fifo];

        let results = compare(3, &trace, &policies).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].policy, PolicyKind::Optimal);
        assert_eq!(results[1].policy, PolicyKind::Fifo);
        assert_eq!(results[1], simulate(PolicyKind::Fifo, 3, &trace).unwrap());
    }
}
