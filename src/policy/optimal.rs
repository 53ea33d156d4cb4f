//! Optimal (Belady's MIN) replacement policy.

use log::debug;

use super::{AccessOutcome, PolicyKind, ReplacementPolicy};
use crate::common::{PageId, Result};
use crate::memory::FrameTable;
use crate::tracker::FutureIndex;

/// Evicts the resident page whose next use lies furthest in the future,
/// preferring pages that are never used again.
///
/// The policy is bound to the trace it was built with and must be fed that
/// trace in order.
#[derive(Debug)]
pub struct OptimalPolicy {
    future: FutureIndex,
}

impl OptimalPolicy {
    /// Create an Optimal policy over the full `trace` it will be fed.
    pub fn new(trace: &[PageId]) -> Self {
        Self {
            future: FutureIndex::new(trace),
        }
    }

    /// References left to process, including the next one.
    pub fn remaining(&self) -> usize {
        self.future.remaining()
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn access(&mut self, frames: &mut FrameTable, page: PageId) -> Result<AccessOutcome> {
        // From here on the index excludes the current reference.
        self.future.consume(page)?;

        if frames.is_resident(page) {
            return Ok(AccessOutcome::Hit);
        }

        if let Some(frame) = frames.insert_into_empty_slot(page) {
            return Ok(AccessOutcome::Fault {
                frame,
                evicted: None,
            });
        }

        let victim = self.future.victim(frames)?;
        let frame = frames.replace_occupant(victim, page)?;
        debug!(
            "optimal: {} replaces {} in {} (next use: {:?})",
            page,
            victim,
            frame,
            self.future.next_use(victim)
        );

        Ok(AccessOutcome::Fault {
            frame,
            evicted: Some(victim),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn trace(pages: &[u32]) -> Vec<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_optimal_evicts_furthest_next_use() {
        let pages = trace(&[1, 2, 3, 4, 1, 2, 3]);
        let mut frames = FrameTable::new(3).unwrap();
        let mut optimal = OptimalPolicy::new(&pages);

        for &page in &pages[..3] {
            optimal.access(&mut frames, page).unwrap();
        }
        let outcome = optimal.access(&mut frames, pages[3]).unwrap();
        assert_eq!(outcome.evicted(), Some(PageId::new(3)));
        assert_eq!(optimal.remaining(), 3);
    }

    #[test]
    fn test_optimal_prefers_page_never_used_again() {
        let pages = trace(&[1, 2, 3, 4, 3, 2]);
        let mut frames = FrameTable::new(3).unwrap();
        let mut optimal = OptimalPolicy::new(&pages);

        for &page in &pages[..3] {
            optimal.access(&mut frames, page).unwrap();
        }
        let outcome = optimal.access(&mut frames, pages[3]).unwrap();
        assert_eq!(outcome.evicted(), Some(PageId::new(1)));
    }

    #[test]
    fn test_optimal_hit_consumes_reference() {
        let pages = trace(&[5, 5]);
        let mut frames = FrameTable::new(1).unwrap();
        let mut optimal = OptimalPolicy::new(&pages);

        assert!(optimal.access(&mut frames, pages[0]).unwrap().is_fault());
        assert!(optimal.access(&mut frames, pages[1]).unwrap().is_hit());
        assert_eq!(optimal.remaining(), 0);
    }

    #[test]
    fn test_optimal_rejects_foreign_reference() {
        let pages = trace(&[1, 2]);
        let mut frames = FrameTable::new(1).unwrap();
        let mut optimal = OptimalPolicy::new(&pages);

        assert!(matches!(
            optimal.access(&mut frames, PageId::new(2)),
            Err(Error::InvariantViolation(_))
        ));
    }
}
