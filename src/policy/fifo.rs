//! FIFO (First-In-First-Out) replacement policy.

use log::debug;

use super::{AccessOutcome, PolicyKind, ReplacementPolicy};
use crate::common::{Error, PageId, Result};
use crate::memory::FrameTable;
use crate::tracker::ArrivalQueue;

/// Evicts the page that has been resident the longest.
///
/// Hits do not affect ordering, which is why FIFO can exhibit
/// Belady's anomaly.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    arrivals: ArrivalQueue,
}

impl FifoPolicy {
    /// Create a FIFO policy with an empty arrival queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn access(&mut self, frames: &mut FrameTable, page: PageId) -> Result<AccessOutcome> {
        if frames.is_resident(page) {
            return Ok(AccessOutcome::Hit);
        }

        debug_assert!(!self.arrivals.contains(page), "{} queued but not resident", page);

        if let Some(frame) = frames.insert_into_empty_slot(page) {
            self.arrivals.record_arrival(page);
            return Ok(AccessOutcome::Fault {
                frame,
                evicted: None,
            });
        }

        let victim = self.arrivals.evict().ok_or_else(|| {
            Error::InvariantViolation("arrival queue is empty but every frame is full".into())
        })?;
        let frame = frames.replace_occupant(victim, page)?;
        self.arrivals.record_arrival(page);
        debug!("fifo: {} replaces {} in {}", page, victim, frame);

        Ok(AccessOutcome::Fault {
            frame,
            evicted: Some(victim),
        })
    }
}
