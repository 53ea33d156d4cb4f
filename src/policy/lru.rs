//! LRU (Least Recently Used) replacement policy.

use log::debug;

use super::{AccessOutcome, PolicyKind, ReplacementPolicy};
use crate::common::{Error, PageId, Result};
use crate::memory::FrameTable;
use crate::tracker::RecencyList;

/// Evicts the resident page whose last reference is oldest.
///
/// Recency is recorded for every page referenced, resident or not, and is
/// updated before the hit check.
#[derive(Debug, Default)]
pub struct LruPolicy {
    recency: RecencyList,
}

impl LruPolicy {
    /// Create an LRU policy with no recorded history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn access(&mut self, frames: &mut FrameTable, page: PageId) -> Result<AccessOutcome> {
        self.recency.touch(page);

        if frames.is_resident(page) {
            return Ok(AccessOutcome::Hit);
        }

        if let Some(frame) = frames.insert_into_empty_slot(page) {
            return Ok(AccessOutcome::Fault {
                frame,
                evicted: None,
            });
        }

        let victim = self
            .recency
            .evict(|candidate| frames.is_resident(candidate))
            .ok_or_else(|| {
                Error::InvariantViolation("no resident page in the recency list".into())
            })?;
        let frame = frames.replace_occupant(victim, page)?;
        debug!("lru: {} replaces {} in {}", page, victim, frame);

        Ok(AccessOutcome::Fault {
            frame,
            evicted: Some(victim),
        })
    }
}
