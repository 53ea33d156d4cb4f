//! Future-reference tracking for Optimal (Belady) replacement.

use std::collections::{HashMap, VecDeque};

use crate::common::{Error, PageId, Result};
use crate::memory::FrameTable;

/// Index of the unconsumed suffix of a reference trace.
///
/// For each page it keeps the trace positions where that page is still to be
/// referenced, front = soonest. Consuming a reference pops it from its page's
/// queue, so "next occurrence" is always a front lookup.
#[derive(Debug)]
pub struct FutureIndex {
    /// Page -> positions in the trace not yet consumed.
    positions: HashMap<PageId, VecDeque<usize>>,

    /// Position of the next reference to consume.
    cursor: usize,

    /// Total trace length.
    len: usize,
}

impl FutureIndex {
    /// Build the index over a full trace.
    pub fn new(trace: &[PageId]) -> Self {
        let mut positions: HashMap<PageId, VecDeque<usize>> = HashMap::new();
        for (pos, &page) in trace.iter().enumerate() {
            positions.entry(page).or_default().push_back(pos);
        }
        Self {
            positions,
            cursor: 0,
            len: trace.len(),
        }
    }

    /// Consume the current reference, which must be `page`.
    ///
    /// # Errors
    /// Returns [`Error::InvariantViolation`] if the trace is exhausted or the
    /// reference at the cursor is a different page.
    pub fn consume(&mut self, page: PageId) -> Result<()> {
        let cursor = self.cursor;
        let matches = self
            .positions
            .get(&page)
            .and_then(|queue| queue.front())
            .is_some_and(|&pos| pos == cursor);
        if cursor >= self.len || !matches {
            return Err(Error::InvariantViolation(format!(
                "{} is not the reference at trace position {}",
                page, cursor
            )));
        }

        if let Some(queue) = self.positions.get_mut(&page) {
            queue.pop_front();
        }
        self.cursor += 1;
        Ok(())
    }

    /// Trace position of the next unconsumed reference to `page`.
    pub fn next_use(&self, page: PageId) -> Option<usize> {
        self.positions.get(&page)?.front().copied()
    }

    /// Number of references not yet consumed.
    pub fn remaining(&self) -> usize {
        self.len - self.cursor
    }

    /// Choose the resident page to evict.
    ///
    /// A resident page that is never referenced again wins outright (first
    /// in slot order). Otherwise pages are ranked by next use, furthest
    /// first, and the first one resident in `frames` is chosen.
    ///
    /// # Errors
    /// Returns [`Error::InvariantViolation`] if no ranked page is resident.
    pub fn victim(&self, frames: &FrameTable) -> Result<PageId> {
        if let Some((_, page)) = frames
            .residents()
            .find(|&(_, page)| self.next_use(page).is_none())
        {
            return Ok(page);
        }

        let mut ranked: Vec<(usize, PageId)> = self
            .positions
            .iter()
            .filter_map(|(&page, queue)| queue.front().map(|&pos| (pos, page)))
            .collect();
        ranked.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        ranked
            .into_iter()
            .map(|(_, page)| page)
            .find(|&page| frames.is_resident(page))
            .ok_or_else(|| {
                Error::InvariantViolation("no resident page among future references".into())
            })
    }
}
