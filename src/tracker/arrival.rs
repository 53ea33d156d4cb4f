//! Arrival-order tracking for FIFO replacement.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;

/// Resident pages in the order they were loaded (front = oldest).
///
/// Hits never reorder the queue: FIFO looks only at arrival time.
#[derive(Debug, Default)]
pub struct ArrivalQueue {
    /// Pages in arrival order.
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,
}

impl ArrivalQueue {
    /// Create an empty arrival queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `page` was just loaded into a frame.
    ///
    /// A page already in the queue keeps its original position.
    pub fn record_arrival(&mut self, page: PageId) {
        if self.in_queue.insert(page) {
            self.queue.push_back(page);
        }
    }

    /// Remove and return the oldest arrival.
    pub fn evict(&mut self) -> Option<PageId> {
        let page = self.queue.pop_front()?;
        self.in_queue.remove(&page);
        Some(page)
    }

    /// Check if `page` is queued, i.e. resident under FIFO.
    pub fn contains(&self, page: PageId) -> bool {
        self.in_queue.contains(&page)
    }

    /// Number of queued pages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no page is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pages from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().copied()
    }
}
