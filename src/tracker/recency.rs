//! Recency tracking for LRU replacement.

use std::collections::{BTreeMap, HashMap};

use crate::common::PageId;

/// Every page referenced so far, ordered by last use.
///
/// Pages are touched on every reference, before residency is checked, so a
/// page that is evicted and then referenced again is ranked by its true last
/// use. Victims leave the list when evicted. Ordering is kept with a
/// logical clock: each touch stamps the page with the next tick.
#[derive(Debug, Default)]
pub struct RecencyList {
    /// Logical time of the next touch.
    clock: u64,

    /// Page -> tick of its last reference.
    last_use: HashMap<PageId, u64>,

    /// Tick -> page, oldest first.
    order: BTreeMap<u64, PageId>,
}

impl RecencyList {
    /// Create an empty recency list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `page` as the most recently used.
    pub fn touch(&mut self, page: PageId) {
        let tick = self.clock;
        self.clock += 1;

        if let Some(old) = self.last_use.insert(page, tick) {
            self.order.remove(&old);
        }
        self.order.insert(tick, page);
    }

    /// Drop `page` from the list. Returns whether it was present.
    pub fn remove(&mut self, page: PageId) -> bool {
        match self.last_use.remove(&page) {
            Some(tick) => {
                self.order.remove(&tick);
                true
            }
            None => false,
        }
    }

    /// Remove and return the least recently used page for which
    /// `is_candidate` holds.
    ///
    /// Entries that fail the predicate are skipped and left in place.
    pub fn evict<F>(&mut self, is_candidate: F) -> Option<PageId>
    where
        F: Fn(PageId) -> bool,
    {
        let victim = self.iter().find(|&page| is_candidate(page))?;
        self.remove(victim);
        Some(victim)
    }

    /// Check if `page` has a recorded last use.
    pub fn contains(&self, page: PageId) -> bool {
        self.last_use.contains_key(&page)
    }

    /// Number of tracked pages.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no page is tracked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pages from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.order.values().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList) -> Vec<u32> {
        list.iter().map(|page| page.0).collect()
    }

    #[test]
    fn test_touch_moves_to_tail() {
        let mut list = RecencyList::new();
        list.touch(PageId::new(1));
        list.touch(PageId::new(2));
        list.touch(PageId::new(3));
        list.touch(PageId::new(1));

        assert_eq!(order(&list), vec![2, 3, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_evict_skips_non_candidates() {
        let mut list = RecencyList::new();
        list.touch(PageId::new(1));
        list.touch(PageId::new(2));
        list.touch(PageId::new(3));

        // Page 1 is the oldest but not a candidate
        let victim = list.evict(|page| page != PageId::new(1));
        assert_eq!(victim, Some(PageId::new(2)));
        assert_eq!(order(&list), vec![1, 3]);
    }

    #[test]
    fn test_evict_without_candidates() {
        let mut list = RecencyList::new();
        list.touch(PageId::new(1));

        assert_eq!(list.evict(|_| false), None);
        assert!(list.contains(PageId::new(1)));
    }

    #[test]
    fn test_remove() {
        let mut list = RecencyList::new();
        list.touch(PageId::new(4));

        assert!(list.remove(PageId::new(4)));
        assert!(!list.remove(PageId::new(4)));
        assert!(list.is_empty());
    }
}
