//! FrameTable - the model of physical memory.
//!
//! A [`FrameTable`] is a fixed number of frame slots, each holding at most
//! one page. It is shared by every replacement policy: policies decide
//! *which* page goes where, the table only records occupancy.

use crate::common::{Error, FrameId, PageId, Result};

/// Fixed-capacity mapping from frame slot to resident page.
///
/// # Invariants
/// - The number of slots never changes after construction.
/// - A page is resident in at most one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    /// Create an empty table with `frame_count` slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `frame_count` is zero.
    pub fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidConfiguration(
                "frame count must be at least 1".into(),
            ));
        }
        Ok(Self {
            slots: vec![None; frame_count],
        })
    }

    /// Total number of frame slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a page.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check if `page` occupies some slot.
    pub fn is_resident(&self, page: PageId) -> bool {
        self.frame_of(page).is_some()
    }

    /// Find the slot holding `page`.
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page))
            .map(FrameId::new)
    }

    /// Resident pages in slot order, paired with their frame.
    pub fn residents(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|page| (FrameId::new(idx), page)))
    }

    /// Place `page` into the first empty slot, scanning in index order.
    ///
    /// Returns the slot used, or `None` if the table is full (nothing changes).
    pub fn insert_into_empty_slot(&mut self, page: PageId) -> Option<FrameId> {
        debug_assert!(!self.is_resident(page), "{} is already resident", page);

        let idx = self.slots.iter().position(Option::is_none)?;
        self.slots[idx] = Some(page);
        Some(FrameId::new(idx))
    }

    /// Overwrite the slot holding `victim` with `page`.
    ///
    /// # Errors
    /// Returns [`Error::InvariantViolation`] if `victim` is not resident.
    pub fn replace_occupant(&mut self, victim: PageId, page: PageId) -> Result<FrameId> {
        let frame_id = self.frame_of(victim).ok_or_else(|| {
            Error::InvariantViolation(format!("victim {} is not resident", victim))
        })?;
        self.slots[frame_id.0] = Some(page);
        Ok(frame_id)
    }

    /// Current occupancy, slot by slot.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Copy of the current occupancy, slot by slot.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_new_rejects_zero_frames() {
        assert!(matches!(
            FrameTable::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = FrameTable::new(3).unwrap();
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.occupied(), 0);
        assert!(!table.is_full());
        assert_eq!(table.snapshot(), vec![None, None, None]);
    }

    #[test]
    fn test_insert_fills_in_index_order() {
        let mut table = FrameTable::new(2).unwrap();

        assert_eq!(table.insert_into_empty_slot(p(7)), Some(FrameId::new(0)));
        assert_eq!(table.insert_into_empty_slot(p(0)), Some(FrameId::new(1)));
        assert!(table.is_full());

        // Full table: no slot, no change
        assert_eq!(table.insert_into_empty_slot(p(1)), None);
        assert_eq!(table.snapshot(), vec![Some(p(7)), Some(p(0))]);
    }

    #[test]
    fn test_residency() {
        let mut table = FrameTable::new(2).unwrap();
        table.insert_into_empty_slot(p(4));

        assert!(table.is_resident(p(4)));
        assert!(!table.is_resident(p(5)));
        assert_eq!(table.frame_of(p(4)), Some(FrameId::new(0)));
        assert_eq!(table.frame_of(p(5)), None);
    }

    #[test]
    fn test_replace_occupant() {
        let mut table = FrameTable::new(3).unwrap();
        table.insert_into_empty_slot(p(1));
        table.insert_into_empty_slot(p(2));
        table.insert_into_empty_slot(p(3));

        let frame = table.replace_occupant(p(2), p(9)).unwrap();
        assert_eq!(frame, FrameId::new(1));
        assert_eq!(table.snapshot(), vec![Some(p(1)), Some(p(9)), Some(p(3))]);
        assert!(!table.is_resident(p(2)));
    }

    #[test]
    fn test_replace_missing_victim_is_invariant_violation() {
        let mut table = FrameTable::new(1).unwrap();
        table.insert_into_empty_slot(p(1));

        let err = table.replace_occupant(p(5), p(6)).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        assert_eq!(table.snapshot(), vec![Some(p(1))]);
    }

    #[test]
    fn test_residents_in_slot_order() {
        let mut table = FrameTable::new(3).unwrap();
        table.insert_into_empty_slot(p(5));
        table.insert_into_empty_slot(p(3));

        let residents: Vec<_> = table.residents().collect();
        assert_eq!(
            residents,
            vec![(FrameId::new(0), p(5)), (FrameId::new(1), p(3))]
        );
    }
}
