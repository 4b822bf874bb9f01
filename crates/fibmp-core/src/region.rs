//! Working region: the single allocation behind one computation.
//!
//! The region is a fixed array of equally sized digit-vector slots. Drivers
//! refer to slots through plain `usize` handles and relabel roles
//! ("current" vs "scratch") by swapping handles, so a step never copies a
//! digit vector.

use tracing::debug;

use crate::capacity::{capacity_for, fits_in_allocation};
use crate::digit::{Digit, DIGIT_BYTES};
use crate::strategy::FibError;

/// Largest slot count any driver asks for (three 3-entry tuples).
pub const MAX_SLOTS: usize = 9;

/// One zero-initialised allocation split into `slots` digit vectors of
/// `capacity` digits each.
#[derive(Debug)]
pub struct WorkingRegion {
    words: Vec<Digit>,
    capacity: usize,
}

/// Read-only view of every slot not borrowed mutably by [`WorkingRegion::split`].
pub struct SlotReader<'a> {
    slots: [Option<&'a [Digit]>; MAX_SLOTS],
}

impl<'a> SlotReader<'a> {
    /// The digits of `slot`.
    ///
    /// # Panics
    ///
    /// If `slot` is one of the mutably borrowed targets.
    #[must_use]
    pub fn get(&self, slot: usize) -> &'a [Digit] {
        match self.slots.get(slot).copied().flatten() {
            Some(digits) => digits,
            None => panic!("slot {slot} is borrowed mutably or out of range"),
        }
    }
}

impl WorkingRegion {
    /// Allocate `slots` digit vectors of `capacity` digits each.
    pub fn new(slots: usize, capacity: usize) -> Result<Self, FibError> {
        debug_assert!(slots <= MAX_SLOTS, "at most {MAX_SLOTS} slots");
        debug_assert!(capacity > 0, "slots must hold at least one digit");
        let total = slots
            .checked_mul(capacity)
            .filter(|&words| fits_in_allocation(words))
            .ok_or(FibError::RegionOverflow { slots, capacity })?;

        debug!(
            slots,
            capacity,
            bytes = total * DIGIT_BYTES,
            "allocating working region"
        );
        Ok(Self {
            words: vec![0; total],
            capacity,
        })
    }

    /// Allocate `slots` digit vectors sized for computing F(`index`).
    pub fn for_index(index: u64, slots: usize) -> Result<Self, FibError> {
        let capacity = capacity_for(index)?;
        Self::new(slots, capacity).map_err(|_| FibError::CapacityOverflow { index })
    }

    /// Digits per slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.words.len() / self.capacity
    }

    /// The digits of `slot`.
    #[must_use]
    pub fn slot(&self, slot: usize) -> &[Digit] {
        let start = slot * self.capacity;
        &self.words[start..start + self.capacity]
    }

    /// The digits of `slot`, mutably.
    pub fn slot_mut(&mut self, slot: usize) -> &mut [Digit] {
        let start = slot * self.capacity;
        &mut self.words[start..start + self.capacity]
    }

    /// Borrow the `targets` slots mutably and every other slot read-only.
    ///
    /// # Panics
    ///
    /// If a target is repeated or out of range.
    pub fn split<const M: usize>(
        &mut self,
        targets: [usize; M],
    ) -> ([&mut [Digit]; M], SlotReader<'_>) {
        let mut borrowed: [Option<&mut [Digit]>; M] = std::array::from_fn(|_| None);
        let mut shared: [Option<&[Digit]>; MAX_SLOTS] = [None; MAX_SLOTS];

        for (slot, chunk) in self.words.chunks_exact_mut(self.capacity).enumerate() {
            match targets.iter().position(|&t| t == slot) {
                Some(pos) if borrowed[pos].is_none() => borrowed[pos] = Some(chunk),
                _ => shared[slot] = Some(&*chunk),
            }
        }

        let borrowed = borrowed.map(|chunk| match chunk {
            Some(chunk) => chunk,
            None => panic!("split targets {targets:?} must be distinct slots in range"),
        });
        (borrowed, SlotReader { slots: shared })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_zeroed() {
        let region = WorkingRegion::new(3, 4).unwrap();
        assert_eq!(region.slots(), 3);
        assert_eq!(region.capacity(), 4);
        for slot in 0..3 {
            assert_eq!(region.slot(slot), &[0, 0, 0, 0]);
        }
    }

    #[test]
    fn slots_do_not_overlap() {
        let mut region = WorkingRegion::new(2, 3).unwrap();
        region.slot_mut(1)[0] = 9;
        assert_eq!(region.slot(0), &[0, 0, 0]);
        assert_eq!(region.slot(1), &[9, 0, 0]);
    }

    #[test]
    fn split_hands_out_targets_and_readers() {
        let mut region = WorkingRegion::new(4, 2).unwrap();
        region.slot_mut(0)[0] = 1;
        region.slot_mut(3)[1] = 4;

        let ([a, b], reader) = region.split([2, 1]);
        a[0] = reader.get(0)[0] + 10;
        b[1] = reader.get(3)[1] + 20;

        assert_eq!(region.slot(2), &[11, 0]);
        assert_eq!(region.slot(1), &[0, 24]);
    }

    #[test]
    #[should_panic(expected = "borrowed mutably")]
    fn reader_refuses_borrowed_slot() {
        let mut region = WorkingRegion::new(2, 2).unwrap();
        let ([_dest], reader) = region.split([0]);
        let _ = reader.get(0);
    }

    #[test]
    #[should_panic(expected = "distinct slots")]
    fn split_rejects_repeated_targets() {
        let mut region = WorkingRegion::new(2, 2).unwrap();
        let _ = region.split([1, 1]);
    }

    #[test]
    fn oversized_region_is_an_error() {
        let err = WorkingRegion::new(4, usize::MAX / 2).unwrap_err();
        assert!(matches!(err, FibError::RegionOverflow { slots: 4, .. }));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn max_index_region_overflows() {
        assert_eq!(
            WorkingRegion::for_index(u64::MAX, 2).unwrap_err(),
            FibError::CapacityOverflow { index: u64::MAX }
        );
    }
}
