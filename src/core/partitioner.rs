//! Fixed-size contiguous partitioning of the transaction sequence
//!
//! The partitioner is the only place that decides batch boundaries. Pairs of
//! transactions that fall on different sides of a boundary are never compared
//! by the rapid-succession rule, so the batch size is part of the detection
//! semantics, not just a performance knob.

use crate::types::DetectionError;
use std::ops::Range;

/// Splits an ordered sequence into contiguous batches of at most `batch_size`
///
/// # Guarantees
///
/// - `ceil(len / batch_size)` batches, none empty
/// - Batches are non-overlapping and cover the whole sequence in order
/// - Only the last batch may be shorter than `batch_size`
/// - Elements are never reordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    batch_size: usize,
}

impl Partitioner {
    /// Create a partitioner
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidConfiguration` if `batch_size` is zero.
    pub fn new(batch_size: usize) -> Result<Self, DetectionError> {
        if batch_size == 0 {
            return Err(DetectionError::invalid_configuration(
                "batch_size",
                "must be greater than zero",
            ));
        }

        Ok(Self { batch_size })
    }

    /// Maximum batch length
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches a sequence of `len` elements splits into
    pub fn batch_count(&self, len: usize) -> usize {
        len.div_ceil(self.batch_size)
    }

    /// Index ranges of every batch over a sequence of `len` elements
    ///
    /// Used when the sequence itself is shared (e.g. behind an `Arc`) and each
    /// worker needs only its bounds.
    pub fn ranges(&self, len: usize) -> Vec<Range<usize>> {
        (0..self.batch_count(len))
            .map(|index| {
                let start = index * self.batch_size;
                start..(start + self.batch_size).min(len)
            })
            .collect()
    }

    /// Borrowed views of every batch
    pub fn split<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        items.chunks(self.batch_size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_zero_batch_size_rejected() {
        let result = Partitioner::new(0);
        assert!(matches!(
            result,
            Err(DetectionError::InvalidConfiguration { .. })
        ));
    }

    #[rstest]
    #[case::empty(0, 100, 0)]
    #[case::single_partial(1, 100, 1)]
    #[case::exact_multiple(200, 100, 2)]
    #[case::trailing_partial(150, 100, 2)]
    #[case::batch_of_one(5, 1, 5)]
    #[case::larger_than_input(3, 10, 1)]
    fn test_batch_count(#[case] len: usize, #[case] batch_size: usize, #[case] expected: usize) {
        let partitioner = Partitioner::new(batch_size).unwrap();
        assert_eq!(partitioner.batch_count(len), expected);
        assert_eq!(partitioner.ranges(len).len(), expected);
        assert_eq!(partitioner.split(&vec![0u8; len]).len(), expected);
    }

    #[test]
    fn test_ranges_for_trailing_partial_batch() {
        let partitioner = Partitioner::new(100).unwrap();
        assert_eq!(partitioner.ranges(150), vec![0..100, 100..150]);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(1, 3)]
    #[case(7, 3)]
    #[case(9, 3)]
    #[case(10, 4)]
    #[case(23, 5)]
    fn test_split_reconstructs_original_sequence(#[case] len: usize, #[case] batch_size: usize) {
        let items: Vec<usize> = (0..len).collect();
        let partitioner = Partitioner::new(batch_size).unwrap();

        let batches = partitioner.split(&items);

        assert!(batches.iter().all(|b| !b.is_empty() && b.len() <= batch_size));
        assert!(batches
            .iter()
            .rev()
            .skip(1)
            .all(|b| b.len() == batch_size));
        assert_eq!(batches.concat(), items);
    }

    #[rstest]
    #[case(0, 4)]
    #[case(13, 4)]
    #[case(16, 4)]
    fn test_ranges_match_split(#[case] len: usize, #[case] batch_size: usize) {
        let items: Vec<usize> = (0..len).collect();
        let partitioner = Partitioner::new(batch_size).unwrap();

        let from_ranges: Vec<&[usize]> = partitioner
            .ranges(len)
            .into_iter()
            .map(|range| &items[range])
            .collect();

        assert_eq!(from_ranges, partitioner.split(&items));
    }
}
