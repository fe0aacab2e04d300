//! Property-based tests for Sequence.
//!
//! These tests verify the algebraic laws of the combinator algebra against
//! randomly generated inputs.

use lazyseq::sequence::Sequence;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates the eager image of a sequence with up to `max_size` elements.
fn elements_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

fn small_elements() -> impl Strategy<Value = Vec<i32>> {
    elements_strategy(20)
}

proptest! {
    // =========================================================================
    // Round Trips
    // =========================================================================

    #[test]
    fn prop_to_vec_inverts_from_vec(elements in small_elements()) {
        prop_assert_eq!(Sequence::from_vec(elements.clone()).to_vec(), elements);
    }

    #[test]
    fn prop_cold_traversal_is_repeatable(elements in small_elements()) {
        let seq = Sequence::from_vec(elements);
        prop_assert_eq!(seq.to_vec(), seq.to_vec());
    }

    #[test]
    fn prop_memo_preserves_content(elements in small_elements()) {
        let seq = Sequence::from_vec(elements.clone());
        prop_assert_eq!(seq.memo().to_vec(), elements);
    }

    #[test]
    fn prop_reversed_adapter_is_reverse(elements in small_elements()) {
        let mut reversed = elements.clone();
        reversed.reverse();
        prop_assert_eq!(Sequence::from_slice_reversed(&elements).to_vec(), reversed);
    }

    // =========================================================================
    // Structure
    // =========================================================================

    #[test]
    fn prop_count_matches_len(elements in small_elements()) {
        prop_assert_eq!(Sequence::from_vec(elements.clone()).count(), elements.len());
    }

    #[test]
    fn prop_is_empty_matches_len_zero(elements in small_elements()) {
        prop_assert_eq!(Sequence::from_vec(elements.clone()).is_empty(), elements.is_empty());
    }

    #[test]
    fn prop_cons_puts_element_at_head(elements in small_elements(), element: i32) {
        let seq = Sequence::from_vec(elements).cons(element);
        prop_assert_eq!(seq.head(), element);
    }

    #[test]
    fn prop_append_concatenates(left in small_elements(), right in small_elements()) {
        let appended = Sequence::from_vec(left.clone()).append(&Sequence::from_vec(right.clone()));
        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(appended.to_vec(), expected);
    }

    #[test]
    fn prop_take_drop_first_partition(elements in small_elements(), split in 0_usize..25) {
        prop_assume!(split <= elements.len());
        let seq = Sequence::from_vec(elements.clone());
        prop_assert_eq!(seq.take(split).to_vec(), elements[..split].to_vec());
        prop_assert_eq!(seq.drop_first(split).to_vec(), elements[split..].to_vec());
    }

    #[test]
    fn prop_truncate_never_exceeds_input(elements in small_elements(), count in 0_usize..40) {
        let truncated = Sequence::from_vec(elements.clone()).truncate(count).to_vec();
        let expected: Vec<i32> = elements.into_iter().take(count).collect();
        prop_assert_eq!(truncated, expected);
    }

    #[test]
    fn prop_take_while_drop_while_partition(elements in small_elements(), pivot: i32) {
        let seq = Sequence::from_vec(elements.clone());
        let prefix = seq.take_while(move |n| *n < pivot);
        let suffix = seq.drop_while(move |n| *n < pivot);
        let mut recombined = prefix.to_vec();
        recombined.extend(suffix.to_vec());
        prop_assert_eq!(recombined, elements);
    }

    // =========================================================================
    // Functor Laws for map
    // =========================================================================

    #[test]
    fn prop_map_identity(elements in small_elements()) {
        let seq = Sequence::from_vec(elements.clone());
        prop_assert_eq!(seq.map(|n| n).to_vec(), elements);
    }

    #[test]
    fn prop_map_composition(elements in small_elements()) {
        let seq = Sequence::from_vec(elements);
        let composed = seq.map(|n| n.wrapping_add(1)).map(|n| n.wrapping_mul(3));
        let fused = seq.map(|n| n.wrapping_add(1).wrapping_mul(3));
        prop_assert_eq!(composed.to_vec(), fused.to_vec());
    }

    // =========================================================================
    // Filter and flat_map
    // =========================================================================

    #[test]
    fn prop_filter_matches_eager_filter(elements in small_elements()) {
        let lazy = Sequence::from_vec(elements.clone()).filter(|n| n % 2 == 0);
        let eager: Vec<i32> = elements.into_iter().filter(|n| n % 2 == 0).collect();
        prop_assert_eq!(lazy.to_vec(), eager);
    }

    #[test]
    fn prop_flat_map_of_singleton_is_map(elements in small_elements()) {
        let seq = Sequence::from_vec(elements);
        let via_flat_map = seq.flat_map(|n| Sequence::singleton(n.wrapping_mul(2)));
        let via_map = seq.map(|n| n.wrapping_mul(2));
        prop_assert_eq!(via_flat_map.to_vec(), via_map.to_vec());
    }

    #[test]
    fn prop_flatten_of_chunks_is_identity(elements in small_elements(), size in 1_usize..6) {
        let seq = Sequence::from_vec(elements.clone());
        let reassembled = seq.chunks(size).map(Sequence::from_vec).flatten();
        prop_assert_eq!(reassembled.to_vec(), elements);
    }

    #[test]
    fn prop_chunk_sizes(elements in small_elements(), size in 1_usize..6) {
        let groups = Sequence::from_vec(elements.clone()).chunks(size).to_vec();
        for group in groups.iter().take(groups.len().saturating_sub(1)) {
            prop_assert_eq!(group.len(), size);
        }
        if let Some(last) = groups.last() {
            prop_assert!(last.len() >= 1 && last.len() <= size);
        }
        let total: usize = groups.iter().map(Vec::len).sum();
        prop_assert_eq!(total, elements.len());
    }

    // =========================================================================
    // Zipping
    // =========================================================================

    #[test]
    fn prop_zip_length_is_minimum(left in small_elements(), right in small_elements()) {
        let zipped = Sequence::from_vec(left.clone()).zip(&Sequence::from_vec(right.clone()));
        prop_assert_eq!(zipped.count(), left.len().min(right.len()));
    }

    #[test]
    fn prop_unzip_inverts_zip_on_equal_lengths(elements in small_elements()) {
        let doubled: Vec<i32> = elements.iter().map(|n| n.wrapping_mul(2)).collect();
        let pairs = Sequence::from_vec(elements.clone()).zip(&Sequence::from_vec(doubled.clone()));
        let (first, second) = pairs.unzip();
        prop_assert_eq!(first.to_vec(), elements);
        prop_assert_eq!(second.to_vec(), doubled);
    }

    // =========================================================================
    // Folds and Equality
    // =========================================================================

    #[test]
    fn prop_fold_left_matches_eager_fold(elements in small_elements()) {
        let folded = Sequence::from_vec(elements.clone())
            .fold_left(0_i64, |total, n| total + i64::from(n));
        let expected: i64 = elements.into_iter().map(i64::from).sum();
        prop_assert_eq!(folded, expected);
    }

    #[test]
    fn prop_equality_is_structural(elements in small_elements()) {
        let left = Sequence::from_vec(elements.clone());
        let right: Sequence<i32> = elements.clone().into_iter().collect();
        prop_assert!(left == right);
        prop_assert!(left == left.memo());
    }

    #[test]
    fn prop_unequal_lengths_are_unequal(elements in small_elements(), extra: i32) {
        let longer = {
            let mut extended = elements.clone();
            extended.push(extra);
            Sequence::from_vec(extended)
        };
        prop_assert!(Sequence::from_vec(elements) != longer);
    }

    // =========================================================================
    // Ranges and Cycles
    // =========================================================================

    #[test]
    fn prop_range_is_inclusive_and_ordered(start in -100_i64..100, length in 0_i64..50) {
        let end = start + length;
        let ascending = Sequence::range(start, end).to_vec();
        prop_assert_eq!(ascending, (start..=end).collect::<Vec<i64>>());

        let descending = Sequence::range(end, start).to_vec();
        prop_assert_eq!(descending, (start..=end).rev().collect::<Vec<i64>>());
    }

    #[test]
    fn prop_cycle_prefix_repeats_source(elements in elements_strategy(8), demanded in 0_usize..30) {
        prop_assume!(!elements.is_empty());
        let cycled = Sequence::from_vec(elements.clone()).cycle().truncate(demanded).to_vec();
        let expected: Vec<i32> = elements.iter().copied().cycle().take(demanded).collect();
        prop_assert_eq!(cycled, expected);
    }
}
