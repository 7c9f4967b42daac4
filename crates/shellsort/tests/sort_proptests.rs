//! Property-based tests for the gap sequence and both sorters.
//!
//! The chain sorter does all of its work through relinking, so most
//! properties here compare it against the buffer sorter on the same input.

use std::collections::{HashSet, TryReserveError};

use proptest::prelude::*;
use shellsort::{Chain, NodeId, buffer, chain, gap_sequence};

// ============================================================================
//  Strategies
// ============================================================================

/// Values drawn from a narrow range so duplicates are common.
fn dense_values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-16i64..16, 0..=max_len)
}

/// Values drawn from the full `i64` range.
fn wide_values(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..=max_len)
}

fn unavailable(_: usize) -> Result<Vec<usize>, TryReserveError> {
    Vec::<u64>::new().try_reserve(usize::MAX).map(|_| Vec::new())
}

fn is_smooth(mut v: usize) -> bool {
    if v == 0 {
        return false;
    }
    while v % 2 == 0 {
        v /= 2;
    }
    while v % 3 == 0 {
        v /= 3;
    }
    v == 1
}

// ============================================================================
//  Gap sequence
// ============================================================================

proptest! {
    #[test]
    fn gaps_are_smooth_ascending_and_bounded(n in 0usize..100_000) {
        let gaps = gap_sequence(n).unwrap();
        prop_assert!(gaps.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(gaps.iter().all(|&v| v < n && is_smooth(v)));
        if n <= 1 {
            prop_assert!(gaps.is_empty());
        } else {
            prop_assert_eq!(gaps[0], 1);
        }
    }

    #[test]
    fn gaps_include_every_smooth_value(n in 0usize..3_000) {
        let gaps: HashSet<usize> = gap_sequence(n).unwrap().into_iter().collect();
        for v in 1..n {
            prop_assert_eq!(gaps.contains(&v), is_smooth(v), "v={}", v);
        }
    }
}

// ============================================================================
//  Sort correctness and cross-representation consistency
// ============================================================================

proptest! {
    #[test]
    fn buffer_sorts_like_std(data in wide_values(300)) {
        let mut actual = data.clone();
        buffer::shell_sort(&mut actual);
        let mut expected = data;
        expected.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn chain_matches_buffer(data in dense_values(300)) {
        let mut expected = data.clone();
        let expected_comparisons = buffer::shell_sort(&mut expected);

        let (sorted, comparisons) = chain::shell_sort(Chain::from(data));
        prop_assert_eq!(sorted.to_vec(), expected);
        prop_assert_eq!(comparisons, expected_comparisons);
    }

    #[test]
    fn chain_matches_buffer_wide(data in wide_values(200)) {
        let mut expected = data.clone();
        let expected_comparisons = buffer::shell_sort(&mut expected);

        let (sorted, comparisons) = chain::shell_sort(data.into_iter().collect());
        prop_assert_eq!(sorted.to_vec(), expected);
        prop_assert_eq!(comparisons, expected_comparisons);
    }

    #[test]
    fn sorting_sorted_input_is_stable_in_cost(data in dense_values(200)) {
        let mut once = data.clone();
        buffer::shell_sort(&mut once);

        let mut twice = once.clone();
        let first = buffer::shell_sort(&mut twice);
        let second = buffer::shell_sort(&mut twice);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(first, second);

        let (chain_once, _) = chain::shell_sort(Chain::from(data));
        let (chain_twice, chain_first) = chain::shell_sort(chain_once);
        let (chain_thrice, chain_second) = chain::shell_sort(chain_twice);
        prop_assert_eq!(chain_thrice.to_vec(), once);
        prop_assert_eq!(chain_first, first);
        prop_assert_eq!(chain_second, second);
    }
}

// ============================================================================
//  Node identity
// ============================================================================

proptest! {
    /// Every node present before sorting is reachable exactly once after,
    /// still carrying its original value.
    #[test]
    fn chain_relinks_without_copying(data in dense_values(200)) {
        let before = Chain::from(data);
        let tagged: Vec<(NodeId, i64)> =
            before.node_ids().map(|id| (id, before.value(id))).collect();

        let (after, _) = chain::shell_sort(before);

        let mut seen = HashSet::new();
        for id in after.node_ids() {
            prop_assert!(seen.insert(id), "node {:?} reached twice", id);
        }
        prop_assert_eq!(seen.len(), tagged.len());
        for (id, value) in tagged {
            prop_assert!(seen.contains(&id));
            prop_assert_eq!(after.value(id), value);
        }
    }
}

// ============================================================================
//  Fallback
// ============================================================================

proptest! {
    #[test]
    fn fallback_behaves_like_single_gap(data in dense_values(120)) {
        let mut forced = data.clone();
        let forced_comparisons = buffer::shell_sort_with(&mut forced, unavailable);
        let mut single = data.clone();
        let single_comparisons = buffer::shell_sort_with_gaps(&mut single, &[1]);
        prop_assert_eq!(&forced, &single);
        prop_assert_eq!(forced_comparisons, single_comparisons);

        let (chain_forced, chain_forced_comparisons) =
            chain::shell_sort_with(Chain::from(data.clone()), unavailable);
        let (chain_single, chain_single_comparisons) =
            chain::shell_sort_with_gaps(Chain::from(data), &[1]);
        prop_assert_eq!(chain_forced.to_vec(), chain_single.to_vec());
        prop_assert_eq!(chain_forced_comparisons, chain_single_comparisons);
        prop_assert_eq!(chain_forced_comparisons, forced_comparisons);
    }
}
