use std::collections::TryReserveError;

use crate::sequence::{gap_sequence, resolve_gaps};

/// Sorts `data` ascending in place and returns the number of comparisons.
pub fn shell_sort(data: &mut [i64]) -> u64 {
    shell_sort_with(data, gap_sequence)
}

/// Like [`shell_sort`], but takes the gap sequence from `generator`.
///
/// An `Err` from the generator falls back to a single adjacent-gap round.
pub fn shell_sort_with<G>(data: &mut [i64], generator: G) -> u64
where
    G: FnOnce(usize) -> Result<Vec<usize>, TryReserveError>,
{
    let gaps = resolve_gaps(generator(data.len()));
    shell_sort_with_gaps(data, &gaps)
}

/// Runs one bounded round per gap, walking `gaps` from the back.
///
/// `gaps` is expected ascending and ending the walk at 1.
pub fn shell_sort_with_gaps(data: &mut [i64], gaps: &[usize]) -> u64 {
    let len = data.len();
    let mut comparisons = 0u64;

    for &gap in gaps.iter().rev() {
        let mut limit = len;
        let mut passes = 0u32;
        let before = comparisons;
        loop {
            passes += 1;
            let (n_comp, last_swap) = bounded_pass(data, gap, limit);
            comparisons += n_comp;
            match last_swap {
                Some(pos) => limit = pos,
                None => break,
            }
        }
        tracing::trace!(gap, passes, comparisons = comparisons - before, "buffer round");
    }

    tracing::debug!(len, gaps = gaps.len(), comparisons, "buffer sorted");
    comparisons
}

/// Compares `data[i - gap]` with `data[i]` for `i` in `gap..limit`.
///
/// Returns the comparisons made and the index of the last swap, if any.
#[inline]
fn bounded_pass(data: &mut [i64], gap: usize, limit: usize) -> (u64, Option<usize>) {
    let limit = limit.min(data.len());
    let mut comparisons = 0u64;
    let mut last_swap = None;
    for i in gap..limit {
        comparisons += 1;
        if data[i - gap] > data[i] {
            data.swap(i - gap, i);
            last_swap = Some(i);
        }
    }
    (comparisons, last_swap)
}
