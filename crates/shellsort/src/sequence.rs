use std::borrow::Cow;
use std::collections::TryReserveError;

/// Gap sequence used when the real one cannot be materialized.
pub const FALLBACK_GAPS: [usize; 1] = [1];

/// All `2^p * 3^q < n`, ascending. Empty for `n <= 1`.
///
/// The values are produced power-of-two-major, so they are sorted before
/// returning. Distinct `(p, q)` pairs give distinct products, so there is
/// nothing to deduplicate.
pub fn gap_sequence(n: usize) -> Result<Vec<usize>, TryReserveError> {
    if n <= 1 {
        return Ok(Vec::new());
    }

    let count = for_each_smooth(n, |_| {});

    let mut gaps = Vec::new();
    gaps.try_reserve_exact(count)?;
    for_each_smooth(n, |v| gaps.push(v));
    gaps.sort_unstable();

    debug_assert_eq!(gaps.len(), count);
    Ok(gaps)
}

/// Substitutes [`FALLBACK_GAPS`] for an unavailable sequence.
pub fn resolve_gaps(generated: Result<Vec<usize>, TryReserveError>) -> Cow<'static, [usize]> {
    match generated {
        Ok(gaps) => Cow::Owned(gaps),
        Err(err) => {
            tracing::warn!(error = %err, "gap sequence unavailable, using single-gap fallback");
            Cow::Borrowed(&FALLBACK_GAPS)
        }
    }
}

fn for_each_smooth(n: usize, mut f: impl FnMut(usize)) -> usize {
    let mut count = 0usize;
    let mut pow2 = 1usize;
    while pow2 < n {
        let mut v = pow2;
        while v < n {
            f(v);
            count += 1;
            match v.checked_mul(3) {
                Some(next) => v = next,
                None => break,
            }
        }
        match pow2.checked_mul(2) {
            Some(next) => pow2 = next,
            None => break,
        }
    }
    count
}
