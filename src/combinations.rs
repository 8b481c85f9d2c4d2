//! Combinations

use smallvec::SmallVec;

/// A single combination drawn from a roster.
pub type Combination<T> = SmallVec<[T; 4]>;

/// Returns every `k`-element combination of `roster`, preserving roster order.
///
/// Each combination fixes one element and extends it with the `k - 1` combinations of the
/// elements after it, for every starting position. Returns nothing when `k` is zero or larger
/// than the roster.
pub fn combinations<T: Copy>(roster: &[T], k: usize) -> Vec<Combination<T>> {
    if k == 0 || k > roster.len() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut current = Combination::new();

    extend(roster, k, &mut current, &mut out);

    out
}

fn extend<T: Copy>(
    rest: &[T],
    remaining: usize,
    current: &mut Combination<T>,
    out: &mut Vec<Combination<T>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }

    // Stop early once too few elements are left to finish a combination.
    let starts = (rest.len() + 1).saturating_sub(remaining);

    for (position, first) in rest.iter().take(starts).enumerate() {
        current.push(*first);
        extend(rest.get(position + 1..).unwrap_or_default(), remaining - 1, current, out);
        current.pop();
    }
}

/// Number of `k`-element combinations of `n` elements.
///
/// Saturates at `usize::MAX`.
pub fn count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);

    (0..k)
        .try_fold(1usize, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))
        .unwrap_or(usize::MAX)
}
