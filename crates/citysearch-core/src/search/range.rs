// crates/citysearch-core/src/search/range.rs

//! Binary-search primitives over slices ordered by a three-way comparator.
//!
//! The comparator reports where an element sits relative to the target run:
//! `Less` before it, `Equal` inside it, `Greater` after it. Both searches
//! require the comparator to be monotone over the slice, i.e. every `Less`
//! precedes every `Equal`, which precedes every `Greater`. They cannot
//! detect a violation; use [`linear_matches_by`] as the oracle in tests.

use std::cmp::Ordering;
use std::ops::Range;

/// Range of elements comparing `Equal`, found with two binary searches.
///
/// Returns an empty range positioned at the insertion point when nothing
/// compares `Equal`.
///
/// ```rust
/// use citysearch_core::search::range::equal_range_by;
///
/// let v = [1, 3, 3, 3, 5];
/// assert_eq!(equal_range_by(&v, |x| x.cmp(&3)), 1..4);
/// assert_eq!(equal_range_by(&v, |x| x.cmp(&4)), 4..4);
/// ```
pub fn equal_range_by<T, F>(slice: &[T], mut cmp: F) -> Range<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let start = slice.partition_point(|item| cmp(item) == Ordering::Less);
    let end = start + slice[start..].partition_point(|item| cmp(item) != Ordering::Greater);
    start..end
}

/// Index of the first element comparing `Greater` (or `slice.len()`).
///
/// One-sided counterpart of [`equal_range_by`]: elements before the
/// boundary may compare `Less` or `Equal`.
///
/// ```rust
/// use citysearch_core::search::range::upper_bound_by;
/// use std::cmp::Ordering;
///
/// let v = [true, true, false];
/// assert_eq!(upper_bound_by(&v, |&b| if b { Ordering::Equal } else { Ordering::Greater }), 2);
/// ```
pub fn upper_bound_by<T, F>(slice: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    slice.partition_point(|item| cmp(item) != Ordering::Greater)
}

/// Indices of all elements comparing `Equal`, by full scan. O(n).
pub fn linear_matches_by<T, F>(slice: &[T], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&T) -> Ordering,
{
    slice
        .iter()
        .enumerate()
        .filter(|(_, item)| cmp(item) == Ordering::Equal)
        .map(|(i, _)| i)
        .collect()
}
