//! Merging of two ordered lazy sequences.
//!
//! Each source is pulled at most one element ahead of what has been
//! yielded, so infinite sources merge without buffering.

use std::cmp::Ordering;
use std::iter::{Fuse, FusedIterator};

/// Comparator used by [`merge_sorted`].
pub type PartialOrderFn<T> = fn(&T, &T) -> Ordering;

/// Lazy merge of two non-decreasing sequences.
///
/// Created by [`merge_sorted`] or [`merge_sorted_by`].
pub struct MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    source_a: Fuse<A>,
    source_b: Fuse<B>,
    pending_a: Option<A::Item>,
    pending_b: Option<A::Item>,
    cmp: F,
}

/// Merge two ordered sequences into one non-decreasing sequence.
///
/// Both arguments are factories: each is called once to obtain its
/// source. The sources must already be non-decreasing; this is not
/// checked and unsorted input produces an unspecified order (but never
/// drops a value). Equal values are yielded from `source_a` first.
/// Incomparable values (`NaN`) are treated as equal.
///
/// # Example
///
/// ```
/// use kata_core::sequence::merge_sorted;
///
/// let merged: Vec<i32> = merge_sorted(|| vec![1, 3, 5], || vec![2, 4, 6]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
///
/// // Infinite sources are fine as long as the consumer stops pulling.
/// let odds = || (0..).map(|n| 2 * n + 1);
/// let evens = || (0..).map(|n| 2 * n);
/// let prefix: Vec<u64> = merge_sorted(odds, evens).take(5).collect();
/// assert_eq!(prefix, vec![0, 1, 2, 3, 4]);
/// ```
pub fn merge_sorted<A, B, FA, FB>(
    source_a: FA,
    source_b: FB,
) -> MergeSorted<A::IntoIter, B::IntoIter, PartialOrderFn<A::Item>>
where
    FA: FnOnce() -> A,
    FB: FnOnce() -> B,
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: PartialOrd,
{
    merge_sorted_by(
        source_a,
        source_b,
        partial_order::<A::Item> as PartialOrderFn<A::Item>,
    )
}

/// Like [`merge_sorted`] with a caller-supplied ordering.
pub fn merge_sorted_by<A, B, FA, FB, F>(
    source_a: FA,
    source_b: FB,
    cmp: F,
) -> MergeSorted<A::IntoIter, B::IntoIter, F>
where
    FA: FnOnce() -> A,
    FB: FnOnce() -> B,
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    MergeSorted {
        source_a: source_a().into_iter().fuse(),
        source_b: source_b().into_iter().fuse(),
        pending_a: None,
        pending_b: None,
        cmp,
    }
}

fn partial_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<A, B, F> Iterator for MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_a.is_none() {
            self.pending_a = self.source_a.next();
        }
        if self.pending_b.is_none() {
            self.pending_b = self.source_b.next();
        }

        match (self.pending_a.take(), self.pending_b.take()) {
            (Some(a), Some(b)) => {
                if (self.cmp)(&b, &a) == Ordering::Less {
                    self.pending_a = Some(a);
                    Some(b)
                } else {
                    self.pending_b = Some(b);
                    Some(a)
                }
            }
            // One side is exhausted: drain the other verbatim.
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending =
            usize::from(self.pending_a.is_some()) + usize::from(self.pending_b.is_some());
        let (lo_a, hi_a) = self.source_a.size_hint();
        let (lo_b, hi_b) = self.source_b.size_hint();

        let lo = lo_a.saturating_add(lo_b).saturating_add(pending);
        let hi = match (hi_a, hi_b) {
            (Some(a), Some(b)) => a.checked_add(b).and_then(|n| n.checked_add(pending)),
            _ => None,
        };
        (lo, hi)
    }
}

impl<A, B, F> FusedIterator for MergeSorted<A, B, F>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> Ordering,
{
}
