//! Integer ranges that count downwards, and other lazy sequences.

use std::iter::{Rev};
use std::ops::{Range, RangeInclusive};

/// A finite range of integers visited from the top down.
///
/// A `ReverseRange` is a value, not an iterator: iterating it by reference
/// (or via [`Self::iter()`]) leaves it untouched, so it can be iterated any
/// number of times with identical results.
///
/// ```
/// use seqkit::{reverse_range};
/// let r = reverse_range(0, 5);
/// assert_eq!(r.iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
/// assert_eq!((&r).into_iter().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ReverseRange<R>(R);

impl<R: Clone + DoubleEndedIterator> ReverseRange<R> {
    /// Returns an iterator over the range, from the top down.
    pub fn iter(&self) -> Rev<R> { self.0.clone().rev() }
}

impl<R: DoubleEndedIterator> IntoIterator for ReverseRange<R> {
    type Item = R::Item;
    type IntoIter = Rev<R>;
    fn into_iter(self) -> Self::IntoIter { self.0.rev() }
}

impl<'a, R: Clone + DoubleEndedIterator> IntoIterator for &'a ReverseRange<R> {
    type Item = R::Item;
    type IntoIter = Rev<R>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Counts down through the half-open range `[from, to)`, i.e. from `to - 1`
/// to `from` inclusive. Empty if `from >= to`.
pub fn reverse_range<I>(from: I, to: I) -> ReverseRange<Range<I>> where
    Range<I>: DoubleEndedIterator<Item=I>,
{
    ReverseRange(from..to)
}

/// Counts down through the closed range `[from, to]`, i.e. from `to` to
/// `from` inclusive. Empty if `from > to`.
///
/// ```
/// use seqkit::{reverse_range_closed};
/// assert_eq!(reverse_range_closed(0, 5).into_iter().collect::<Vec<_>>(), [5, 4, 3, 2, 1, 0]);
/// ```
pub fn reverse_range_closed<I>(from: I, to: I) -> ReverseRange<RangeInclusive<I>> where
    RangeInclusive<I>: DoubleEndedIterator<Item=I>,
{
    ReverseRange(from..=to)
}

// ----------------------------------------------------------------------------

/// Lazily yields the present values of `maybe_ts`, in order.
///
/// ```
/// use seqkit::{from_optionals};
/// let words: Vec<_> = from_optionals([Some("foo"), None, Some("bar")]).collect();
/// assert_eq!(words, ["foo", "bar"]);
/// ```
pub fn from_optionals<T>(
    maybe_ts: impl IntoIterator<Item=Option<T>>,
) -> impl Iterator<Item=T> {
    maybe_ts.into_iter().flatten()
}

/// Calls `f(i)` for each `i` in `0..times`, in increasing order.
pub fn repeat(times: usize, mut f: impl FnMut(usize)) {
    for i in 0..times { f(i); }
}

// ----------------------------------------------------------------------------
