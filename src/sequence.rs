//! Positional access, slicing, searching and other single-sequence helpers.
//!
//! ```text
//! [1, 2, 3, 4, 5]
//!  ^               head
//!     ^--------^   tail
//!  ^--------^      init
//!              ^   last
//!     ^-----^      mid
//! ```
//!
//! Inputs are borrowed and never modified. Helpers that return a sequence
//! return a freshly allocated `Vec` of clones.

use super::{Result};
use super::error::{check_index, check_min_length, check_range};

/// Returns the element at `index`.
///
/// Fails with [`Error::IndexOutOfBounds`] if `index >= ts.len()`.
///
/// [`Error::IndexOutOfBounds`]: super::Error::IndexOutOfBounds
pub fn get<T>(ts: &[T], index: usize) -> Result<&T> {
    Ok(&ts[check_index(index, ts.len())?])
}

/// Returns the first element. Fails if `ts` is empty.
pub fn head<T>(ts: &[T]) -> Result<&T> { get(ts, 0) }

/// Same as [`head()`].
pub fn first<T>(ts: &[T]) -> Result<&T> { head(ts) }

/// Returns the final element. Fails if `ts` is empty.
pub fn last<T>(ts: &[T]) -> Result<&T> {
    match ts.len() {
        0 => get(ts, 0),
        len => get(ts, len - 1),
    }
}

/// Returns a copy of `ts[from..to]`.
///
/// Fails with [`Error::RangeOutOfBounds`] unless `from <= to <= ts.len()`.
///
/// ```
/// use seqkit::{slice, Error};
/// let v = [1, 2, 3, 4, 5, 6];
/// assert_eq!(slice(&v, 2, 4), Ok(vec![3, 4]));
/// assert_eq!(slice(&v, 6, 6), Ok(vec![]));
/// assert_eq!(slice(&v, 4, 7), Err(Error::RangeOutOfBounds {from: 4, to: 7, len: 6}));
/// ```
///
/// [`Error::RangeOutOfBounds`]: super::Error::RangeOutOfBounds
pub fn slice<T: Clone>(ts: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    Ok(ts[check_range(from, to, ts.len())?].to_vec())
}

/// Returns all elements but the first. Fails if `ts` is empty.
pub fn tail<T: Clone>(ts: &[T]) -> Result<Vec<T>> {
    let len = check_min_length(ts.len(), 1)?;
    slice(ts, 1, len)
}

/// Returns all elements but the last. Fails if `ts` is empty.
pub fn init<T: Clone>(ts: &[T]) -> Result<Vec<T>> {
    let len = check_min_length(ts.len(), 1)?;
    slice(ts, 0, len - 1)
}

/// Returns all elements but the first and the last. Fails if `ts` has fewer
/// than two elements.
pub fn mid<T: Clone>(ts: &[T]) -> Result<Vec<T>> {
    let len = check_min_length(ts.len(), 2)?;
    slice(ts, 1, len - 1)
}

// ----------------------------------------------------------------------------

/// Returns the first element satisfying `predicate`, if any.
pub fn find<T>(ts: &[T], predicate: impl Fn(&T) -> bool) -> Option<&T> {
    ts.iter().find(|t| predicate(t))
}

/// Returns the position of the first element satisfying `predicate`, if any.
pub fn find_index<T>(ts: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    ts.iter().position(predicate)
}

/// Returns every position at which `ts` holds an element equal to `t`, in
/// increasing order.
///
/// ```
/// use seqkit::{indices_of};
/// assert_eq!(indices_of(&["foo", "bar", "baz", "bar"], &"bar"), [1, 3]);
/// ```
pub fn indices_of<T: PartialEq>(ts: &[T], t: &T) -> Vec<usize> {
    ts.iter().enumerate()
        .filter(|(_, x)| *x == t)
        .map(|(i, _)| i)
        .collect()
}

/// Returns the elements that satisfy `predicate`, in their original order.
pub fn apply_predicate<T: Clone>(ts: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    ts.iter().filter(|t| predicate(t)).cloned().collect()
}

/// Returns the elements of `ts` in reverse order.
pub fn reverse<T: Clone>(ts: &[T]) -> Vec<T> {
    ts.iter().rev().cloned().collect()
}

// ----------------------------------------------------------------------------

/// Returns `times` copies of `t`.
pub fn fill<T: Clone>(t: T, times: usize) -> Vec<T> { vec![t; times] }

/// Returns `times` values, each obtained by calling `f` once, in call order.
///
/// ```
/// use seqkit::{fill_with};
/// let mut counter = 0;
/// let labels = fill_with(3, || { counter += 1; format!("foo{}", counter) });
/// assert_eq!(labels, ["foo1", "foo2", "foo3"]);
/// ```
pub fn fill_with<T>(times: usize, f: impl FnMut() -> T) -> Vec<T> {
    std::iter::repeat_with(f).take(times).collect()
}

/// Concatenates `seqs` in order.
pub fn flatten<T: Clone, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let mut ret = Vec::with_capacity(seqs.iter().map(|s| s.as_ref().len()).sum());
    for s in seqs { ret.extend_from_slice(s.as_ref()); }
    ret
}

/// Returns `true` if `ts` is absent or holds no elements.
pub fn is_none_or_empty<T>(ts: Option<&[T]>) -> bool {
    ts.map_or(true, <[T]>::is_empty)
}

/// Returns `true` if `ts` is present and holds at least one element.
pub fn not_none_or_empty<T>(ts: Option<&[T]>) -> bool { !is_none_or_empty(ts) }

// ----------------------------------------------------------------------------
