//! Splitting a sequence into chunks by position.
//!
//! Every function here validates its partition size before looking at the
//! input, and returns a fresh `Vec` of fresh `Vec`s. Concatenating the
//! chunks of [`partition()`] gives back the input; the other functions drop,
//! move or repeat elements as documented.

use super::{Result};
use super::error::{check_partition_size};

/// Splits `ts` into consecutive chunks of `size` elements.
///
/// The final chunk holds whatever remains and may be shorter than `size`,
/// but is never empty. Fails if `size` is zero.
///
/// ```
/// use seqkit::{partition};
/// assert_eq!(partition(&[1, 2, 3, 4, 5, 6], 4), Ok(vec![vec![1, 2, 3, 4], vec![5, 6]]));
/// ```
pub fn partition<T: Clone>(ts: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    check_partition_size(size, 1)?;
    Ok(ts.chunks(size).map(<[T]>::to_vec).collect())
}

/// Splits `ts` into consecutive chunks of exactly `size` elements, dropping
/// any shorter remainder. Fails if `size` is zero.
pub fn discarding_partition<T: Clone>(ts: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    check_partition_size(size, 1)?;
    Ok(ts.chunks_exact(size).map(<[T]>::to_vec).collect())
}

/// Like [`partition()`], but avoids a trailing chunk of one element.
///
/// If `partition()` would end with a singleton, the last two elements are
/// set aside, the rest is partitioned as usual, and the two elements are
/// appended as a final chunk of their own. The other chunks keep their usual
/// sizes. Fails if `size < 2`.
///
/// A single-element input can only be chunked one way, and yields one
/// singleton chunk.
///
/// ```
/// use seqkit::{partition_no_singletons};
/// assert_eq!(
///     partition_no_singletons(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 4),
///     Ok(vec![vec![1, 2, 3, 4], vec![5, 6, 7], vec![8, 9]]),
/// );
/// ```
pub fn partition_no_singletons<T: Clone>(ts: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    check_partition_size(size, 2)?;
    let len = ts.len();
    if len < 2 || len % size != 1 { return partition(ts, size); }
    let (body, last_two) = ts.split_at(len - 2);
    let mut chunks = partition(body, size)?;
    chunks.push(last_two.to_vec());
    Ok(chunks)
}

/// Splits `ts` into windows of `size` elements, each starting with the last
/// element of the one before.
///
/// Windows advance by `size - 1`. The window that reaches the end of `ts`
/// is the last, and may be shorter than `size`. Fails if `size < 2`.
///
/// ```
/// use seqkit::{partition_overlapping};
/// assert_eq!(
///     partition_overlapping(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 3),
///     Ok(vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7], vec![7, 8, 9]]),
/// );
/// ```
pub fn partition_overlapping<T: Clone>(ts: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    check_partition_size(size, 2)?;
    let mut windows = Vec::new();
    let mut start = 0;
    while start < ts.len() {
        let end = usize::min(start.saturating_add(size), ts.len());
        windows.push(ts[start..end].to_vec());
        if end == ts.len() { break; }
        start = end - 1;
    }
    Ok(windows)
}

// ----------------------------------------------------------------------------
