//! The ways an operation can refuse its arguments.
//!
//! Every failure is detected before any output is built, so an `Err` never
//! comes with a partial result. Failures fall into two [`ErrorKind`]s:
//! arguments that the caller could never have made work
//! ([`ErrorKind::InvalidArgument`]) and positions outside a sequence
//! ([`ErrorKind::OutOfBounds`]).

use thiserror::{Error as ThisError};
use tracing::{debug};

/// Shorthand for results whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Returned by operations whose preconditions were violated.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A partition size was below the minimum for the operation.
    #[error("partition size {size} is below the minimum of {minimum}")]
    PartitionSize { size: usize, minimum: usize },

    /// Disjoint pairing was asked to pair an odd number of elements.
    #[error("cannot pair an odd number of elements ({len})")]
    OddLength { len: usize },

    /// Two sequences that must correspond elementwise have different lengths.
    #[error("cannot zip sequences of different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    /// A position was not less than the length of the sequence.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A sequence had fewer elements than the operation needs to remove.
    #[error("sequence of length {len} is shorter than {minimum}")]
    TooShort { len: usize, minimum: usize },

    /// A half-open range was reversed or extended past the sequence.
    #[error("range {from}..{to} is out of bounds for length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
}

/// The two families of [`Error`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// A precondition on the arguments did not hold.
    InvalidArgument,
    /// An index or range fell outside the sequence.
    OutOfBounds,
}

impl Error {
    /// Which of the two [`ErrorKind`]s this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PartitionSize {..} |
            Error::OddLength {..} |
            Error::LengthMismatch {..} => ErrorKind::InvalidArgument,
            Error::IndexOutOfBounds {..} |
            Error::TooShort {..} |
            Error::RangeOutOfBounds {..} => ErrorKind::OutOfBounds,
        }
    }
}

// ----------------------------------------------------------------------------

/// Returns `Ok(())` if `size >= minimum`.
pub(crate) fn check_partition_size(size: usize, minimum: usize) -> Result<()> {
    if size < minimum {
        debug!(size, minimum, "rejecting partition size");
        return Err(Error::PartitionSize {size, minimum});
    }
    Ok(())
}

/// Returns `Ok(())` if `left == right`.
pub(crate) fn check_same_length(left: usize, right: usize) -> Result<()> {
    if left != right {
        debug!(left, right, "rejecting sequences of different lengths");
        return Err(Error::LengthMismatch {left, right});
    }
    Ok(())
}

/// Returns `Ok(())` if `len` is even.
pub(crate) fn check_even_length(len: usize) -> Result<()> {
    if len % 2 != 0 {
        debug!(len, "rejecting odd number of elements");
        return Err(Error::OddLength {len});
    }
    Ok(())
}

/// Returns `Ok(index)` if `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
    if index >= len {
        debug!(index, len, "rejecting index");
        return Err(Error::IndexOutOfBounds {index, len});
    }
    Ok(index)
}

/// Returns `Ok(len)` if `len >= minimum`.
pub(crate) fn check_min_length(len: usize, minimum: usize) -> Result<usize> {
    if len < minimum {
        debug!(len, minimum, "rejecting short sequence");
        return Err(Error::TooShort {len, minimum});
    }
    Ok(len)
}

/// Returns `Ok(from..to)` if `from <= to <= len`.
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<std::ops::Range<usize>> {
    if from > to || to > len {
        debug!(from, to, len, "rejecting range");
        return Err(Error::RangeOutOfBounds {from, to, len});
    }
    Ok(from..to)
}

// ----------------------------------------------------------------------------
