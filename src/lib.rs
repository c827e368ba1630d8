//! A small library of generic sequence utilities.
//!
//! The heart of the crate is the partitioning and pairing family:
//! [`partition()`] and its variants split a slice into chunks by position,
//! [`to_pairs()`] and [`to_overlapping_pairs()`] group neighbouring elements,
//! and [`zip()`], [`unzip()`] and [`indexed()`] move between parallel
//! sequences and sequences of [`Tuple`]s.
//!
//! ```
//! use seqkit::{partition_no_singletons, zip, unzip, Tuple};
//! let chunks = partition_no_singletons(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 4).unwrap();
//! assert_eq!(chunks, [vec![1, 2, 3, 4], vec![5, 6, 7], vec![8, 9]]);
//!
//! let zipped = zip(&["a", "b"], &[1, 2]).unwrap();
//! assert_eq!(unzip(&zipped), Tuple::new(vec!["a", "b"], vec![1, 2]));
//! ```
//!
//! Around that sit positional helpers such as [`head()`], [`slice()`] and
//! [`find()`], the [`predicate`] combinators, and downward-counting integer
//! ranges ([`reverse_range()`]).
//!
//! Every function borrows its input and returns freshly allocated output;
//! nothing here keeps state between calls. Functions that can refuse their
//! arguments return a [`Result`], and refuse before producing any output.
//! Absent results, such as a [`find()`] that matches nothing, are `None`
//! rather than errors.

mod error;
pub use error::{Error, ErrorKind, Result};

pub mod tuple;
pub use tuple::{Tuple, Pair};

pub mod predicate;

mod sequence;
pub use sequence::{
    get, head, first, last, slice, tail, init, mid,
    find, find_index, indices_of, apply_predicate, reverse,
    fill, fill_with, flatten, is_none_or_empty, not_none_or_empty,
};

mod partition;
pub use partition::{partition, discarding_partition, partition_no_singletons, partition_overlapping};

mod pairs;
pub use pairs::{to_pairs, to_overlapping_pairs, indexed, indexed_from, zip, zip_to_map, unzip};

mod range;
pub use range::{ReverseRange, reverse_range, reverse_range_closed, from_optionals, repeat};
