//! Pairing, indexing, zipping and unzipping.

use std::collections::{HashMap};
use std::hash::{Hash};

use super::{Result, Tuple, Pair};
use super::error::{check_even_length, check_same_length};

/// Splits `ts` into consecutive, non-overlapping [`Pair`]s.
///
/// Fails with [`Error::OddLength`] if `ts` has an odd number of elements.
///
/// ```
/// use seqkit::{to_pairs, Pair};
/// assert_eq!(to_pairs(&[1, 2, 3, 4]), Ok(vec![Pair::new(1, 2), Pair::new(3, 4)]));
/// assert!(to_pairs(&[1, 2, 3]).is_err());
/// ```
///
/// [`Error::OddLength`]: super::Error::OddLength
pub fn to_pairs<T: Clone>(ts: &[T]) -> Result<Vec<Pair<T>>> {
    check_even_length(ts.len())?;
    Ok(ts.chunks_exact(2).map(|c| Pair::new(c[0].clone(), c[1].clone())).collect())
}

/// Returns every pair of adjacent elements, in order.
///
/// An input of `n >= 1` elements yields `n - 1` pairs; an empty input
/// yields none.
pub fn to_overlapping_pairs<T: Clone>(ts: &[T]) -> Vec<Pair<T>> {
    ts.windows(2).map(|w| Pair::new(w[0].clone(), w[1].clone())).collect()
}

// ----------------------------------------------------------------------------

/// Pairs each element with its position.
pub fn indexed<T: Clone>(ts: &[T]) -> Vec<Tuple<usize, T>> { indexed_from(ts, 0) }

/// Pairs each element with its position plus `start`.
///
/// Positions past `usize::MAX` wrap around to zero.
///
/// ```
/// use seqkit::{indexed_from, Tuple};
/// assert_eq!(indexed_from(&["one", "two"], 1), [Tuple::new(1, "one"), Tuple::new(2, "two")]);
/// ```
pub fn indexed_from<T: Clone>(ts: &[T], start: usize) -> Vec<Tuple<usize, T>> {
    ts.iter().enumerate()
        .map(|(i, t)| Tuple::new(start.wrapping_add(i), t.clone()))
        .collect()
}

// ----------------------------------------------------------------------------

/// Combines `as_` and `bs` elementwise.
///
/// Fails with [`Error::LengthMismatch`] if the lengths differ.
///
/// ```
/// use seqkit::{zip, Tuple};
/// assert_eq!(
///     zip(&["a", "b", "c"], &[1, 2, 3]),
///     Ok(vec![Tuple::new("a", 1), Tuple::new("b", 2), Tuple::new("c", 3)]),
/// );
/// assert!(zip(&["a", "b"], &[1, 2, 3]).is_err());
/// ```
///
/// [`Error::LengthMismatch`]: super::Error::LengthMismatch
pub fn zip<A: Clone, B: Clone>(as_: &[A], bs: &[B]) -> Result<Vec<Tuple<A, B>>> {
    check_same_length(as_.len(), bs.len())?;
    Ok(as_.iter().zip(bs).map(|(a, b)| Tuple::new(a.clone(), b.clone())).collect())
}

/// Like [`zip()`], but collects the result into a map from each `A` to the
/// `B` at the same position.
///
/// If an `A` occurs more than once, the last occurrence wins.
pub fn zip_to_map<A, B>(as_: &[A], bs: &[B]) -> Result<HashMap<A, B>> where
    A: Clone + Eq + Hash,
    B: Clone,
{
    check_same_length(as_.len(), bs.len())?;
    Ok(as_.iter().cloned().zip(bs.iter().cloned()).collect())
}

/// Splits each `Tuple` of `zipped`, returning all the first components and
/// all the second components, each in their original order.
///
/// The inverse of [`zip()`].
pub fn unzip<A: Clone, B: Clone>(zipped: &[Tuple<A, B>]) -> Tuple<Vec<A>, Vec<B>> {
    let (one, two) = zipped.iter()
        .map(|t| (t.one().clone(), t.two().clone()))
        .unzip();
    Tuple::new(one, two)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Error, ErrorKind};

    const ONE_TO_FIVE: [i32; 5] = [1, 2, 3, 4, 5];
    const ONE_TO_SIX: [i32; 6] = [1, 2, 3, 4, 5, 6];
    const WORDS: [&str; 3] = ["one", "two", "three"];
    const NAMES: [&str; 3] = ["andrea", "ben", "cally"];
    const FLAGS: [bool; 3] = [true, false, true];

    #[test]
    fn pairs() {
        assert_eq!(to_pairs(&ONE_TO_SIX), Ok(vec![Pair::new(1, 2), Pair::new(3, 4), Pair::new(5, 6)]));
        assert_eq!(to_pairs::<i32>(&[]), Ok(vec![]));
        assert_eq!(to_pairs(&ONE_TO_FIVE), Err(Error::OddLength {len: 5}));
    }

    #[test]
    fn overlapping_pairs() {
        assert_eq!(to_overlapping_pairs(&ONE_TO_FIVE), [
            Pair::new(1, 2), Pair::new(2, 3), Pair::new(3, 4), Pair::new(4, 5),
        ]);
        assert_eq!(to_overlapping_pairs(&[1]), []);
        assert_eq!(to_overlapping_pairs::<i32>(&[]), []);
    }

    #[test]
    fn indexing() {
        assert_eq!(indexed(&WORDS), [Tuple::new(0, "one"), Tuple::new(1, "two"), Tuple::new(2, "three")]);
        assert_eq!(indexed_from(&WORDS, 1), [Tuple::new(1, "one"), Tuple::new(2, "two"), Tuple::new(3, "three")]);
        assert_eq!(indexed_from::<u8>(&[], 7), []);
    }

    #[test]
    fn indexing_near_the_top() {
        assert_eq!(indexed_from(&["x"], usize::MAX), [Tuple::new(usize::MAX, "x")]);
        assert_eq!(indexed_from(&["x", "y"], usize::MAX), [Tuple::new(usize::MAX, "x"), Tuple::new(0, "y")]);
    }

    #[test]
    fn zipping() {
        assert_eq!(zip(&NAMES, &FLAGS), Ok(vec![
            Tuple::new("andrea", true),
            Tuple::new("ben", false),
            Tuple::new("cally", true),
        ]));
        assert_eq!(zip(&ONE_TO_FIVE, &ONE_TO_SIX), Err(Error::LengthMismatch {left: 5, right: 6}));
        assert_eq!(zip(&["a", "b"], &[1, 2, 3]).map_err(|e| e.kind()), Err(ErrorKind::InvalidArgument));
    }

    #[test]
    fn zipping_to_map() {
        let map = zip_to_map(&NAMES, &FLAGS).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("andrea"), Some(&true));
        assert_eq!(map.get("ben"), Some(&false));
        assert_eq!(map.get("cally"), Some(&true));

        let map = zip_to_map(&["a", "b", "a"], &[1, 2, 3]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);

        assert_eq!(zip_to_map(&NAMES, &[true]), Err(Error::LengthMismatch {left: 3, right: 1}));
    }

    #[test]
    fn unzipping() {
        let zipped = [Tuple::new("andrea", true), Tuple::new("ben", false), Tuple::new("cally", true)];
        assert_eq!(unzip(&zipped), Tuple::new(NAMES.to_vec(), FLAGS.to_vec()));
        assert_eq!(unzip::<u8, u8>(&[]), Tuple::new(vec![], vec![]));
    }

    proptest! {
        #[test]
        fn zip_then_unzip_is_identity(
            abs in prop::collection::vec((any::<u16>(), any::<bool>()), 0..32),
        ) {
            let (as_, bs): (Vec<u16>, Vec<bool>) = abs.into_iter().unzip();
            let zipped = zip(&as_, &bs).unwrap();
            prop_assert_eq!(unzip(&zipped), Tuple::new(as_, bs));
        }

        #[test]
        fn pairs_flatten_to_input(v in prop::collection::vec(any::<i8>(), 0..32)) {
            match to_pairs(&v) {
                Ok(pairs) => {
                    let flat: Vec<i8> = pairs.into_iter()
                        .flat_map(|p| { let (a, b) = p.into_inner(); [a, b] })
                        .collect();
                    prop_assert_eq!(flat, v);
                },
                Err(e) => {
                    prop_assert!(v.len() % 2 == 1);
                    prop_assert_eq!(e, Error::OddLength {len: v.len()});
                },
            }
        }

        #[test]
        fn overlapping_pairs_are_adjacent(v in prop::collection::vec(any::<i8>(), 0..32)) {
            let pairs = to_overlapping_pairs(&v);
            prop_assert_eq!(pairs.len(), v.len().saturating_sub(1));
            for (i, p) in pairs.iter().enumerate() {
                prop_assert_eq!((*p.one(), *p.two()), (v[i], v[i + 1]));
            }
        }
    }
}
