//! Boolean algebra over unary predicates.
//!
//! A predicate on `T` is any `Fn(&T) -> bool`. The functions in this module
//! take predicates and return new ones; none of them holds state beyond the
//! predicates it captured, so every result is as pure as its inputs.
//!
//! ```
//! use seqkit::predicate::{and, not, even};
//! let small_odd = and(not(even()), |x: &u32| *x < 10);
//! assert!(small_odd(&7));
//! assert!(!small_odd(&8));
//! assert!(!small_odd(&11));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Returns a predicate that holds when both `p` and `q` hold.
///
/// `q` is not consulted if `p` fails.
pub fn and<T: ?Sized>(
    p: impl Fn(&T) -> bool,
    q: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |t: &T| p(t) && q(t)
}

/// Returns a predicate that holds when `p` or `q` holds.
///
/// `q` is not consulted if `p` succeeds.
pub fn or<T: ?Sized>(
    p: impl Fn(&T) -> bool,
    q: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |t: &T| p(t) || q(t)
}

/// Returns a predicate that holds exactly when `p` does not.
pub fn not<T: ?Sized>(p: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |t: &T| !p(t)
}

/// Returns a predicate that holds when exactly one of `p` and `q` holds.
///
/// Equivalent to `and(or(p, q), not(and(p, q)))`, but consults each of `p`
/// and `q` once.
pub fn xor<T: ?Sized>(
    p: impl Fn(&T) -> bool,
    q: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |t: &T| p(t) != q(t)
}

// ----------------------------------------------------------------------------

/// Implemented by the primitive integer types.
pub trait Parity: Copy {
    fn is_even(self) -> bool;
}

macro_rules! impl_parity {
    ($($t:ty),*) => {
        $(
            impl Parity for $t {
                #[inline(always)]
                fn is_even(self) -> bool { self % 2 == 0 }
            }
        )*
    }
}

impl_parity!(i8, i16, i32, i64, i128, isize);
impl_parity!(u8, u16, u32, u64, u128, usize);

/// Returns a predicate that holds for even integers.
///
/// ```
/// use seqkit::predicate::{even};
/// assert!(even()(&-4i64));
/// assert!(!even()(&7u8));
/// ```
pub fn even<I: Parity>() -> impl Fn(&I) -> bool + Copy {
    |i: &I| i.is_even()
}

/// Returns a predicate that holds for odd integers. Same as `not(even())`.
pub fn odd<I: Parity>() -> impl Fn(&I) -> bool + Copy {
    |i: &I| !even()(i)
}

// ----------------------------------------------------------------------------

/// Implemented by collections that know how many elements they hold.
pub trait Length {
    fn length(&self) -> usize;
}

impl<T> Length for [T] {
    fn length(&self) -> usize { self.len() }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize { N }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize { self.len() }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize { self.len() }
}

impl Length for str {
    fn length(&self) -> usize { self.len() }
}

impl Length for String {
    fn length(&self) -> usize { self.len() }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize { self.len() }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize { self.len() }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize { self.len() }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize { self.len() }
}

/// Returns a predicate that holds for collections with no elements.
///
/// ```
/// use seqkit::predicate::{empty, not};
/// let v: Vec<Vec<u8>> = vec![vec![], vec![1], vec![]];
/// let non_empty: Vec<_> = v.iter().filter(|c| not(empty())(*c)).collect();
/// assert_eq!(non_empty, [&vec![1]]);
/// ```
pub fn empty<C: ?Sized + Length>() -> impl Fn(&C) -> bool + Copy {
    |c: &C| c.length() == 0
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::{Cell};

    use super::*;

    fn assert_truth_table<F: Fn(&(bool, bool)) -> bool>(f: F, expected: [bool; 4]) {
        let inputs = [(false, false), (false, true), (true, false), (true, true)];
        for (input, want) in inputs.iter().zip(expected) {
            assert_eq!(f(input), want, "input {:?}", input);
        }
    }

    fn left(t: &(bool, bool)) -> bool { t.0 }
    fn right(t: &(bool, bool)) -> bool { t.1 }

    #[test]
    fn truth_tables() {
        assert_truth_table(and(left, right), [false, false, false, true]);
        assert_truth_table(or(left, right), [false, true, true, true]);
        assert_truth_table(xor(left, right), [false, true, true, false]);
        assert_truth_table(not(left), [true, true, false, false]);
    }

    #[test]
    fn xor_matches_its_definition() {
        let definition = and(or(left, right), not(and(left, right)));
        assert_truth_table(xor(left, right), [
            definition(&(false, false)),
            definition(&(false, true)),
            definition(&(true, false)),
            definition(&(true, true)),
        ]);
    }

    #[test]
    fn short_circuit() {
        let calls = Cell::new(0);
        let counted = |_: &i32| { calls.set(calls.get() + 1); true };
        assert!(!and(|_: &i32| false, &counted)(&0));
        assert!(or(|_: &i32| true, &counted)(&0));
        assert_eq!(calls.get(), 0);
        assert!(and(|_: &i32| true, &counted)(&0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn parity() {
        let evens: Vec<i32> = (1..=6).filter(even()).collect();
        assert_eq!(evens, [2, 4, 6]);
        let odds: Vec<i32> = (1..=6).filter(odd()).collect();
        assert_eq!(odds, [1, 3, 5]);
        assert!(even()(&0u8));
        assert!(odd()(&-3i16));
        assert!(even()(&u128::MAX.wrapping_add(1)));
        assert!(odd()(&usize::MAX));
    }

    #[test]
    fn emptiness() {
        assert!(empty()(&Vec::<u8>::new()));
        assert!(!empty()(&vec![0]));
        assert!(empty()(""));
        assert!(!empty()(&String::from("x")));
        assert!(empty()(&[0u8; 0][..]));
        assert!(empty()(&HashMap::<u8, u8>::new()));
        assert!(!empty()(&BTreeSet::from([1])));
        assert!(not(empty())(&[1, 2, 3]));
    }
}
