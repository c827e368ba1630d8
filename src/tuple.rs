//! A two-slot value type.
//!
//! [`Tuple<A, B>`] holds one `A` and one `B` and compares, hashes and orders
//! structurally, exactly like the built-in `(A, B)`, to and from which it
//! converts losslessly. It exists so that the operations of this crate can
//! name their results: [`zip()`] returns `Tuple`s, [`to_pairs()`] returns
//! [`Pair`]s.
//!
//! [`zip()`]: super::zip()
//! [`to_pairs()`]: super::to_pairs()

use std::fmt::{self, Display};

/// An immutable pair of an `A` and a `B`.
///
/// ```
/// use seqkit::Tuple;
/// let t = Tuple::new(1, "one");
/// assert_eq!(*t.one(), 1);
/// assert_eq!(*t.two(), "one");
/// assert_eq!(t, Tuple::from((1, "one")));
/// ```
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple<A, B> {
    one: A,
    two: B,
}

/// A [`Tuple`] whose slots have the same type.
pub type Pair<A> = Tuple<A, A>;

impl<A, B> Tuple<A, B> {
    pub fn new(one: A, two: B) -> Self { Self {one, two} }

    /// The first component.
    pub fn one(&self) -> &A { &self.one }

    /// The second component.
    pub fn two(&self) -> &B { &self.two }

    /// Same as [`Self::one()`].
    pub fn _1(&self) -> &A { &self.one }

    /// Same as [`Self::two()`].
    pub fn _2(&self) -> &B { &self.two }

    /// Consumes `self`, returning both components.
    pub fn into_inner(self) -> (A, B) { (self.one, self.two) }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    fn from((one, two): (A, B)) -> Self { Self::new(one, two) }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    fn from(t: Tuple<A, B>) -> Self { t.into_inner() }
}

impl<A: Display, B: Display> Display for Tuple<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.one, self.two)
    }
}

// ----------------------------------------------------------------------------
