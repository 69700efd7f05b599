//! Contains the [`Equality`] trait used to decide whether two elements match
//! while computing a diff.

/// A predicate deciding whether two elements of a sequence are equal.
///
/// Implementations are expected to be reflexive and symmetric. The diff engine
/// doesn't verify either property; a predicate that violates them simply
/// produces fewer matches.
pub trait Equality<T: ?Sized> {
    /// Returns `true` if `first` and `second` should be treated as the same
    /// element.
    fn equals(&self, first: &T, second: &T) -> bool;
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Equality<T> for F {
    fn equals(&self, first: &T, second: &T) -> bool { self(first, second) }
}

/// Compares elements with their [`PartialEq`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Natural;

impl<T: PartialEq + ?Sized> Equality<T> for Natural {
    fn equals(&self, first: &T, second: &T) -> bool { first == second }
}

/// Compares elements by a key projected out of each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: PartialEq, F: Fn(&T) -> K> Equality<T> for ByKey<F> {
    fn equals(&self, first: &T, second: &T) -> bool {
        (self.0)(first) == (self.0)(second)
    }
}
