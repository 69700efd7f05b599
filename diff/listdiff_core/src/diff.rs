//! Contains the [`Diff`] iterator that lazily produces the edit script
//! between two sequence ranges.
//!
//! The ranges are split around their longest common run: everything before
//! the run is diffed, the run itself becomes a [`SectionKind::Copy`], and
//! everything after it is diffed. Ranges without any common element become a
//! [`SectionKind::Delete`] followed by a [`SectionKind::Insert`].

use std::{iter::FusedIterator, ops::Range};

use listdiff_guard::Error;

use crate::{
    equality::{ByKey, Equality, Natural},
    lcs,
    section::{DiffSection, SectionKind},
};

/// Pending work on the depth-first walk of the split tree.
#[derive(Debug, Clone)]
enum Step {
    Solve { first: Range<usize>, second: Range<usize> },
    Emit(DiffSection),
}

/// A lazily evaluated edit script transforming one sequence range into
/// another.
///
/// Each call to [`Iterator::next`] only does the work needed to produce the
/// next section; dropping the iterator early skips the rest of the
/// computation. The split tree is walked with an explicit stack, so long
/// inputs don't grow the call stack.
#[derive(Debug)]
pub struct Diff<'a, T, E> {
    first: &'a [T],
    second: &'a [T],
    equality: E,
    pending: Vec<Step>,
}

impl<T, E: Clone> Clone for Diff<'_, T, E> {
    fn clone(&self) -> Self {
        Self {
            first: self.first,
            second: self.second,
            equality: self.equality.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<'a, T, E: Equality<T>> Diff<'a, T, E> {
    /// Creates the iterator without checking the ranges.
    pub(crate) fn new_unchecked(
        first: &'a [T],
        first_range: Range<usize>,
        second: &'a [T],
        second_range: Range<usize>,
        equality: E,
    ) -> Self {
        let mut diff = Self { first, second, equality, pending: Vec::new() };
        diff.push_solve(first_range, second_range);

        diff
    }

    fn push_solve(&mut self, first: Range<usize>, second: Range<usize>) {
        if !first.is_empty() || !second.is_empty() {
            self.pending.push(Step::Solve { first, second });
        }
    }

    fn push_emit(&mut self, kind: SectionKind, length: usize) {
        if let Some(section) = DiffSection::try_new(kind, length) {
            self.pending.push(Step::Emit(section));
        }
    }

    fn solve(&mut self, first: Range<usize>, second: Range<usize>) {
        log::trace!("solving {first:?} against {second:?}");

        let run = lcs::find(
            self.first,
            first.clone(),
            self.second,
            second.clone(),
            &self.equality,
        );

        // pushed in reverse; the stack pops them in script order
        if let Some(run) = run {
            self.push_solve(
                run.first_range().end..first.end,
                run.second_range().end..second.end,
            );
            self.push_emit(SectionKind::Copy, run.length());
            self.push_solve(
                first.start..run.position_in_first(),
                second.start..run.position_in_second(),
            );
        } else {
            self.push_emit(SectionKind::Insert, second.len());
            self.push_emit(SectionKind::Delete, first.len());
        }
    }
}

impl<T, E: Equality<T>> Iterator for Diff<'_, T, E> {
    type Item = DiffSection;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.pending.pop() {
            match step {
                Step::Emit(section) => return Some(section),
                Step::Solve { first, second } => self.solve(first, second),
            }
        }

        None
    }
}

impl<T, E: Equality<T>> FusedIterator for Diff<'_, T, E> {}

/// Computes the edit script transforming `first[first_range]` into
/// `second[second_range]`.
///
/// The ranges are checked eagerly; the script itself is produced lazily by
/// the returned [`Diff`]. Panics raised by `equality` propagate out of
/// [`Iterator::next`].
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if either range starts past its end.
/// - [`Error::OutOfRange`] if either range ends past its sequence.
pub fn compute<'a, T, E: Equality<T>>(
    first: &'a [T],
    first_range: Range<usize>,
    second: &'a [T],
    second_range: Range<usize>,
    equality: E,
) -> Result<Diff<'a, T, E>, Error> {
    listdiff_guard::range(&first_range, first.len(), "first_range")?;
    listdiff_guard::range(&second_range, second.len(), "second_range")?;

    Ok(Diff::new_unchecked(first, first_range, second, second_range, equality))
}

/// Computes the edit script transforming `first` into `second`, comparing
/// elements with [`PartialEq`].
#[must_use]
pub fn diff<'a, T: PartialEq>(
    first: &'a [T],
    second: &'a [T],
) -> Diff<'a, T, Natural> {
    diff_with(first, second, Natural)
}

/// Computes the edit script transforming `first` into `second` with a custom
/// [`Equality`].
#[must_use]
pub fn diff_with<'a, T, E: Equality<T>>(
    first: &'a [T],
    second: &'a [T],
    equality: E,
) -> Diff<'a, T, E> {
    Diff::new_unchecked(first, 0..first.len(), second, 0..second.len(), equality)
}

/// Computes the edit script transforming `first` into `second`, treating two
/// elements as equal when `key` projects them to equal values.
#[must_use]
pub fn diff_by_key<'a, T, K: PartialEq, F: Fn(&T) -> K>(
    first: &'a [T],
    second: &'a [T],
    key: F,
) -> Diff<'a, T, ByKey<F>> {
    diff_with(first, second, ByKey(key))
}

/// Collects both inputs and returns their complete edit script.
#[must_use]
pub fn diff_iter<T: PartialEq>(
    first: impl IntoIterator<Item = T>,
    second: impl IntoIterator<Item = T>,
) -> Vec<DiffSection> {
    let first = first.into_iter().collect::<Vec<_>>();
    let second = second.into_iter().collect::<Vec<_>>();

    diff(&first, &second).collect()
}
