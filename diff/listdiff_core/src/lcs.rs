//! Contains the search for the longest run of equal elements shared by two
//! sequence ranges.
//!
//! The search is a plain pairwise scan and is quadratic in the sizes of the
//! ranges. It's intended for lists of modest size, not documents.

use std::ops::Range;

use getset::CopyGetters;
use listdiff_guard::Error;

use crate::equality::Equality;

/// A run of pairwise-equal elements found in both searched ranges.
///
/// The run is contiguous in both sequences and never empty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    CopyGetters,
)]
#[get_copy = "pub"]
pub struct LongestCommonSubsequence {
    /// The index in the first sequence where the run starts.
    position_in_first: usize,

    /// The index in the second sequence where the run starts.
    position_in_second: usize,

    /// The number of elements in the run.
    length: usize,
}

impl LongestCommonSubsequence {
    /// The indices the run occupies in the first sequence.
    #[must_use]
    pub const fn first_range(&self) -> Range<usize> {
        self.position_in_first..self.position_in_first + self.length
    }

    /// The indices the run occupies in the second sequence.
    #[must_use]
    pub const fn second_range(&self) -> Range<usize> {
        self.position_in_second..self.position_in_second + self.length
    }
}

/// Finds the longest run of elements that appears in both
/// `first[first_range]` and `second[second_range]`.
///
/// Candidate runs are visited by ascending index in `first`, then by
/// ascending index in `second`. When several runs share the maximum length,
/// the first one visited is returned. Every pair of indices is compared,
/// even after a run spanning a whole range has been found.
///
/// Returns `None` when no element of one range equals any element of the
/// other.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if either range starts past its end.
/// - [`Error::OutOfRange`] if either range ends past its sequence.
pub fn find_longest_common_subsequence<T, E: Equality<T> + ?Sized>(
    first: &[T],
    first_range: Range<usize>,
    second: &[T],
    second_range: Range<usize>,
    equality: &E,
) -> Result<Option<LongestCommonSubsequence>, Error> {
    listdiff_guard::range(&first_range, first.len(), "first_range")?;
    listdiff_guard::range(&second_range, second.len(), "second_range")?;

    Ok(find(first, first_range, second, second_range, equality))
}

/// Same as [`find_longest_common_subsequence`] but assumes both ranges have
/// already been checked.
pub(crate) fn find<T, E: Equality<T> + ?Sized>(
    first: &[T],
    first_range: Range<usize>,
    second: &[T],
    second_range: Range<usize>,
    equality: &E,
) -> Option<LongestCommonSubsequence> {
    let Range { start: first_start, end: first_end } = first_range;
    let Range { start: second_start, end: second_end } = second_range;

    let mut best: Option<LongestCommonSubsequence> = None;

    for i in first_start..first_end {
        for j in second_start..second_end {
            if !equality.equals(&first[i], &second[j]) {
                continue;
            }

            let mut length = 1;
            while i + length < first_end
                && j + length < second_end
                && equality.equals(&first[i + length], &second[j + length])
            {
                length += 1;
            }

            if best.is_none_or(|best| length > best.length) {
                best = Some(LongestCommonSubsequence {
                    position_in_first: i,
                    position_in_second: j,
                    length,
                });
            }
        }
    }

    best
}
