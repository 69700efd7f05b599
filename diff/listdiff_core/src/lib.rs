//! Computes and applies edit scripts between ordered sequences.
//!
//! A script is a list of [`DiffSection`]s, each one copying, inserting, or
//! deleting a run of elements. Scripts are built by repeatedly splitting the
//! two sequences around their longest common run (see [`diff()`]) and can be
//! replayed against a mutable copy of the first sequence to turn it into the
//! second (see [`apply`](apply::apply)).
//!
//! The search is quadratic in the size of the compared ranges and is meant
//! for lists such as UI collections rather than large documents.

pub mod apply;
pub mod arbitrary;
pub mod diff;
pub mod equality;
pub mod lcs;
pub mod section;

pub use apply::{apply, Applier, Target};
pub use diff::{compute, diff, diff_by_key, diff_iter, diff_with, Diff};
pub use equality::{ByKey, Equality, Natural};
pub use lcs::{find_longest_common_subsequence, LongestCommonSubsequence};
pub use listdiff_guard::Error;
pub use section::{DiffSection, SectionKind, Summary};
