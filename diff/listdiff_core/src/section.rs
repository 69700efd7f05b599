//! Contains the definition of [`DiffSection`], one entry of an edit script.

use std::num::NonZeroUsize;

use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// The operation a [`DiffSection`] performs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// The elements are present, in order, in both sequences.
    #[display(fmt = "copy")]
    Copy,

    /// The elements only exist in the second sequence.
    #[display(fmt = "insert")]
    Insert,

    /// The elements only exist in the first sequence.
    #[display(fmt = "delete")]
    Delete,
}

/// A contiguous run of a single [`SectionKind`] in an edit script.
///
/// The length is never zero; the diff engine never produces empty sections
/// and they can't be deserialized either.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    CopyGetters,
    derive_more::Display,
)]
#[display(fmt = "{kind} {length}")]
pub struct DiffSection {
    /// The operation of this section.
    #[get_copy = "pub"]
    kind: SectionKind,

    length: NonZeroUsize,
}

impl DiffSection {
    /// Creates a new section of the given kind.
    #[must_use]
    pub const fn new(kind: SectionKind, length: NonZeroUsize) -> Self {
        Self { kind, length }
    }

    /// Creates a new section of the given kind, returning `None` if `length`
    /// is zero.
    #[must_use]
    pub const fn try_new(kind: SectionKind, length: usize) -> Option<Self> {
        match NonZeroUsize::new(length) {
            Some(length) => Some(Self { kind, length }),
            None => None,
        }
    }

    /// The number of elements this section spans.
    #[must_use]
    pub const fn length(&self) -> usize { self.length.get() }

    /// The number of elements of the first sequence this section consumes.
    #[must_use]
    pub const fn first_span(&self) -> usize {
        match self.kind {
            SectionKind::Copy | SectionKind::Delete => self.length.get(),
            SectionKind::Insert => 0,
        }
    }

    /// The number of elements of the second sequence this section consumes.
    #[must_use]
    pub const fn second_span(&self) -> usize {
        match self.kind {
            SectionKind::Copy | SectionKind::Insert => self.length.get(),
            SectionKind::Delete => 0,
        }
    }
}

/// Element totals per [`SectionKind`] over a whole edit script.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    CopyGetters,
)]
#[get_copy = "pub"]
pub struct Summary {
    /// The number of elements kept by [`SectionKind::Copy`] sections.
    copied: usize,

    /// The number of elements added by [`SectionKind::Insert`] sections.
    inserted: usize,

    /// The number of elements removed by [`SectionKind::Delete`] sections.
    deleted: usize,
}

impl Summary {
    /// Tallies the sections of `script`.
    pub fn of<'a>(script: impl IntoIterator<Item = &'a DiffSection>) -> Self {
        script.into_iter().fold(Self::default(), |mut summary, section| {
            let kept = section.first_span().min(section.second_span());
            summary.copied += kept;
            summary.deleted += section.first_span() - kept;
            summary.inserted += section.second_span() - kept;

            summary
        })
    }

    /// The length of the range the script was computed from.
    #[must_use]
    pub const fn first_len(&self) -> usize { self.copied + self.deleted }

    /// The length of the range the script transforms into.
    #[must_use]
    pub const fn second_len(&self) -> usize { self.copied + self.inserted }

    /// Whether the script leaves the sequence unchanged.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.inserted == 0 && self.deleted == 0
    }
}
