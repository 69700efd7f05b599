//! Arbitrary implementations and strategies for property testing code that
//! works with edit scripts.

use std::ops::Range;

use proptest::{
    collection,
    prelude::{Arbitrary, BoxedStrategy, Just, Strategy},
    prop_oneof,
};

use crate::section::{DiffSection, SectionKind};

impl Arbitrary for SectionKind {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Self::Copy), Just(Self::Insert), Just(Self::Delete)]
            .boxed()
    }
}

impl Arbitrary for DiffSection {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (SectionKind::arbitrary(), 1usize..8)
            .prop_filter_map("non-zero length", |(kind, length)| {
                Self::try_new(kind, length)
            })
            .boxed()
    }
}

/// Generates sequences of at most `max_len` elements drawn from a small
/// alphabet, so that common runs show up often.
pub fn sequence(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    collection::vec(0u8..4, 0..=max_len)
}

/// Generates two independent [`sequence`]s.
pub fn sequence_pair(
    max_len: usize,
) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (sequence(max_len), sequence(max_len))
}

/// Generates a well-formed half-open range within `0..len`.
pub fn sub_range(len: usize) -> impl Strategy<Value = Range<usize>> {
    (0..=len)
        .prop_flat_map(move |start| (Just(start), start..=len))
        .prop_map(|(start, end)| start..end)
}

/// Generates edit scripts that aren't necessarily valid for any particular
/// pair of sequences.
pub fn script(max_len: usize) -> impl Strategy<Value = Vec<DiffSection>> {
    collection::vec(DiffSection::arbitrary(), 0..=max_len)
}
