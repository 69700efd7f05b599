use std::{cell::Cell, collections::VecDeque};

use listdiff_guard::Error;
use proptest::{prop_assert_eq, proptest};

use super::{apply, Applier, Target};
use crate::{
    arbitrary::{script, sequence, sequence_pair},
    diff::diff,
    section::{DiffSection, SectionKind},
};

fn section(kind: SectionKind, length: usize) -> DiffSection {
    DiffSection::try_new(kind, length).unwrap()
}

/// A list that counts every change made to it, like a collection that
/// notifies observers.
#[derive(Debug)]
struct Observable {
    elements: Vec<i32>,
    notifications: usize,
}

impl Observable {
    fn new(elements: Vec<i32>) -> Self { Self { elements, notifications: 0 } }

    fn observed(&mut self) -> Applier<'_, Self, i32> {
        Applier::new(self)
            .with_insert_range(|target: &mut Self, index, elements: &[i32]| {
                target
                    .elements
                    .splice(index..index, elements.iter().copied());
                target.notifications += 1;
            })
            .with_remove_range(|target: &mut Self, range| {
                target.elements.drain(range);
                target.notifications += 1;
            })
    }
}

impl Target<i32> for Observable {
    fn len(&self) -> usize { self.elements.len() }

    fn insert(&mut self, index: usize, value: i32) {
        self.elements.insert(index, value);
        self.notifications += 1;
    }

    fn remove(&mut self, index: usize) {
        self.elements.remove(index);
        self.notifications += 1;
    }
}

#[test]
fn element_wise() {
    let destination = [1, 9, 9, 4, 5];
    let mut source = Observable::new(vec![1, 2, 3, 4]);

    apply(&mut source, &destination, [
        section(SectionKind::Copy, 1),
        section(SectionKind::Delete, 2),
        section(SectionKind::Insert, 2),
        section(SectionKind::Copy, 1),
        section(SectionKind::Insert, 1),
    ])
    .unwrap();

    assert_eq!(source.elements, destination);
    assert_eq!(source.notifications, 5);
}

#[test]
fn batched_runs_notify_once() {
    let destination = [1, 9, 9, 4, 5];
    let mut source = Observable::new(vec![1, 2, 3, 4]);

    source
        .observed()
        .apply(&destination, [
            section(SectionKind::Copy, 1),
            section(SectionKind::Delete, 2),
            section(SectionKind::Insert, 2),
            section(SectionKind::Copy, 1),
            section(SectionKind::Insert, 1),
        ])
        .unwrap();

    assert_eq!(source.elements, destination);

    // one per two-element run, one for the single trailing insert
    assert_eq!(source.notifications, 3);
}

#[test]
fn single_element_runs_skip_range_operations() {
    let insert_calls = Cell::new(0);
    let remove_calls = Cell::new(0);
    let mut source = vec![1, 2];

    Applier::new(&mut source)
        .with_insert_range(|source: &mut Vec<i32>, index, elements: &[i32]| {
            insert_calls.set(insert_calls.get() + 1);
            source.splice(index..index, elements.iter().copied());
        })
        .with_remove_range(|source: &mut Vec<i32>, range| {
            remove_calls.set(remove_calls.get() + 1);
            source.drain(range);
        })
        .apply(&[3, 2], [
            section(SectionKind::Delete, 1),
            section(SectionKind::Insert, 1),
            section(SectionKind::Copy, 1),
        ])
        .unwrap();

    assert_eq!(source, [3, 2]);
    assert_eq!(insert_calls.get(), 0);
    assert_eq!(remove_calls.get(), 0);
}

#[test]
fn range_operations_are_independent() {
    let insert_calls = Cell::new(0);
    let mut source = vec![1, 2, 3];

    Applier::new(&mut source)
        .with_insert_range(|source: &mut Vec<i32>, index, elements: &[i32]| {
            insert_calls.set(insert_calls.get() + 1);
            source.splice(index..index, elements.iter().copied());
        })
        .apply(&[4, 5, 6], [
            section(SectionKind::Delete, 3),
            section(SectionKind::Insert, 3),
        ])
        .unwrap();

    assert_eq!(source, [4, 5, 6]);
    assert_eq!(insert_calls.get(), 1);
}

#[test]
fn batched_vec() {
    let first = vec!['a', 'b', 'c', 'd', 'e'];
    let second = vec!['x', 'y', 'c', 'd', 'z', 'w'];

    let mut source = first.clone();
    Applier::batched(&mut source).apply(&second, diff(&first, &second)).unwrap();

    assert_eq!(source, second);
}

#[test]
fn vec_deque() {
    let first = [5, 6, 7, 8];
    let second = [6, 7, 1, 8, 2];

    let mut source = first.iter().copied().collect::<VecDeque<_>>();
    apply(&mut source, &second, diff(&first, &second)).unwrap();

    assert_eq!(source.into_iter().collect::<Vec<_>>(), second);
}

#[test]
fn inserts_extend_the_source_for_later_sections() {
    let mut source = vec![1];

    apply(&mut source, &[0, 1], [
        section(SectionKind::Insert, 1),
        section(SectionKind::Copy, 1),
    ])
    .unwrap();

    assert_eq!(source, [0, 1]);
}

#[test]
fn malformed_scripts() {
    let cases = [
        (vec![section(SectionKind::Copy, 4)], Error::InvalidOperation {
            reason: "copy runs past the end of the source",
        }),
        (vec![section(SectionKind::Copy, 3)], Error::InvalidOperation {
            reason: "copy runs past the end of the destination",
        }),
        (
            vec![
                section(SectionKind::Delete, 1),
                section(SectionKind::Copy, 2),
                section(SectionKind::Insert, 1),
            ],
            Error::InvalidOperation {
                reason: "insert runs past the end of the destination",
            },
        ),
        (
            vec![
                section(SectionKind::Copy, 1),
                section(SectionKind::Insert, 2),
            ],
            Error::InvalidOperation {
                reason: "insert runs past the end of the destination",
            },
        ),
        (
            vec![
                section(SectionKind::Copy, 2),
                section(SectionKind::Delete, 2),
            ],
            Error::InvalidOperation {
                reason: "delete runs past the end of the source",
            },
        ),
    ];

    for (script, expected) in cases {
        let mut source = vec![1, 2, 3];

        assert_eq!(apply(&mut source, &[2, 3], script), Err(expected));

        // nothing is applied when any section is malformed
        assert_eq!(source, [1, 2, 3]);
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        cases: 2048,
        ..Default::default()
    })]

    #[test]
    fn round_trip((first, second) in sequence_pair(16)) {
        let mut source = first.clone();
        apply(&mut source, &second, diff(&first, &second)).unwrap();

        prop_assert_eq!(source, second);
    }

    #[test]
    fn batched_round_trip((first, second) in sequence_pair(16)) {
        let mut source = first.clone();
        Applier::batched(&mut source)
            .apply(&second, diff(&first, &second))
            .unwrap();

        prop_assert_eq!(source, second);
    }

    #[test]
    fn batching_matches_element_wise(
        first in sequence(16),
        second in sequence(16),
        sections in script(8),
    ) {
        let mut element_wise = first.clone();
        let element_wise_result =
            apply(&mut element_wise, &second, sections.iter().copied());

        let mut batched = first.clone();
        let batched_result = Applier::batched(&mut batched)
            .apply(&second, sections.iter().copied());

        prop_assert_eq!(element_wise_result, batched_result);
        prop_assert_eq!(&element_wise, &batched);

        if element_wise_result.is_err() {
            prop_assert_eq!(element_wise, first);
        }
    }
}
