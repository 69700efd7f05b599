//! Replays an edit script against a mutable sequence.

use std::{collections::VecDeque, ops::Range};

use listdiff_guard::Error;

use crate::section::{DiffSection, SectionKind};

/// A sequence that an edit script can be applied to.
pub trait Target<T> {
    /// The number of elements currently in the sequence.
    fn len(&self) -> usize;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Inserts `value` so that it ends up at `index`.
    fn insert(&mut self, index: usize, value: T);

    /// Removes the element at `index`.
    fn remove(&mut self, index: usize);
}

impl<T> Target<T> for Vec<T> {
    fn len(&self) -> usize { self.len() }

    fn insert(&mut self, index: usize, value: T) { self.insert(index, value); }

    fn remove(&mut self, index: usize) { self.remove(index); }
}

impl<T> Target<T> for VecDeque<T> {
    fn len(&self) -> usize { self.len() }

    fn insert(&mut self, index: usize, value: T) { self.insert(index, value); }

    fn remove(&mut self, index: usize) { self.remove(index); }
}

type InsertRange<'s, S, T> = Box<dyn FnMut(&mut S, usize, &[T]) + 's>;
type RemoveRange<'s, S> = Box<dyn FnMut(&mut S, Range<usize>) + 's>;

/// Applies edit scripts to a borrowed source sequence, optionally routing
/// multi-element runs through batched range operations.
///
/// Range operations exist for containers where every single insertion or
/// removal is costly or observable, such as collections that notify
/// listeners. Each one is only used for runs longer than one element; every
/// other run goes through [`Target::insert`] and [`Target::remove`] with the
/// same end result.
pub struct Applier<'s, S: ?Sized, T> {
    source: &'s mut S,
    insert_range: Option<InsertRange<'s, S, T>>,
    remove_range: Option<RemoveRange<'s, S>>,
}

impl<S: ?Sized + std::fmt::Debug, T> std::fmt::Debug for Applier<'_, S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Applier")
            .field("source", &self.source)
            .field("insert_range", &self.insert_range.is_some())
            .field("remove_range", &self.remove_range.is_some())
            .finish()
    }
}

impl<'s, S: ?Sized + Target<T>, T: Clone> Applier<'s, S, T> {
    /// Creates an applier that mutates `source` one element at a time.
    #[must_use]
    pub fn new(source: &'s mut S) -> Self {
        Self { source, insert_range: None, remove_range: None }
    }

    /// Inserts whole runs with `insert_range(source, index, elements)`,
    /// which must place `elements` so that the first one ends up at `index`.
    #[must_use]
    pub fn with_insert_range(
        mut self,
        insert_range: impl FnMut(&mut S, usize, &[T]) + 's,
    ) -> Self {
        self.insert_range = Some(Box::new(insert_range));
        self
    }

    /// Removes whole runs with `remove_range(source, range)`.
    #[must_use]
    pub fn with_remove_range(
        mut self,
        remove_range: impl FnMut(&mut S, Range<usize>) + 's,
    ) -> Self {
        self.remove_range = Some(Box::new(remove_range));
        self
    }

    /// Replays `script` against the source so that it becomes equal to
    /// `destination`.
    ///
    /// The script must have been computed from the current content of the
    /// source and from `destination`; copied runs are trusted and never
    /// compared.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperation`] if a section runs past the end of the
    /// source or the destination. The whole script is checked before the
    /// first mutation, so the source is left untouched on error.
    pub fn apply(
        self,
        destination: &[T],
        script: impl IntoIterator<Item = DiffSection>,
    ) -> Result<(), Error> {
        let script = validate(self.source.len(), destination.len(), script)?;

        let Self { source, mut insert_range, mut remove_range } = self;
        let mut source_index = 0;
        let mut destination_index = 0;

        for section in script {
            let length = section.length();

            match section.kind() {
                SectionKind::Copy => {
                    source_index += length;
                    destination_index += length;
                }

                SectionKind::Insert => {
                    let elements = &destination
                        [destination_index..destination_index + length];

                    match insert_range.as_mut() {
                        Some(insert_range) if length > 1 => {
                            insert_range(&mut *source, source_index, elements);
                        }

                        _ => {
                            for (offset, element) in
                                elements.iter().enumerate()
                            {
                                source.insert(
                                    source_index + offset,
                                    element.clone(),
                                );
                            }
                        }
                    }

                    source_index += length;
                    destination_index += length;
                }

                SectionKind::Delete => match remove_range.as_mut() {
                    Some(remove_range) if length > 1 => {
                        remove_range(
                            &mut *source,
                            source_index..source_index + length,
                        );
                    }

                    _ => {
                        for _ in 0..length {
                            source.remove(source_index);
                        }
                    }
                },
            }
        }

        Ok(())
    }
}

impl<'s, T: Clone + 's> Applier<'s, Vec<T>, T> {
    /// Creates an applier that splices and drains whole runs of a [`Vec`].
    #[must_use]
    pub fn batched(source: &'s mut Vec<T>) -> Self {
        Self::new(source)
            .with_insert_range(|source: &mut Vec<T>, index, elements: &[T]| {
                source.splice(index..index, elements.iter().cloned());
            })
            .with_remove_range(|source: &mut Vec<T>, range| {
                source.drain(range);
            })
    }
}

/// Replays `script` against `source` one element at a time so that it
/// becomes equal to `destination`.
///
/// # Errors
///
/// See [`Applier::apply`].
pub fn apply<T: Clone, S: ?Sized + Target<T>>(
    source: &mut S,
    destination: &[T],
    script: impl IntoIterator<Item = DiffSection>,
) -> Result<(), Error> {
    Applier::new(source).apply(destination, script)
}

fn fits(start: usize, length: usize, len: usize) -> bool {
    start.checked_add(length).is_some_and(|end| end <= len)
}

/// Walks the cursors over the whole script without mutating anything and
/// collects it.
fn validate(
    mut source_len: usize,
    destination_len: usize,
    script: impl IntoIterator<Item = DiffSection>,
) -> Result<Vec<DiffSection>, Error> {
    let mut source_index = 0;
    let mut destination_index = 0;

    script
        .into_iter()
        .enumerate()
        .map(|(position, section)| {
            let first_span = section.first_span();
            let second_span = section.second_span();

            let checked = match section.kind() {
                SectionKind::Copy => listdiff_guard::operation(
                    fits(source_index, first_span, source_len),
                    "copy runs past the end of the source",
                )
                .and_then(|()| {
                    listdiff_guard::operation(
                        fits(destination_index, second_span, destination_len),
                        "copy runs past the end of the destination",
                    )
                }),

                SectionKind::Insert => listdiff_guard::operation(
                    fits(destination_index, second_span, destination_len),
                    "insert runs past the end of the destination",
                ),

                SectionKind::Delete => listdiff_guard::operation(
                    fits(source_index, first_span, source_len),
                    "delete runs past the end of the source",
                ),
            };

            checked.inspect_err(|error| {
                log::debug!(
                    "rejecting section #{position} `{section}`: {error}"
                );
            })?;

            // copied and inserted runs now sit before the source cursor
            source_index += second_span;
            destination_index += second_span;
            source_len = source_len + second_span - first_span;

            Ok(section)
        })
        .collect()
}

#[cfg(test)]
mod test;
