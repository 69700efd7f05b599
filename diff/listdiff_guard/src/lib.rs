//! Precondition checks shared by every public entry point of the `listdiff`
//! crates, and the [`Error`] they produce.
//!
//! Each check is a no-op when its condition holds and otherwise returns the
//! matching [`Error`] variant so callers can propagate it with `?` before
//! doing any work.

use std::ops::Range;

/// An error raised when a caller hands malformed input to one of the
/// `listdiff` operations.
///
/// None of these are transient: they either indicate a programmer error
/// (bad bounds) or a corrupted edit script.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error,
)]
pub enum Error {
    /// A bound was invalid on its own, e.g. a range whose start lies past
    /// its end.
    #[error("invalid argument `{parameter}`")]
    InvalidArgument {
        /// The name of the offending parameter.
        parameter: &'static str,
    },

    /// An end bound exceeds the length of the sequence it indexes into.
    #[error("`{parameter}` ends at {end} but the sequence has length {len}")]
    OutOfRange {
        /// The name of the offending parameter.
        parameter: &'static str,

        /// The requested end bound.
        end: usize,

        /// The length of the indexed sequence.
        len: usize,
    },

    /// An edit script could not be replayed against the given sequences.
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// Describes what was wrong with the operation.
        reason: &'static str,
    },
}

/// Fails with [`Error::InvalidArgument`] naming `parameter` when `condition`
/// is false.
///
/// # Errors
///
/// See above.
pub const fn argument(
    condition: bool,
    parameter: &'static str,
) -> Result<(), Error> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument { parameter })
    }
}

/// Fails with [`Error::OutOfRange`] when `end` lies past `len`.
///
/// # Errors
///
/// See above.
pub const fn in_range(
    end: usize,
    len: usize,
    parameter: &'static str,
) -> Result<(), Error> {
    if end <= len {
        Ok(())
    } else {
        Err(Error::OutOfRange { parameter, end, len })
    }
}

/// Fails with [`Error::InvalidOperation`] carrying `reason` when `condition`
/// is false.
///
/// # Errors
///
/// See above.
pub const fn operation(
    condition: bool,
    reason: &'static str,
) -> Result<(), Error> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidOperation { reason })
    }
}

/// Checks that `range` is a well-formed half-open range over a sequence of
/// length `len`.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `range.start > range.end`.
/// - [`Error::OutOfRange`] if `range.end > len`.
pub const fn range(
    range: &Range<usize>,
    len: usize,
    parameter: &'static str,
) -> Result<(), Error> {
    if let Err(error) = argument(range.start <= range.end, parameter) {
        return Err(error);
    }

    in_range(range.end, len, parameter)
}
