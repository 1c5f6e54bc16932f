//! Error types for value coercion and extraction.
//!
//! Factory functions (`type_mismatch`, `invalid_payload`) are the public
//! construction API; they keep error wording in one place.

use crate::value::Tag;
use std::fmt;

/// Result of a fallible value operation.
pub type ValueResult<T> = Result<T, ValueError>;

/// Error produced by value coercion or typed extraction.
///
/// Both variants are recoverable; nothing in this crate logs, retries, or
/// swallows them — every fallible operation hands its error straight back
/// to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// A typed extraction was requested against a value of another tag.
    TypeMismatch {
        /// The tag the value actually holds.
        actual: Tag,
        /// The tag the caller asked for.
        requested: Tag,
    },
    /// A payload assignment or explicit-tag construction offered a host
    /// value incompatible with the target tag.
    InvalidPayload {
        /// The tag the payload had to satisfy.
        target: Tag,
        /// Name of the host kind that was offered.
        offered: &'static str,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { actual, requested } => {
                write!(f, "value is of type {actual}, requested {requested}")
            }
            Self::InvalidPayload { target, offered } => {
                write!(
                    f,
                    "value is of type {target}, the payload offered was {offered}"
                )
            }
        }
    }
}

impl std::error::Error for ValueError {}

/// A typed extraction hit a value of the wrong tag.
#[inline]
pub fn type_mismatch(actual: Tag, requested: Tag) -> ValueError {
    ValueError::TypeMismatch { actual, requested }
}

/// A payload was offered that cannot satisfy the target tag.
#[inline]
pub fn invalid_payload(target: Tag, offered: &'static str) -> ValueError {
    ValueError::InvalidPayload { target, offered }
}
