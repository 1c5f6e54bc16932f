//! Identifier validation errors.

use std::fmt;

/// An identifier failed a structural precondition.
///
/// `Get` and `Set` report this uniformly; the only precondition today is
/// that the identifier is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierError {
    /// The offending identifier.
    pub name: String,
    /// Human-readable reason the identifier was rejected.
    pub reason: &'static str,
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identifier {:?}: {}", self.name, self.reason)
    }
}

impl std::error::Error for IdentifierError {}

/// The empty identifier was offered to `get` or `set`.
#[inline]
pub fn empty_identifier() -> IdentifierError {
    IdentifierError {
        name: String::new(),
        reason: "the identifier must have a length",
    }
}
