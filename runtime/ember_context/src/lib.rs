//! Ember Context - variable scoping for the Ember runtime.
//!
//! This crate provides:
//! - The `Context` capability the evaluator resolves identifiers through
//! - `NamespaceContext`, the concrete two-table binding store with named
//!   nested sub-namespaces
//! - The identifier error type (`IdentifierError`)
//!
//! # Binding Model
//!
//! An identifier's first character decides where it lives: names starting
//! with the global sigil (`$`) go to the globals table, everything else to
//! the locals table. Routing is a pure function of the name — it never
//! depends on what was previously bound, and no name can end up in both
//! tables. Reading an unbound name is not a failure; it yields a fresh
//! `Nil`.
//!
//! Lookup inside one context never searches its sub-namespaces or any
//! enclosing scope. Composing contexts into a scope stack or module tree is
//! the evaluator's concern.

mod errors;
mod namespace;

pub use errors::{empty_identifier, IdentifierError};
pub use namespace::{Context, NamespaceContext, GLOBAL_SIGIL};
