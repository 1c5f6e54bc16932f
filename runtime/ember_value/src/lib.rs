//! Ember Value - dynamic value representation for the Ember runtime.
//!
//! This crate provides:
//! - The runtime value type (`Value`) and its type discriminant (`Tag`)
//! - Host coercion: inferred construction (`Value::from_host`) and
//!   explicit-tag construction (`Value::with_tag`)
//! - Typed extraction back to host primitives (`as_int`, `as_str`, ...)
//! - The value error taxonomy (`ValueError`, `ValueResult`)
//!
//! # Coercion Model
//!
//! Host values cross the boundary as `&dyn Any` and are recognized by a
//! single ordered probe; there is exactly one place in the crate where a
//! host kind maps to a tag. Inferred construction is lenient (unrecognized
//! host kinds become `Nil`), every other entry point is strict and returns
//! an error rather than degrading.
//!
//! # Numeric Normalization
//!
//! All integer widths, signed and unsigned, normalize to `i64` before
//! storage; both float widths normalize to `f64`. Downstream code therefore
//! only ever sees one integer shape and one float shape, and no accessor
//! performs implicit conversion between tags.

mod errors;
mod value;

pub use errors::{invalid_payload, type_mismatch, ValueError, ValueResult};
pub use value::{Tag, Value};
