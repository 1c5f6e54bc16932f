//! Runtime values for the Ember runtime.
//!
//! A `Value` is a closed tagged union over the language's primitive types.
//! The tag/payload invariant is structural: each variant carries exactly the
//! payload its tag implies, so no instance can ever hold a mismatched
//! payload. The strict entry points (`with_tag`, `set`) enforce the same
//! invariant at the host boundary by failing instead of coercing.

mod probe;


use crate::errors::{invalid_payload, type_mismatch, ValueResult};
use probe::probe;
use std::any::Any;
use std::fmt;

/// Type discriminant for a runtime value.
///
/// `Object` is reserved for the class system and cannot yet be constructed;
/// it exists so host code can already name the tag in coercion requests
/// (which uniformly fail for it).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// String value.
    Str,
    /// Integer value (always stored as `i64`).
    Int,
    /// Floating-point value (always stored as `f64`).
    Float,
    /// Boolean value.
    Bool,
    /// Reserved: class instances. Not constructible.
    Object,
    /// The absent value.
    Nil,
}

impl Tag {
    /// Language-level name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Str => "str",
            Tag::Int => "int",
            Tag::Float => "float",
            Tag::Bool => "bool",
            Tag::Object => "object",
            Tag::Nil => "nil",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value in the Ember interpreter.
///
/// Construct via [`Value::from_host`] when the host kind should be inferred
/// (lenient: unrecognized kinds become `Nil`), or [`Value::with_tag`] when
/// the caller asserts a tag (strict: mismatches are errors). Mutation goes
/// through [`Value::set`], which re-validates against the current tag.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// The absent value.
    Nil,
}

impl Value {
    /// Infer a value from a host primitive.
    ///
    /// Recognized host kinds: `String` and `&str`; every signed and unsigned
    /// integer width (normalized to `i64`); `f32` and `f64` (normalized to
    /// `f64`); `bool`; and `()` as the explicit absence. Anything else
    /// silently becomes `Nil` — inferred construction never fails.
    pub fn from_host(host: &dyn Any) -> Value {
        probe(host).coerced.unwrap_or(Value::Nil)
    }

    /// Construct a value against a caller-asserted tag.
    ///
    /// Unlike [`Value::from_host`], a host kind that cannot satisfy `tag`
    /// is an error, never a silent `Nil`. A `Nil` tag accepts only the
    /// explicit absence `()`, and the reserved `Object` tag accepts nothing.
    pub fn with_tag(tag: Tag, host: &dyn Any) -> ValueResult<Value> {
        let probed = probe(host);
        match probed.coerced {
            Some(value) if value.tag() == tag => Ok(value),
            _ => Err(invalid_payload(tag, probed.kind)),
        }
    }

    /// A fresh `Nil` value.
    ///
    /// Not a shared constant; every call yields an independent instance,
    /// all of which compare equal.
    #[inline]
    pub fn nil() -> Value {
        Value::Nil
    }

    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Value {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(x: f64) -> Value {
        Value::Float(x)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    /// Replace the payload, keeping the tag.
    ///
    /// The offered host value is validated against the current tag with the
    /// same rules as [`Value::with_tag`]. On failure the value is left
    /// untouched and the error identifies the tag and the host kind offered.
    pub fn set(&mut self, host: &dyn Any) -> ValueResult<()> {
        let value = Value::with_tag(self.tag(), host)?;
        *self = value;
        Ok(())
    }

    /// The value's tag. Pure introspection, never fails.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Str(_) => Tag::Str,
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
            Value::Bool(_) => Tag::Bool,
            Value::Nil => Tag::Nil,
        }
    }

    /// Returns `true` iff this value is `Nil`.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// The payload as a string slice, or a type mismatch for any other tag.
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(type_mismatch(other.tag(), Tag::Str)),
        }
    }

    /// The payload as an `i64`, or a type mismatch for any other tag.
    ///
    /// No implicit conversion: a `Float` value cannot be read as `Int`.
    pub fn as_int(&self) -> ValueResult<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(type_mismatch(other.tag(), Tag::Int)),
        }
    }

    /// The payload as an `f64`, or a type mismatch for any other tag.
    pub fn as_float(&self) -> ValueResult<f64> {
        match self {
            Value::Float(x) => Ok(*x),
            other => Err(type_mismatch(other.tag(), Tag::Float)),
        }
    }

    /// The payload as a `bool`, or a type mismatch for any other tag.
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch(other.tag(), Tag::Bool)),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

/// Diagnostic rendering of tag and payload, e.g. `int(42)` or `str("hi")`.
///
/// For logs and test output only; never parsed and never used for equality.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "str({s:?})"),
            Value::Int(n) => write!(f, "int({n})"),
            Value::Float(x) => write!(f, "float({x})"),
            Value::Bool(b) => write!(f, "bool({b})"),
            Value::Nil => f.write_str("nil"),
        }
    }
}
