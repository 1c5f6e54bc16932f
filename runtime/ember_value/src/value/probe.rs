//! Host kind recognition.
//!
//! The single place where a host type maps to a tag. `from_host`,
//! `with_tag`, and `set` all route through [`probe`], so the coercion rules
//! cannot diverge between the lenient and strict entry points.

use super::Value;
use std::any::Any;

/// Outcome of probing a host value: the coerced runtime value when the host
/// kind is recognized, plus a static name for the kind (diagnostics only).
pub(super) struct HostProbe {
    pub(super) coerced: Option<Value>,
    pub(super) kind: &'static str,
}

macro_rules! try_kind {
    ($host:ident, $ty:ty, $kind:literal, |$v:ident| $coerce:expr) => {
        if let Some($v) = $host.downcast_ref::<$ty>() {
            return HostProbe {
                coerced: Some($coerce),
                kind: $kind,
            };
        }
    };
}

/// Inspect a host value through an ordered downcast chain.
///
/// Integer widths normalize to `i64`, float widths to `f64`, and the unit
/// type is the explicit host absence marker. Unrecognized kinds yield no
/// coerced value; what that means (lenient `Nil` or a hard error) is the
/// caller's decision.
#[allow(clippy::cast_possible_wrap)] // u64/usize above i64::MAX wrap, as the narrowing is unchecked
pub(super) fn probe(host: &dyn Any) -> HostProbe {
    try_kind!(host, String, "String", |s| Value::Str(s.clone()));
    try_kind!(host, &str, "&str", |s| Value::Str((*s).to_string()));

    try_kind!(host, u8, "u8", |n| Value::Int(i64::from(*n)));
    try_kind!(host, u16, "u16", |n| Value::Int(i64::from(*n)));
    try_kind!(host, u32, "u32", |n| Value::Int(i64::from(*n)));
    try_kind!(host, u64, "u64", |n| Value::Int(*n as i64));
    try_kind!(host, usize, "usize", |n| Value::Int(*n as i64));
    try_kind!(host, i8, "i8", |n| Value::Int(i64::from(*n)));
    try_kind!(host, i16, "i16", |n| Value::Int(i64::from(*n)));
    try_kind!(host, i32, "i32", |n| Value::Int(i64::from(*n)));
    try_kind!(host, i64, "i64", |n| Value::Int(*n));
    try_kind!(host, isize, "isize", |n| Value::Int(*n as i64));

    try_kind!(host, f32, "f32", |x| Value::Float(f64::from(*x)));
    try_kind!(host, f64, "f64", |x| Value::Float(*x));

    try_kind!(host, bool, "bool", |b| Value::Bool(*b));
    try_kind!(host, (), "()", |_u| Value::Nil);

    HostProbe {
        coerced: None,
        kind: "unsupported",
    }
}
