//! The `Context` capability and its namespace-backed implementation.

use ember_value::Value;
use rustc_hash::FxHashMap;

use crate::errors::{empty_identifier, IdentifierError};

/// Leading character that routes an identifier to the globals table.
pub const GLOBAL_SIGIL: char = '$';

/// A variable scope as seen by the evaluator.
///
/// The evaluator resolves and binds identifiers through this capability
/// during expression evaluation and assignment. How scopes compose into a
/// call stack or module tree is the evaluator's decision; implementations
/// only answer for their own tables.
pub trait Context {
    /// Resolve `name` to its bound value.
    ///
    /// An unbound name is not a failure: it resolves to a fresh `Nil`.
    /// The only error is the empty identifier.
    fn get(&self, name: &str) -> Result<Value, IdentifierError>;

    /// Bind `name` to `value`, inserting or overwriting unconditionally.
    fn set(&mut self, name: &str, value: Value) -> Result<(), IdentifierError>;

    /// The enclosing scope, if this context is chained to one.
    fn parent(&self) -> Option<&dyn Context>;
}

/// Which binding table an identifier routes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Table {
    Globals,
    Locals,
}

impl Table {
    fn label(self) -> &'static str {
        match self {
            Table::Globals => "globals",
            Table::Locals => "locals",
        }
    }
}

/// Route an identifier by its first character.
///
/// Shared by `get` and `set` so the two can never disagree on where a name
/// lives. Routing is a pure function of the name; it never consults the
/// tables themselves.
fn route(name: &str) -> Result<Table, IdentifierError> {
    match name.chars().next() {
        None => Err(empty_identifier()),
        Some(GLOBAL_SIGIL) => Ok(Table::Globals),
        Some(_) => Ok(Table::Locals),
    }
}

/// Concrete binding store partitioned by the global-sigil convention.
///
/// Holds locals, globals, and named nested sub-namespaces (module-style
/// scoping). No name is ever present in both binding tables, and lookup
/// never falls through to a sub-namespace — the evaluator composes scopes
/// explicitly.
#[derive(Clone, Debug, Default)]
pub struct NamespaceContext {
    locals: FxHashMap<String, Value>,
    globals: FxHashMap<String, Value>,
    namespaces: FxHashMap<String, NamespaceContext>,
}

impl NamespaceContext {
    /// Create an empty context: no locals, no globals, no sub-namespaces.
    pub fn new() -> Self {
        NamespaceContext::default()
    }

    /// Resolve `name` against the table its first character selects.
    ///
    /// Returns a fresh `Nil` when the name is unbound.
    pub fn get(&self, name: &str) -> Result<Value, IdentifierError> {
        let table = match route(name)? {
            Table::Globals => &self.globals,
            Table::Locals => &self.locals,
        };
        Ok(table.get(name).cloned().unwrap_or_else(Value::nil))
    }

    /// Bind `name` to `value` in the table its first character selects.
    ///
    /// Inserts or overwrites unconditionally; no prior binding is required.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), IdentifierError> {
        let table = route(name)?;
        tracing::trace!(name, table = table.label(), "bind");
        let map = match table {
            Table::Globals => &mut self.globals,
            Table::Locals => &mut self.locals,
        };
        map.insert(name.to_string(), value);
        Ok(())
    }

    /// Register a nested namespace under `name`, replacing any previous one.
    pub fn register_namespace(&mut self, name: impl Into<String>, namespace: NamespaceContext) {
        let name = name.into();
        tracing::trace!(name, "register namespace");
        self.namespaces.insert(name, namespace);
    }

    /// The nested namespace registered under `name`, if any.
    pub fn namespace(&self, name: &str) -> Option<&NamespaceContext> {
        self.namespaces.get(name)
    }

    /// Mutable access to the nested namespace registered under `name`.
    pub fn namespace_mut(&mut self, name: &str) -> Option<&mut NamespaceContext> {
        self.namespaces.get_mut(name)
    }
}

impl Context for NamespaceContext {
    fn get(&self, name: &str) -> Result<Value, IdentifierError> {
        NamespaceContext::get(self, name)
    }

    fn set(&mut self, name: &str, value: Value) -> Result<(), IdentifierError> {
        NamespaceContext::set(self, name, value)
    }

    /// A `NamespaceContext` stores no parent link; chaining is composed by
    /// the evaluator.
    fn parent(&self) -> Option<&dyn Context> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_value::Tag;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_succeeds_for_valid_identifier() {
        let mut context = NamespaceContext::new();
        assert_eq!(context.set("a", Value::int(10)), Ok(()));
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let mut context = NamespaceContext::new();
        let err = match context.get("") {
            Err(e) => e,
            Ok(v) => panic!("empty name must be rejected, got {v:?}"),
        };
        assert_eq!(err.name, "");
        assert_eq!(context.set("", Value::int(1)), Err(err));
    }

    #[test]
    fn test_unbound_identifier_resolves_to_nil() {
        let context = NamespaceContext::new();
        assert_eq!(context.get("a"), Ok(Value::nil()));
        assert_eq!(context.get("$a"), Ok(Value::nil()));
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut context = NamespaceContext::new();
        context
            .set("count", Value::from_host(&10i64))
            .unwrap_or_else(|e| panic!("set failed: {e}"));

        let value = context.get("count").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(value.tag(), Tag::Int);
        assert_eq!(value.as_int(), Ok(10));
    }

    #[test]
    fn test_sigil_routes_to_globals() {
        let mut context = NamespaceContext::new();
        context
            .set("$VERSION", Value::from_host(&"1.0"))
            .unwrap_or_else(|e| panic!("{e}"));

        let global = context.get("$VERSION").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(global.tag(), Tag::Str);
        assert_eq!(global.as_str(), Ok("1.0"));

        // The sigil-less spelling is a different binding entirely.
        assert_eq!(context.get("VERSION"), Ok(Value::nil()));
    }

    #[test]
    fn test_local_binding_is_invisible_under_sigil() {
        let mut context = NamespaceContext::new();
        context
            .set("x", Value::int(1))
            .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(context.get("x"), Ok(Value::int(1)));
        assert_eq!(context.get("$x"), Ok(Value::nil()));
    }

    #[test]
    fn test_set_overwrites_existing_binding() {
        let mut context = NamespaceContext::new();
        context
            .set("x", Value::int(1))
            .unwrap_or_else(|e| panic!("{e}"));
        context
            .set("x", Value::int(2))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(context.get("x"), Ok(Value::int(2)));
    }

    #[test]
    fn test_nested_namespaces_are_isolated() {
        let mut math = NamespaceContext::new();
        math.set("pi", Value::float(3.5))
            .unwrap_or_else(|e| panic!("{e}"));

        let mut root = NamespaceContext::new();
        root.register_namespace("math", math);

        // The sub-namespace's binding is reachable only through it.
        assert_eq!(root.get("pi"), Ok(Value::nil()));
        let nested = root.namespace("math");
        assert!(nested.is_some_and(|n| n.get("pi") == Ok(Value::float(3.5))));

        assert!(root.namespace("io").is_none());
    }

    #[test]
    fn test_namespace_mut_allows_later_binding() {
        let mut root = NamespaceContext::new();
        root.register_namespace("mod", NamespaceContext::new());

        if let Some(nested) = root.namespace_mut("mod") {
            nested
                .set("ready", Value::Bool(true))
                .unwrap_or_else(|e| panic!("{e}"));
        } else {
            panic!("namespace was just registered");
        }

        let nested = root.namespace("mod");
        assert!(nested.is_some_and(|n| n.get("ready") == Ok(Value::Bool(true))));
    }

    #[test]
    fn test_context_as_trait_object() {
        let mut context = NamespaceContext::new();
        let scope: &mut dyn Context = &mut context;

        scope
            .set("a", Value::int(10))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(scope.get("a"), Ok(Value::int(10)));
        assert!(scope.parent().is_none());
    }
}
