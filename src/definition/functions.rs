use crate::value::Value;
use indexmap::IndexMap;
use std::{any::Any, fmt, sync::Arc};

/// Coerced argument values passed to a field resolver.
pub type Arguments = IndexMap<String, Value>;

/// An error raised by a resolver or scalar function.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    message: String,
}

impl FieldError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        FieldError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type FieldResult = Result<Value, FieldError>;

type ResolveCallback = dyn Fn(&Value, &Arguments, &dyn Any) -> FieldResult + Send + Sync;

type ScalarCallback = dyn Fn(&Value) -> FieldResult + Send + Sync;

/// A field resolver, called with the parent value, the field's arguments and a caller-defined
/// context.
///
/// Schema builds never call resolvers. They're handed to the linked schema as they are, so that an
/// execution engine can call them later on.
#[derive(Clone)]
pub struct ResolveFn(Arc<ResolveCallback>);

impl ResolveFn {
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn(&Value, &Arguments, &dyn Any) -> FieldResult + Send + Sync + 'static,
    {
        ResolveFn(Arc::new(resolve))
    }

    #[inline]
    pub fn call(&self, parent: &Value, args: &Arguments, context: &dyn Any) -> FieldResult {
        (self.0)(parent, args, context)
    }

    /// Returns whether both handles point to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ResolveFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResolveFn")
    }
}

/// A custom scalar's `serialize`, `parseValue` or `parseLiteral` function.
#[derive(Clone)]
pub struct ScalarFn(Arc<ScalarCallback>);

impl ScalarFn {
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(&Value) -> FieldResult + Send + Sync + 'static,
    {
        ScalarFn(Arc::new(convert))
    }

    #[inline]
    pub fn call(&self, value: &Value) -> FieldResult {
        (self.0)(value)
    }

    /// Returns whether both handles point to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ScalarFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScalarFn")
    }
}
