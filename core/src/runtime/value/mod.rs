mod coercion;
mod display;
pub mod ops;

pub use display::format_number;

use std::fmt;
use std::rc::Rc;

use crate::context::ExecutionContext;
use crate::errors::RuntimeError;
use crate::runtime::builtins::Builtin;

/// Guard of the final branch in a compiled conditional chain.
pub const ELSE: Value = Value::Bool(true);

/// Result of a conditional chain where no branch matched.
pub const NIL: Value = Value::Nil;

/// Body of a compiled function.
pub type ClosureBody = dyn Fn(&mut ExecutionContext, &[Value]) -> Result<Value, RuntimeError>;

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Function(Closure),
    Builtin(Builtin),
}

impl Value {
    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) | Value::Builtin(_) => "function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Closure> for Value {
    fn from(closure: Closure) -> Self {
        Value::Function(closure)
    }
}

/// A compiled LF function.
#[derive(Clone)]
pub struct Closure {
    name: Rc<str>,
    arity: usize,
    body: Rc<ClosureBody>,
}

impl Closure {
    pub fn new<F>(name: impl AsRef<str>, arity: usize, body: F) -> Self
    where
        F: Fn(&mut ExecutionContext, &[Value]) -> Result<Value, RuntimeError> + 'static,
    {
        Self {
            name: Rc::from(name.as_ref()),
            arity,
            body: Rc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub(crate) fn invoke(
        &self,
        ctx: &mut ExecutionContext,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        (self.body)(ctx, args)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
