use super::Value;

impl Value {
    /// Truthiness used by conditional guards.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Function(_) | Value::Builtin(_) => true,
        }
    }

    /// Strict equality: no coercion between types.
    pub fn strict_equals(&self, other: &Value) -> bool {
        self == other
    }
}
