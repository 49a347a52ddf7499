use std::collections::HashMap;

use crate::errors::ErrorKind;
use crate::runtime::builtins::Builtin;
use crate::runtime::value::{ELSE, NIL, Value};

/// Global bindings visible to every tracked call.
///
/// Locals of compiled bodies are ordinary Rust bindings in the emitted
/// code; only top-level definitions and the prelude live here.
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// An environment holding just the prelude: the builtins, `else` and `nil`.
    pub fn new() -> Self {
        let mut env = Self {
            bindings: HashMap::new(),
        };
        for builtin in Builtin::ALL {
            env.define(builtin.name(), Value::Builtin(builtin));
        }
        env.define("else", ELSE);
        env.define("nil", NIL);
        env
    }

    /// Bind `name`, replacing any earlier binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Result<Value, ErrorKind> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| ErrorKind::UndefinedReference {
                name: name.to_owned(),
            })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
