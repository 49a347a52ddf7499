use crate::context::ExecutionContext;
use crate::errors::RuntimeError;
use crate::naming;
use crate::runtime::value::Value;

/// A compiled LF program: a sequence of top-level statements run against
/// an execution context.
pub trait Program {
    /// The program's LF name, such as `run-1.2`.
    fn name(&self) -> &str;

    fn run(&self, ctx: &mut ExecutionContext) -> Result<Value, RuntimeError>;

    /// The identifier the emitter binds the program under.
    fn host_name(&self) -> String {
        naming::mangle(self.name())
    }
}

type ProgramBody = dyn Fn(&mut ExecutionContext) -> Result<Value, RuntimeError>;

/// A program whose body is a Rust closure, which is what the emitter produces.
pub struct CompiledProgram {
    name: String,
    body: Box<ProgramBody>,
}

impl CompiledProgram {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut ExecutionContext) -> Result<Value, RuntimeError> + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }
}

impl Program for CompiledProgram {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &mut ExecutionContext) -> Result<Value, RuntimeError> {
        (self.body)(ctx)
    }
}

impl std::fmt::Debug for CompiledProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledProgram")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
