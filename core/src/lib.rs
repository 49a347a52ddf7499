//! Runtime support for compiled LF expression programs.
//!
//! Emitted code runs against an [`ExecutionContext`]: it calls the
//! builtins (`sum`, `sub`, `print`), makes tracked calls that record their
//! call site on the context's call stack, and returns a `Result` from every
//! call. An error that reaches [`ExecutionContext::execute`] is reported
//! once with a stack trace, innermost frame first.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod errors;
pub mod naming;
pub mod program;
pub mod runtime;

pub use config::{DEFAULT_MAX_CALL_DEPTH, RuntimeConfig};
pub use context::ExecutionContext;
pub use diagnostics::{CallStack, SourcePos, StackFrame, TraceFormat};
pub use engine::Engine;
pub use errors::{ErrorKind, LfError, ResultExt, RuntimeError};
pub use program::{CompiledProgram, Program};
pub use runtime::builtins::Builtin;
pub use runtime::value::{Closure, ELSE, NIL, Value};

/// Run `program` in a fresh default context and return its value together
/// with everything it printed.
pub fn run(program: &dyn Program) -> (Result<Value, LfError>, Vec<String>) {
    let mut ctx = ExecutionContext::new();
    let result = ctx.execute(program);
    (result, ctx.take_output())
}
