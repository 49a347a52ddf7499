use std::io::{self, Write};

use tracing::{debug, instrument, warn};

use crate::config::RuntimeConfig;
use crate::diagnostics::{CallStack, ErrorReport, SourcePos, TraceFormat};
use crate::errors::{ErrorKind, LfError, ResultExt, RuntimeError};
use crate::program::Program;
use crate::runtime::builtins::Builtin;
use crate::runtime::environment::Environment;
use crate::runtime::output::Output;
use crate::runtime::value::{Closure, Value};

/// Everything a running compiled program touches: the call stack, the
/// global bindings and the output channel.
///
/// Emitted code receives the context explicitly; there is no ambient
/// state. One context belongs to one logical thread of execution.
#[derive(Debug)]
pub struct ExecutionContext {
    call_stack: CallStack,
    env: Environment,
    output: Output,
    max_call_depth: usize,
    trace_format: TraceFormat,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::from_config(&RuntimeConfig::default())
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            call_stack: CallStack::new(),
            env: Environment::new(),
            output: Output::new(
                config
                    .echo_output
                    .then(|| Box::new(io::stdout()) as Box<dyn Write>),
                config.capture_output,
            ),
            max_call_depth: config.max_call_depth,
            trace_format: config.trace_format,
        }
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Echo output and reports to `sink` in addition to any capture.
    pub fn set_echo_sink(&mut self, sink: Box<dyn Write>) {
        self.output.set_echo(sink);
    }

    /// Bind a top-level definition.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.env.define(name, value);
    }

    /// Bind a compiled function under its own name.
    pub fn define_closure(&mut self, closure: Closure) {
        self.env.define(closure.name().to_owned(), Value::Function(closure));
    }

    pub fn lookup(&self, name: &str, pos: SourcePos) -> Result<Value, RuntimeError> {
        self.env.get(name).at(pos)
    }

    /// Lines written to the output channel, when capture is enabled.
    pub fn output(&self) -> &[String] {
        self.output.lines()
    }

    pub fn take_output(&mut self) -> Vec<String> {
        self.output.take_lines()
    }

    /// Call the global `name` as a tracked invocation at `pos`.
    ///
    /// The frame is pushed before the callee is resolved, so an undefined
    /// callee is reported with its own frame on top.
    pub fn call(
        &mut self,
        name: &str,
        pos: SourcePos,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        self.enter(name, pos)?;
        let callee = self.env.get(name).at(pos)?;
        let value = self.invoke(&callee, name, pos, args)?;
        self.call_stack.leave();
        Ok(value)
    }

    /// Call a function value held by the emitted code, such as a local
    /// closure or an immediately applied lambda.
    pub fn call_value(
        &mut self,
        callee: &Value,
        name: &str,
        pos: SourcePos,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        self.enter(name, pos)?;
        let value = self.invoke(callee, name, pos, args)?;
        self.call_stack.leave();
        Ok(value)
    }

    /// Call a builtin directly, without a frame.
    pub fn builtin(
        &mut self,
        builtin: Builtin,
        pos: SourcePos,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        builtin.call(args, &mut self.output).at(pos)
    }

    pub fn print(&mut self, pos: SourcePos, args: &[Value]) -> Result<Value, RuntimeError> {
        self.builtin(Builtin::Print, pos, args)
    }

    // On failure the frame stays pushed; it belongs to the report.
    fn enter(&mut self, name: &str, pos: SourcePos) -> Result<(), RuntimeError> {
        self.call_stack.enter(name, pos.row, pos.col);
        let limit = self.max_call_depth;
        if self.call_stack.len() > limit {
            return Err(RuntimeError::new(
                pos,
                ErrorKind::CallDepthExceeded { limit },
            ));
        }
        Ok(())
    }

    fn invoke(
        &mut self,
        callee: &Value,
        name: &str,
        pos: SourcePos,
        args: &[Value],
    ) -> Result<Value, RuntimeError> {
        match callee {
            Value::Function(closure) => {
                if args.len() != closure.arity() {
                    return Err(RuntimeError::new(
                        pos,
                        ErrorKind::ArgumentCount {
                            name: name.to_owned(),
                            expected: closure.arity(),
                            got: args.len(),
                        },
                    ));
                }
                closure.invoke(self, args)
            }
            Value::Builtin(builtin) => {
                let result = builtin.call(args, &mut self.output);
                if let Err(err) = &result {
                    debug!(builtin = builtin.name(), %err, "builtin failed");
                }
                result.at(pos)
            }
            _ => Err(RuntimeError::new(
                pos,
                ErrorKind::NotCallable {
                    name: name.to_owned(),
                },
            )),
        }
    }

    /// Run `program` under the top-level failure handler.
    ///
    /// An uncaught error is reported exactly once on the output channel,
    /// the call stack is cleared and the error is handed back.
    #[instrument(skip_all, fields(program = program.name()))]
    pub fn execute(&mut self, program: &dyn Program) -> Result<Value, LfError> {
        match program.run(self) {
            Ok(value) => {
                if !self.call_stack.is_empty() {
                    warn!(
                        depth = self.call_stack.len(),
                        "program returned with frames still on the call stack"
                    );
                    // Stale frames would otherwise show up in the next report.
                    self.call_stack.clear();
                }
                Ok(value)
            }
            Err(err) => {
                let err = self.report_uncaught(err)?;
                Err(LfError::Runtime(err))
            }
        }
    }

    /// Write the report for `err` and clear the call stack.
    ///
    /// Hands `err` back once the report is written. If the output channel
    /// fails, the error travels inside `LfError::Report` instead.
    pub fn report_uncaught(&mut self, err: RuntimeError) -> Result<RuntimeError, LfError> {
        let report = ErrorReport::new(&err, self.call_stack.frames());
        self.call_stack.clear();
        debug!(
            row = report.row,
            col = report.col,
            frames = report.stack.len(),
            "reporting uncaught runtime error"
        );
        for line in report.lines(self.trace_format) {
            if let Err(source) = self.output.write_line(line) {
                return Err(LfError::Report { error: err, source });
            }
        }
        Ok(err)
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
