use miette::Diagnostic;
use thiserror::Error;

use crate::diagnostics::SourcePos;

/// What went wrong, independent of where.
#[derive(Debug, Error, Diagnostic)]
pub enum ErrorKind {
    #[error("builtin function '{builtin}' requires at least {min} {}", argument_noun(.min))]
    #[diagnostic(code(lfrt::arity))]
    Arity { builtin: &'static str, min: usize },

    #[error("'{name}' expects {expected} {} but got {got}", argument_noun(.expected))]
    #[diagnostic(code(lfrt::argument_count))]
    ArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{name} is not defined")]
    #[diagnostic(code(lfrt::undefined))]
    UndefinedReference { name: String },

    #[error("{name} is not a function")]
    #[diagnostic(code(lfrt::not_callable))]
    NotCallable { name: String },

    #[error("type error: {message}")]
    #[diagnostic(code(lfrt::type_error))]
    TypeError { message: String },

    #[error("maximum call depth of {limit} exceeded")]
    #[diagnostic(
        code(lfrt::call_depth),
        help("raise `max_call_depth` or check for unbounded recursion")
    )]
    CallDepthExceeded { limit: usize },

    #[error("{message}")]
    #[diagnostic(code(lfrt::raised))]
    Raised { message: String },

    #[error("output channel failed: {0}")]
    #[diagnostic(code(lfrt::output))]
    Output(#[from] std::io::Error),
}

fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}

/// A failure raised at a specific source position.
#[derive(Debug, Error, Diagnostic)]
#[error("[{row}:{col}] {kind}")]
pub struct RuntimeError {
    pub row: u32,
    pub col: u32,
    #[diagnostic_source]
    pub kind: ErrorKind,
}

impl RuntimeError {
    pub fn new(pos: SourcePos, kind: ErrorKind) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            kind,
        }
    }

    /// Raise an arbitrary failure from compiled code.
    pub fn raised(pos: SourcePos, message: impl Into<String>) -> Self {
        Self::new(
            pos,
            ErrorKind::Raised {
                message: message.into(),
            },
        )
    }

    /// The text shown after `Runtime Error:` in a report.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Attach a source position to a position-less failure.
pub trait ResultExt<T> {
    fn at(self, pos: SourcePos) -> Result<T, RuntimeError>;
}

impl<T> ResultExt<T> for Result<T, ErrorKind> {
    fn at(self, pos: SourcePos) -> Result<T, RuntimeError> {
        self.map_err(|kind| RuntimeError::new(pos, kind))
    }
}
