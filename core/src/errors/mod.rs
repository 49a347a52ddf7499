mod runtime_error;

pub use runtime_error::{ErrorKind, ResultExt, RuntimeError};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type returned to whoever launched a program run.
#[derive(Debug, Error, Diagnostic)]
pub enum LfError {
    /// An uncaught runtime error. By the time this reaches the launcher the
    /// report has already been written to the output channel.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),

    /// The output channel failed while reporting `error`.
    #[error("failed to write the report for uncaught error {error}")]
    #[diagnostic(code(lfrt::report), help("the output channel is no longer writable"))]
    Report {
        error: RuntimeError,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid runtime configuration: {message}")]
    #[diagnostic(code(lfrt::config))]
    Config { message: String },
}
