pub mod report;
pub mod source_pos;
pub mod stack_trace;

pub use report::{ErrorReport, TraceFormat};
pub use source_pos::SourcePos;
pub use stack_trace::{CallStack, StackFrame};
