use serde::Serialize;
use tracing::trace;

use super::SourcePos;

/// One active tracked invocation, tagged with the position of its call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackFrame {
    pub name: String,
    pub row: u32,
    pub col: u32,
}

impl StackFrame {
    pub fn new(name: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            name: name.into(),
            row: pos.row,
            col: pos.col,
        }
    }
}

/// Frames of the currently active tracked invocations, outermost first.
///
/// Pushed on entry and popped only on normal return. A failing invocation
/// leaves its frame in place so the top-level handler can report it; the
/// stack is then cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    frames: Vec<StackFrame>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, name: impl Into<String>, row: u32, col: u32) {
        let frame = StackFrame::new(name, SourcePos::new(row, col));
        trace!(name = %frame.name, row, col, depth = self.frames.len() + 1, "enter");
        self.frames.push(frame);
    }

    /// Pop the innermost frame.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty: every `leave` must pair with an
    /// earlier `enter`, so underflow is a defect in the emitted code.
    pub fn leave(&mut self) {
        let frame = self
            .frames
            .pop()
            .expect("call stack underflow: leave() without a matching enter()");
        trace!(name = %frame.name, depth = self.frames.len(), "leave");
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
