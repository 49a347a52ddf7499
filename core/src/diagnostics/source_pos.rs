use std::fmt;

use serde::Serialize;

/// A row/column position in LF source, as embedded by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SourcePos {
    pub row: u32,
    pub col: u32,
}

impl SourcePos {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.row, self.col)
    }
}
