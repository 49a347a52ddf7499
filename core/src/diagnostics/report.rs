//! Rendering of uncaught runtime errors.
//!
//! The text form is a stable, line-oriented format:
//!
//! ```text
//! [4:10]Runtime Error: boom is not defined
//! Stack trace:
//!   [4:10] > boom
//!   [2:1] > caller
//! ```
//!
//! Frames are listed innermost first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StackFrame;
use crate::errors::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for TraceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown trace format '{other}' (expected text or json)")),
        }
    }
}

/// An uncaught error together with the frames that were active when it was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub row: u32,
    pub col: u32,
    pub message: String,
    /// Innermost frame first.
    pub stack: Vec<StackFrame>,
}

impl ErrorReport {
    /// `frames` are in push order, as held by the call stack.
    pub fn new(error: &RuntimeError, frames: &[StackFrame]) -> Self {
        Self {
            row: error.row,
            col: error.col,
            message: error.message(),
            stack: frames.iter().rev().cloned().collect(),
        }
    }

    pub fn lines(&self, format: TraceFormat) -> Vec<String> {
        match format {
            TraceFormat::Text => self.text_lines(),
            TraceFormat::Json => vec![self.to_json()],
        }
    }

    fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.stack.len() + 2);
        lines.push(format!(
            "[{}:{}]Runtime Error: {}",
            self.row, self.col, self.message
        ));
        lines.push("Stack trace:".to_string());
        lines.extend(
            self.stack
                .iter()
                .map(|frame| format!("  [{}:{}] > {}", frame.row, frame.col, frame.name)),
        );
        lines
    }

    pub fn to_json(&self) -> String {
        // Only strings and integers; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.text_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SourcePos;
    use crate::errors::ErrorKind;

    fn frames() -> Vec<StackFrame> {
        vec![
            StackFrame::new("outer", SourcePos::new(1, 1)),
            StackFrame::new("middle", SourcePos::new(2, 5)),
            StackFrame::new("inner", SourcePos::new(3, 9)),
        ]
    }

    #[test]
    fn text_report_lists_innermost_frame_first() {
        let err = RuntimeError::raised(SourcePos::new(3, 12), "boom");
        let text = ErrorReport::new(&err, &frames()).to_string();
        assert_eq!(
            text,
            "[3:12]Runtime Error: boom\n\
             Stack trace:\n  \
             [3:9] > inner\n  \
             [2:5] > middle\n  \
             [1:1] > outer\n"
        );
    }

    #[test]
    fn empty_stack_still_prints_header() {
        let err = RuntimeError::new(
            SourcePos::new(1, 1),
            ErrorKind::UndefinedReference { name: "x".into() },
        );
        let report = ErrorReport::new(&err, &[]);
        assert_eq!(
            report.lines(TraceFormat::Text),
            vec!["[1:1]Runtime Error: x is not defined", "Stack trace:"]
        );
    }

    #[test]
    fn json_report_keeps_trace_order() {
        let err = RuntimeError::raised(SourcePos::new(3, 12), "boom");
        let json = ErrorReport::new(&err, &frames()).to_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["message"], "boom");
        assert_eq!(parsed["row"], 3);
        assert_eq!(parsed["stack"][0]["name"], "inner");
        assert_eq!(parsed["stack"][2]["name"], "outer");
    }

    #[test]
    fn trace_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<TraceFormat>(), Ok(TraceFormat::Json));
        assert!("xml".parse::<TraceFormat>().is_err());
    }
}
