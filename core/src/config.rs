use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::diagnostics::TraceFormat;
use crate::errors::LfError;

/// Default limit on nested tracked calls. Small enough that a runaway
/// recursion is reported before it exhausts a 2 MiB thread stack.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Runtime settings, usually loaded from a JSON file.
///
/// ```json
/// { "max_call_depth": 512, "echo_output": true, "trace_format": "json" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Deepest allowed nesting of tracked calls.
    pub max_call_depth: usize,
    /// Write program output to process stdout.
    pub echo_output: bool,
    /// Keep program output in memory.
    pub capture_output: bool,
    pub trace_format: TraceFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            echo_output: false,
            capture_output: true,
            trace_format: TraceFormat::Text,
        }
    }
}

impl RuntimeConfig {
    pub fn from_json_str(source: &str) -> Result<Self, LfError> {
        let config: Self = serde_json::from_str(source).map_err(|err| LfError::Config {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LfError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| LfError::Config {
            message: format!("failed to read '{}': {err}", path.display()),
        })?;
        Self::from_json_str(&source)
    }

    fn validate(&self) -> Result<(), LfError> {
        if self.max_call_depth == 0 {
            return Err(LfError::Config {
                message: "max_call_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
