use std::fmt;
use std::io::{self, Write};

/// The program's standard output channel.
///
/// Lines can be echoed to a writer (process stdout by default), captured
/// in memory, or both. Capturing is how tests and embedders observe what a
/// program printed.
#[derive(Default)]
pub struct Output {
    echo: Option<Box<dyn Write>>,
    capture: bool,
    lines: Vec<String>,
}

impl Output {
    pub fn new(echo: Option<Box<dyn Write>>, capture: bool) -> Self {
        Self {
            echo,
            capture,
            lines: Vec::new(),
        }
    }

    /// Capture only, nothing is echoed.
    pub fn capture() -> Self {
        Self::new(None, true)
    }

    /// Echo every line to `sink` from now on.
    pub fn set_echo(&mut self, sink: Box<dyn Write>) {
        self.echo = Some(sink);
    }

    pub fn write_line(&mut self, line: impl Into<String>) -> io::Result<()> {
        let line = line.into();
        if let Some(sink) = self.echo.as_mut() {
            writeln!(sink, "{line}")?;
            sink.flush()?;
        }
        if self.capture {
            self.lines.push(line);
        }
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("echo", &self.echo.is_some())
            .field("capture", &self.capture)
            .field("lines", &self.lines.len())
            .finish()
    }
}
