use crate::errors::ErrorKind;
use crate::runtime::output::Output;
use crate::runtime::value::{NIL, Value};

/// Write the arguments space-separated, followed by a newline.
pub fn print(args: &[Value], output: &mut Output) -> Result<Value, ErrorKind> {
    let line = args
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    output.write_line(line)?;
    Ok(NIL)
}
