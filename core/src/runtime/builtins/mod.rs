//! Builtins available to every compiled program.

mod arithmetic;
mod console;

pub use arithmetic::{sub, sum};
pub use console::print;

use crate::errors::ErrorKind;
use crate::runtime::output::Output;
use crate::runtime::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sum,
    Sub,
    Print,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::Sum, Builtin::Sub, Builtin::Print];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sum => "sum",
            Builtin::Sub => "sub",
            Builtin::Print => "print",
        }
    }

    pub fn call(self, args: &[Value], output: &mut Output) -> Result<Value, ErrorKind> {
        match self {
            Builtin::Sum => sum(args),
            Builtin::Sub => sub(args),
            Builtin::Print => print(args, output),
        }
    }
}

/// Fail with an arity error unless at least `min` arguments were passed.
fn require_at_least(builtin: &'static str, args: &[Value], min: usize) -> Result<(), ErrorKind> {
    if args.len() < min {
        return Err(ErrorKind::Arity { builtin, min });
    }
    Ok(())
}
