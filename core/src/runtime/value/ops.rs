//! Host operators used by compiled expression bodies.
//!
//! Unlike the builtins these are not variadic: the emitter lowers `(* x x)`
//! to a single `binary(.., BinOp::Mul, ..)` per operator occurrence.

use super::Value;
use crate::errors::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Eq,
    NotEq,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Less => "<",
            BinOp::LessEq => "<=",
            BinOp::Greater => ">",
            BinOp::GreaterEq => ">=",
            BinOp::Eq => "===",
            BinOp::NotEq => "!==",
        }
    }
}

pub fn binary(lhs: &Value, op: BinOp, rhs: &Value) -> Result<Value, ErrorKind> {
    match op {
        BinOp::Eq => return Ok(Value::Bool(lhs.strict_equals(rhs))),
        BinOp::NotEq => return Ok(Value::Bool(!lhs.strict_equals(rhs))),
        _ => {}
    }

    match (lhs, rhs) {
        (Value::Number(l), Value::Number(r)) => Ok(numeric(*l, op, *r)),
        (Value::Str(l), Value::Str(r)) => match op {
            BinOp::Add => Ok(Value::from(format!("{l}{r}"))),
            BinOp::Less => Ok(Value::Bool(l < r)),
            BinOp::LessEq => Ok(Value::Bool(l <= r)),
            BinOp::Greater => Ok(Value::Bool(l > r)),
            BinOp::GreaterEq => Ok(Value::Bool(l >= r)),
            _ => Err(operand_error(lhs, op, rhs)),
        },
        // Concatenation uses the natural representation of the other side.
        (Value::Str(_), _) | (_, Value::Str(_)) if op == BinOp::Add => {
            Ok(Value::from(format!("{lhs}{rhs}")))
        }
        _ => Err(operand_error(lhs, op, rhs)),
    }
}

fn numeric(l: f64, op: BinOp, r: f64) -> Value {
    match op {
        BinOp::Add => Value::Number(l + r),
        BinOp::Sub => Value::Number(l - r),
        BinOp::Mul => Value::Number(l * r),
        BinOp::Div => Value::Number(l / r),
        BinOp::Mod => Value::Number(l % r),
        BinOp::Less => Value::Bool(l < r),
        BinOp::LessEq => Value::Bool(l <= r),
        BinOp::Greater => Value::Bool(l > r),
        BinOp::GreaterEq => Value::Bool(l >= r),
        BinOp::Eq => Value::Bool(l == r),
        BinOp::NotEq => Value::Bool(l != r),
    }
}

/// Unary minus.
pub fn negate(value: &Value) -> Result<Value, ErrorKind> {
    match value {
        Value::Number(n) => Ok(Value::Number(-n)),
        other => Err(ErrorKind::TypeError {
            message: format!("cannot negate a {}", other.type_name()),
        }),
    }
}

fn operand_error(lhs: &Value, op: BinOp, rhs: &Value) -> ErrorKind {
    ErrorKind::TypeError {
        message: format!(
            "unsupported operands for '{}': {} and {}",
            op.symbol(),
            lhs.type_name(),
            rhs.type_name()
        ),
    }
}
