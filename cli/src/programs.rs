//! Compiled LF programs bundled with the launcher.
//!
//! These are the emitter's output for the SICP chapter 1 exercises the
//! language was first tested against, written against the runtime API.

use lfrt::runtime::value::ops::{BinOp, binary, negate};
use lfrt::{
    Closure, CompiledProgram, ELSE, ExecutionContext, NIL, ResultExt, RuntimeError, SourcePos,
    Value,
};

fn pos(row: u32, col: u32) -> SourcePos {
    SourcePos::new(row, col)
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

/// Lower an n-ary operator form into a left fold of the binary operator.
fn fold(op: BinOp, operands: &[Value], at: SourcePos) -> Result<Value, RuntimeError> {
    let Some((first, rest)) = operands.split_first() else {
        return Ok(NIL);
    };
    let mut acc = first.clone();
    for operand in rest {
        acc = binary(&acc, op, operand).at(at)?;
    }
    Ok(acc)
}

/// Top-level expression statements print their value.
fn show(ctx: &mut ExecutionContext, at: SourcePos, value: Value) -> Result<Value, RuntimeError> {
    ctx.print(at, std::slice::from_ref(&value))?;
    Ok(value)
}

fn define_square(ctx: &mut ExecutionContext, row: u32) {
    ctx.define_closure(Closure::new("square", 1, move |_, args| {
        binary(&args[0], BinOp::Mul, &args[0]).at(pos(row, 20))
    }));
}

pub fn all() -> Vec<CompiledProgram> {
    vec![
        expressions(),
        compound_procedures(),
        conditionals(),
        recursion(),
        lambdas(),
    ]
}

fn expressions() -> CompiledProgram {
    CompiledProgram::new("run-1.1.1", |ctx| {
        let forms: [(BinOp, &[f64]); 7] = [
            (BinOp::Add, &[137.0, 349.0]),
            (BinOp::Sub, &[1000.0, 334.0]),
            (BinOp::Mul, &[5.0, 99.0]),
            (BinOp::Div, &[10.0, 5.0]),
            (BinOp::Add, &[2.7, 10.0]),
            (BinOp::Add, &[21.0, 35.0, 12.0, 7.0]),
            (BinOp::Mul, &[25.0, 4.0, 12.0]),
        ];
        for (row, (op, operands)) in (1..).zip(forms) {
            let operands: Vec<_> = operands.iter().copied().map(num).collect();
            let value = fold(op, &operands, pos(row, 1))?;
            show(ctx, pos(row, 1), value)?;
        }

        let left = fold(BinOp::Mul, &[num(3.0), num(5.0)], pos(8, 4))?;
        let right = fold(BinOp::Sub, &[num(10.0), num(6.0)], pos(8, 12))?;
        let value = fold(BinOp::Add, &[left, right], pos(8, 1))?;
        show(ctx, pos(8, 1), value)?;

        let inner = fold(
            BinOp::Add,
            &[
                fold(BinOp::Mul, &[num(2.0), num(4.0)], pos(9, 10))?,
                fold(BinOp::Add, &[num(3.0), num(5.0)], pos(9, 18))?,
            ],
            pos(9, 7),
        )?;
        let left = fold(BinOp::Mul, &[num(3.0), inner], pos(9, 4))?;
        let right = fold(
            BinOp::Add,
            &[
                fold(BinOp::Sub, &[num(10.0), num(7.0)], pos(10, 7))?,
                num(6.0),
            ],
            pos(10, 4),
        )?;
        let value = fold(BinOp::Add, &[left, right], pos(9, 1))?;
        show(ctx, pos(9, 1), value)?;

        ctx.define("size", num(2.0));
        let size = ctx.lookup("size", pos(12, 7))?;
        ctx.call("print", pos(12, 1), &[size.clone()])?;
        let value = fold(BinOp::Mul, &[num(5.0), size], pos(13, 1))?;
        show(ctx, pos(13, 1), value)?;

        ctx.define("pi", num(3.142));
        ctx.define("radius", num(10.0));
        let pi = ctx.lookup("pi", pos(16, 4))?;
        let radius = ctx.lookup("radius", pos(16, 8))?;
        let area = fold(
            BinOp::Mul,
            &[
                pi.clone(),
                fold(BinOp::Mul, &[radius.clone(), radius.clone()], pos(16, 7))?,
            ],
            pos(16, 1),
        )?;
        show(ctx, pos(16, 1), area)?;

        let circumference = fold(BinOp::Mul, &[num(2.0), pi, radius], pos(17, 22))?;
        ctx.define("circumference", circumference.clone());
        ctx.call("print", pos(18, 1), &[circumference])?;
        Ok(NIL)
    })
}

fn compound_procedures() -> CompiledProgram {
    CompiledProgram::new("run-1.1.5", |ctx| {
        define_square(ctx, 1);

        let value = ctx.call("square", pos(2, 1), &[num(21.0)])?;
        show(ctx, pos(2, 1), value)?;
        let seven = fold(BinOp::Add, &[num(2.0), num(5.0)], pos(3, 9))?;
        let value = ctx.call("square", pos(3, 1), &[seven])?;
        show(ctx, pos(3, 1), value)?;
        let nine = ctx.call("square", pos(4, 9), &[num(3.0)])?;
        let value = ctx.call("square", pos(4, 1), &[nine])?;
        show(ctx, pos(4, 1), value)?;

        ctx.define_closure(Closure::new("sum-of-squares", 2, |ctx, args| {
            let x = ctx.call("square", pos(5, 33), &args[..1])?;
            let y = ctx.call("square", pos(5, 44), &args[1..])?;
            fold(BinOp::Add, &[x, y], pos(5, 30))
        }));
        let value = ctx.call("sum-of-squares", pos(6, 1), &[num(3.0), num(4.0)])?;
        show(ctx, pos(6, 1), value)?;

        ctx.define_closure(Closure::new("f", 1, |ctx, args| {
            let a = &args[0];
            let first = fold(BinOp::Add, &[a.clone(), num(1.0)], pos(7, 33))?;
            let second = fold(BinOp::Mul, &[a.clone(), num(2.0)], pos(7, 43))?;
            ctx.call("sum-of-squares", pos(7, 16), &[first, second])
        }));
        let result = ctx.call("f", pos(8, 1), &[num(5.0)])?;
        show(ctx, pos(8, 1), result)
    })
}

fn conditionals() -> CompiledProgram {
    CompiledProgram::new("run-1.1.6", |ctx| {
        ctx.define_closure(Closure::new("abs", 1, |_, args| {
            let x = &args[0];
            let zero = num(0.0);
            if binary(x, BinOp::Greater, &zero).at(pos(2, 10))?.is_truthy() {
                Ok(x.clone())
            } else if binary(x, BinOp::Eq, &zero).at(pos(3, 10))?.is_truthy() {
                Ok(zero)
            } else if binary(x, BinOp::Less, &zero).at(pos(4, 10))?.is_truthy() {
                negate(x).at(pos(4, 18))
            } else {
                Ok(NIL)
            }
        }));
        let value = ctx.call("abs", pos(5, 1), &[num(-123.0)])?;
        show(ctx, pos(5, 1), value)?;

        ctx.define_closure(Closure::new("abs-with-else", 1, |_, args| {
            let x = &args[0];
            if binary(x, BinOp::GreaterEq, &num(0.0)).at(pos(7, 10))?.is_truthy() {
                Ok(x.clone())
            } else if ELSE.is_truthy() {
                negate(x).at(pos(8, 12))
            } else {
                Ok(NIL)
            }
        }));
        // The source applies `abs-with-else-123`, which was never defined.
        let result = ctx.call("abs-with-else-123", pos(9, 1), &[])?;
        show(ctx, pos(9, 1), result)
    })
}

fn recursion() -> CompiledProgram {
    CompiledProgram::new("run-1.2", |ctx| {
        ctx.define_closure(Closure::new("factorial", 1, |ctx, args| {
            let n = &args[0];
            if binary(n, BinOp::Eq, &num(1.0)).at(pos(2, 7))?.is_truthy() {
                return Ok(num(1.0));
            }
            let prev = fold(BinOp::Sub, &[n.clone(), num(1.0)], pos(3, 24))?;
            let rest = ctx.call("factorial", pos(3, 13), &[prev])?;
            fold(BinOp::Mul, &[n.clone(), rest], pos(3, 10))
        }));
        let value = ctx.call("factorial", pos(4, 1), &[num(10.0)])?;
        show(ctx, pos(4, 1), value)?;

        ctx.define_closure(Closure::new("fibb", 1, |ctx, args| {
            let n = &args[0];
            if binary(n, BinOp::Eq, &num(0.0)).at(pos(6, 7))?.is_truthy() {
                Ok(num(0.0))
            } else if binary(n, BinOp::Eq, &num(1.0)).at(pos(7, 7))?.is_truthy() {
                Ok(num(1.0))
            } else if ELSE.is_truthy() {
                let one_less = fold(BinOp::Sub, &[n.clone(), num(1.0)], pos(8, 21))?;
                let two_less = fold(BinOp::Sub, &[n.clone(), num(2.0)], pos(8, 37))?;
                let a = ctx.call("fibb", pos(8, 15), &[one_less])?;
                let b = ctx.call("fibb", pos(8, 31), &[two_less])?;
                fold(BinOp::Add, &[a, b], pos(8, 12))
            } else {
                Ok(NIL)
            }
        }));
        let result = ctx.call("fibb", pos(9, 1), &[num(10.0)])?;
        show(ctx, pos(9, 1), result)
    })
}

fn lambdas() -> CompiledProgram {
    CompiledProgram::new("run-1.3.2", |ctx| {
        define_square(ctx, 1);
        ctx.define_closure(Closure::new("f", 2, |ctx, args| {
            let (x, y) = (args[0].clone(), args[1].clone());
            let lambda = Value::from(Closure::new("lambda", 2, move |ctx, args| {
                let (a, b) = (&args[0], &args[1]);
                let a_squared = ctx.call("square", pos(3, 26), std::slice::from_ref(a))?;
                fold(
                    BinOp::Add,
                    &[
                        fold(BinOp::Mul, &[x.clone(), a_squared], pos(3, 20))?,
                        fold(BinOp::Mul, &[y.clone(), b.clone()], pos(4, 20))?,
                        fold(BinOp::Mul, &[a.clone(), b.clone()], pos(5, 20))?,
                    ],
                    pos(3, 17),
                )
            }));
            let x_times_y = fold(BinOp::Mul, &[args[0].clone(), args[1].clone()], pos(6, 12))?;
            let a = fold(BinOp::Add, &[num(1.0), x_times_y], pos(6, 9))?;
            let b = fold(BinOp::Sub, &[num(1.0), args[1].clone()], pos(7, 9))?;
            ctx.call_value(&lambda, "lambda", pos(2, 5), &[a, b])
        }));
        let result = ctx.call("f", pos(8, 1), &[num(5.0), num(5.0)])?;
        show(ctx, pos(8, 1), result)
    })
}
