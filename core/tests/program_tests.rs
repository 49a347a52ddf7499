use lfrt::runtime::value::ops::{BinOp, binary};
use lfrt::{
    Closure, CompiledProgram, ELSE, ExecutionContext, NIL, ResultExt, RuntimeError, SourcePos,
    Value,
};

fn pos(row: u32, col: u32) -> SourcePos {
    SourcePos::new(row, col)
}

fn run_and_capture(program: &CompiledProgram) -> (Value, Vec<String>) {
    let mut ctx = ExecutionContext::new();
    let value = ctx.execute(program).expect("program should succeed");
    assert!(ctx.call_stack().is_empty(), "frames left after a normal return");
    (value, ctx.take_output())
}

fn square() -> Closure {
    Closure::new("square", 1, |_, args| {
        binary(&args[0], BinOp::Mul, &args[0]).at(pos(1, 20))
    })
}

#[test]
fn square_of_three() {
    let program = CompiledProgram::new("square", |ctx| {
        ctx.define_closure(square());
        let result = ctx.call("square", pos(2, 1), &[Value::Number(3.0)])?;
        ctx.print(pos(2, 1), &[result.clone()])?;
        Ok(result)
    });

    let (value, output) = run_and_capture(&program);

    assert_eq!(value, Value::Number(9.0));
    assert_eq!(output, vec!["9"]);
}

#[test]
fn closures_compose_through_the_environment() {
    let program = CompiledProgram::new("sum-of-squares", |ctx| {
        ctx.define_closure(square());
        ctx.define_closure(Closure::new("sum-of-squares", 2, |ctx, args| {
            let x = ctx.call("square", pos(2, 30), &args[..1])?;
            let y = ctx.call("square", pos(2, 41), &args[1..])?;
            binary(&x, BinOp::Add, &y).at(pos(2, 28))
        }));
        ctx.call(
            "sum-of-squares",
            pos(3, 1),
            &[Value::Number(3.0), Value::Number(4.0)],
        )
    });

    let (value, _) = run_and_capture(&program);
    assert_eq!(value, Value::Number(25.0));
}

#[test]
fn immediately_applied_lambda_is_tracked_under_its_name() {
    let program = CompiledProgram::new("lambda", |ctx| {
        let lambda = Value::from(Closure::new("lambda", 1, |ctx, args| {
            let depth = ctx.call_stack().len() as f64;
            binary(&args[0], BinOp::Add, &Value::Number(depth)).at(pos(1, 12))
        }));
        ctx.call_value(&lambda, "lambda", pos(1, 1), &[Value::Number(10.0)])
    });

    let (value, _) = run_and_capture(&program);
    assert_eq!(value, Value::Number(11.0));
}

/// `abs` as a compiled conditional chain; with `has_else` false the chain
/// can run out of branches and yields `nil`.
fn abs(has_else: bool) -> Closure {
    Closure::new("abs", 1, move |_, args| {
        let x = &args[0];
        let zero = Value::Number(0.0);
        if binary(x, BinOp::Greater, &zero).at(pos(2, 5))?.is_truthy() {
            Ok(x.clone())
        } else if binary(x, BinOp::Eq, &zero).at(pos(3, 5))?.is_truthy() {
            Ok(zero)
        } else if has_else && ELSE.is_truthy() {
            lfrt::runtime::value::ops::negate(x).at(pos(4, 11))
        } else {
            Ok(NIL)
        }
    })
}

#[test]
fn conditional_chains_use_else_and_nil() {
    let program = CompiledProgram::new("abs", |ctx| {
        ctx.define_closure(abs(true));
        let a = ctx.call("abs", pos(5, 1), &[Value::Number(-123.0)])?;
        let b = ctx.call("abs", pos(6, 1), &[Value::Number(0.0)])?;
        ctx.define_closure(abs(false));
        let c = ctx.call("abs", pos(7, 1), &[Value::Number(-1.0)])?;
        ctx.print(pos(8, 1), &[a, b, c])?;
        Ok(NIL)
    });

    let (value, output) = run_and_capture(&program);
    assert!(value.is_nil());
    assert_eq!(output, vec!["123 0 undefined"]);
}

#[test]
fn recursive_factorial_and_fibonacci() {
    let program = CompiledProgram::new("run-1.2", |ctx| {
        ctx.define_closure(Closure::new("factorial", 1, |ctx, args| {
            let n = &args[0];
            if binary(n, BinOp::Eq, &Value::Number(1.0)).at(pos(1, 25))?.is_truthy() {
                return Ok(Value::Number(1.0));
            }
            let prev = binary(n, BinOp::Sub, &Value::Number(1.0)).at(pos(1, 50))?;
            let rest = ctx.call("factorial", pos(1, 40), &[prev])?;
            binary(n, BinOp::Mul, &rest).at(pos(1, 35))
        }));
        ctx.define_closure(Closure::new("fibb", 1, |ctx, args| {
            let n = args[0].as_number().unwrap_or(f64::NAN);
            if n == 0.0 {
                Ok(Value::Number(0.0))
            } else if n == 1.0 {
                Ok(Value::Number(1.0))
            } else {
                let a = ctx.call("fibb", pos(4, 20), &[Value::Number(n - 1.0)])?;
                let b = ctx.call("fibb", pos(4, 35), &[Value::Number(n - 2.0)])?;
                binary(&a, BinOp::Add, &b).at(pos(4, 18))
            }
        }));
        let f = ctx.call("factorial", pos(2, 1), &[Value::Number(10.0)])?;
        ctx.print(pos(2, 1), &[f])?;
        let fib = ctx.call("fibb", pos(5, 1), &[Value::Number(10.0)])?;
        ctx.print(pos(5, 1), &[fib.clone()])?;
        Ok(fib)
    });

    let (value, output) = run_and_capture(&program);
    assert_eq!(value, Value::Number(55.0));
    assert_eq!(output, vec!["3628800", "55"]);
}

#[test]
fn undefined_function_reports_callee_then_caller() {
    let program = CompiledProgram::new("undefined", |ctx| {
        ctx.define_closure(Closure::new("caller", 0, |ctx, _| {
            ctx.call("callee", pos(4, 10), &[])
        }));
        ctx.call("caller", pos(2, 1), &[])
    });
    let mut ctx = ExecutionContext::new();

    let err = ctx.execute(&program).expect_err("callee is not defined");

    assert!(err.to_string().contains("callee is not defined"));
    assert_eq!(
        ctx.output(),
        [
            "[4:10]Runtime Error: callee is not defined",
            "Stack trace:",
            "  [4:10] > callee",
            "  [2:1] > caller",
        ]
    );
    assert!(ctx.call_stack().is_empty());
}

#[test]
fn type_errors_from_host_operators_surface_with_position() {
    let program = CompiledProgram::new("bad-math", |ctx| {
        ctx.define_closure(Closure::new("half", 1, |_, args| {
            binary(&args[0], BinOp::Div, &Value::Number(2.0)).at(pos(1, 14))
        }));
        ctx.call("half", pos(2, 1), &[Value::str("ten")])
    });
    let mut ctx = ExecutionContext::new();

    let err = ctx.execute(&program).expect_err("string division should fail");

    assert_eq!(
        ctx.output()[0],
        "[1:14]Runtime Error: type error: unsupported operands for '/': string and number"
    );
    assert_eq!(ctx.output()[2], "  [2:1] > half");
    assert!(matches!(err, lfrt::LfError::Runtime(RuntimeError { row: 1, col: 14, .. })));
}
