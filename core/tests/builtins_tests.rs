use lfrt::{Builtin, ErrorKind, ExecutionContext, LfError, SourcePos, Value};

fn pos(row: u32, col: u32) -> SourcePos {
    SourcePos::new(row, col)
}

fn nums(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::Number).collect()
}

#[test]
fn sum_and_sub_through_tracked_calls() {
    let mut ctx = ExecutionContext::new();

    let total = ctx
        .call("sum", pos(1, 1), &nums(&[1.0, 2.0, 3.0]))
        .expect("sum should succeed");
    assert_eq!(total, Value::Number(6.0));

    let diff = ctx
        .call("sub", pos(2, 1), &nums(&[10.0, 3.0, 2.0]))
        .expect("sub should succeed");
    assert_eq!(diff, Value::Number(5.0));

    assert!(ctx.call_stack().is_empty());
}

#[test]
fn arity_error_carries_call_site_and_keeps_frame() {
    let mut ctx = ExecutionContext::new();
    let err = ctx
        .call("sum", pos(3, 7), &nums(&[1.0]))
        .expect_err("sum with one argument should fail");

    assert_eq!((err.row, err.col), (3, 7));
    assert!(matches!(err.kind, ErrorKind::Arity { builtin: "sum", min: 2 }));
    assert_eq!(ctx.call_stack().len(), 1);
    assert_eq!(ctx.call_stack().frames()[0].name, "sum");
}

#[test]
fn direct_builtin_call_pushes_no_frame() {
    let mut ctx = ExecutionContext::new();
    let err = ctx
        .builtin(Builtin::Sub, pos(1, 2), &[])
        .expect_err("sub without arguments should fail");
    assert_eq!(
        err.message(),
        "builtin function 'sub' requires at least 1 argument"
    );
    assert!(ctx.call_stack().is_empty());
}

#[test]
fn print_writes_natural_representation() {
    let mut ctx = ExecutionContext::new();
    ctx.print(
        pos(1, 1),
        &[Value::Number(1.0), Value::str("a"), Value::Bool(true)],
    )
    .expect("print should succeed");
    ctx.call("print", pos(2, 1), &[Value::Number(2.5), lfrt::NIL])
        .expect("print should succeed");

    assert_eq!(ctx.output(), ["1 a true", "2.5 undefined"]);
}

#[test]
fn uncaught_arity_error_is_reported() {
    let program = lfrt::CompiledProgram::new("arity", |ctx| {
        ctx.call("sub", SourcePos::new(1, 2), &[])
    });
    let (result, output) = lfrt::run(&program);

    assert!(matches!(result, Err(LfError::Runtime(_))));
    assert_eq!(
        output,
        vec![
            "[1:2]Runtime Error: builtin function 'sub' requires at least 1 argument",
            "Stack trace:",
            "  [1:2] > sub",
        ]
    );
}
