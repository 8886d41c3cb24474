use super::*;
use crate::{Output, SharedOutput, WofError};
use pretty_assertions::assert_eq;

fn with_output() -> (Interpreter, SharedOutput) {
    let out = Output::capture();
    let interp = Interpreter::builder().output(out.clone()).build();
    (interp, out)
}

fn quiet() -> Interpreter {
    Interpreter::builder()
        .output(Output::discard())
        .build()
}

#[test]
fn all_builtins_registered() {
    let interp = quiet();
    assert_eq!(
        interp.registry().names(),
        vec!["*", "+", "-", ".s", "/", "clear", "drop", "dup", "print", "swap"]
    );
}

#[test]
fn arithmetic_is_double() {
    let mut interp = quiet();
    interp.execute_line("6 7 *").unwrap();
    interp.execute_line("1 2 -").unwrap();
    interp.execute_line("1 4 /").unwrap();
    assert_eq!(
        interp.inspect_stack(),
        &[Value::double(42.0), Value::double(-1.0), Value::double(0.25)]
    );
}

#[test]
fn arithmetic_accepts_mixed_numbers() {
    let mut interp = quiet();
    interp.execute_line("1.5 2 +").unwrap();
    assert_eq!(interp.inspect_stack(), &[Value::double(3.5)]);
}

#[test]
fn arithmetic_underflow_leaves_stack() {
    for op in ["+", "-", "*", "/"] {
        let mut interp = quiet();
        interp.push(Value::integer(1));
        let err = interp.execute_line(op).unwrap_err();
        match err {
            WofError::StackUnderflow {
                op: name,
                needed,
                available,
            } => {
                assert_eq!(name, op);
                assert_eq!((needed, available), (2, 1));
            }
            other => panic!("expected StackUnderflow, got {other:?}"),
        }
        assert_eq!(interp.inspect_stack(), &[Value::integer(1)]);
    }
}

#[test]
fn arithmetic_checks_lower_operand_type() {
    let mut interp = quiet();
    interp.push(Value::string("x"));
    interp.push(Value::integer(1));
    assert!(matches!(
        interp.execute_line("+"),
        Err(WofError::TypeMismatch { .. })
    ));
    assert_eq!(interp.stack().len(), 2);
}

#[test]
fn zero_divisor_double() {
    let mut interp = quiet();
    interp.push(Value::integer(9));
    assert!(matches!(
        interp.execute_line("1 0.0 /"),
        Err(WofError::DivisionByZero)
    ));
    assert_eq!(interp.inspect_stack(), &[Value::integer(9)]);
}

#[test]
fn dup_drop_swap() {
    let mut interp = quiet();
    interp.execute_line("1 2 swap dup").unwrap();
    assert_eq!(
        interp.inspect_stack(),
        &[Value::integer(2), Value::integer(1), Value::integer(1)]
    );
    interp.execute_line("drop drop").unwrap();
    assert_eq!(interp.inspect_stack(), &[Value::integer(2)]);
}

#[test]
fn stack_ops_underflow() {
    for (line, op, needed) in [("dup", "dup", 1), ("drop", "drop", 1), ("swap", "swap", 2)] {
        let mut interp = quiet();
        match interp.execute_line(line) {
            Err(WofError::StackUnderflow {
                op: name, needed: n, ..
            }) => {
                assert_eq!(name, op);
                assert_eq!(n, needed);
            }
            other => panic!("expected StackUnderflow for {line}, got {other:?}"),
        }
    }
}

#[test]
fn dup_keeps_units() {
    let mut interp = quiet();
    interp.push(Value::double(3.0).with_unit(wof_value::Unit::new("m", 1.0)));
    interp.execute_line("dup").unwrap();
    assert_eq!(interp.inspect_stack()[0], interp.inspect_stack()[1]);
}

#[test]
fn print_shows_top_without_popping() {
    let (mut interp, out) = with_output();
    interp.execute_line(r#""hi there" print"#).unwrap();
    assert_eq!(out.contents(), "hi there\n");
    assert_eq!(interp.stack().len(), 1);
}

#[test]
fn print_on_empty_stack() {
    let (mut interp, out) = with_output();
    interp.execute_line("print").unwrap();
    assert_eq!(out.contents(), "(stack empty)\n");
}

#[test]
fn show_stack_listing() {
    let (mut interp, out) = with_output();
    interp.execute_line(".s 5 x .s").unwrap();
    assert_eq!(
        out.contents(),
        "Stack [0]\nStack [2]\n  [0] 5\n  [1] x\n"
    );
}

#[test]
fn clear_empties_stack() {
    let mut interp = quiet();
    interp.execute_line("1 2 3 clear").unwrap();
    assert!(interp.inspect_stack().is_empty());
}
