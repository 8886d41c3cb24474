//! Built-in operations.
//!
//! Registered through the same `register` call plugins use, so any of them
//! can be shadowed by a later registration.

use wof_value::{division_by_zero, Value, WofResult};

use crate::Interpreter;

/// Binary arithmetic operators. Every result is a `Double`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    fn apply(self, a: f64, b: f64) -> WofResult<f64> {
        match self {
            ArithOp::Add => Ok(a + b),
            ArithOp::Sub => Ok(a - b),
            ArithOp::Mul => Ok(a * b),
            ArithOp::Div if b == 0.0 => Err(division_by_zero()),
            ArithOp::Div => Ok(a / b),
        }
    }
}

/// Install every built-in into `interp`.
pub fn register_builtins(interp: &mut Interpreter) {
    for op in [ArithOp::Add, ArithOp::Sub, ArithOp::Mul, ArithOp::Div] {
        interp.register(op.name(), move |interp| arith(interp, op));
    }
    interp.register("dup", dup);
    interp.register("drop", drop_top);
    interp.register("swap", swap);
    interp.register("print", print_top);
    interp.register(".s", show_stack);
    interp.register("clear", |interp| {
        interp.clear_stack();
        Ok(())
    });
}

/// Pop b, pop a, push `a op b`.
///
/// Operand count and types are checked before anything is popped. Division
/// by zero is detected after both operands are consumed.
fn arith(interp: &mut Interpreter, op: ArithOp) -> WofResult {
    interp.require(2, op.name())?;
    let stack = interp.stack();
    for depth in 0..2 {
        if let Some(value) = stack.peek_at(depth) {
            value.as_numeric()?;
        }
    }
    let b = interp.pop_numeric()?;
    let a = interp.pop_numeric()?;
    interp.push(Value::double(op.apply(a, b)?));
    Ok(())
}

fn dup(interp: &mut Interpreter) -> WofResult {
    interp.require(1, "dup")?;
    let top = interp.peek()?.clone();
    interp.push(top);
    Ok(())
}

fn drop_top(interp: &mut Interpreter) -> WofResult {
    interp.require(1, "drop")?;
    interp.pop()?;
    Ok(())
}

fn swap(interp: &mut Interpreter) -> WofResult {
    interp.stack_mut().swap_top("swap")
}

/// Print the top value's text, leaving the stack unchanged.
fn print_top(interp: &mut Interpreter) -> WofResult {
    let text = match interp.peek() {
        Ok(top) => top.to_text(),
        Err(_) => "(stack empty)".to_string(),
    };
    interp.println(&text);
    Ok(())
}

fn show_stack(interp: &mut Interpreter) -> WofResult {
    let listing = interp.format_stack();
    interp.println(&listing);
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
