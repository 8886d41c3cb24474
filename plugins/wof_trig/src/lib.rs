//! Trigonometric operations for Woflang.
//!
//! Built as a `cdylib`, this crate is a plugin: drop the library into the
//! plugin directory and the host loads it at startup. It can also be linked
//! statically and installed with [`register`].
//!
//! All results are `Double`. Operands may be `Integer` or `Double`.

use std::f64::consts::{E, PI};

use wof_eval::{Interpreter, Value, WofResult};

type UnaryFn = fn(f64) -> f64;

const UNARY_OPS: &[(&str, UnaryFn)] = &[
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("asin", f64::asin),
    ("acos", f64::acos),
    ("atan", f64::atan),
    ("sinh", f64::sinh),
    ("cosh", f64::cosh),
    ("tanh", f64::tanh),
    ("deg->rad", f64::to_radians),
    ("rad->deg", f64::to_degrees),
];

/// Register every trigonometric operation into `interp`.
pub fn register(interp: &mut Interpreter) {
    interp.register("pi", |interp| push_double(interp, PI));
    interp.register("e", |interp| push_double(interp, E));
    for &(name, f) in UNARY_OPS {
        interp.register(name, move |interp| unary(interp, name, f));
    }
    interp.register("atan2", atan2);
}

wof_eval::declare_plugin!(register);

fn push_double(interp: &mut Interpreter, x: f64) -> WofResult {
    interp.push(Value::double(x));
    Ok(())
}

fn unary(interp: &mut Interpreter, name: &str, f: UnaryFn) -> WofResult {
    interp.require(1, name)?;
    let x = interp.pop_numeric()?;
    push_double(interp, f(x))
}

/// `x y atan2` pushes `atan2(y, x)`: y is popped first, from the top.
fn atan2(interp: &mut Interpreter) -> WofResult {
    interp.require(2, "atan2")?;
    if let Some(lower) = interp.stack().peek_at(1) {
        lower.as_numeric()?;
    }
    let y = interp.pop_numeric()?;
    let x = interp.pop_numeric()?;
    push_double(interp, y.atan2(x))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
