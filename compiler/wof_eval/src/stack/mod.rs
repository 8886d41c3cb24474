//! The interpreter's value stack.
//!
//! A plain LIFO of [`Value`]s with no capacity bound. Typed pop helpers
//! check the top slot before removing it, so a `TypeMismatch` leaves the
//! stack untouched.

use wof_value::{stack_underflow, type_mismatch, Value, ValueKind, WofResult};

/// Ordered, growable LIFO of values, bottom first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { values: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> WofResult<Value> {
        self.values.pop().ok_or_else(|| stack_underflow("pop", 1, 0))
    }

    /// Borrow the top value.
    pub fn peek(&self) -> WofResult<&Value> {
        self.values.last().ok_or_else(|| stack_underflow("peek", 1, 0))
    }

    /// Borrow the value `depth` slots below the top (`0` is the top).
    pub fn peek_at(&self, depth: usize) -> Option<&Value> {
        self.values.len().checked_sub(depth + 1).map(|i| &self.values[i])
    }

    /// Fail with `StackUnderflow` unless at least `n` values are present.
    pub fn require(&self, n: usize, op: &str) -> WofResult {
        if self.values.len() < n {
            return Err(stack_underflow(op, n, self.values.len()));
        }
        Ok(())
    }

    #[inline]
    pub fn has(&self, n: usize) -> bool {
        self.values.len() >= n
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Read-only view, bottom first.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Swap the top two values.
    pub fn swap_top(&mut self, op: &str) -> WofResult {
        self.require(2, op)?;
        let len = self.values.len();
        self.values.swap(len - 1, len - 2);
        Ok(())
    }

    /// Pop a number, widening integers to `f64`.
    pub fn pop_numeric(&mut self) -> WofResult<f64> {
        let x = self.peek()?.as_numeric()?;
        self.values.pop();
        Ok(x)
    }

    /// Pop an integer. Doubles are rounded to the nearest integer.
    pub fn pop_integer(&mut self) -> WofResult<i64> {
        let n = match self.peek()?.kind() {
            ValueKind::Integer(n) => *n,
            ValueKind::Double(x) => round_to_i64(*x),
            ValueKind::String(_) | ValueKind::Symbol(_) | ValueKind::Unknown => {
                return Err(type_mismatch("integer", self.peek()?.type_name()));
            }
        };
        self.values.pop();
        Ok(n)
    }

    /// Pop the text of a `String` or `Symbol`.
    pub fn pop_string(&mut self) -> WofResult<String> {
        let top = self.peek()?;
        let text = top
            .as_text()
            .map(str::to_owned)
            .ok_or_else(|| type_mismatch("string", top.type_name()))?;
        self.values.pop();
        Ok(text)
    }

    /// Pop the text of a `Symbol`.
    pub fn pop_symbol(&mut self) -> WofResult<String> {
        let top = self.peek()?;
        if !matches!(top.kind(), ValueKind::Symbol(_)) {
            return Err(type_mismatch("symbol", top.type_name()));
        }
        self.pop_string()
    }

    /// Pop a truth value.
    ///
    /// Numbers are true when non-zero. Text is true unless empty, `0`,
    /// `false` or `False`. Unknown is false.
    pub fn pop_bool(&mut self) -> WofResult<bool> {
        let value = self.pop()?;
        let truth = match value.kind() {
            ValueKind::Integer(n) => *n != 0,
            ValueKind::Double(x) => *x != 0.0,
            ValueKind::String(s) | ValueKind::Symbol(s) => {
                !matches!(s.as_str(), "" | "0" | "false" | "False")
            }
            ValueKind::Unknown => false,
        };
        Ok(truth)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "saturating float-to-int cast is the intended rounding"
)]
fn round_to_i64(x: f64) -> i64 {
    x.round() as i64
}
