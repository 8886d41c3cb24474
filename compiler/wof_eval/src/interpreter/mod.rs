//! Stack interpreter for Woflang.
//!
//! # Architecture
//!
//! One [`Interpreter`] owns one [`Stack`], one [`OpRegistry`] and the handles
//! of every plugin it loaded. Nothing is process-global, so independent
//! interpreters with different operation sets can coexist.
//!
//! Execution is line oriented: `execute_line` tokenizes the line and
//! dispatches each token left to right, stopping at the first failure.
//!
//! # Dispatch rules
//!
//! For each token, the first matching rule applies:
//!
//! 1. comment (`#...`) - discarded
//! 2. `"..."` - push `String` with the quotes stripped
//! 3. integer literal - push `Integer` (out of `i64` range: `Double`)
//! 4. float literal - push `Double`
//! 5. registered operation - run its handler
//! 6. anything else - push `Symbol` with the raw text
//!
//! Rule 6 is a soft fallback, not an error: unknown names become data.
//!
//! Submodules:
//! - `builder` - `InterpreterBuilder`
//! - `plugin_loading` - native plugin loading and teardown

mod builder;
mod plugin_loading;

pub use builder::InterpreterBuilder;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use wof_lexer_core::{classify, string_contents, trim_line, Scanner, TokenTag};
use wof_value::{script_line, script_open, Value, WofError, WofResult};

use crate::plugin::LoadedPlugin;
use crate::output::SharedOutput;
use crate::registry::{OpHandler, OpRegistry};
use crate::stack::Stack;

/// The Woflang interpreter.
///
/// Handlers returned by [`Interpreter::lookup`] may point into plugin code
/// and must not outlive the interpreter that loaded it.
pub struct Interpreter {
    stack: Stack,
    registry: OpRegistry,
    output: SharedOutput,
    /// Loaded plugin libraries, in load order.
    plugins: Vec<LoadedPlugin>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter with the built-in operations, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    // Registry

    /// Insert or replace the handler for `name`.
    ///
    /// Later registrations win; the previous handler becomes unreachable.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Interpreter) -> WofResult + 'static,
    {
        self.registry.register(name, handler);
    }

    /// Current handler for `name`.
    pub fn lookup(&self, name: &str) -> Option<OpHandler> {
        self.registry.lookup(name)
    }

    pub fn has_op(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn registry(&self) -> &OpRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut OpRegistry {
        &mut self.registry
    }

    // Stack

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> WofResult<Value> {
        self.stack.pop()
    }

    pub fn peek(&self) -> WofResult<&Value> {
        self.stack.peek()
    }

    pub fn require(&self, n: usize, op: &str) -> WofResult {
        self.stack.require(n, op)
    }

    pub fn pop_numeric(&mut self) -> WofResult<f64> {
        self.stack.pop_numeric()
    }

    pub fn pop_integer(&mut self) -> WofResult<i64> {
        self.stack.pop_integer()
    }

    pub fn pop_string(&mut self) -> WofResult<String> {
        self.stack.pop_string()
    }

    pub fn pop_symbol(&mut self) -> WofResult<String> {
        self.stack.pop_symbol()
    }

    pub fn pop_bool(&mut self) -> WofResult<bool> {
        self.stack.pop_bool()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// Read-only snapshot of the stack, bottom first.
    pub fn inspect_stack(&self) -> &[Value] {
        self.stack.as_slice()
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    /// Render the stack as `Stack [n]` followed by one line per slot.
    pub fn format_stack(&self) -> String {
        let mut out = format!("Stack [{}]", self.stack.len());
        for (i, value) in self.stack.as_slice().iter().enumerate() {
            let _ = write!(out, "\n  [{i}] {value}");
        }
        out
    }

    // Output

    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    /// Write one line to the interpreter's output.
    pub fn println(&self, msg: &str) {
        self.output.line(msg);
    }

    // Execution

    /// Tokenize and dispatch one line.
    ///
    /// Tokens run strictly left to right. The first failing token aborts the
    /// rest of the line; the stack keeps whatever state the failing handler
    /// left it in.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn execute_line(&mut self, line: &str) -> WofResult {
        let line = trim_line(line);
        if line.is_empty() {
            return Ok(());
        }
        for token in Scanner::new(line) {
            self.dispatch(token.text())?;
        }
        Ok(())
    }

    /// Dispatch a single token.
    pub fn dispatch(&mut self, token: &str) -> WofResult {
        let tag = classify(token);
        tracing::trace!(token, tag = tag.name(), "dispatch");
        match tag {
            TokenTag::Comment => Ok(()),
            TokenTag::Str => {
                let inner = string_contents(token).unwrap_or_default();
                self.push(Value::string(inner));
                Ok(())
            }
            TokenTag::Integer => {
                self.push(parse_integer(token));
                Ok(())
            }
            TokenTag::Float => {
                let value = token
                    .parse::<f64>()
                    .map_or_else(|_| Value::symbol(token), Value::double);
                self.push(value);
                Ok(())
            }
            TokenTag::Word => match self.registry.lookup(token) {
                Some(handler) => handler(self),
                None => {
                    self.push(Value::symbol(token));
                    Ok(())
                }
            },
        }
    }

    /// Execute a script, aborting at the first failing line.
    ///
    /// The failure is wrapped in `ScriptLine` with the 1-based line number.
    /// A file that cannot be read fails with `ScriptOpen` before any line runs.
    pub fn execute_file(&mut self, path: impl AsRef<Path>) -> WofResult {
        let path = path.as_ref();
        let source = read_script(path)?;
        self.execute_source(path, &source)
    }

    /// Execute script text already read from `origin`.
    ///
    /// Same line semantics as [`Interpreter::execute_file`]; `origin` only
    /// labels `ScriptLine` failures.
    pub fn execute_source(&mut self, origin: &Path, source: &str) -> WofResult {
        tracing::debug!(origin = %origin.display(), "executing script");
        for (index, line) in source.lines().enumerate() {
            self.execute_line(line)
                .map_err(|err| script_line(origin, index + 1, err))?;
        }
        Ok(())
    }

    /// Execute every line of a script, collecting line failures.
    ///
    /// Only `ScriptOpen` is returned as an error; per-line failures are
    /// returned in the `Ok` vector, in line order.
    pub fn execute_file_lenient(&mut self, path: impl AsRef<Path>) -> WofResult<Vec<WofError>> {
        let path = path.as_ref();
        let source = read_script(path)?;
        Ok(self.execute_source_lenient(path, &source))
    }

    /// Lenient counterpart of [`Interpreter::execute_source`].
    pub fn execute_source_lenient(&mut self, origin: &Path, source: &str) -> Vec<WofError> {
        let mut failures = Vec::new();
        for (index, line) in source.lines().enumerate() {
            if let Err(err) = self.execute_line(line) {
                failures.push(script_line(origin, index + 1, err));
            }
        }
        failures
    }
}

/// Integer literal, or a `Double` when it does not fit in `i64`.
fn parse_integer(token: &str) -> Value {
    token
        .parse::<i64>()
        .map(Value::integer)
        .or_else(|_| token.parse::<f64>().map(Value::double))
        .unwrap_or_else(|_| Value::symbol(token))
}

fn read_script(path: &Path) -> WofResult<String> {
    fs::read_to_string(path).map_err(|err| script_open(path, err))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
