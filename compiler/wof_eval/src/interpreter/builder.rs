//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::builtins::register_builtins;
use crate::output::{Output, SharedOutput};
use crate::registry::OpRegistry;
use crate::stack::Stack;

/// Builder for creating Interpreter instances.
///
/// Defaults: built-in operations installed, output to stdout.
pub struct InterpreterBuilder {
    builtins: bool,
    output: Option<SharedOutput>,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            builtins: true,
            output: None,
        }
    }

    /// Whether to install the built-in operations.
    ///
    /// Turning this off yields an interpreter with an empty registry, where
    /// every word falls back to a symbol push.
    #[must_use]
    pub fn builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    /// Where `print` and `.s` write their lines.
    #[must_use]
    pub fn output(mut self, output: SharedOutput) -> Self {
        self.output = Some(output);
        self
    }

    pub fn build(self) -> Interpreter {
        let mut interp = Interpreter {
            stack: Stack::new(),
            registry: OpRegistry::new(),
            output: self.output.unwrap_or_else(Output::stdout),
            plugins: Vec::new(),
        };
        if self.builtins {
            register_builtins(&mut interp);
        }
        interp
    }
}
