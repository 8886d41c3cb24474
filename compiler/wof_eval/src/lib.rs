//! Woflang Eval - stack interpreter, operation registry and plugin loader.
//!
//! # Architecture
//!
//! - `Stack`: LIFO of [`Value`]s with typed pop helpers
//! - `OpRegistry`: name to handler table, last registration wins
//! - `Interpreter`: tokenizes lines and dispatches tokens against both
//! - `plugin`: the `register_plugin` ABI and `declare_plugin!`
//! - `Output`: where `print` and `.s` lines go
//!
//! # Re-exports
//!
//! Value and error types from `wof_value` are re-exported so handler and
//! plugin crates need only this crate.

mod builtins;
pub mod errors;
pub mod interpreter;
pub mod plugin;
mod output;
mod registry;
mod stack;

pub use wof_lexer_core::trim_line;
pub use wof_value::{Unit, Value, ValueKind, WofError, WofResult};

pub use errors::{custom, division_by_zero, stack_underflow, type_mismatch};

pub use interpreter::{Interpreter, InterpreterBuilder};
pub use plugin::{PluginEntry, PluginError, PluginLoad, PLUGIN_ENTRY_SYMBOL};
pub use output::{Output, SharedOutput};
pub use registry::{OpHandler, OpRegistry};
pub use stack::Stack;
