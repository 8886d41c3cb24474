//! Woflang Value - runtime values and errors for the Woflang interpreter.
//!
//! This crate provides:
//! - The tagged stack value (`Value`, `ValueKind`) and its optional `Unit`
//! - Execution error types (`WofError`, `WofResult`) and their constructors
//!
//! It has no interpreter dependencies so plugins and tools can share the
//! value model with the host without linking the evaluator twice.

mod errors;
mod value;

pub use errors::{WofError, WofResult};
pub use value::{Unit, Value, ValueKind};

// Re-export error constructors for use by other crates
pub use errors::{
    custom, division_by_zero, script_line, script_open, stack_underflow, type_mismatch,
};
