//! Centralized error constructors for the interpreter.
//!
//! Single import point for handler authors:
//!
//! ```ignore
//! use wof_eval::errors::{custom, type_mismatch};
//! ```

pub use wof_value::{WofError, WofResult};

// Stack and operand errors

pub use wof_value::{division_by_zero, stack_underflow, type_mismatch};

// Script execution errors

pub use wof_value::{script_line, script_open};

// Third-party handler errors

pub use wof_value::custom;

pub use crate::plugin::PluginError;
