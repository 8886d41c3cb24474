//! Error types raised while executing Woflang code.
//!
//! Handlers and literal coercions raise a [`WofError`]; it unwinds to the
//! boundary of the current `execute_line` call, aborting the rest of that
//! line. The factory functions below are the public way to build errors so
//! message wording stays in one place.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result of an operation handler or interpreter entry point.
pub type WofResult<T = ()> = Result<T, WofError>;

/// Failure raised during execution.
#[derive(Debug, Error)]
pub enum WofError {
    /// An operation needed more values than the stack holds.
    #[error("stack underflow: `{op}` needs {needed}, stack has {available}")]
    StackUnderflow {
        op: String,
        needed: usize,
        available: usize,
    },

    /// A value of the wrong variant was used.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("division by zero")]
    DivisionByZero,

    /// A script file could not be opened or read.
    #[error("failed to open script `{}`: {source}", .path.display())]
    ScriptOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of a batch script failed.
    #[error("{}:{line}: {source}", .path.display())]
    ScriptLine {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        #[source]
        source: Box<WofError>,
    },

    /// Free-form failure raised by a third-party operation.
    #[error("{message}")]
    Custom { message: String },
}

impl WofError {
    /// The innermost error, looking through `ScriptLine` wrappers.
    pub fn root(&self) -> &WofError {
        match self {
            WofError::ScriptLine { source, .. } => source.root(),
            other => other,
        }
    }
}

// Factory functions

#[cold]
pub fn stack_underflow(op: &str, needed: usize, available: usize) -> WofError {
    WofError::StackUnderflow {
        op: op.to_string(),
        needed,
        available,
    }
}

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> WofError {
    WofError::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    }
}

#[cold]
pub fn division_by_zero() -> WofError {
    WofError::DivisionByZero
}

#[cold]
pub fn custom(message: impl Into<String>) -> WofError {
    WofError::Custom {
        message: message.into(),
    }
}

#[cold]
pub fn script_open(path: &Path, source: io::Error) -> WofError {
    WofError::ScriptOpen {
        path: path.to_path_buf(),
        source,
    }
}

#[cold]
pub fn script_line(path: &Path, line: usize, source: WofError) -> WofError {
    WofError::ScriptLine {
        path: path.to_path_buf(),
        line,
        source: Box::new(source),
    }
}
