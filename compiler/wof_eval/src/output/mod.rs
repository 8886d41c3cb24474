//! Line sink for `print`, `.s` and the front ends.
//!
//! Everything an interpreter prints goes through one [`Output`] as whole
//! lines. The host decides where the lines land; tests capture them.

use std::io::{self, Write as _};
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;

/// Output shared between an interpreter and its host.
pub type SharedOutput = Arc<Output>;

#[derive(Debug)]
pub enum Output {
    /// Standard output. A failed write (closed pipe) is logged and dropped.
    Stdout,
    /// Lines collected in memory, newline-terminated.
    Capture(Mutex<String>),
    Discard,
}

impl Output {
    pub fn stdout() -> SharedOutput {
        Arc::new(Output::Stdout)
    }

    pub fn capture() -> SharedOutput {
        Arc::new(Output::Capture(Mutex::new(String::new())))
    }

    pub fn discard() -> SharedOutput {
        Arc::new(Output::Discard)
    }

    /// Emit `text` followed by a newline.
    pub fn line(&self, text: &str) {
        match self {
            Output::Stdout => {
                if let Err(error) = writeln!(io::stdout().lock(), "{text}") {
                    tracing::debug!(%error, "dropping output line");
                }
            }
            Output::Capture(buf) => {
                let mut buf = buf.lock();
                buf.push_str(text);
                buf.push('\n');
            }
            Output::Discard => {}
        }
    }

    /// Captured text so far. Always empty unless capturing.
    pub fn contents(&self) -> String {
        match self {
            Output::Capture(buf) => buf.lock().clone(),
            Output::Stdout | Output::Discard => String::new(),
        }
    }

    /// Captured text so far, leaving the capture empty.
    pub fn take(&self) -> String {
        match self {
            Output::Capture(buf) => mem::take(&mut *buf.lock()),
            Output::Stdout | Output::Discard => String::new(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
