//! Operation registry: operation name to handler.
//!
//! Registering a name that already exists silently replaces the previous
//! handler. There is no namespacing or versioning, so a plugin loaded later
//! can shadow any built-in, arithmetic included.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use wof_value::WofResult;

use crate::Interpreter;

/// An executable operation.
///
/// Handlers receive the whole interpreter, pop their operands, push results
/// and report failures through the returned `Result`. `Rc` lets the
/// dispatcher hold a handler while the handler itself re-registers names.
pub type OpHandler = Rc<dyn Fn(&mut Interpreter) -> WofResult>;

/// Name-keyed table of operation handlers.
#[derive(Clone, Default)]
pub struct OpRegistry {
    ops: FxHashMap<String, OpHandler>,
}

impl OpRegistry {
    pub fn new() -> Self {
        OpRegistry {
            ops: FxHashMap::default(),
        }
    }

    /// Insert or replace the handler for `name`.
    ///
    /// Returns `true` when an earlier handler was discarded.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> bool
    where
        F: Fn(&mut Interpreter) -> WofResult + 'static,
    {
        self.register_handler(name, Rc::new(handler))
    }

    /// Insert or replace with an already-shared handler.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: OpHandler) -> bool {
        let name = name.into();
        let replaced = self.ops.insert(name.clone(), handler).is_some();
        if replaced {
            tracing::debug!(op = %name, "operation replaced");
        }
        replaced
    }

    /// Current handler for `name`.
    pub fn lookup(&self, name: &str) -> Option<OpHandler> {
        self.ops.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Remove every handler.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Registered names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for OpRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpRegistry")
            .field("ops", &self.names())
            .finish()
    }
}
