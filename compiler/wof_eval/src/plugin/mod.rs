//! Native plugin ABI.
//!
//! A plugin is a dynamic library exporting one C-linkage function named
//! [`PLUGIN_ENTRY_SYMBOL`] with the [`PluginEntry`] signature. The loader
//! calls it once with the interpreter, and the plugin registers its
//! operations through [`Interpreter::register`].
//!
//! The entry point receives a Rust reference, not a C struct. Plugins must
//! be built with the same compiler and the same `wof_eval` as the host.
//!
//! Plugin crates should not write the entry point by hand:
//!
//! ```ignore
//! fn register(interp: &mut wof_eval::Interpreter) {
//!     interp.register("answer", |interp| {
//!         interp.push(wof_eval::Value::integer(42));
//!         Ok(())
//!     });
//! }
//!
//! wof_eval::declare_plugin!(register);
//! ```

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::Interpreter;

/// Exported symbol every plugin must provide.
pub const PLUGIN_ENTRY_SYMBOL: &str = "register_plugin";

/// Signature of the plugin entry point.
#[allow(
    improper_ctypes_definitions,
    reason = "host and plugin share one Rust toolchain; the pointer is never read from C"
)]
pub type PluginEntry = extern "C" fn(&mut Interpreter);

/// Why a candidate library contributed nothing.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The platform loader rejected the file.
    #[error("cannot open plugin `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    /// The library opened but does not export the entry point.
    #[error("plugin `{}` does not export `register_plugin`: {source}", .path.display())]
    SymbolMissing {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
}

impl PluginError {
    pub fn path(&self) -> &Path {
        match self {
            PluginError::Open { path, .. } | PluginError::SymbolMissing { path, .. } => path,
        }
    }
}

/// Outcome of loading a single candidate.
#[derive(Debug)]
pub enum PluginLoad {
    /// The path does not exist. Not an error.
    NotFound,
    /// The entry point ran and the handle is retained.
    Loaded,
    /// The candidate was rejected and nothing was retained.
    Skipped(PluginError),
}

impl PluginLoad {
    pub fn is_loaded(&self) -> bool {
        matches!(self, PluginLoad::Loaded)
    }
}

/// A library handle kept alive for the interpreter's lifetime.
pub(crate) struct LoadedPlugin {
    pub(crate) path: PathBuf,
    pub(crate) library: libloading::Library,
}

impl fmt::Debug for LoadedPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedPlugin")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Shared-library suffixes accepted on this platform.
#[cfg(target_os = "macos")]
pub const PLUGIN_EXTENSIONS: &[&str] = &["dylib", "so"];
#[cfg(not(target_os = "macos"))]
pub const PLUGIN_EXTENSIONS: &[&str] = &[std::env::consts::DLL_EXTENSION];

/// Whether `path` carries a native shared-library suffix.
pub fn has_plugin_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| PLUGIN_EXTENSIONS.contains(&ext))
}

/// Emit the `register_plugin` entry point for a plugin crate.
///
/// The argument is a path to a `fn(&mut Interpreter)`.
#[macro_export]
macro_rules! declare_plugin {
    ($register:path) => {
        #[allow(unsafe_code, reason = "the plugin entry point must be unmangled")]
        #[allow(
            improper_ctypes_definitions,
            reason = "host and plugin share one Rust toolchain"
        )]
        #[no_mangle]
        pub extern "C" fn register_plugin(interp: &mut $crate::Interpreter) {
            $register(interp);
        }
    };
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
