//! Native plugin loading and teardown.
//!
//! Loading never fails the caller. Rejected candidates are reported as
//! `warn!` events and skipped; the interpreter keeps only libraries whose
//! entry point ran.

use std::fs;
use std::path::{Path, PathBuf};

use libloading::Library;

use super::Interpreter;
use crate::plugin::{
    has_plugin_extension, LoadedPlugin, PluginEntry, PluginError, PluginLoad, PLUGIN_ENTRY_SYMBOL,
};

impl Interpreter {
    /// Load one plugin library.
    ///
    /// A missing path is a silent no-op. A library that cannot be opened, or
    /// that lacks the entry point, is closed again and contributes nothing.
    pub fn load_plugin(&mut self, path: impl AsRef<Path>) -> PluginLoad {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "plugin path does not exist");
            return PluginLoad::NotFound;
        }
        match self.try_load_plugin(path) {
            Ok(()) => PluginLoad::Loaded,
            Err(err) => {
                tracing::warn!(path = %err.path().display(), error = %err, "plugin skipped");
                PluginLoad::Skipped(err)
            }
        }
    }

    /// Load every plugin file directly inside `dir`.
    ///
    /// Non-recursive. Candidates are regular files with the platform's
    /// shared-library suffix, tried in directory-enumeration order. Returns
    /// the number of plugins loaded. An unreadable directory loads nothing.
    pub fn load_plugins(&mut self, dir: impl AsRef<Path>) -> usize {
        let dir = dir.as_ref();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "plugin directory unreadable");
                return 0;
            }
        };

        let mut loaded = 0;
        for path in entries.flatten().map(|entry| entry.path()) {
            if !path.is_file() || !has_plugin_extension(&path) {
                continue;
            }
            if self.load_plugin(&path).is_loaded() {
                loaded += 1;
            }
        }
        tracing::debug!(dir = %dir.display(), loaded, "plugin directory scanned");
        loaded
    }

    /// Run an entry point directly, without a library.
    ///
    /// Used for statically linked plugins.
    pub fn install_plugin_entry(&mut self, entry: PluginEntry) {
        entry(self);
    }

    /// Number of retained plugin libraries.
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Paths of the retained plugin libraries, in load order.
    pub fn plugin_paths(&self) -> impl Iterator<Item = &Path> {
        self.plugins.iter().map(|plugin| plugin.path.as_path())
    }

    #[allow(
        unsafe_code,
        reason = "opening a library runs its initializers; resolving the entry point trusts its signature"
    )]
    fn try_load_plugin(&mut self, path: &Path) -> Result<(), PluginError> {
        let path_buf = PathBuf::from(path);
        // SAFETY: plugins are trusted code built against this crate.
        let library = unsafe { Library::new(path) }.map_err(|source| PluginError::Open {
            path: path_buf.clone(),
            source,
        })?;

        // SAFETY: `declare_plugin!` fixes the exported symbol's signature to
        // `PluginEntry`. On failure `library` is dropped, which closes it.
        let entry: PluginEntry =
            match unsafe { library.get::<PluginEntry>(PLUGIN_ENTRY_SYMBOL.as_bytes()) } {
                Ok(symbol) => *symbol,
                Err(source) => {
                    return Err(PluginError::SymbolMissing {
                        path: path_buf,
                        source,
                    });
                }
            };

        entry(self);
        tracing::debug!(path = %path.display(), "plugin loaded");
        self.plugins.push(LoadedPlugin {
            path: path_buf,
            library,
        });
        Ok(())
    }

    /// Drop every handler, then unload plugin libraries in load order.
    fn unload_plugins(&mut self) {
        self.registry.clear();
        self.stack.clear();
        for plugin in self.plugins.drain(..) {
            match plugin.library.close() {
                Ok(()) => tracing::debug!(path = %plugin.path.display(), "plugin unloaded"),
                Err(err) => {
                    tracing::warn!(path = %plugin.path.display(), error = %err, "plugin unload failed");
                }
            }
        }
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        self.unload_plugins();
    }
}
