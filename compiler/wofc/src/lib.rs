//! Woflang command line: batch script runner and interactive REPL.
//!
//! The `wof` binary is a thin wrapper over this library so the runner and
//! the REPL line handling can be tested without spawning a process.

pub mod commands;
pub mod config;
mod tracing_setup;

pub use config::{parse_args, CliAction, CliConfig, ConfigError, PLUGIN_DIR_ENV, USAGE};
pub use tracing_setup::init_tracing;
