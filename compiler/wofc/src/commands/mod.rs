//! Command handlers for the `wof` CLI.
//!
//! `run` picks the mode from the configuration: batch when scripts or `-e`
//! lines are given, otherwise the interactive REPL.

use std::process::ExitCode;

use wof_eval::{Interpreter, Output};

use crate::config::CliConfig;

mod batch;
mod repl;

pub use batch::{run_batch, BatchReport};
pub use repl::{handle_line, run_repl, LineOutcome, REPL_HELP, REPL_PROMPT};

/// Build an interpreter for `config`, loading plugins unless disabled.
pub fn build_interpreter(config: &CliConfig) -> Interpreter {
    let mut interp = Interpreter::builder()
        .output(Output::stdout())
        .build();
    if config.load_plugins {
        let loaded = interp.load_plugins(&config.plugin_dir);
        tracing::debug!(dir = %config.plugin_dir.display(), loaded, "plugins loaded");
    }
    interp
}

/// Execute a parsed command line.
pub fn run(config: &CliConfig) -> ExitCode {
    let mut interp = build_interpreter(config);

    if config.is_interactive() {
        if config.load_plugins && !config.plugin_dir.is_dir() {
            eprintln!(
                "note: plugin directory `{}` not found",
                config.plugin_dir.display()
            );
        }
        return match run_repl(&mut interp) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let report = run_batch(&mut interp, config);
    for err in &report.errors {
        eprintln!("error: {err}");
    }
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
