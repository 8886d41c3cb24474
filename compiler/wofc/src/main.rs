//! Woflang CLI

use std::process::ExitCode;

use wofc::{commands, init_tracing, parse_args, CliAction, PLUGIN_DIR_ENV, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let args = std::env::args().skip(1);
    let action = match parse_args(args, std::env::var(PLUGIN_DIR_ENV).ok()) {
        Ok(action) => action,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match action {
        CliAction::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        CliAction::Version => {
            println!("wof {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        CliAction::Run(config) => commands::run(&config),
    }
}
