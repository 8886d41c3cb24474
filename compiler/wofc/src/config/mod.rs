//! Command-line configuration.
//!
//! There is no configuration file. Everything comes from the argument list
//! plus `WOF_PLUGIN_DIR`, which only supplies the default plugin directory.

use std::path::PathBuf;

/// Environment variable overriding the default plugin directory.
pub const PLUGIN_DIR_ENV: &str = "WOF_PLUGIN_DIR";

/// Plugin directory used when neither `--plugins` nor the environment set one.
pub const DEFAULT_PLUGIN_DIR: &str = "plugins";

/// Script path that reads the script from standard input.
pub const STDIN_SCRIPT: &str = "-";

pub const USAGE: &str = "\
Usage: wof [OPTIONS] [SCRIPT...]

Runs each SCRIPT line by line; a SCRIPT of - reads standard input.
With no scripts and no -e, starts the REPL.

Options:
  --plugins <DIR>     Load plugins from DIR (default: plugins, or $WOF_PLUGIN_DIR)
  --no-plugins        Do not load any plugins
  -e, --eval <LINE>   Execute LINE, then print the stack (repeatable)
  --keep-going        Report a failing script line and continue
  -h, --help          Print this help
  -V, --version       Print the version";

/// Settings for one `wof` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub plugin_dir: PathBuf,
    pub load_plugins: bool,
    /// Lines from `-e`, in command-line order.
    pub evals: Vec<String>,
    pub scripts: Vec<PathBuf>,
    pub keep_going: bool,
}

impl CliConfig {
    /// Defaults, with the plugin directory taken from `env_plugin_dir` if set.
    pub fn new(env_plugin_dir: Option<String>) -> Self {
        CliConfig {
            plugin_dir: env_plugin_dir
                .filter(|dir| !dir.is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_PLUGIN_DIR), PathBuf::from),
            load_plugins: true,
            evals: Vec::new(),
            scripts: Vec::new(),
            keep_going: false,
        }
    }

    /// No scripts and no `-e` lines: run the REPL.
    pub fn is_interactive(&self) -> bool {
        self.scripts.is_empty() && self.evals.is_empty()
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliAction {
    Run(CliConfig),
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("option `{0}` requires a value")]
    MissingValue(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse arguments, excluding the program name.
///
/// `--help` and `--version` win as soon as they are seen. `--` ends option
/// parsing; everything after it is a script path.
pub fn parse_args<I>(args: I, env_plugin_dir: Option<String>) -> Result<CliAction, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = CliConfig::new(env_plugin_dir);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "--no-plugins" => config.load_plugins = false,
            "--keep-going" => config.keep_going = true,
            "--plugins" => config.plugin_dir = PathBuf::from(value_for(&arg, args.next())?),
            "-e" | "--eval" => config.evals.push(value_for(&arg, args.next())?),
            "--" => {
                config.scripts.extend(args.by_ref().map(PathBuf::from));
            }
            _ => {
                if let Some(dir) = arg.strip_prefix("--plugins=") {
                    config.plugin_dir = PathBuf::from(dir);
                } else if let Some(line) = arg.strip_prefix("--eval=") {
                    config.evals.push(line.to_string());
                } else if arg.starts_with('-') && arg != STDIN_SCRIPT {
                    return Err(ConfigError::UnknownOption(arg));
                } else {
                    config.scripts.push(PathBuf::from(arg));
                }
            }
        }
    }

    Ok(CliAction::Run(config))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}
