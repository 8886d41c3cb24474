//! Batch mode: run scripts, then `-e` lines.

use std::io::{self, Read as _};
use std::path::Path;

use wof_eval::errors::script_open;
use wof_eval::{Interpreter, WofError};

use crate::config::{CliConfig, STDIN_SCRIPT};

/// Failures collected while running a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub errors: Vec<WofError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run every script, then every `-e` line, against `interp`.
///
/// Without `--keep-going` the first failure stops the batch. With it, each
/// failing script line is recorded and execution resumes on the next line;
/// a script that cannot be opened is still fatal. After the `-e` lines the
/// stack listing is printed through the interpreter's output.
pub fn run_batch(interp: &mut Interpreter, config: &CliConfig) -> BatchReport {
    let mut report = BatchReport::default();

    for script in &config.scripts {
        match run_script(interp, script, config.keep_going) {
            Ok(failures) => report.errors.extend(failures),
            Err(err) => {
                report.errors.push(err);
                return report;
            }
        }
    }

    if config.evals.is_empty() {
        return report;
    }
    for line in &config.evals {
        if let Err(err) = interp.execute_line(line) {
            report.errors.push(err);
            if !config.keep_going {
                return report;
            }
        }
    }
    let listing = interp.format_stack();
    interp.println(&listing);
    report
}

/// Run one script, reading standard input for [`STDIN_SCRIPT`].
///
/// `Err` stops the batch. With `keep_going`, line failures come back in `Ok`.
fn run_script(
    interp: &mut Interpreter,
    script: &Path,
    keep_going: bool,
) -> Result<Vec<WofError>, WofError> {
    if script != Path::new(STDIN_SCRIPT) {
        return if keep_going {
            interp.execute_file_lenient(script)
        } else {
            interp.execute_file(script).map(|()| Vec::new())
        };
    }

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|err| script_open(script, err))?;
    if keep_going {
        Ok(interp.execute_source_lenient(script, &source))
    } else {
        interp.execute_source(script, &source).map(|()| Vec::new())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
