//! Interactive REPL.
//!
//! Each input line is either a meta-command or a line of Woflang. Line
//! failures are reported and the session continues with the next line;
//! the stack keeps whatever state the failed line left.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use wof_eval::{trim_line, Interpreter, WofError};

pub const REPL_PROMPT: &str = "wof> ";

pub const REPL_HELP: &str = "\
Enter Woflang tokens separated by spaces; each line runs left to right.

  quit, exit   leave the REPL
  help         show this text
  .            show the stack
  .s           show the stack (operation)
  clear        empty the stack

Unknown words are pushed as symbols. Ctrl-D or Ctrl-C also exits.";

/// What handling one REPL line produced.
#[derive(Debug)]
pub enum LineOutcome {
    /// The line ran (or was blank) with nothing extra to show.
    Done,
    /// Text to show the user.
    Output(String),
    /// The line failed; the session continues.
    Failed(WofError),
    /// The user asked to leave.
    Quit,
}

/// Handle one REPL input line against `interp`.
pub fn handle_line(interp: &mut Interpreter, line: &str) -> LineOutcome {
    match trim_line(line) {
        "" => LineOutcome::Done,
        "quit" | "exit" => LineOutcome::Quit,
        "help" => LineOutcome::Output(REPL_HELP.to_string()),
        "." => LineOutcome::Output(interp.format_stack()),
        source => match interp.execute_line(source) {
            Ok(()) => LineOutcome::Done,
            Err(err) => LineOutcome::Failed(err),
        },
    }
}

/// Run the read-eval-print loop until `quit`, Ctrl-C or end of input.
pub fn run_repl(interp: &mut Interpreter) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    println!(
        "Woflang {} REPL. Type `help` for commands, `quit` to exit.",
        env!("CARGO_PKG_VERSION")
    );

    loop {
        let line = match editor.readline(REPL_PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        };
        let entry = trim_line(&line);
        if !entry.is_empty() {
            editor.add_history_entry(entry).ok();
        }

        match handle_line(interp, &line) {
            LineOutcome::Done => {}
            LineOutcome::Output(text) => interp.println(&text),
            LineOutcome::Failed(err) => eprintln!("error: {err}"),
            LineOutcome::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
