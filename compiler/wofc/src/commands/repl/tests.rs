use super::*;
use pretty_assertions::assert_eq;
use wof_eval::{Output, Value};

fn interp() -> Interpreter {
    Interpreter::builder()
        .output(Output::discard())
        .build()
}

#[test]
fn blank_line_does_nothing() {
    let mut interp = interp();
    assert!(matches!(handle_line(&mut interp, "   "), LineOutcome::Done));
    assert!(interp.inspect_stack().is_empty());
}

#[test]
fn quit_and_exit() {
    let mut interp = interp();
    assert!(matches!(handle_line(&mut interp, "quit"), LineOutcome::Quit));
    assert!(matches!(handle_line(&mut interp, " exit "), LineOutcome::Quit));
}

#[test]
fn help_text() {
    let mut interp = interp();
    match handle_line(&mut interp, "help") {
        LineOutcome::Output(text) => assert_eq!(text, REPL_HELP),
        other => panic!("expected help output, got {other:?}"),
    }
}

#[test]
fn dot_shows_stack() {
    let mut interp = interp();
    handle_line(&mut interp, "1 2");
    match handle_line(&mut interp, ".") {
        LineOutcome::Output(text) => assert_eq!(text, "Stack [2]\n  [0] 1\n  [1] 2"),
        other => panic!("expected stack listing, got {other:?}"),
    }
}

#[test]
fn code_lines_execute() {
    let mut interp = interp();
    assert!(matches!(handle_line(&mut interp, "5 3 +"), LineOutcome::Done));
    assert_eq!(interp.inspect_stack(), &[Value::double(8.0)]);
}

#[test]
fn failure_keeps_session_and_stack() {
    let mut interp = interp();
    handle_line(&mut interp, "4");
    match handle_line(&mut interp, "+ 9") {
        LineOutcome::Failed(err) => assert!(err.to_string().contains("stack underflow")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(interp.inspect_stack(), &[Value::integer(4)]);

    assert!(matches!(handle_line(&mut interp, "6 +"), LineOutcome::Done));
    assert_eq!(interp.inspect_stack(), &[Value::double(10.0)]);
}

#[test]
fn meta_commands_only_match_whole_lines() {
    let mut interp = interp();
    assert!(matches!(handle_line(&mut interp, "quit now"), LineOutcome::Done));
    assert_eq!(
        interp.inspect_stack(),
        &[Value::symbol("quit"), Value::symbol("now")]
    );
}
