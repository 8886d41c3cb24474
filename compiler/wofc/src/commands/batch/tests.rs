use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use wof_eval::{Output, SharedOutput, Value};

fn setup() -> (Interpreter, SharedOutput) {
    let out = Output::capture();
    let interp = Interpreter::builder().output(out.clone()).build();
    (interp, out)
}

fn config_with(scripts: Vec<PathBuf>, evals: &[&str], keep_going: bool) -> CliConfig {
    CliConfig {
        scripts,
        evals: evals.iter().map(ToString::to_string).collect(),
        keep_going,
        load_plugins: false,
        ..CliConfig::new(None)
    }
}

#[test]
fn evals_then_stack_listing() {
    let (mut interp, out) = setup();
    let report = run_batch(&mut interp, &config_with(vec![], &["5 3", "+"], false));
    assert!(report.is_success());
    assert_eq!(out.contents(), "Stack [1]\n  [0] 8\n");
}

#[test]
fn scripts_run_before_evals() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("setup.wof");
    fs::write(&script, "10\n2\n").unwrap();

    let (mut interp, out) = setup();
    let report = run_batch(&mut interp, &config_with(vec![script], &["/"], false));
    assert!(report.is_success());
    assert_eq!(interp.inspect_stack(), &[Value::double(5.0)]);
    assert_eq!(out.contents(), "Stack [1]\n  [0] 5\n");
}

#[test]
fn first_failure_stops_batch() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.wof");
    let good = dir.path().join("good.wof");
    fs::write(&bad, "1\n0 /\n7\n").unwrap();
    fs::write(&good, "99\n").unwrap();

    let (mut interp, out) = setup();
    let report = run_batch(&mut interp, &config_with(vec![bad, good], &["print"], false));
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(
        report.errors[0],
        WofError::ScriptLine { line: 2, .. }
    ));
    assert_eq!(interp.inspect_stack(), &[Value::integer(1)]);
    assert_eq!(out.contents(), "");
}

#[test]
fn keep_going_collects_every_failure() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("mixed.wof");
    fs::write(&script, "drop\n3\nswap\n4\n").unwrap();

    let (mut interp, out) = setup();
    let report = run_batch(&mut interp, &config_with(vec![script], &["+", "bogus +"], true));
    assert_eq!(report.errors.len(), 3);
    assert_eq!(
        interp.inspect_stack(),
        &[Value::double(7.0), Value::symbol("bogus")]
    );
    assert_eq!(out.contents(), "Stack [2]\n  [0] 7\n  [1] bogus\n");
}

#[test]
fn unreadable_script_is_fatal_even_with_keep_going() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.wof");

    let (mut interp, _) = setup();
    let report = run_batch(&mut interp, &config_with(vec![missing], &["1"], true));
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(report.errors[0], WofError::ScriptOpen { .. }));
    assert!(interp.inspect_stack().is_empty());
}
