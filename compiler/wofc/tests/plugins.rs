//! Loads the real `wof_trig` shared library from a plugin directory.

#![allow(clippy::expect_used, reason = "tests use expect to panic on unexpected state")]

use std::env::consts::{DLL_EXTENSION, DLL_PREFIX};
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};
use wof_eval::{Interpreter, Output, PluginLoad, Value};

/// The `wof_trig` cdylib cargo built next to the `wof` binary.
fn trig_library() -> PathBuf {
    let name = format!("{DLL_PREFIX}wof_trig.{DLL_EXTENSION}");
    let bin_dir = Path::new(env!("CARGO_BIN_EXE_wof"))
        .parent()
        .expect("binary lives in a directory");
    [bin_dir.join(&name), bin_dir.join("deps").join(&name)]
        .into_iter()
        .find(|path| path.is_file())
        .unwrap_or_else(|| panic!("{name} not found under {}", bin_dir.display()))
}

/// A fresh plugin directory holding a copy of the trig library.
fn plugin_dir() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("create temp dir");
    let library = trig_library();
    let copy = dir
        .path()
        .join(library.file_name().expect("library has a file name"));
    fs::copy(&library, &copy).expect("copy plugin");
    (dir, copy)
}

fn interp() -> Interpreter {
    Interpreter::builder().output(Output::discard()).build()
}

#[test]
fn directory_scan_loads_and_retains_library() {
    let (dir, copy) = plugin_dir();
    fs::write(dir.path().join("notes.txt"), "not a plugin").expect("write file");

    let mut interp = interp();
    assert_eq!(interp.load_plugins(dir.path()), 1);
    assert_eq!(interp.plugin_count(), 1);
    assert_eq!(interp.plugin_paths().collect::<Vec<_>>(), vec![copy.as_path()]);

    interp.execute_line("1 0 atan2 pi").expect("plugin ops run");
    assert_eq!(
        interp.inspect_stack(),
        &[Value::double(0.0), Value::double(PI)]
    );
}

#[test]
fn loaded_plugin_replaces_existing_name() {
    let (_dir, copy) = plugin_dir();
    let mut interp = interp();
    interp.register("pi", |interp| {
        interp.push(Value::integer(3));
        Ok(())
    });
    interp.execute_line("pi").expect("host op runs");

    assert!(interp.load_plugin(&copy).is_loaded());
    interp.execute_line("pi").expect("plugin op runs");
    assert_eq!(
        interp.inspect_stack(),
        &[Value::integer(3), Value::double(PI)]
    );
}

#[test]
fn drop_unloads_and_library_reopens() {
    let (_dir, copy) = plugin_dir();
    for _ in 0..2 {
        let mut interp = interp();
        assert!(matches!(interp.load_plugin(&copy), PluginLoad::Loaded));
        interp.execute_line("0 cos").expect("plugin op runs");
        assert_eq!(interp.inspect_stack(), &[Value::double(1.0)]);
        drop(interp);
    }
}

#[test]
fn cli_loads_plugin_directory() {
    let (dir, _copy) = plugin_dir();
    Command::cargo_bin("wof")
        .expect("binary exists")
        .env_remove("WOF_PLUGIN_DIR")
        .arg("--plugins")
        .arg(dir.path())
        .args(["-e", "pi print"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3.141592653589793\n"));
}
