//! Behavior of the sift binary: stdout output, file output, and failure
//! reporting with a non-zero exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SOURCE: &str = "Show\n    BaseType \"Ancient Shard\" \"Exalted Orb\"\n    SetFontSize 45\n";

fn sift() -> Command {
    Command::cargo_bin("sift").expect("binary builds")
}

#[test]
fn compiles_to_stdout_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rules.sift");
    fs::write(&input, SOURCE).unwrap();

    sift()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("BaseType \"Ancient Shard\""))
        .stdout(predicate::str::contains("BaseType \"Exalted Orb\""));
}

#[test]
fn writes_the_output_file_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rules.sift");
    let output = dir.path().join("rules.filter");
    fs::write(&input, SOURCE).unwrap();

    sift()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let compiled = fs::read_to_string(&output).unwrap();
    assert!(compiled.contains("BaseType \"Exalted Orb\""));
    assert!(compiled.contains("    SetFontSize 45"));
}

#[test]
fn compile_errors_exit_nonzero_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rules.sift");
    fs::write(&input, "Garbage line here\n").unwrap();

    sift()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected keyword"));
}

#[test]
fn missing_input_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.sift");

    sift()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
