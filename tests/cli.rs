use assert_cmd::Command;
use predicates::prelude::*;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn sketchpad_help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Educational shape drawing canvas"));
}

#[test]
fn sketchpad_version_prints_package_version() {
    sketchpad_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_override_is_an_error() {
    sketchpad_cmd()
        .args(["--config", "/nonexistent/sketchpad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config override"));
}

#[test]
fn malformed_config_override_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "drawing = \"not a table\"").unwrap();

    sketchpad_cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config override"));
}
