//! Integration tests for the non-interactive commands.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command with HOME pointed at an empty directory, so the real user
/// config never leaks into a test.
fn tomadoro(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tomadoro").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn about_describes_the_technique() {
    let home = TempDir::new().unwrap();
    tomadoro(&home)
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro Technique"))
        .stdout(predicate::str::contains("25 minutes"));
}

#[test]
fn about_json_output() {
    let home = TempDir::new().unwrap();
    let output = tomadoro(&home)
        .args(["about", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["title"], "About Pomodoro");
}

#[test]
fn config_show_defaults() {
    let home = TempDir::new().unwrap();
    tomadoro(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 minutes"))
        .stdout(predicate::str::contains("5 minutes"));
}

#[test]
fn config_show_honors_config_file() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".tomadoro");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "timer:\n  work_minutes: 50\n").unwrap();

    tomadoro(&home)
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 50"));
}

#[test]
fn config_init_writes_file_once() {
    let home = TempDir::new().unwrap();

    tomadoro(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));

    assert!(home.path().join(".tomadoro/config.yaml").exists());

    // A second init without --force refuses to overwrite.
    tomadoro(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    tomadoro(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".tomadoro");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "timer: [not, a, map]").unwrap();

    tomadoro(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.yaml"));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    tomadoro(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tomadoro"));
}

#[test]
fn completions_unknown_shell() {
    let home = TempDir::new().unwrap();
    tomadoro(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
