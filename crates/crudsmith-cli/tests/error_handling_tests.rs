//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn crudsmith(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("crudsmith").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_error_invalid_layer() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .arg("generate")
        .arg("post")
        .args(["--layer", "api", "--dry-run"])
        .arg("--root")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid layer 'api'"))
        .stderr(predicate::str::contains("frontend"));
}

#[test]
fn test_error_invalid_model_name() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("routes")).unwrap();
    crudsmith(&temp)
        .arg("generate")
        .arg("9lives")
        .args(["--layer", "backend"])
        .arg("--root")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid model name '9lives'"));

    // Fatal before any step runs.
    assert!(!temp.path().join("resources").exists());
}

#[test]
fn test_error_missing_root() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["generate", "post", "--layer", "backend", "--root"])
        .arg(temp.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["config", "get", "paths.nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown configuration key 'paths.nope'"));
}

#[test]
fn test_error_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    crudsmith(&temp)
        .args(["names", "post", "--config"])
        .arg(temp.path().join("absent.toml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}
