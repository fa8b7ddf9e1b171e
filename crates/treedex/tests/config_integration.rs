//! Integration tests for configuration discovery and overrides.

use assert_cmd::Command;
use predicates::prelude::*;

const SIMPLE: &str = "(ROOT (S (NP (PRP I)) (VP (VBP run))))";

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn explicit_config_file_sets_include_glob() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.parsed"), SIMPLE).unwrap();
    std::fs::write(dir.path().join("two.trees"), SIMPLE).unwrap();
    let config = dir.path().join("conf.toml");
    std::fs::write(&config, "include = \"*.parsed\"\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("folder")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("one.parsed,"))
        .stdout(predicate::str::contains("two.trees,").not());
}

#[test]
fn env_variable_overrides_include_glob() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.parsed"), SIMPLE).unwrap();
    std::fs::write(dir.path().join("two.trees"), SIMPLE).unwrap();

    cmd()
        .env("TREEDEX_INCLUDE", "*.parsed")
        .arg("folder")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("one.parsed,"))
        .stdout(predicate::str::contains("two.trees,").not());
}

#[test]
fn project_config_found_via_chdir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("treedex.toml"), "include = \"*.parsed\"\n").unwrap();
    std::fs::write(dir.path().join("one.parsed"), SIMPLE).unwrap();
    std::fs::write(dir.path().join("two.trees"), SIMPLE).unwrap();

    cmd()
        .arg("--chdir")
        .arg(dir.path())
        .arg("folder")
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("one.parsed,"))
        .stdout(predicate::str::contains("two.trees,").not());
}

#[test]
fn max_input_limit_rejects_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("big.trees");
    std::fs::write(&file, SIMPLE).unwrap();
    let config = dir.path().join("conf.toml");
    std::fs::write(&config, "max_input_bytes = 10\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disable_input_limit_allows_any_size() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("big.trees");
    std::fs::write(&file, SIMPLE).unwrap();
    let config = dir.path().join("conf.toml");
    std::fs::write(
        &config,
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Filename,"));
}
