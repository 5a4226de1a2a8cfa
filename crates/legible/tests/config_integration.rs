//! Configuration integration tests.
//!
//! Each test lays out config files in a temp directory, runs the binary
//! there, and reads the effective settings back from `info --json`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Effective `config` object from `info --json`, run from `dir`.
fn effective_config(dir: &Path, extra: &[&str]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap()])
        .args(extra)
        .args(["info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).expect("invalid JSON output");
    json["config"].clone()
}

fn reported_file(config: &Value) -> &str {
    config["config_file"].as_str().unwrap_or_default()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn defaults_without_any_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = effective_config(tmp.path(), &[]);

    assert!(config["config_file"].is_null());
    assert_eq!(config["log_level"], "info");
    assert_eq!(config["max_input_bytes"], 10_000);
    assert_eq!(config["word_list"], "spell");
    assert!(config["max_grade"].is_null());
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn dotfile_sets_analysis_options() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legible.toml"),
        "max_grade = 9.5\nmax_input_bytes = 2048\nword_list = \"dict/words\"\n",
    )
    .unwrap();

    let config = effective_config(tmp.path(), &[]);
    assert_eq!(config["max_grade"], 9.5);
    assert_eq!(config["max_input_bytes"], 2048);
    assert_eq!(config["word_list"], "dict/words");
    assert!(reported_file(&config).ends_with(".legible.toml"));
}

#[test]
fn yaml_and_json_files_are_read() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.yaml"), "max_grade: 7\n").unwrap();
    assert_eq!(effective_config(tmp.path(), &[])["max_grade"], 7.0);

    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("legible.json"), r#"{"word_list": "w.txt"}"#).unwrap();
    assert_eq!(effective_config(tmp.path(), &[])["word_list"], "w.txt");
}

#[test]
fn plain_name_wins_over_dotfile_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 6.0\n").unwrap();
    fs::write(tmp.path().join("legible.toml"), "max_grade = 11.0\n").unwrap();

    let config = effective_config(tmp.path(), &[]);
    assert_eq!(config["max_grade"], 11.0);
}

#[test]
fn config_found_from_nested_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("chapters").join("one");
    fs::create_dir_all(&nested).unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 8.0\n").unwrap();

    let config = effective_config(&nested, &[]);
    assert_eq!(config["max_grade"], 8.0);
}

#[test]
fn search_stops_at_git_root() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let docs = repo.join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 3.0\n").unwrap();

    let config = effective_config(&docs, &[]);
    assert!(config["max_grade"].is_null());
    assert!(config["config_file"].is_null());
}

#[test]
fn config_beside_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 12.0\n").unwrap();

    let config = effective_config(&docs, &[]);
    assert_eq!(config["max_grade"], 12.0);
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 9.0\n").unwrap();
    let explicit = tmp.path().join("strict.toml");
    fs::write(&explicit, "max_grade = 6.0\n").unwrap();

    let config = effective_config(tmp.path(), &["--config", explicit.to_str().unwrap()]);
    assert_eq!(config["max_grade"], 6.0);
    assert!(reported_file(&config).ends_with("strict.toml"));
}

#[test]
fn environment_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 9.5\n").unwrap();

    let output = cmd()
        .env("LEGIBLE_MAX_GRADE", "6")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_grade"], 6.0);
}

#[test]
fn disabled_input_limit_reports_null() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legible.toml"),
        "max_input_bytes = 2048\ndisable_input_limit = true\n",
    )
    .unwrap();

    assert!(effective_config(tmp.path(), &[])["max_input_bytes"].is_null());
}

// =============================================================================
// Config driving commands
// =============================================================================

#[test]
fn config_max_grade_gates_readability() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = 1.0\n").unwrap();
    fs::write(
        tmp.path().join("input.txt"),
        "Comprehensive institutional documentation necessitates considerable deliberation.",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "readability", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 1.00"));
}

#[test]
fn config_word_list_is_used_by_spell() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("dict")).unwrap();
    fs::write(tmp.path().join("dict").join("words"), "hello\nworld\n").unwrap();
    fs::write(tmp.path().join(".legible.toml"), "word_list = \"dict/words\"\n").unwrap();
    fs::write(tmp.path().join("input.txt"), "hello world").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "spell", "check", "input.txt"])
        .assert()
        .success();
}

#[test]
fn log_dir_writes_jsonl_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    fs::write(
        tmp.path().join(".legible.toml"),
        format!(
            "log_level = \"debug\"\nlog_dir = \"{}\"\n",
            logs.to_str().unwrap().replace('\\', "/")
        ),
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .success();

    assert!(logs.join("legible.jsonl").exists());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn malformed_config_fails_with_context() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_grade = [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn wrong_type_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".legible.toml"), "max_input_bytes = \"lots\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_fields_are_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".legible.toml"),
        "max_grade = 10.0\nsyllable_mode = \"strict\"\n",
    )
    .unwrap();

    assert_eq!(effective_config(tmp.path(), &[])["max_grade"], 10.0);
}
