//! Configuration as seen by the `lexstat` binary.
//!
//! Discovery, precedence and format handling are unit-tested in
//! `lexstat-core`; these tests check that loaded settings reach the
//! `stats` and `info` commands.

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

fn parse_success(output: &std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    parse_success(&output)
}

// =============================================================================
// Discovery Through `stats`
// =============================================================================

#[test]
fn parent_project_config_supplies_wordlist() {
    let tmp = TempDir::new().unwrap();
    let chapter = tmp.path().join("book").join("ch1");
    fs::create_dir_all(&chapter).unwrap();
    fs::write(tmp.path().join("book").join("easy.txt"), "the\ncat\nsat\n").unwrap();
    fs::write(
        tmp.path().join("book").join(".lexstat.yaml"),
        format!(
            "wordlist: {}\n",
            tmp.path().join("book").join("easy.txt").display()
        ),
    )
    .unwrap();
    fs::write(chapter.join("draft.txt"), "The cat sat quietly.").unwrap();

    let output = cmd()
        .args(["-C", chapter.to_str().unwrap(), "--json", "stats", "draft.txt"])
        .env_remove("LEXSTAT_WORDLIST")
        .output()
        .expect("failed to run command");
    let json = parse_success(&output);

    assert_eq!(json["paragraphs"][0]["num_words"], 4);
    assert_eq!(json["paragraphs"][0]["num_not_dale_chall"], 1, "only \"quietly\" is hard");
}

#[test]
fn explicit_config_wordlist_beats_project_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("easy.txt"), "the\ncat\nsat\nquietly\n").unwrap();
    fs::write(tmp.path().join("tiny.txt"), "the\n").unwrap();
    fs::write(tmp.path().join("lexstat.toml"), "wordlist = \"easy.txt\"\n").unwrap();
    fs::write(tmp.path().join("override.json"), r#"{"wordlist": "tiny.txt"}"#).unwrap();
    fs::write(tmp.path().join("draft.txt"), "The cat sat quietly.").unwrap();

    let run = |extra: &[&str]| {
        let output = cmd()
            .args(["-C", tmp.path().to_str().unwrap(), "--json"])
            .args(extra)
            .args(["stats", "draft.txt", "--summary"])
            .env_remove("LEXSTAT_WORDLIST")
            .output()
            .expect("failed to run command");
        parse_success(&output)
    };

    assert_eq!(run(&[])["total_not_dale_chall"], 0);
    let override_path = tmp.path().join("override.json");
    assert_eq!(
        run(&["--config", override_path.to_str().unwrap()])["total_not_dale_chall"],
        3
    );
}

#[test]
fn invalid_config_fails_before_scoring() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lexstat.toml"), "paragraph_split = \"sentences\"\n").unwrap();
    fs::write(tmp.path().join("draft.txt"), "The cat sat.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "stats", "draft.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Scoring Settings
// =============================================================================

/// Write a tiny wordlist and a two-paragraph input into `dir`.
fn write_inputs(dir: &Path) {
    fs::write(dir.join("easy.txt"), "the\ncat\nsat\n").unwrap();
    fs::write(dir.join("input.txt"), "The cat sat.\nThe dog ran.\n").unwrap();
}

fn stats_json(dir: &Path, envs: &[(&str, &str)]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "--json", "stats", "input.txt"])
        .envs(envs.iter().copied())
        .output()
        .expect("failed to run command");
    parse_success(&output)
}

#[test]
fn scoring_settings_reported_by_info() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("lexstat.toml"),
        "wordlist = \"easy.txt\"\nparagraph_split = \"lines\"\nparallel = false\nmax_input_bytes = 2048\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["wordlist"], "easy.txt");
    assert_eq!(json["config"]["paragraph_split"], "lines");
    assert_eq!(json["config"]["parallel"], false);
    assert_eq!(json["config"]["max_input_bytes"], 2048);
}

#[test]
fn disabled_input_limit_is_omitted() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lexstat.toml"), "disable_input_limit = true\n").unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

#[test]
fn config_wordlist_and_split_drive_stats() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    fs::write(
        tmp.path().join("lexstat.toml"),
        "wordlist = \"easy.txt\"\nparagraph_split = \"lines\"\n",
    )
    .unwrap();

    let json = stats_json(tmp.path(), &[]);
    let paragraphs = json["paragraphs"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 2, "lines split from config");
    assert_eq!(paragraphs[0]["num_not_dale_chall"], 0);
    assert_eq!(paragraphs[1]["num_not_dale_chall"], 2);
}

#[test]
fn split_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    fs::write(
        tmp.path().join("lexstat.toml"),
        "wordlist = \"easy.txt\"\nparagraph_split = \"lines\"\n",
    )
    .unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--json"])
        .args(["stats", "input.txt", "--split", "blank-lines"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["paragraphs"].as_array().unwrap().len(), 1);
}

#[test]
fn env_wordlist_is_used() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());

    let json = stats_json(tmp.path(), &[("LEXSTAT_WORDLIST", "easy.txt")]);
    assert_eq!(json["summary"]["total_words"], 6);
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".lexstat.toml"), "parallel = true\n").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .env("LEXSTAT_PARALLEL", "false")
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["parallel"], false);
}

#[test]
fn empty_wordlist_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    fs::write(tmp.path().join("easy.txt"), "\n\n").unwrap();
    fs::write(tmp.path().join("lexstat.toml"), "wordlist = \"easy.txt\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "stats", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wordlist"));
}
