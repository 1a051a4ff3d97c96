//! CLI tests for the `ff` binary
//!
//! Each test runs in a scratch directory with its own config and data
//! locations, so no user config or log file is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ff(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ff").expect("ff binary");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_plan_text_output() {
    let temp = TempDir::new().unwrap();
    ff(&temp)
        .args(["plan", "-s", "Math:High", "-s", "Art:Medium", "-s", "Music:Low", "-H", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Study Plan"))
        .stdout(predicate::str::contains("3hr 30min"))
        .stdout(predicate::str::contains("2hr 19min"))
        .stdout(predicate::str::contains("1hr 9min"))
        .stdout(predicate::str::contains("2 min of 7h left unallocated"));
}

#[test]
fn test_plan_json_output() {
    let temp = TempDir::new().unwrap();
    let output = ff(&temp)
        .args(["plan", "-s", "Math:High", "-s", "Art:Low", "-H", "8", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries[0]["allocation"]["formatted_label"], "6hr");
    assert_eq!(entries[1]["allocation"]["formatted_label"], "2hr");
}

#[test]
fn test_plan_uses_config_default_hours() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".focusflow.yml"), "planner:\n  default-total-hours: 4\n").unwrap();

    ff(&temp)
        .args(["plan", "-s", "Math:High", "-s", "Art:Low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3hr"))
        .stdout(predicate::str::contains("1hr"));
}

#[test]
fn test_plan_from_file_with_tips() {
    let temp = TempDir::new().unwrap();
    let plan_path = temp.path().join("plan.yml");
    std::fs::write(
        &plan_path,
        "total-hours: 3\nsubjects:\n  - subject: Physics\n    priority: Medium\n",
    )
    .unwrap();

    ff(&temp)
        .args(["plan", "--file"])
        .arg(&plan_path)
        .args(["-s", "Latin:Medium", "--tips"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physics"))
        .stdout(predicate::str::contains("Latin"))
        .stdout(predicate::str::contains("1hr 30min"))
        .stdout(predicate::str::contains("AI study tips unavailable"));
}

#[test]
fn test_plan_prints_prompts() {
    let temp = TempDir::new().unwrap();
    ff(&temp)
        .args(["plan", "-s", "Geography", "-H", "2", "--prompts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studying Geography."));
}

#[test]
fn test_plan_rejects_bad_hours() {
    let temp = TempDir::new().unwrap();
    ff(&temp)
        .args(["plan", "-s", "Math:High", "--hours=-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid or non-positive duration"));
}

#[test]
fn test_plan_rejects_missing_subjects() {
    let temp = TempDir::new().unwrap();
    ff(&temp)
        .args(["plan", "-H", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing subject name"));
}

#[test]
fn test_plan_rejects_unknown_priority() {
    let temp = TempDir::new().unwrap();
    ff(&temp)
        .args(["plan", "-s", "Math:Urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized priority"));
}

#[test]
fn test_timer_rejects_bad_length() {
    let temp = TempDir::new().unwrap();
    ff(&temp)
        .args(["timer", "Math", "--minutes", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pomodoro duration must be 5-60 minutes"));
}
