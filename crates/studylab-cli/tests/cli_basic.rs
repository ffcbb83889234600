//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! points STUDYLAB_DATA_FILE at its own temp file so runs never touch
//! real planner data.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command against a given data file and return output.
fn run_cli(data_file: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "-p", "studylab-cli", "--"])
        .args(args)
        .env("STUDYLAB_DATA_FILE", data_file)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn add_task(data_file: &Path, subject: &str, difficulty: &str, minutes: &str, due: &str) {
    let (_, stderr, code) = run_cli(
        data_file,
        &[
            "task",
            "add",
            subject,
            "Topic",
            "--difficulty",
            difficulty,
            "--minutes",
            minutes,
            "--due",
            due,
        ],
    );
    assert_eq!(code, 0, "task add failed: {stderr}");
}

#[test]
fn test_task_add_and_list() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    add_task(&data_file, "Math", "easy", "30", "2099-01-01");

    let (stdout, _, code) = run_cli(&data_file, &["task", "list"]);
    assert_eq!(code, 0, "task list failed");
    assert!(stdout.contains("Math"));

    let (stdout, _, code) = run_cli(&data_file, &["task", "list", "--json"]);
    assert_eq!(code, 0, "task list --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tasks = parsed.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["subject"], "Math");
    assert_eq!(tasks[0]["completed"], false);
}

#[test]
fn test_task_add_rejects_empty_subject() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    let (_, stderr, code) = run_cli(&data_file, &["task", "add", "", "Topic"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_task_done_and_delete() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    add_task(&data_file, "Math", "easy", "30", "2099-01-01");

    let (_, _, code) = run_cli(&data_file, &["task", "done", "1"]);
    assert_eq!(code, 0, "task done failed");

    let (stdout, _, _) = run_cli(&data_file, &["task", "list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["completed"], true);

    let (stdout, _, code) = run_cli(&data_file, &["task", "delete", "1"]);
    assert_eq!(code, 0, "task delete failed");
    assert!(stdout.contains("Task deleted: 1"));
}

#[test]
fn test_plan_with_no_tasks() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    let (stdout, _, code) = run_cli(
        &data_file,
        &["plan", "--mood", "4", "--energy", "4", "--sleep", "8"],
    );
    assert_eq!(code, 0, "plan failed");
    assert!(stdout.contains("No suitable tasks today. Rest is allowed."));
}

#[test]
fn test_plan_selects_pending_task() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    add_task(&data_file, "Math", "easy", "30", "2099-01-01");

    let (stdout, _, code) = run_cli(
        &data_file,
        &["plan", "--mood", "5", "--energy", "5", "--sleep", "8"],
    );
    assert_eq!(code, 0, "plan failed");
    assert!(stdout.contains("Today's budget: ~180 minutes."));
    assert!(stdout.contains("Math"));
    assert!(stdout.contains("Suggested technique:"));

    let (stdout, _, code) = run_cli(&data_file, &["history", "list"]);
    assert_eq!(code, 0, "history list failed");
    assert!(stdout.contains("mood 5"));
}

#[test]
fn test_plan_rejects_out_of_range_mood() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    let (_, stderr, code) = run_cli(
        &data_file,
        &["plan", "--mood", "9", "--energy", "4", "--sleep", "8"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_technique_list_and_suggest() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    let (stdout, _, code) = run_cli(&data_file, &["technique", "list"]);
    assert_eq!(code, 0, "technique list failed");
    assert!(stdout.contains("Pomodoro"));
    assert!(stdout.contains("Active Recall"));

    // Low energy pins the suggestion to the focus sprint.
    let (stdout, _, code) = run_cli(
        &data_file,
        &["technique", "suggest", "--mood", "1", "--energy", "1"],
    );
    assert_eq!(code, 0, "technique suggest failed");
    assert!(stdout.contains("pomodoro"));
}

#[test]
fn test_technique_use_and_stats() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    let (_, _, code) = run_cli(&data_file, &["technique", "use", "active_recall"]);
    assert_eq!(code, 0, "technique use failed");
    let (_, _, code) = run_cli(&data_file, &["technique", "use", "active_recall"]);
    assert_eq!(code, 0, "technique use failed");

    let (stdout, _, code) = run_cli(&data_file, &["technique", "stats", "--json"]);
    assert_eq!(code, 0, "technique stats failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["code"], "active_recall");
    assert_eq!(parsed[0]["count"], 2);

    let (_, stderr, code) = run_cli(&data_file, &["technique", "use", "osmosis"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown technique"));
}

#[test]
fn test_history_empty() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("planner.json");

    let (stdout, _, code) = run_cli(&data_file, &["history", "list"]);
    assert_eq!(code, 0, "history list failed");
    assert!(stdout.contains("No planning history yet."));
}
