//! CLI integration tests
//!
//! These run the `regroup` binary against a structure file in a temp dir
//! and check the file contents it leaves behind.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_structure(temp_dir: &TempDir, json: &str) -> PathBuf {
    let path = temp_dir.path().join("board.json");
    fs::write(&path, json).unwrap();
    path
}

fn read_structure(path: &PathBuf) -> Vec<Vec<String>> {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn regroup(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_regroup"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_scenario_delete_move_add_group() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_structure(&temp_dir, r#"[["A","B"],[],["C","D","E"]]"#);
    let file = path.to_str().unwrap();

    let output = regroup(&["delete", file, "0:1"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(read_structure(&path), vec![vec!["A"], vec![], vec!["C", "D", "E"]]);

    let output = regroup(&["move", file, "2:0", "1:0"]);
    assert!(output.status.success());
    assert_eq!(read_structure(&path), vec![vec!["A"], vec!["C"], vec!["D", "E"]]);

    let output = regroup(&["add-group", file]);
    assert!(output.status.success());
    assert_eq!(
        read_structure(&path),
        vec![vec!["A"], vec!["C"], vec!["D", "E"], vec![]]
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 groups, 4 items"), "stdout: {}", stdout);
}

#[test]
fn test_cli_add_item_with_output_leaves_input_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_structure(&temp_dir, r#"[["A"]]"#);
    let out_path = temp_dir.path().join("out.json");

    let output = regroup(&[
        "add-item",
        path.to_str().unwrap(),
        "Z",
        "--output",
        out_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    assert_eq!(read_structure(&path), vec![vec!["A"]]);
    assert_eq!(read_structure(&out_path), vec![vec!["A"], vec!["Z"]]);
}

#[test]
fn test_cli_invalid_location_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let original = r#"[["A"],[]]"#;
    let path = write_structure(&temp_dir, original);

    let output = regroup(&["delete", path.to_str().unwrap(), "1:0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_LOCATION"), "stderr: {}", stderr);
    assert!(stderr.contains("request_id:"), "stderr: {}", stderr);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_cli_rejects_malformed_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_structure(&temp_dir, r#"[["A"]]"#);

    let output = regroup(&["delete", path.to_str().unwrap(), "zero"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GROUP:ITEM"), "stderr: {}", stderr);
}

#[test]
fn test_cli_show_lists_groups_and_count() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_structure(&temp_dir, r#"[["A","B"],[],["C"]]"#);

    let output = regroup(&["show", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("group 0: A, B"));
    assert!(stdout.contains("group 1: (empty)"));
    assert!(stdout.contains("items: 3"));
}

#[test]
fn test_cli_reports_unreadable_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_structure(&temp_dir, "not json");

    let output = regroup(&["show", path.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_SERIALIZATION"), "stderr: {}", stderr);
}
