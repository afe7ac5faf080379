//! Integration tests for the `sufx` command-line driver.

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

static CONFIG_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Empty config directory so a user's config file cannot leak into tests
fn config_home() -> PathBuf {
    CONFIG_HOME
        .get_or_init(|| {
            let dir = std::env::temp_dir()
                .join("sufx_test_config")
                .join(format!("test_{}", std::process::id()));
            std::fs::create_dir_all(&dir).expect("Failed to create config dir");
            dir
        })
        .clone()
}

/// Run sufx with given args
fn run_sufx(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_sufx"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run sufx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_build_json_stats() {
    let (stdout, stderr, ok) = run_sufx(&["build", "--text", "banana", "--json"]);
    assert!(ok, "stderr: {stderr}");

    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["input_len"], 6);
    assert_eq!(stats["text_len"], 7);
    assert_eq!(stats["leaves"], 7);
    assert_eq!(stats["internal_nodes"], 3);
    assert_eq!(stats["max_internal_depth"], 3);
}

#[test]
fn test_build_without_terminator() {
    let (stdout, _, ok) = run_sufx(&["build", "--text", "aaaa", "--no-terminator", "--json"]);
    assert!(ok);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["leaves"], 1);
    assert_eq!(stats["text_len"], 4);
}

#[test]
fn test_build_table_output() {
    let (stdout, _, ok) = run_sufx(&["build", "--text", "abcabxabcd", "--verify"]);
    assert!(ok);
    assert!(stdout.contains("Suffix Tree Statistics"));
    assert!(stdout.contains("Input length:     10"));
}

#[test]
fn test_verify_reports_ok() {
    let (stdout, _, ok) = run_sufx(&["verify", "--text", "mississippi"]);
    assert!(ok);
    assert!(stdout.starts_with("OK: "));
}

#[test]
fn test_print_outline() {
    let (stdout, _, ok) = run_sufx(&["print", "--text", "aa", "--no-color"]);
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "(0)");
    assert!(lines[2].starts_with("  a ("));
}

#[test]
fn test_file_input() {
    let path = config_home().join("input.txt");
    std::fs::write(&path, "abracadabra").unwrap();
    let (stdout, _, ok) = run_sufx(&["build", path.to_str().unwrap(), "--json"]);
    assert!(ok);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["input_len"], 11);
    assert_eq!(stats["leaves"], 12);
}

#[test]
fn test_empty_input_fails() {
    let (_, stderr, ok) = run_sufx(&["build", "--text", ""]);
    assert!(!ok);
    assert!(stderr.contains("input text is empty"), "stderr: {stderr}");
}

#[test]
fn test_reserved_byte_fails() {
    let path = config_home().join("nul.bin");
    std::fs::write(&path, b"ab\0cd").unwrap();
    let (_, stderr, ok) = run_sufx(&["build", path.to_str().unwrap()]);
    assert!(!ok);
    assert!(stderr.contains("position 2"), "stderr: {stderr}");

    let (_, _, ok) = run_sufx(&["build", path.to_str().unwrap(), "--no-terminator"]);
    assert!(ok);
}

#[test]
fn test_config_shows_defaults() {
    let (stdout, _, ok) = run_sufx(&["config"]);
    assert!(ok);
    assert!(stdout.contains("Config file:"));
    assert!(stdout.contains("\"max_print_nodes\": 200"));
}
