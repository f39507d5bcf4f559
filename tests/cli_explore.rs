// tests/cli_explore.rs
//! Runs the `wikinet` binary against an offline links file.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const PEOPLE: &str = "\
Name,Gender,Occupation,Nationality
Gabriela Mistral,Female,Poet,Chilean
Pablo Neruda,Male,Poet,Chilean
Jorge Luis Borges,Male,Writer,Argentine
";

const LINKS: &str = r#"{
    "Gabriela Mistral": ["Pablo Neruda", "Chile", "Nobel Prize in Literature"],
    "Pablo Neruda": ["Chile", "Gabriela Mistral"],
    "Chile": ["Santiago"]
}"#;

fn fixture() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("people.csv"), PEOPLE).unwrap();
    fs::write(d.path().join("links.json"), LINKS).unwrap();
    d
}

fn wikinet(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wikinet"))
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--dataset", "people.csv"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_explore_json_output() {
    let d = fixture();
    let out = wikinet(
        d.path(),
        &["explore", "Gabriela Mistral", "--links-file", "links.json", "--format", "json"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let scene: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(scene["notice"]["kind"], "success");
    assert_eq!(scene["notice"]["message"], "Graph has 2 nodes and 2 edges.");
    assert_eq!(scene["status"]["status"], "found");
    assert_eq!(scene["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(scene["incoming"], serde_json::json!(["Pablo Neruda"]));
}

#[test]
fn test_explore_terminal_lists_incoming() {
    let d = fixture();
    let out = wikinet(
        d.path(),
        &["explore", "Gabriela Mistral", "--links-file", "links.json", "--show-incoming"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Incoming links"));
    assert!(stdout.contains("Pablo Neruda"));
}

#[test]
fn test_unknown_person_fails_in_membership_mode() {
    let d = fixture();
    let out = wikinet(d.path(), &["explore", "Chile", "--links-file", "links.json"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("`Chile` is not in the reference dataset"));
}

#[test]
fn test_unknown_person_allowed_in_heuristic_mode() {
    let d = fixture();
    let out = wikinet(
        d.path(),
        &["explore", "Chile", "--links-file", "links.json", "--mode", "heuristic"],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn test_missing_dataset_exits_1() {
    let d = tempfile::tempdir().unwrap();
    let out = wikinet(d.path(), &["people"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
}

#[test]
fn test_people_lists_names() {
    let d = fixture();
    let out = wikinet(d.path(), &["people", "--gender", "Male"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Jorge Luis Borges"));
    assert!(stdout.contains("Pablo Neruda"));
    assert!(!stdout.contains("Gabriela Mistral"));
}
