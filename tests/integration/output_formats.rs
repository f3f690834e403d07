// tests/integration/output_formats.rs
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::bin;

fn stdout_of(args: &[&str]) -> String {
    let output = bin().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn json_output_is_an_array_of_reports() {
    let out = stdout_of(&["--format", "json", "--text", "Hello world.", "--text", ""]);
    let value: Value = serde_json::from_str(&out).unwrap();
    let reports = value.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["source"], "<text:1>");
    assert_eq!(reports[0]["characterCount"], 12);
    assert_eq!(reports[1]["wordCount"], 0);
    assert_eq!(reports[1]["readabilityScore"], 0);
}

#[test]
fn detailed_json_includes_averages() {
    let out = stdout_of(&["--format", "json", "--detailed", "--text", "I am. We go. It is."]);
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["syllableCount"], 6);
    assert_eq!(value[0]["avgWordsPerSentence"], 2.0);
    assert_eq!(value[0]["avgSyllablesPerWord"], 1.0);
    assert_eq!(value[0]["readabilityScore"], 14);
}

#[test]
fn jsonl_emits_total_line() {
    let out = stdout_of(&["--format", "jsonl", "--text", "One.", "--text", "Two words."]);
    let last: Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
    assert_eq!(last["type"], "total");
    assert_eq!(last["wordCount"], 3);
    assert_eq!(last["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn csv_total_row() {
    bin()
        .args(["--format", "csv", "--total-row", "--text", "A b.", "--text", "C."])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("3,6,2,,TOTAL\n"));
}

#[test]
fn table_is_default() {
    bin()
        .args(["--text", "Hi.", "--text", "Bye."])
        .assert()
        .success()
        .stdout(predicate::str::contains("WORDS"))
        .stdout(predicate::str::contains("TOTAL (2 inputs)"));
}

#[test]
fn yaml_and_markdown_render() {
    let yaml = stdout_of(&["--format", "yaml", "--text", "Hi."]);
    assert!(yaml.contains("source: <text:1>") || yaml.contains("source: '<text:1>'"));

    let md = stdout_of(&["--format", "md", "--text", "Hi."]);
    assert!(md.starts_with("### Text Statistics"));
    assert!(md.contains("| 1 | 3 | 1 | 15 |"));
}
