use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{Fixtures, bin};

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("text_stats"));
}

#[test]
fn shows_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn reads_stdin_by_default() {
    bin()
        .args(["--format", "csv"])
        .write_stdin("Hello world.")
        .assert()
        .success()
        .stdout(predicate::str::contains("2,12,1,0,<stdin>"));
}

#[test]
fn analyzes_inline_text() {
    bin()
        .args(["--format", "tsv", "--text", "Hi."])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t3\t1\t15\t<text:1>"));
}

#[test]
fn analyzes_a_file() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("note.txt", "This is a test! Is it working? Yes.");
    bin()
        .args(["--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"wordCount\": 8"))
        .stdout(predicate::str::contains("\"sentenceCount\": 3"));
}

#[test]
fn unreadable_file_fails_but_reports_others() {
    let fixtures = Fixtures::new();
    let good = fixtures.write("good.txt", "Fine.");
    let missing = fixtures.missing("missing.txt");
    bin()
        .args(["--format", "csv"])
        .arg(&good)
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::contains("good.txt"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn rejects_unknown_format() {
    bin().args(["--format", "xml"]).assert().failure();
}
