// tests/integration/end_to_end.rs
use text_stats::config::{Config, ConfigBuilder};
use text_stats::input::Source;
use text_stats::run;

#[path = "../common/mod.rs"]
mod common;
use common::Fixtures;

fn config(sources: Vec<Source>, detailed: bool) -> Config {
    ConfigBuilder::default()
        .sources(sources)
        .detailed(detailed)
        .build()
        .unwrap()
}

#[test]
fn analyzes_sources_in_order() {
    let fixtures = Fixtures::new();
    let file = fixtures.write("a.txt", "One. Two. Three.");
    let result = run(&config(
        vec![
            Source::File(file.clone()),
            Source::Inline { index: 1, text: "Hello world.".into() },
        ],
        false,
    ));

    assert!(result.errors.is_empty());
    assert_eq!(result.reports.len(), 2);
    assert_eq!(result.reports[0].source, file.display().to_string());
    assert_eq!(result.reports[0].result.sentence_count, 3usize);
    assert_eq!(result.reports[1].source, "<text:1>");
    assert_eq!(result.reports[1].result.word_count, 2usize);
    assert!(result.reports[1].detail.is_none());
}

#[test]
fn blank_file_reports_zeros() {
    let fixtures = Fixtures::new();
    let file = fixtures.write("blank.txt", "  \n\t\n");
    let result = run(&config(vec![Source::File(file)], true));
    let report = &result.reports[0];
    assert!(report.result.word_count.is_zero());
    assert!(report.result.character_count.is_zero());
    assert_eq!(report.detail.map(|d| d.syllable_count), Some(0));
}

#[test]
fn failed_sources_are_collected() {
    let fixtures = Fixtures::new();
    let missing = fixtures.missing("gone.txt");
    let result = run(&config(
        vec![
            Source::File(missing.clone()),
            Source::Inline { index: 1, text: "Still here.".into() },
        ],
        false,
    ));

    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].0, Source::File(missing));
}

#[test]
fn non_utf8_file_is_read_lossily() {
    let fixtures = Fixtures::new();
    let file = fixtures.write("latin1.txt", b"caf\xe9 time.".as_slice());
    let result = run(&config(vec![Source::File(file)], false));
    let report = &result.reports[0];
    assert_eq!(report.result.word_count, 2usize);
    assert_eq!(report.result.character_count, 10usize);
}
