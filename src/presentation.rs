// src/presentation.rs
use crate::config::Config;
use crate::input::Document;
use crate::options::OutputFormat;
use serde::Serialize;
use std::io::Write;
use text_stats_engine::{AnalysisBreakdown, AnalysisResult};
use text_stats_shared_kernel::{CharCount, PresentationResult, SentenceCount, WordCount};

/// Intermediate values, only emitted with `--detailed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub syllable_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
}

/// One analyzed input, as rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub source: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(flatten)]
    pub detail: Option<Detail>,
}

impl Report {
    pub fn new(document: &Document, breakdown: AnalysisBreakdown, detailed: bool) -> Self {
        let detail = detailed.then_some(Detail {
            syllable_count: breakdown.syllable_count,
            avg_words_per_sentence: breakdown.avg_words_per_sentence,
            avg_syllables_per_word: breakdown.avg_syllables_per_word,
        });
        Self {
            source: document.label.clone(),
            result: breakdown.result,
            detail,
        }
    }
}

/// 合計。可読性スコアは合算できないため持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub inputs: usize,
    pub word_count: WordCount,
    pub character_count: CharCount,
    pub sentence_count: SentenceCount,
}

impl Totals {
    pub fn from_reports(reports: &[Report]) -> Self {
        Self {
            inputs: reports.len(),
            word_count: reports.iter().map(|r| r.result.word_count).sum(),
            character_count: reports.iter().map(|r| r.result.character_count).sum(),
            sentence_count: reports.iter().map(|r| r.result.sentence_count).sum(),
        }
    }
}

pub fn print_results<W: Write>(out: &mut W, reports: &[Report], config: &Config) -> PresentationResult<()> {
    match config.format {
        OutputFormat::Json => print_json(out, reports),
        OutputFormat::Yaml => print_yaml(out, reports),
        OutputFormat::Jsonl => print_jsonl(out, reports),
        OutputFormat::Md => print_markdown(out, reports, config),
        OutputFormat::Csv | OutputFormat::Tsv => print_sv(out, reports, config),
        OutputFormat::Table => print_table(out, reports, config),
    }
}

fn print_table<W: Write>(out: &mut W, reports: &[Report], config: &Config) -> PresentationResult<()> {
    writeln!(out, "text_stats v{}", crate::VERSION)?;
    writeln!(out)?;

    let header = if config.detailed {
        "    WORDS       CHARS   SENTENCES   SCORE   SYLLABLES     W/S   SYL/W   SOURCE"
    } else {
        "    WORDS       CHARS   SENTENCES   SCORE   SOURCE"
    };
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "-".repeat(header.len()))?;

    for r in reports {
        write!(
            out,
            "{:>9}{:>12}{:>12}{:>8}",
            r.result.word_count, r.result.character_count, r.result.sentence_count, r.result.readability_score
        )?;
        if let Some(d) = &r.detail {
            write!(
                out,
                "{:>12}{:>8.2}{:>8.2}",
                d.syllable_count, d.avg_words_per_sentence, d.avg_syllables_per_word
            )?;
        }
        writeln!(out, "   {}", r.source)?;
    }

    if reports.len() > 1 {
        let totals = Totals::from_reports(reports);
        writeln!(out, "---")?;
        write!(
            out,
            "{:>9}{:>12}{:>12}{:>8}",
            totals.word_count, totals.character_count, totals.sentence_count, "-"
        )?;
        if config.detailed {
            let syllables: usize = reports.iter().filter_map(|r| r.detail.map(|d| d.syllable_count)).sum();
            write!(out, "{syllables:>12}{:>8}{:>8}", "-", "-")?;
        }
        writeln!(out, "   TOTAL ({} inputs)", totals.inputs)?;
    }
    Ok(())
}

fn print_json<W: Write>(out: &mut W, reports: &[Report]) -> PresentationResult<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

fn print_yaml<W: Write>(out: &mut W, reports: &[Report]) -> PresentationResult<()> {
    let yaml = serde_yaml::to_string(reports)?;
    write!(out, "{yaml}")?;
    Ok(())
}

fn print_jsonl<W: Write>(out: &mut W, reports: &[Report]) -> PresentationResult<()> {
    for r in reports {
        let mut v = serde_json::to_value(r)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "document".into());
        }
        writeln!(out, "{}", serde_json::to_string(&v)?)?;
    }

    let mut total = serde_json::to_value(Totals::from_reports(reports))?;
    if let Some(obj) = total.as_object_mut() {
        obj.insert("type".to_string(), "total".into());
        obj.insert("version".to_string(), crate::VERSION.into());
    }
    writeln!(out, "{total}")?;
    Ok(())
}

fn print_markdown<W: Write>(out: &mut W, reports: &[Report], config: &Config) -> PresentationResult<()> {
    writeln!(out, "### Text Statistics")?;
    writeln!(out)?;

    let mut header = String::from("| Words | Chars | Sentences | Readability |");
    let mut separator = String::from("|:---:|:---:|:---:|:---:|");
    if config.detailed {
        header.push_str(" Syllables | Words/Sentence | Syllables/Word |");
        separator.push_str(":---:|:---:|:---:|");
    }
    header.push_str(" Source |");
    separator.push_str(":---|");
    writeln!(out, "{header}")?;
    writeln!(out, "{separator}")?;

    for r in reports {
        let mut row = format!(
            "| {} | {} | {} | {} |",
            r.result.word_count, r.result.character_count, r.result.sentence_count, r.result.readability_score
        );
        if let Some(d) = &r.detail {
            row.push_str(&format!(
                " {} | {:.2} | {:.2} |",
                d.syllable_count, d.avg_words_per_sentence, d.avg_syllables_per_word
            ));
        }
        let source = r.source.replace('|', "\\|");
        row.push_str(&format!(" {source} |"));
        writeln!(out, "{row}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_sv<W: Write>(out: &mut W, reports: &[Report], config: &Config) -> PresentationResult<()> {
    let delimiter = config.format.delimiter().unwrap_or(",");

    let mut header = vec!["words", "chars", "sentences", "readability"];
    if config.detailed {
        header.extend(["syllables", "words_per_sentence", "syllables_per_word"]);
    }
    header.push("source");
    writeln!(out, "{}", header.join(delimiter))?;

    for r in reports {
        let mut fields = vec![
            r.result.word_count.to_string(),
            r.result.character_count.to_string(),
            r.result.sentence_count.to_string(),
            r.result.readability_score.to_string(),
        ];
        if let Some(d) = &r.detail {
            fields.push(d.syllable_count.to_string());
            fields.push(format!("{:.4}", d.avg_words_per_sentence));
            fields.push(format!("{:.4}", d.avg_syllables_per_word));
        }
        fields.push(escape_field(&r.source, delimiter));
        writeln!(out, "{}", fields.join(delimiter))?;
    }

    if config.total_row {
        let totals = Totals::from_reports(reports);
        let mut fields = vec![
            totals.word_count.to_string(),
            totals.character_count.to_string(),
            totals.sentence_count.to_string(),
            String::new(),
        ];
        if config.detailed {
            let syllables: usize = reports.iter().filter_map(|r| r.detail.map(|d| d.syllable_count)).sum();
            fields.extend([syllables.to_string(), String::new(), String::new()]);
        }
        fields.push("TOTAL".to_string());
        writeln!(out, "{}", fields.join(delimiter))?;
    }
    Ok(())
}

fn escape_field(value: &str, delimiter: &str) -> String {
    if delimiter == "," && value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else if delimiter == "\t" {
        value.replace(['\t', '\n'], " ")
    } else {
        value.to_string()
    }
}
