// src/config.rs
use crate::args::Args;
use crate::input::Source;
use crate::options::OutputFormat;
use derive_builder::Builder;
use text_stats_shared_kernel::PresentationError;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "default_sources()")]
    pub sources: Vec<Source>,
    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub detailed: bool,
    #[builder(default)]
    pub total_row: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            format: OutputFormat::Table,
            detailed: false,
            total_row: false,
        }
    }
}

fn default_sources() -> Vec<Source> {
    vec![Source::Stdin]
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let sources = sources_from_args(&args);

        ConfigBuilder::default()
            .sources(sources)
            .format(args.output.format)
            .detailed(args.output.detailed)
            .total_row(args.output.total_row)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

/// パス → `--text` の順。どちらも無ければ標準入力。
fn sources_from_args(args: &Args) -> Vec<Source> {
    let files = args.paths.iter().map(|p| Source::from_path(p));
    let inline = args
        .input
        .texts
        .iter()
        .enumerate()
        .map(|(i, text)| Source::Inline {
            index: i + 1,
            text: text.clone(),
        });

    let sources: Vec<_> = files.chain(inline).collect();
    if sources.is_empty() {
        default_sources()
    } else {
        sources
    }
}
