// src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    version,
    about = "テキストの単語数/文字数/文数/可読性スコアの集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub input: InputOptions,

    /// ログを詳細にする (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,

    /// 対象ファイル（`-` は標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 音節数と平均値も出力
    #[arg(long, help_heading = "出力")]
    pub detailed: bool,

    /// CSV/TSV 末尾に TOTAL 行を出力
    #[arg(long, help_heading = "出力")]
    pub total_row: bool,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// 直接指定したテキストを解析（複数可）
    #[arg(long = "text", value_name = "TEXT", help_heading = "入力")]
    pub texts: Vec<String>,
}
