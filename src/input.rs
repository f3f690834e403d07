// src/input.rs
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use text_stats_shared_kernel::{InputError, InputResult};

/// Where a document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    /// `--text` の値。番号は1始まり。
    Inline { index: usize, text: String },
}

impl Source {
    /// `-` は標準入力
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Inline { index, .. } => format!("<text:{index}>"),
        }
    }
}

/// A loaded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Read `source` in full. Non-UTF-8 bytes are replaced rather than rejected.
pub fn load(source: &Source) -> InputResult<Document> {
    let label = source.label();
    let text = match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|source| InputError::Stdin { source })?;
            String::from_utf8_lossy(&buf).into_owned()
        }
        Source::File(path) => {
            let bytes = fs::read(path).map_err(|source| InputError::FileRead {
                path: path.clone(),
                source,
            })?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        Source::Inline { text, .. } => text.clone(),
    };
    log::debug!("loaded {label} ({} bytes)", text.len());
    Ok(Document { label, text })
}
