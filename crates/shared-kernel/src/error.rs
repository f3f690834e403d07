// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Text analysis itself is total; only input sourcing and output rendering can fail.
#[derive(Debug, Error)]
pub enum TextStatsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TextStatsError>,
    },

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, TextStatsError>;

/// 入力読み込み時のエラー
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {source}")]
    Stdin {
        #[source]
        source: std::io::Error,
    },
}

pub type InputResult<T> = std::result::Result<T, InputError>;

/// 出力・設定構築時のエラー
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        Self::Write { source: err }
    }
}

impl From<std::io::Error> for TextStatsError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TextStatsError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for PresentationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for TextStatsError {
    fn from(err: serde_yaml::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TextStatsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TextStatsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TextStatsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
