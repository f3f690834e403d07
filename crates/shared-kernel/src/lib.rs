// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InputError, InputResult, PresentationError, PresentationResult, Result,
    TextStatsError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharCount, ReadabilityScore, SentenceCount, WordCount};
