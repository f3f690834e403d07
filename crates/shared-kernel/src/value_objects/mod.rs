// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod score;

pub use counts::{CharCount, SentenceCount, WordCount};
pub use score::ReadabilityScore;
