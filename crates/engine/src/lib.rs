// crates/engine/src/lib.rs
//! Text statistics engine: word, character and sentence counts plus a readability score.

pub mod analyzer;
pub mod planner;
pub mod readability;
pub mod syllables;
pub mod tokenize;

pub use analyzer::{AnalysisBreakdown, AnalysisResult, TextAnalyzer, analyze, analyze_detailed};
pub use planner::{WeekPlan, WeekRange, WeeklyPlanner};
pub use syllables::estimate_syllables;
