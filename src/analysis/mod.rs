pub mod group_stats;
pub mod summary;

pub use summary::{analyze, AnalysisResult};
