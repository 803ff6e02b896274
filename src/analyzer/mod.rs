// Analyzer module: statistics, chart description and the analyzer that ties them together.

pub mod chart;
pub mod price_analysis;
pub mod stats;

pub use price_analysis::{Analyzer, AnalyzerImpl};
