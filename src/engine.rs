//! Matching engine.
//!
//! Applies a [`PatternCatalog`](crate::catalog::PatternCatalog) to the
//! subject and body of a record and summarizes the flags into a score.

pub mod analyzer;
pub mod config;
pub mod report;
pub mod snippet;

pub use analyzer::RiskAnalyzer;
pub use config::AnalyzerConfig;
pub use report::{AnalysisResult, Flag, MatchOccurrence, RiskReport};
