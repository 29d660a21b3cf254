//! # litrisk
//!
//! A rule-based litigation risk analyzer for email correspondence.
//!
//! ## Features
//!
//! - Fixed, ordered catalog of risk categories backed by case-insensitive patterns
//! - Context snippets for every flag
//! - Composite risk score
//! - Extra categories from JSON catalog files
//! - Parallel batch analysis of JSON Lines input
//!
//! This is a triage aid. Matching is purely lexical and makes no legal
//! determination.
//!
//! ```
//! use std::sync::Arc;
//!
//! use litrisk::prelude::*;
//!
//! let catalog = Arc::new(PatternCatalog::build().unwrap());
//! let analyzer = RiskAnalyzer::new(catalog);
//!
//! let result = analyzer.analyze(&EmailRecord::new(
//!     "Urgent",
//!     "I admit we are responsible for this and will ensure compensation.",
//! ));
//! assert_eq!(result.risk_categories, "admission_of_fault, over_promise");
//! ```

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod record;

pub mod prelude {
    pub use crate::catalog::{CategoryDefinition, PatternCatalog, RiskCategory};
    pub use crate::engine::{
        AnalysisResult, AnalyzerConfig, Flag, MatchOccurrence, RiskAnalyzer, RiskReport,
    };
    pub use crate::error::{LitriskError, Result};
    pub use crate::record::{EmailRecord, TextFields};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
