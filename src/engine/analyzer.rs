//! The risk analyzer.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::catalog::PatternCatalog;
use crate::engine::config::AnalyzerConfig;
use crate::engine::report::{AnalysisResult, Flag, MatchOccurrence, RiskReport};
use crate::engine::snippet::{CharCursor, extract_snippet};
use crate::error::Result;
use crate::record::TextFields;

/// Scans records against a shared pattern catalog.
///
/// The analyzer holds no per-call state, so one instance can serve any
/// number of threads at once.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use litrisk::catalog::PatternCatalog;
/// use litrisk::engine::RiskAnalyzer;
/// use litrisk::record::EmailRecord;
///
/// let analyzer = RiskAnalyzer::new(Arc::new(PatternCatalog::build().unwrap()));
/// let result = analyzer.analyze(&EmailRecord::new("Re: refund", "We guarantee a refund."));
///
/// assert_eq!(result.risk_categories, "over_promise");
/// assert_eq!(result.num_flags, 1);
/// assert_eq!(result.risk_score, 1);
/// ```
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    catalog: Arc<PatternCatalog>,
    config: AnalyzerConfig,
}

impl RiskAnalyzer {
    /// Create an analyzer with the default snippet configuration.
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        RiskAnalyzer {
            catalog,
            config: AnalyzerConfig::default(),
        }
    }

    /// Create an analyzer with a custom configuration.
    pub fn with_config(catalog: Arc<PatternCatalog>, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(RiskAnalyzer { catalog, config })
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scan a record and return every flag.
    pub fn scan<R: TextFields + ?Sized>(&self, record: &R) -> RiskReport {
        let text = compose_text(record);
        self.scan_text(&text)
    }

    /// Scan already composed text.
    pub fn scan_text(&self, text: &str) -> RiskReport {
        let mut flags = Vec::new();

        for category in self.catalog.categories() {
            // matches of one pattern arrive in increasing order
            let mut cursor = CharCursor::new(text);
            for (pattern, m) in category.find_iter(text) {
                flags.push(Flag {
                    category: category.name().to_string(),
                    pattern,
                    occurrence: MatchOccurrence {
                        snippet: extract_snippet(text, m.start(), m.end(), &self.config),
                        start: cursor.char_offset(m.start()),
                        end: cursor.char_offset(m.end()),
                    },
                });
            }
        }

        let report = RiskReport::new(flags);
        debug!(
            "Scanned {} chars: {} flags in {} categories",
            text.chars().count(),
            report.num_flags(),
            report.categories().len()
        );
        report
    }

    /// Analyze a record and return its summary.
    pub fn analyze<R: TextFields + ?Sized>(&self, record: &R) -> AnalysisResult {
        self.scan(record).summarize()
    }

    /// Analyze records in parallel, keeping input order.
    pub fn analyze_batch<R: TextFields + Sync>(&self, records: &[R]) -> Vec<AnalysisResult> {
        records
            .par_iter()
            .map(|record| self.analyze(record))
            .collect()
    }
}

/// Join subject and body into the scanned text, subject first.
pub fn compose_text<R: TextFields + ?Sized>(record: &R) -> String {
    let subject = record.subject().unwrap_or_default();
    let body = record.body().unwrap_or_default();
    format!("{subject}\n{body}")
}
