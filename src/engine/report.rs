//! Analysis results.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Separator between category names in [`AnalysisResult::risk_categories`].
pub const CATEGORY_SEPARATOR: &str = ", ";

/// Separator between snippets in [`AnalysisResult::flagged_snippets`].
pub const SNIPPET_SEPARATOR: &str = "; ";

/// One located match of a pattern.
///
/// Offsets are character positions in the scanned text (subject, newline,
/// body), end exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOccurrence {
    /// Trimmed context around the match.
    pub snippet: String,
    /// Character offset of the match start.
    pub start: usize,
    /// Character offset one past the match end.
    pub end: usize,
}

/// A match attributed to the category whose pattern produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub category: String,
    /// Index of the producing pattern within its category.
    pub pattern: usize,
    pub occurrence: MatchOccurrence,
}

impl Flag {
    /// Render the flag as `[category] snippet`.
    pub fn annotated(&self) -> String {
        format!("[{}] {}", self.category, self.occurrence.snippet)
    }
}

/// Every flag raised for one record, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    flags: Vec<Flag>,
}

impl RiskReport {
    /// Create a report from flags already in catalog order.
    pub fn new(flags: Vec<Flag>) -> Self {
        RiskReport { flags }
    }

    /// Get the flags.
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    /// Check if nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Total number of flags, overlapping ones included.
    pub fn num_flags(&self) -> usize {
        self.flags.len()
    }

    /// Distinct categories with at least one flag, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.flags.iter().map(|f| f.category.as_str()).collect()
    }

    /// Flag counts per category, sorted by category name.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for flag in &self.flags {
            *counts.entry(flag.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Flags multiplied by the number of distinct categories (at least 1).
    pub fn risk_score(&self) -> u64 {
        let distinct = self.categories().len().max(1);
        (self.num_flags() as u64) * (distinct as u64)
    }

    /// Collapse the report into its four-field summary.
    pub fn summarize(&self) -> AnalysisResult {
        AnalysisResult {
            risk_score: self.risk_score(),
            risk_categories: self
                .categories()
                .into_iter()
                .collect::<Vec<_>>()
                .join(CATEGORY_SEPARATOR),
            num_flags: self.num_flags() as u64,
            flagged_snippets: self
                .flags
                .iter()
                .map(Flag::annotated)
                .collect::<Vec<_>>()
                .join(SNIPPET_SEPARATOR),
        }
    }
}

impl From<RiskReport> for AnalysisResult {
    fn from(report: RiskReport) -> Self {
        report.summarize()
    }
}

/// The summary returned for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Higher means more litigation risk.
    pub risk_score: u64,
    /// Comma-separated, sorted category names.
    pub risk_categories: String,
    /// Number of individual flags.
    pub num_flags: u64,
    /// `[category] snippet` entries separated by `"; "`.
    pub flagged_snippets: String,
}

impl AnalysisResult {
    /// Split `risk_categories` back into names.
    pub fn category_list(&self) -> Vec<&str> {
        if self.risk_categories.is_empty() {
            Vec::new()
        } else {
            self.risk_categories.split(CATEGORY_SEPARATOR).collect()
        }
    }
}
