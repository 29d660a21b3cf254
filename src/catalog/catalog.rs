//! The compiled pattern catalog.

use std::collections::HashSet;

use log::info;

use crate::catalog::builtin::builtin_definitions;
use crate::catalog::category::RiskCategory;
use crate::catalog::definition::CategoryDefinition;
use crate::error::{LitriskError, Result};

/// An immutable, ordered registry of compiled risk categories.
///
/// Build it once at startup and share it (typically behind an `Arc`) with
/// every analyzer. Construction either compiles every pattern or fails;
/// there is no partially built catalog.
///
/// # Examples
///
/// ```
/// use litrisk::catalog::PatternCatalog;
///
/// let catalog = PatternCatalog::build().unwrap();
/// assert_eq!(catalog.len(), 9);
/// assert!(catalog.get("antitrust").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    categories: Vec<RiskCategory>,
}

impl PatternCatalog {
    /// Build the catalog of built-in categories.
    pub fn build() -> Result<Self> {
        Self::from_definitions(builtin_definitions())
    }

    /// Build a catalog from definitions, keeping their order.
    pub fn from_definitions<I>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = CategoryDefinition>,
    {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();

        for definition in definitions {
            if !seen.insert(definition.name.clone()) {
                return Err(LitriskError::catalog(format!(
                    "duplicate category '{}'",
                    definition.name
                )));
            }
            categories.push(RiskCategory::compile(&definition)?);
        }

        let catalog = PatternCatalog { categories };
        info!(
            "Compiled {} risk categories ({} patterns)",
            catalog.len(),
            catalog.pattern_count()
        );

        Ok(catalog)
    }

    /// Get the categories in reporting order.
    pub fn categories(&self) -> &[RiskCategory] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&RiskCategory> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Get the category names in reporting order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(RiskCategory::name).collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of compiled patterns across all categories.
    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_builtin() {
        let catalog = PatternCatalog::build().unwrap();

        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.pattern_count(), 14);
        assert_eq!(catalog.category_names()[0], "admission_of_fault");
        assert_eq!(catalog.category_names()[8], "antitrust");
        assert_eq!(catalog.get("sensitive_data").unwrap().patterns().len(), 2);
        assert!(catalog.get("unknown").is_none());
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = PatternCatalog::build().unwrap();
        let second = PatternCatalog::build().unwrap();

        assert_eq!(first.category_names(), second.category_names());
        let first_sources: Vec<&str> = first
            .categories()
            .iter()
            .flat_map(|c| c.patterns().iter().map(|re| re.as_str()))
            .collect();
        let second_sources: Vec<&str> = second
            .categories()
            .iter()
            .flat_map(|c| c.patterns().iter().map(|re| re.as_str()))
            .collect();
        assert_eq!(first_sources, second_sources);
    }

    #[test]
    fn test_custom_definitions_keep_order() {
        let catalog = PatternCatalog::from_definitions(vec![
            CategoryDefinition::new("zeta", [r"\bz\b"]),
            CategoryDefinition::new("alpha", [r"\ba\b"]),
        ])
        .unwrap();

        assert_eq!(catalog.category_names(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut definitions = builtin_definitions();
        definitions.push(CategoryDefinition::new("defamation", [r"\bliar\b"]));

        let err = PatternCatalog::from_definitions(definitions).unwrap_err();
        assert!(err.to_string().contains("duplicate category 'defamation'"));
    }

    #[test]
    fn test_malformed_pattern_fails_whole_catalog() {
        let mut definitions = builtin_definitions();
        definitions.push(CategoryDefinition::new("broken", [r"[a-"]));

        assert!(matches!(
            PatternCatalog::from_definitions(definitions),
            Err(LitriskError::Pattern { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PatternCatalog::from_definitions(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.pattern_count(), 0);
    }
}
