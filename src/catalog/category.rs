//! Compiled risk categories.

use regex::{Match, Regex, RegexBuilder};

use crate::catalog::definition::CategoryDefinition;
use crate::error::{LitriskError, Result};

/// A named risk category with its compiled, case-insensitive patterns.
#[derive(Debug, Clone)]
pub struct RiskCategory {
    name: String,
    patterns: Vec<Regex>,
}

impl RiskCategory {
    /// Compile a definition into a category.
    ///
    /// Fails on the first pattern that does not compile; nothing partial is
    /// returned.
    pub fn compile(definition: &CategoryDefinition) -> Result<Self> {
        definition.validate()?;

        let patterns = definition
            .patterns
            .iter()
            .map(|source| {
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| LitriskError::pattern(&definition.name, source, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RiskCategory {
            name: definition.name.clone(),
            patterns,
        })
    }

    /// Get the category identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the compiled patterns in scan order.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Iterate over every match of every pattern, pattern by pattern, paired
    /// with the index of the pattern that produced it.
    ///
    /// Each pattern yields leftmost non-overlapping matches on its own, so
    /// matches of two different patterns may overlap.
    pub fn find_iter<'a, 't>(
        &'a self,
        text: &'t str,
    ) -> impl Iterator<Item = (usize, Match<'t>)> + 'a
    where
        't: 'a,
    {
        self.patterns
            .iter()
            .enumerate()
            .flat_map(move |(index, re)| re.find_iter(text).map(move |m| (index, m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, patterns: &[&str]) -> RiskCategory {
        RiskCategory::compile(&CategoryDefinition::new(name, patterns.iter().copied())).unwrap()
    }

    #[test]
    fn test_compile_is_case_insensitive() {
        let category = category("admission_of_fault", &[r"\bI\s+admit\b"]);
        let text = "i ADMIT it";

        let matches: Vec<&str> = category.find_iter(text).map(|(_, m)| m.as_str()).collect();
        assert_eq!(matches, vec!["i ADMIT"]);
    }

    #[test]
    fn test_word_boundary_is_literal() {
        let category = category("over_promise", &[r"\bguarantee\b"]);

        assert_eq!(category.find_iter("we guaranteed it").count(), 0);
        assert_eq!(category.find_iter("a guarantee.").count(), 1);
    }

    #[test]
    fn test_find_iter_keeps_pattern_order() {
        let category = category("hostile_language", &[r"\bstupid\b", r"\bpay up\b"]);
        let text = "pay up, stupid";

        let matches: Vec<(usize, usize, &str)> = category
            .find_iter(text)
            .map(|(index, m)| (index, m.start(), m.as_str()))
            .collect();
        assert_eq!(matches, vec![(0, 8, "stupid"), (1, 0, "pay up")]);
    }

    #[test]
    fn test_overlapping_patterns_are_independent() {
        let category = category(
            "settlement_discussion",
            &[r"\bsettle\b", r"\boffer\s+to\s+settle\b"],
        );

        assert_eq!(category.find_iter("our offer to settle").count(), 2);
    }

    #[test]
    fn test_compile_failure() {
        let definition = CategoryDefinition::new("broken", [r"\bok\b", r"(unclosed"]);
        let err = RiskCategory::compile(&definition).unwrap_err();

        match err {
            LitriskError::Pattern {
                category, pattern, ..
            } => {
                assert_eq!(category, "broken");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("Expected pattern error, got {other:?}"),
        }
    }
}
