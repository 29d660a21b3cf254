//! Uncompiled category definitions and catalog files.
//!
//! A catalog file is a JSON document listing extra categories:
//! ```json
//! {
//!   "categories": [
//!     {"name": "export_control", "patterns": ["\\bITAR\\b", "\\bdual[- ]use\\b"]}
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LitriskError, Result};

/// A category name and the pattern sources that flag it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Category identifier, rendered as `[name]` in snippets.
    pub name: String,
    /// Regular expression sources, scanned in this order.
    pub patterns: Vec<String>,
}

impl CategoryDefinition {
    /// Create a new category definition.
    pub fn new<N, I, P>(name: N, patterns: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        CategoryDefinition {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the name and pattern list without compiling anything.
    ///
    /// Names are restricted to lowercase ASCII letters, digits and `_` so
    /// they survive the comma-joined category list unambiguously.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LitriskError::catalog("category name must not be empty"));
        }

        if let Some(c) = self
            .name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(LitriskError::catalog(format!(
                "category name '{}' contains invalid character {c:?}",
                self.name
            )));
        }

        if self.patterns.is_empty() {
            return Err(LitriskError::catalog(format!(
                "category '{}' has no patterns",
                self.name
            )));
        }

        Ok(())
    }
}

/// On-disk form of a list of category definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<CategoryDefinition>,
}

impl CatalogFile {
    /// Parse a catalog file from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LitriskError::parse(format!("Failed to parse catalog file: {e}")))
    }

    /// Read and parse a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| match e {
            LitriskError::Parse(msg) => LitriskError::parse(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}
