//! Risk pattern catalog.
//!
//! A catalog is an ordered list of risk categories, each holding the compiled
//! patterns that flag it. The order of categories is the order in which the
//! engine reports snippets.

pub mod builtin;
pub mod catalog;
pub mod category;
pub mod definition;

pub use builtin::builtin_definitions;
pub use catalog::PatternCatalog;
pub use category::RiskCategory;
pub use definition::{CatalogFile, CategoryDefinition};
