//! Built-in litigation risk categories.

use crate::catalog::definition::CategoryDefinition;

pub const ADMISSION_OF_FAULT: &str = "admission_of_fault";
pub const OVER_PROMISE: &str = "over_promise";
pub const HOSTILE_LANGUAGE: &str = "hostile_language";
pub const SETTLEMENT_DISCUSSION: &str = "settlement_discussion";
pub const DEFAMATION: &str = "defamation";
pub const THREAT_OF_ACTION: &str = "threat_of_action";
pub const SENSITIVE_DATA: &str = "sensitive_data";
pub const EMPLOYMENT_DISCRIMINATION: &str = "employment_discrimination";
pub const ANTITRUST: &str = "antitrust";

/// Built-in categories in reporting order.
///
/// Every pattern is compiled case-insensitively, so none of them carry an
/// inline `(?i)` flag.
pub const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        ADMISSION_OF_FAULT,
        &[r"\bwe\s+(?:are|re|were)\s+responsible\b", r"\bI\s+admit\b"],
    ),
    (
        OVER_PROMISE,
        &[r"\bguarantee\b", r"\bwill\s+(?:ensure|cover|compensate)\b"],
    ),
    (
        HOSTILE_LANGUAGE,
        &[
            r"\b(?:idiot|stupid|incompetent|useless)\b",
            r"\b(?:pay up|or else|you\s+must)\b",
        ],
    ),
    (
        SETTLEMENT_DISCUSSION,
        &[
            r"\b(?:settle|settlement|without prejudice)\b",
            r"\b(?:offer|demand)\s+to\s+settle\b",
        ],
    ),
    (DEFAMATION, &[r"\b(?:fraud|scam|criminal)\b"]),
    (
        THREAT_OF_ACTION,
        &[r"\b(?:I will sue|we'll take you to court|legal action)\b"],
    ),
    (
        SENSITIVE_DATA,
        &[
            r"SSN\s*\d{3}-\d{2}-\d{4}",
            r"\b(?:password|credential|confidential)\b",
        ],
    ),
    (
        EMPLOYMENT_DISCRIMINATION,
        &[r"\b(?:fired because|due to your age|because of your race)\b"],
    ),
    (ANTITRUST, &[r"\b(?:fix prices|divide markets|collusion)\b"]),
];

/// Owned definitions for the built-in categories, ready to compile.
pub fn builtin_definitions() -> Vec<CategoryDefinition> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|(name, patterns)| CategoryDefinition::new(*name, patterns.iter().copied()))
        .collect()
}
