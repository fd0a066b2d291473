//! Rule validation
//!
//! Collects every applicable problem of a rule into an ordered report
//! instead of failing fast. Validity is advisory: the renderer produces
//! output for invalid rules too.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Rule;

lazy_static! {
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref UUID_V4_REGEX: Regex = Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"
    )
    .unwrap();
}

/// Outcome of validating one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate a single rule, accumulating all errors in order.
///
/// Checks, in sequence: rule name presence and identifier shape, string
/// labels (only the second and later occurrences of a repeated label are
/// flagged) and blank string values, a non-blank condition, and the v4
/// UUID shape of the rule id.
pub fn validate_rule(rule: &Rule) -> ValidationReport {
    let mut errors = Vec::new();

    if rule.metadata.rule_name.is_empty() {
        errors.push("Rule name is required".to_string());
    } else if !IDENTIFIER_REGEX.is_match(&rule.metadata.rule_name) {
        errors.push(
            "Rule name must be a valid identifier (letters, numbers, underscores only, cannot start with number)"
                .to_string(),
        );
    }

    let mut seen_labels = HashSet::new();
    for string in &rule.strings {
        if seen_labels.contains(string.label.as_str()) {
            errors.push(format!("Duplicate string label: {}", string.label));
        }
        seen_labels.insert(string.label.as_str());

        if string.value.trim().is_empty() {
            errors.push(format!("String {} cannot be empty", string.label));
        }
    }

    if rule.condition.trim().is_empty() {
        errors.push("Condition cannot be empty".to_string());
    }

    if !UUID_V4_REGEX.is_match(&rule.metadata.id) {
        errors.push("Invalid UUID format".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
