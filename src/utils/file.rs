//! Rule set file loading and saving

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::RuleSet;

/// Errors raised while loading or saving rule set documents.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rule set document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a rule set from a JSON document on disk.
pub fn load_rule_set<P: AsRef<Path>>(path: P) -> Result<RuleSet, FileError> {
    let content = fs::read_to_string(path)?;
    let rule_set = serde_json::from_str(&content)?;
    Ok(rule_set)
}

/// Save a rule set as a pretty-printed JSON document.
pub fn save_rule_set<P: AsRef<Path>>(path: P, rule_set: &RuleSet) -> Result<(), FileError> {
    let content = serde_json::to_string_pretty(rule_set)?;
    fs::write(path, content)?;
    Ok(())
}
