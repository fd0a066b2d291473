//! Rule and rule set definitions
//!
//! A `Rule` bundles metadata, string patterns and a boolean condition;
//! a `RuleSet` is an ordered collection of rules rendered together as
//! one output document. Every update helper is copy-on-write: it
//! returns a new value and never mutates in place, so callers can keep
//! sharing earlier snapshots safely.

use serde::{Deserialize, Serialize};

use crate::models::metadata::Metadata;
use crate::models::string_def::StringDef;
use crate::utils::ident::IdProvider;

/// Condition assigned to freshly created rules: an MZ header check,
/// a file size cap and a match on all defined strings.
pub const DEFAULT_CONDITION: &str = "uint16(0) == 0x5a4d and filesize < 1MB and all of them";

fn default_condition() -> String {
    DEFAULT_CONDITION.to_string()
}

/// One named detection rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub metadata: Metadata,
    #[serde(default)]
    pub strings: Vec<StringDef>,
    #[serde(default = "default_condition")]
    pub condition: String,
}

impl Rule {
    /// Create a rule with default content: fresh identity, the default
    /// condition, score 85, no strings or hashes.
    ///
    /// # Arguments
    /// * `ids` - Identity generator for the metadata UUID
    /// * `date` - ISO date stamped into the metadata
    pub fn new(ids: &mut dyn IdProvider, date: &str) -> Self {
        Rule {
            metadata: Metadata::new(ids, date),
            strings: Vec::new(),
            condition: default_condition(),
        }
    }

    /// Create a rule with default content dated today.
    pub fn today(ids: &mut dyn IdProvider) -> Self {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        Rule::new(ids, &date)
    }

    /// Return a copy with the metadata block replaced.
    pub fn with_metadata(&self, metadata: Metadata) -> Self {
        Rule {
            metadata,
            ..self.clone()
        }
    }

    /// Return a copy with the string list replaced.
    pub fn with_strings(&self, strings: Vec<StringDef>) -> Self {
        Rule {
            strings,
            ..self.clone()
        }
    }

    /// Return a copy with a new empty string appended, labeled `$s{n}`
    /// where `n` is the new list length.
    pub fn with_string_added(&self, ids: &mut dyn IdProvider) -> Self {
        let mut next = self.clone();
        next.strings.push(StringDef::new(ids, self.strings.len() + 1));
        next
    }

    /// Return a copy with the condition text replaced.
    pub fn with_condition(&self, condition: &str) -> Self {
        Rule {
            condition: condition.to_string(),
            ..self.clone()
        }
    }
}

/// An ordered collection of rules forming one output document.
///
/// Insertion order is rendering order; the first rule's metadata seeds
/// the shared file header comment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set containing a single default rule.
    pub fn new(ids: &mut dyn IdProvider, date: &str) -> Self {
        RuleSet {
            rules: vec![Rule::new(ids, date)],
        }
    }

    /// Return a copy with the given rule appended.
    pub fn with_rule_added(&self, rule: Rule) -> Self {
        let mut next = self.clone();
        next.rules.push(rule);
        next
    }

    /// Return a copy with the rule at `index` removed. An out-of-range
    /// index leaves the set unchanged.
    pub fn with_rule_removed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.rules.len() {
            next.rules.remove(index);
        }
        next
    }

    /// Return a copy with the rule at `index` replaced. An out-of-range
    /// index leaves the set unchanged.
    pub fn with_rule_replaced(&self, index: usize, rule: Rule) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.rules.get_mut(index) {
            *slot = rule;
        }
        next
    }
}
