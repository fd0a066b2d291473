//! String pattern definitions
//!
//! A `StringDef` is one named text/byte pattern of a rule together with
//! its matching modifiers.

use serde::{Deserialize, Serialize};

use crate::utils::ident::IdProvider;

/// Boolean matching modifiers of a string pattern.
///
/// Rendered in the fixed order `ascii wide fullword nocase`; only the
/// modifiers set to `true` appear in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringModifiers {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub wide: bool,
    #[serde(default)]
    pub fullword: bool,
    #[serde(default)]
    pub nocase: bool,
}

impl StringModifiers {
    /// List the active modifier keywords in rendering order.
    pub fn active(&self) -> Vec<&'static str> {
        let mut keywords = Vec::new();
        if self.ascii {
            keywords.push("ascii");
        }
        if self.wide {
            keywords.push("wide");
        }
        if self.fullword {
            keywords.push("fullword");
        }
        if self.nocase {
            keywords.push("nocase");
        }
        keywords
    }
}

/// A named string pattern within a rule.
///
/// The `id` field is an opaque identity for list reconciliation and is
/// never rendered. Entries with a blank value are kept in the model but
/// skipped by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringDef {
    pub id: String,
    /// Label following the `$name` convention, e.g. `$s1`.
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub modifiers: StringModifiers,
}

impl StringDef {
    /// Create a new empty string definition with a generated identity
    /// and a default label following the `$s{n}` convention.
    pub fn new(ids: &mut dyn IdProvider, ordinal: usize) -> Self {
        StringDef {
            id: ids.next_id(),
            label: format!("$s{}", ordinal),
            value: String::new(),
            modifiers: StringModifiers::default(),
        }
    }
}
