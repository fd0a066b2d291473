//! Rule metadata definitions
//!
//! Contains the metadata block of a rule: naming, provenance fields,
//! scoring and the sample hash list.

use serde::{Deserialize, Serialize};

use crate::utils::ident::IdProvider;

/// Default score assigned to freshly created rules.
pub const DEFAULT_SCORE: u8 = 85;

/// A single sample hash attached to a rule's metadata.
///
/// The `id` field is an opaque identity used by callers for list
/// reconciliation; it is never rendered into the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashEntry {
    pub id: String,
    /// Meta field name the hash is emitted under, e.g. `hash1`.
    pub label: String,
    pub value: String,
}

impl HashEntry {
    /// Create a new hash entry with a generated identity and a default
    /// label following the `hash{n}` convention.
    pub fn new(ids: &mut dyn IdProvider, ordinal: usize) -> Self {
        HashEntry {
            id: ids.next_id(),
            label: format!("hash{}", ordinal),
            value: String::new(),
        }
    }
}

/// Metadata block of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub rule_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// ISO date (`YYYY-MM-DD`), rendered as-is without escaping.
    #[serde(default)]
    pub date: String,
    /// Detection score in `0..=100`; omitted from output when `None`.
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub reference: String,
    /// Rule identity, expected to be a v4 UUID in textual form.
    pub id: String,
    #[serde(default)]
    pub hashes: Vec<HashEntry>,
}

impl Metadata {
    /// Create an empty metadata block with a fresh identity.
    ///
    /// # Arguments
    /// * `ids` - Identity generator for the `id` field
    /// * `date` - ISO date to stamp the rule with
    pub fn new(ids: &mut dyn IdProvider, date: &str) -> Self {
        Metadata {
            rule_name: String::new(),
            description: String::new(),
            author: String::new(),
            date: date.to_string(),
            score: Some(DEFAULT_SCORE),
            reference: String::new(),
            id: ids.next_id(),
            hashes: Vec::new(),
        }
    }

    /// Return a copy with a new empty hash entry appended, labeled
    /// `hash{n}` where `n` is the new list length.
    pub fn with_hash_added(&self, ids: &mut dyn IdProvider) -> Self {
        let mut next = self.clone();
        next.hashes.push(HashEntry::new(ids, self.hashes.len() + 1));
        next
    }

    /// Return a copy with the hash entry of the given identity removed.
    /// Unknown identities leave the list unchanged.
    pub fn with_hash_removed(&self, hash_id: &str) -> Self {
        let mut next = self.clone();
        next.hashes.retain(|hash| hash.id != hash_id);
        next
    }

    /// Return a copy with the value of the hash entry of the given
    /// identity replaced.
    pub fn with_hash_value(&self, hash_id: &str, value: &str) -> Self {
        let mut next = self.clone();
        for hash in &mut next.hashes {
            if hash.id == hash_id {
                hash.value = value.to_string();
            }
        }
        next
    }
}
