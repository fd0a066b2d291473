//! Core data models for the application
//!
//! This module contains the primary data structures used throughout the
//! application, separated from the logic that operates on them: the rule
//! set, its rules, metadata blocks and string pattern definitions.
//!
//! All models are plain serde-enabled values. Mutation happens through
//! copy-on-write helpers that return new values, so a snapshot handed to
//! the renderer or validator can never change underneath it.

pub mod metadata;
pub mod rule;
pub mod string_def;

pub use metadata::{HashEntry, Metadata, DEFAULT_SCORE};
pub use rule::{Rule, RuleSet, DEFAULT_CONDITION};
pub use string_def::{StringDef, StringModifiers};
