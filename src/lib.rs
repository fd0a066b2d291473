pub mod generator;
pub mod models;
pub mod utils;
pub mod validator;

// Re-export the main rule types for easier access
pub use models::{HashEntry, Metadata, Rule, RuleSet, StringDef, StringModifiers};

// Re-export the renderer and validator entry points
pub use generator::{render_rule, render_rule_set};
pub use validator::{validate_rule, ValidationReport};
