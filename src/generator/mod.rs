pub mod yara;

// Re-export the rule-file renderer
pub use yara::{render_rule, render_rule_set, EMPTY_RULE_SET_OUTPUT};
