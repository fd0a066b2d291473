pub mod file;
pub mod ident;
pub mod string;

// Re-export common utilities
pub use file::{load_rule_set, save_rule_set, FileError};
pub use ident::{IdProvider, UuidIdProvider};
pub use string::{escape_string, sanitize_rule_name};
