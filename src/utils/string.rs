//! String utility functions for text processing

/// Escape a string for embedding inside a double-quoted rule literal.
///
/// Backslashes are replaced first so the escape characters introduced by
/// the later substitutions are not escaped again.
///
/// # Arguments
///
/// * `s` - The raw input string
///
/// # Returns
///
/// The escaped string, safe to place between double quotes
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Sanitize a rule name into a valid rule identifier.
///
/// Every character outside `[A-Za-z0-9_]` is replaced by an underscore;
/// an empty name falls back to the `Unnamed_Rule` placeholder before
/// sanitizing.
///
/// # Arguments
///
/// * `name` - The user-supplied rule name
///
/// # Returns
///
/// An identifier-safe rule name
pub fn sanitize_rule_name(name: &str) -> String {
    let name = if name.is_empty() { "Unnamed_Rule" } else { name };
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
