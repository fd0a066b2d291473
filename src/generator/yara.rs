//! YARA rule text synthesis
//!
//! Pure rendering from the rule model to rule-file source text. Rendering
//! is total: any well-typed rule set produces output, regardless of what
//! the validator thinks of it.

use crate::models::{Rule, RuleSet};
use crate::utils::string::{escape_string, sanitize_rule_name};

/// Output produced for a rule set without any rules.
pub const EMPTY_RULE_SET_OUTPUT: &str = "// No rules defined";

const SECTION_SEPARATOR: &str =
    "/* Rule Set ----------------------------------------------------------------- */";

/// Render a whole rule set into one rule-file document.
///
/// The file header comment is seeded from the first rule's metadata only;
/// `import "pe"` is emitted once when the literal substring `pe.` occurs
/// anywhere in a condition or string value across the set. Rule blocks
/// are separated by exactly one blank line.
///
/// # Arguments
/// * `rule_set` - The rule set to render
///
/// # Returns
/// The complete document text
pub fn render_rule_set(rule_set: &RuleSet) -> String {
    if rule_set.rules.is_empty() {
        return EMPTY_RULE_SET_OUTPUT.to_string();
    }

    let first = &rule_set.rules[0];
    let mut output = String::from("/*\n");
    output.push_str("   Yara Rule Set\n");
    if !first.metadata.author.is_empty() {
        output.push_str(&format!("   Author: {}\n", first.metadata.author));
    }
    if !first.metadata.date.is_empty() {
        output.push_str(&format!("   Date: {}\n", first.metadata.date));
    }
    if !first.metadata.reference.is_empty() {
        output.push_str(&format!("   Reference: {}\n", first.metadata.reference));
    }
    output.push_str("*/\n\n");
    output.push_str(SECTION_SEPARATOR);
    output.push_str("\n\n");

    if needs_pe_import(rule_set) {
        output.push_str("import \"pe\"\n\n");
    }

    for (index, rule) in rule_set.rules.iter().enumerate() {
        if index > 0 {
            output.push_str("\n\n");
        }
        output.push_str(&render_rule(rule));
    }

    output
}

/// Textual heuristic for the `pe` module import: any occurrence of the
/// literal substring `pe.` in a condition or string value triggers it,
/// including incidental ones.
fn needs_pe_import(rule_set: &RuleSet) -> bool {
    rule_set.rules.iter().any(|rule| {
        rule.condition.contains("pe.")
            || rule.strings.iter().any(|s| s.value.contains("pe."))
    })
}

/// Render a single rule block.
///
/// The rule name is sanitized to an identifier (empty names fall back to
/// `Unnamed_Rule`). Meta fields are emitted in fixed order with the rule
/// id always last; hash values are emitted verbatim while the other text
/// fields are escape-processed. The closing brace carries no trailing
/// newline.
pub fn render_rule(rule: &Rule) -> String {
    let metadata = &rule.metadata;
    let rule_name = sanitize_rule_name(&metadata.rule_name);

    let mut output = format!("rule {} {{\n", rule_name);

    output.push_str("    meta:\n");
    if !metadata.description.is_empty() {
        output.push_str(&format!(
            "        description = \"{}\"\n",
            escape_string(&metadata.description)
        ));
    }
    if !metadata.author.is_empty() {
        output.push_str(&format!(
            "        author = \"{}\"\n",
            escape_string(&metadata.author)
        ));
    }
    if !metadata.reference.is_empty() {
        output.push_str(&format!(
            "        reference = \"{}\"\n",
            escape_string(&metadata.reference)
        ));
    }
    if !metadata.date.is_empty() {
        output.push_str(&format!("        date = \"{}\"\n", metadata.date));
    }
    if let Some(score) = metadata.score {
        output.push_str(&format!("        score = {}\n", score));
    }
    for hash in &metadata.hashes {
        if !hash.value.trim().is_empty() {
            // Hash values are emitted verbatim, unlike the other meta fields
            output.push_str(&format!("        {} = \"{}\"\n", hash.label, hash.value));
        }
    }
    output.push_str(&format!("        id = \"{}\"\n", metadata.id));

    if !rule.strings.is_empty() {
        output.push_str("    strings:\n");
        for string in &rule.strings {
            if string.value.trim().is_empty() {
                continue;
            }
            let mut line = format!(
                "        {} = \"{}\"",
                string.label,
                escape_string(&string.value)
            );
            let modifiers = string.modifiers.active();
            if !modifiers.is_empty() {
                line.push_str(&format!(" {}", modifiers.join(" ")));
            }
            output.push_str(&line);
            output.push('\n');
        }
    }

    output.push_str("    condition:\n");
    let condition = if rule.condition.is_empty() {
        "true"
    } else {
        &rule.condition
    };
    output.push_str(&format_condition(condition));

    output.push('}');

    output
}

/// Format the condition body.
///
/// Conditions are flagged complex when they combine ` and ` with ` or `,
/// or contain both parentheses. The only complex shape that gets a
/// multi-line layout is a trailing `pe.imphash()` or-clause after an
/// `and`-chain; every other condition, complex or not, renders as a
/// single indented line. The two checks are intentionally not aligned;
/// downstream consumers depend on this exact output.
fn format_condition(condition: &str) -> String {
    let has_complex_logic = condition.contains(" or ") && condition.contains(" and ");
    let has_parentheses = condition.contains('(') && condition.contains(')');

    if !has_complex_logic && !has_parentheses {
        return format!("        {}\n", condition);
    }

    let formatted = condition.trim();

    if formatted.contains("pe.imphash()") && formatted.contains(" or ") {
        let parts: Vec<&str> = formatted.split(" and ").collect();
        let main_part = parts[..parts.len() - 1].join(" and ");
        let last_part = parts[parts.len() - 1];

        if last_part.contains(" or ") {
            let or_parts: Vec<&str> = last_part.split(" or ").collect();
            let mut result = format!("        {} and (\n", main_part);
            for (index, part) in or_parts.iter().enumerate() {
                let trimmed = part.trim();
                if index == or_parts.len() - 1 {
                    result.push_str(&format!("         {}\n", trimmed));
                } else {
                    result.push_str(&format!("         {} or\n", trimmed));
                }
            }
            result.push_str("      )\n");
            return result;
        }
    }

    format!("        {}\n", formatted)
}
