use rulesmith::models::{Metadata, Rule, StringDef, StringModifiers};
use rulesmith::validator::validate_rule;

const VALID_ID: &str = "9f8b7c6d-1234-4abc-8def-0123456789ab";

fn rule_with(rule_name: &str, id: &str, condition: &str) -> Rule {
    Rule {
        metadata: Metadata {
            rule_name: rule_name.to_string(),
            description: String::new(),
            author: String::new(),
            date: String::new(),
            score: None,
            reference: String::new(),
            id: id.to_string(),
            hashes: Vec::new(),
        },
        strings: Vec::new(),
        condition: condition.to_string(),
    }
}

fn string_def(label: &str, value: &str) -> StringDef {
    StringDef {
        id: format!("id-{}", label),
        label: label.to_string(),
        value: value.to_string(),
        modifiers: StringModifiers::default(),
    }
}

#[test]
fn test_well_formed_rule_is_valid() {
    let mut rule = rule_with("Valid_Rule_1", VALID_ID, "all of them");
    rule.strings.push(string_def("$s1", "cmd.exe"));
    rule.strings.push(string_def("$s2", "powershell"));

    let report = validate_rule(&rule);
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_all_errors_collected_in_order() {
    let mut rule = rule_with("", "not-a-uuid", "");
    rule.strings.push(string_def("$s1", "first"));
    rule.strings.push(string_def("$s1", "second"));

    let report = validate_rule(&rule);
    assert!(!report.is_valid);
    assert_eq!(
        report.errors,
        vec![
            "Rule name is required".to_string(),
            "Duplicate string label: $s1".to_string(),
            "Condition cannot be empty".to_string(),
            "Invalid UUID format".to_string(),
        ]
    );
}

#[test]
fn test_invalid_identifier_name_gets_distinct_message() {
    let rule = rule_with("1bad name", VALID_ID, "true");
    let report = validate_rule(&rule);
    assert_eq!(
        report.errors,
        vec![
            "Rule name must be a valid identifier (letters, numbers, underscores only, cannot start with number)"
                .to_string()
        ]
    );
}

#[test]
fn test_only_second_and_later_duplicates_flagged() {
    let mut rule = rule_with("Dups", VALID_ID, "true");
    rule.strings.push(string_def("$a", "one"));
    rule.strings.push(string_def("$a", "two"));
    rule.strings.push(string_def("$a", "three"));

    let report = validate_rule(&rule);
    assert_eq!(
        report.errors,
        vec![
            "Duplicate string label: $a".to_string(),
            "Duplicate string label: $a".to_string(),
        ]
    );
}

#[test]
fn test_blank_string_value_named_by_label() {
    let mut rule = rule_with("Blank", VALID_ID, "true");
    rule.strings.push(string_def("$s1", "   "));

    let report = validate_rule(&rule);
    assert_eq!(report.errors, vec!["String $s1 cannot be empty".to_string()]);
}

#[test]
fn test_whitespace_condition_is_empty() {
    let rule = rule_with("Ws", VALID_ID, "   \t  ");
    let report = validate_rule(&rule);
    assert_eq!(report.errors, vec!["Condition cannot be empty".to_string()]);
}

#[test]
fn test_uuid_version_and_variant_checked() {
    // Version nibble must be 4
    let rule = rule_with("Uuid", "9f8b7c6d-1234-5abc-8def-0123456789ab", "true");
    assert_eq!(
        validate_rule(&rule).errors,
        vec!["Invalid UUID format".to_string()]
    );

    // Variant nibble must be one of 8, 9, a, b
    let rule = rule_with("Uuid", "9f8b7c6d-1234-4abc-7def-0123456789ab", "true");
    assert_eq!(
        validate_rule(&rule).errors,
        vec!["Invalid UUID format".to_string()]
    );
}

#[test]
fn test_uuid_match_is_case_insensitive() {
    let rule = rule_with("Uuid", "9F8B7C6D-1234-4ABC-8DEF-0123456789AB", "true");
    assert!(validate_rule(&rule).is_valid);
}
