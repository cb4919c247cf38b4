mod argument_rule_tests;
mod document_rule_tests;
mod validate_tests;

use crate::test_utils::build_schema;
use crate::test_utils::parse_query;
use crate::test_utils::INPUT_SCHEMA_SDL;
use crate::validation::validate;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;

fn validate_query(query: &str) -> Vec<ValidationError> {
    validate_query_with(query, &ValidationOptions::default())
}

fn validate_query_with(query: &str, options: &ValidationOptions) -> Vec<ValidationError> {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let document = parse_query(query);
    validate(&schema, &document, options)
}

/// The errors reported by `rule` alone.
fn rule_messages(query: &str, rule: &str) -> Vec<String> {
    validate_query(query)
        .into_iter()
        .filter(|err| err.rule == rule)
        .map(|err| err.message)
        .collect()
}

fn assert_valid(query: &str) {
    let errors = validate_query(query);
    assert!(errors.is_empty(), "unexpected errors: {errors:#?}");
}
