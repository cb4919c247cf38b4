use crate::test_utils::build_schema;
use crate::test_utils::parse_query;
use crate::test_utils::INPUT_SCHEMA_SDL;
use crate::validation::tests::validate_query;
use crate::validation::tests::validate_query_with;
use crate::validation::validate;
use crate::validation::ValidationOptions;
use gqlengine_parser::Location;

#[test]
fn errors_are_collected_from_every_rule_in_order() {
    let errors = validate_query("query Q($unused: Int) { dog { meows } ...Missing }");
    let rules: Vec<_> = errors.iter().map(|err| err.rule).collect();
    assert_eq!(rules, vec!["FieldsOnCorrectType", "KnownFragmentNames", "NoUnusedVariables"]);
}

#[test]
fn errors_carry_locations() {
    let errors = validate_query("{\n  dog {\n    meows\n  }\n}");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].locations, vec![Location { line: 3, column: 5 }]);
}

#[test]
fn max_depth_is_only_enforced_when_configured() {
    let query = "{ dog { owner { pets { name } } } }";
    assert!(validate_query(query).is_empty());

    let options = ValidationOptions { max_depth: Some(3) };
    let errors = validate_query_with(query, &options);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, "MaxDepth");
    assert_eq!(errors[0].message, "Field \"name\" has depth 4 that exceeds max depth 3.");
}

#[test]
fn max_depth_counts_fragments_where_they_are_spread() {
    let options = ValidationOptions { max_depth: Some(2) };
    let errors = validate_query_with(
        "{ dog { ...OwnerName } } fragment OwnerName on Dog { owner { name } }",
        &options,
    );
    let messages: Vec<_> = errors.iter().map(|err| err.message.as_str()).collect();
    assert_eq!(messages, vec!["Field \"name\" has depth 3 that exceeds max depth 2."]);
}

#[test]
fn validation_error_serializes_without_rule() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let document = parse_query("{ nope }");
    let errors = validate(&schema, &document, &ValidationOptions::default());
    assert_eq!(
        serde_json::to_value(&errors[0]).unwrap(),
        serde_json::json!({
            "message": "Cannot query field \"nope\" on type \"Query\".",
            "locations": [{"line": 1, "column": 3}],
        }),
    );
}
