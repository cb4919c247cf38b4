use crate::test_utils::build_schema;
use crate::test_utils::INPUT_SCHEMA_SDL;
use crate::validation::tests::assert_valid;
use crate::validation::tests::rule_messages;
use crate::validation::validate;
use crate::validation::ValidationOptions;

#[test]
fn well_formed_query_is_valid() {
    assert_valid(
        "query Dogs($cmd: Color!) {
            dog { name barks doesKnowCommand(command: $cmd) owner { name } }
            pet { __typename name ... on Dog { barks } }
            search { ... on Human { name } }
            __schema { queryType { name } }
        }",
    );
}

#[test]
fn type_system_definitions_are_not_executable() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let document = gqlengine_parser::parse_mixed_document("{ dog { name } } type Extra { a: Int }")
        .unwrap();
    let errors = validate(&schema, &document, &ValidationOptions::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, "ExecutableDefinitions");
    assert_eq!(errors[0].message, "The type definition `Extra` is not executable.");
}

#[test]
fn operation_names_are_unique() {
    assert_eq!(
        rule_messages("query A { dog { name } } query A { pet { name } }", "UniqueOperationNames"),
        vec!["There can be only one operation named \"A\"."],
    );
}

#[test]
fn anonymous_operation_must_be_alone() {
    assert_eq!(
        rule_messages("{ dog { name } } query B { pet { name } }", "LoneAnonymousOperation"),
        vec!["This anonymous operation must be the only defined operation."],
    );
}

#[test]
fn subscriptions_select_a_single_root_field() {
    assert_eq!(
        rule_messages(
            "subscription S { newDog { name } ...More } fragment More on Subscription { newCat { name } }",
            "SingleFieldSubscriptions",
        ),
        vec!["Subscription \"S\" must select only one top level field."],
    );
    assert_eq!(
        rule_messages("subscription { __typename }", "SingleFieldSubscriptions"),
        vec!["Anonymous Subscription must not select an introspection top level field."],
    );
}

#[test]
fn unknown_type_names_are_reported() {
    assert_eq!(
        rule_messages(
            "query($a: Bogus) { pet { ... on Lizard { name } } }",
            "KnownTypeNames",
        ),
        vec!["Unknown type \"Bogus\".", "Unknown type \"Lizard\"."],
    );
}

#[test]
fn fields_must_exist_on_their_parent() {
    assert_eq!(
        rule_messages("{ dog { name meows } pet { barks } }", "FieldsOnCorrectType"),
        vec![
            "Cannot query field \"meows\" on type \"Dog\".",
            "Cannot query field \"barks\" on type \"Pet\".",
        ],
    );
}

#[test]
fn schema_meta_fields_only_exist_on_the_query_root() {
    assert_valid("{ __type(name: \"Dog\") { name } dog { __typename } }");
    assert_eq!(
        rule_messages("{ dog { __schema { queryType { name } } } }", "FieldsOnCorrectType"),
        vec!["Cannot query field \"__schema\" on type \"Dog\"."],
    );
}

#[test]
fn leaf_and_composite_selections_are_enforced() {
    assert_eq!(
        rule_messages("{ dog { name { length } } pet }", "ScalarLeafs"),
        vec![
            "Field \"name\" must not have a selection since type \"String!\" has no subfields.",
            "Field \"pet\" of type \"Pet\" must have a selection of subfields. Did you mean \"pet { ... }\"?",
        ],
    );
}
