use crate::validation::tests::rule_messages;

#[test]
fn unknown_arguments_are_reported_for_fields_and_directives() {
    assert_eq!(
        rule_messages(
            "{ dog { name(loud: true) barks @skip(if: false, unless: true) } }",
            "KnownArgumentNames",
        ),
        vec![
            "Unknown argument \"loud\" on field \"Dog.name\".",
            "Unknown argument \"unless\" on directive \"@skip\".",
        ],
    );
}

#[test]
fn argument_names_are_unique() {
    assert_eq!(
        rule_messages("{ required(id: 1, id: 2) }", "UniqueArgumentNames"),
        vec!["There can be only one argument named \"id\"."],
    );
}

#[test]
fn required_arguments_must_be_provided() {
    assert_eq!(
        rule_messages(
            "{ required dog { name @include } }",
            "ProvidedRequiredArguments",
        ),
        vec![
            "Field \"required\" argument \"id\" of type \"ID!\" is required, but it was not provided.",
            "Directive \"@include\" argument \"if\" of type \"Boolean!\" is required, but it was not provided.",
        ],
    );
}

#[test]
fn defaulted_arguments_are_optional() {
    assert!(rule_messages("{ echo }", "ProvidedRequiredArguments").is_empty());
}
