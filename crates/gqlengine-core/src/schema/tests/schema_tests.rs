use crate::test_utils::build_schema;
use crate::test_utils::parse_type;
use crate::test_utils::INPUT_SCHEMA_SDL;
use gqlengine_parser::ast::OperationKind;

#[test]
fn typename_is_available_on_every_composite_type() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    for type_name in ["Query", "Dog", "Pet", "SearchResult"] {
        let field = schema.field_def(type_name, "__typename");
        assert_eq!(field.map(|f| f.type_annotation().to_string()), Some("String!".to_string()));
    }
    assert!(schema.field_def("Color", "__typename").is_none());
    assert!(schema.field_def("EchoInput", "__typename").is_none());
}

#[test]
fn schema_and_type_only_on_query_root() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    assert!(schema.field_def("Query", "__schema").is_some());
    assert!(schema.field_def("Query", "__type").is_some_and(|f| f.argument("name").is_some()));
    assert!(schema.field_def("Dog", "__schema").is_none());
    assert!(schema.field_def("Mutation", "__type").is_none());
}

#[test]
fn unions_have_no_fields_of_their_own() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    assert!(schema.field_def("SearchResult", "name").is_none());
    assert!(schema.field_def("Pet", "name").is_some());
}

#[test]
fn possible_types() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    assert_eq!(schema.possible_types("Pet"), ["Dog", "Cat"]);
    assert_eq!(schema.possible_types("SearchResult"), ["Dog", "Human"]);
    assert!(schema.possible_types("Dog").is_empty());

    assert!(schema.is_possible_type("Pet", "Cat"));
    assert!(!schema.is_possible_type("SearchResult", "Cat"));
    assert!(!schema.is_possible_type("Dog", "Dog"));
}

#[test]
fn types_overlap() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    assert!(schema.do_types_overlap("Dog", "Dog"));
    assert!(schema.do_types_overlap("Pet", "SearchResult"));
    assert!(schema.do_types_overlap("Human", "SearchResult"));
    assert!(!schema.do_types_overlap("Cat", "SearchResult"));
    assert!(!schema.do_types_overlap("Dog", "Cat"));
}

#[test]
fn subtyping() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let is_subtype = |sub: &str, sup: &str| schema.is_type_subtype_of(&parse_type(sub), &parse_type(sup));

    assert!(is_subtype("Int!", "Int"));
    assert!(!is_subtype("Int", "Int!"));
    assert!(is_subtype("[Dog!]!", "[Pet]"));
    assert!(is_subtype("Human", "SearchResult"));
    assert!(!is_subtype("Cat", "SearchResult"));
    assert!(!is_subtype("[Int]", "Int"));
}

#[test]
fn root_types() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    assert_eq!(schema.root_type(OperationKind::Query).map(|t| t.name()), Some("Query"));
    assert_eq!(
        schema.root_type(OperationKind::Subscription).map(|t| t.fields().len()),
        Some(2),
    );
}
