use crate::coercion::coerce_argument_values;
use crate::coercion::Variables;
use crate::test_utils::build_schema;
use crate::test_utils::parse_query;
use crate::test_utils::INPUT_SCHEMA_SDL;
use crate::Value;
use gqlengine_parser::ast;
use gqlengine_parser::Location;

fn first_field(doc: &ast::Document) -> &ast::Field {
    let op = doc.operations().next().expect("one operation");
    match &op.selection_set.selections[0] {
        ast::Selection::Field(field) => field,
        other => panic!("unexpected selection: {other:?}"),
    }
}

const NOWHERE: Location = Location { line: 1, column: 1 };

#[test]
fn absent_arguments_take_defaults_or_stay_absent() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("{ echo(color: RED) }");
    let field = first_field(&doc);
    let field_def = schema.field_def("Query", "echo").unwrap();

    let args = coerce_argument_values(
        &schema,
        field_def.arguments(),
        &field.arguments,
        &Variables::new(),
        NOWHERE,
    ).unwrap();

    assert_eq!(args.get("color"), Some(&Value::Enum("RED".to_string())));
    assert_eq!(args.get("count"), Some(&Value::Int(3)));
    assert!(!args.contains_key("input"));
    assert!(!args.contains_key("ids"));
}

#[test]
fn missing_required_argument_is_reported() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("{ required }");
    let field = first_field(&doc);
    let field_def = schema.field_def("Query", "required").unwrap();

    let errors = coerce_argument_values(
        &schema,
        field_def.arguments(),
        &field.arguments,
        &Variables::new(),
        field.span.location(),
    ).unwrap_err();

    assert_eq!(
        errors[0].message,
        "Argument \"id\" of required type \"ID!\" was not provided.",
    );
    assert_eq!(errors[0].locations, vec![field.span.location()]);
}

#[test]
fn required_argument_bound_to_unset_variable_is_reported() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("query($id: ID) { required(id: $id) }");
    let field = first_field(&doc);
    let field_def = schema.field_def("Query", "required").unwrap();

    let errors = coerce_argument_values(
        &schema,
        field_def.arguments(),
        &field.arguments,
        &Variables::new(),
        NOWHERE,
    ).unwrap_err();

    assert_eq!(
        errors[0].message,
        "Argument \"id\" of required type \"ID!\" was provided the variable \
        \"$id\" which was not provided a runtime value.",
    );
}

#[test]
fn null_variable_for_non_null_argument_is_reported() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("query($id: ID) { required(id: $id) }");
    let field = first_field(&doc);
    let field_def = schema.field_def("Query", "required").unwrap();
    let mut variables = Variables::new();
    variables.insert("id".to_string(), Value::Null);

    let errors = coerce_argument_values(
        &schema,
        field_def.arguments(),
        &field.arguments,
        &variables,
        NOWHERE,
    ).unwrap_err();

    assert_eq!(
        errors[0].message,
        "Argument \"id\" of non-null type \"ID!\" must not be null.",
    );
}

#[test]
fn variables_inside_literals_are_substituted() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("query($t: String!) { echo(input: {text: $t}, ids: [1, \"two\"]) }");
    let field = first_field(&doc);
    let field_def = schema.field_def("Query", "echo").unwrap();
    let mut variables = Variables::new();
    variables.insert("t".to_string(), Value::from("hello"));

    let args = coerce_argument_values(
        &schema,
        field_def.arguments(),
        &field.arguments,
        &variables,
        NOWHERE,
    ).unwrap();

    assert_eq!(
        args.get("input"),
        Some(&Value::object([
            ("text", Value::from("hello")),
            ("times", Value::Int(1)),
        ])),
    );
    assert_eq!(
        args.get("ids"),
        Some(&Value::List(vec![Value::from("1"), Value::from("two")])),
    );
}
