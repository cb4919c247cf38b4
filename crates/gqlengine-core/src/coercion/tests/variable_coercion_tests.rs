use crate::coercion::coerce_variable_values;
use crate::coercion::Variables;
use crate::test_utils::build_schema;
use crate::test_utils::parse_query;
use crate::test_utils::INPUT_SCHEMA_SDL;
use crate::Value;

fn inputs(json: serde_json::Value) -> Variables {
    match Value::from(json) {
        Value::Object(fields) => fields,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn provided_and_defaulted_variables_are_coerced() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query(
        "query($ids: [ID!], $color: Color = BLUE, $unset: Int) { echo(ids: $ids, color: $color, count: $unset) }",
    );
    let op = doc.operations().next().unwrap();

    let coerced = coerce_variable_values(
        &schema,
        op,
        &inputs(serde_json::json!({"ids": 5})),
    ).unwrap();

    assert_eq!(coerced.get("ids"), Some(&Value::List(vec![Value::from("5")])));
    assert_eq!(coerced.get("color"), Some(&Value::Enum("BLUE".to_string())));
    assert!(!coerced.contains_key("unset"));
}

#[test]
fn missing_and_null_required_variables_are_reported_together() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query(
        "query($a: ID!, $b: ID!) { x: required(id: $a) y: required(id: $b) }",
    );
    let op = doc.operations().next().unwrap();

    let errors = coerce_variable_values(
        &schema,
        op,
        &inputs(serde_json::json!({"b": null})),
    ).unwrap_err();

    let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec![
        "Variable \"$a\" of required type \"ID!\" was not provided.",
        "Variable \"$b\" of non-null type \"ID!\" must not be null.",
    ]);
    assert_eq!(errors[0].locations, vec![op.variable_definitions[0].span.location()]);
}

#[test]
fn invalid_nested_value_names_variable_and_path() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("query($in: EchoInput) { echo(input: $in) }");
    let op = doc.operations().next().unwrap();

    let errors = coerce_variable_values(
        &schema,
        op,
        &inputs(serde_json::json!({"in": {"text": "x", "tags": ["ok", 3]}})),
    ).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Variable \"$in\" got invalid value {text: \"x\", tags: [\"ok\", 3]} at \
        \"in.tags[1]\"; String cannot represent a non string value: 3",
    );
}

#[test]
fn output_typed_variable_is_rejected() {
    let schema = build_schema(INPUT_SCHEMA_SDL);
    let doc = parse_query("query($d: Dog) { dog { name } }");
    let op = doc.operations().next().unwrap();

    let errors = coerce_variable_values(&schema, op, &Variables::new()).unwrap_err();
    assert_eq!(
        errors[0].message,
        "Variable \"$d\" expected value of type \"Dog\" which cannot be used as \
        an input type.",
    );
}
