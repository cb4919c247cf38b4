//! Tests for parsing type-system documents.

use crate::ast;
use crate::tests::utils::parse_schema;

fn only_type(source: &str) -> ast::TypeDefinition {
    let doc = parse_schema(source);
    match doc.definitions.into_iter().next() {
        Some(ast::Definition::Type(type_def)) => type_def,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

#[test]
fn schema_definition_root_operations() {
    let doc = parse_schema(
        "schema @dir { query: Root mutation: Mut }",
    );
    match &doc.definitions[0] {
        ast::Definition::Schema(schema) => {
            assert_eq!(schema.directives[0].name, "dir");
            assert_eq!(schema.root_operations.len(), 2);
            assert_eq!(schema.root_operations[0].kind, ast::OperationKind::Query);
            assert_eq!(schema.root_operations[0].type_name, "Root");
            assert_eq!(schema.root_operations[1].kind, ast::OperationKind::Mutation);
        },
        other => panic!("expected schema definition, got {other:?}"),
    }
}

#[test]
fn object_type_with_description_interfaces_and_arguments() {
    let type_def = only_type(
        r#"
        """
        A hero.
        """
        type Human implements & Node & Character @key {
          "the id"
          id: ID!
          friends(first: Int = 10, "cursor" after: String): [Character]
          old: String @deprecated(reason: "no")
        }
        "#,
    );
    match type_def {
        ast::TypeDefinition::Object(obj) => {
            assert_eq!(obj.description.as_deref(), Some("A hero."));
            assert_eq!(obj.interfaces, vec!["Node", "Character"]);
            assert_eq!(obj.directives[0].name, "key");
            assert_eq!(obj.fields.len(), 3);
            assert_eq!(obj.fields[0].description.as_deref(), Some("the id"));
            let friends = &obj.fields[1];
            assert_eq!(friends.arguments.len(), 2);
            assert!(friends.arguments[0].default_value.is_some());
            assert_eq!(friends.arguments[1].description.as_deref(), Some("cursor"));
            assert_eq!(friends.field_type.to_graphql_string(), "[Character]");
        },
        other => panic!("expected object type, got {other:?}"),
    }
}

#[test]
fn interface_implementing_interface() {
    match only_type("interface Named implements Node { id: ID! name: String }") {
        ast::TypeDefinition::Interface(iface) => {
            assert_eq!(iface.interfaces, vec!["Node"]);
            assert_eq!(iface.fields.len(), 2);
        },
        other => panic!("expected interface, got {other:?}"),
    }
}

#[test]
fn union_with_leading_pipe() {
    match only_type("union SearchResult = | Human | Droid | Starship") {
        ast::TypeDefinition::Union(union_def) => {
            assert_eq!(union_def.members, vec!["Human", "Droid", "Starship"]);
        },
        other => panic!("expected union, got {other:?}"),
    }
}

#[test]
fn enum_and_input_and_scalar() {
    match only_type("enum Episode { NEWHOPE EMPIRE @deprecated JEDI }") {
        ast::TypeDefinition::Enum(enum_def) => {
            let names: Vec<_> =
                enum_def.values.iter().map(|v| v.name.as_str()).collect();
            assert_eq!(names, vec!["NEWHOPE", "EMPIRE", "JEDI"]);
            assert_eq!(enum_def.values[1].directives[0].name, "deprecated");
        },
        other => panic!("expected enum, got {other:?}"),
    }
    match only_type("input Review { stars: Int! commentary: String = \"none\" }") {
        ast::TypeDefinition::InputObject(input) => {
            assert_eq!(input.fields.len(), 2);
            assert!(input.fields[1].default_value.is_some());
        },
        other => panic!("expected input object, got {other:?}"),
    }
    match only_type("scalar DateTime @specifiedBy(url: \"https://example.com\")") {
        ast::TypeDefinition::Scalar(scalar) => {
            assert_eq!(scalar.name, "DateTime");
            assert_eq!(scalar.directives[0].name, "specifiedBy");
        },
        other => panic!("expected scalar, got {other:?}"),
    }
}

#[test]
fn directive_definition() {
    let doc = parse_schema(
        "directive @cache(maxAge: Int) repeatable on | FIELD_DEFINITION | OBJECT",
    );
    match &doc.definitions[0] {
        ast::Definition::Directive(def) => {
            assert_eq!(def.name, "cache");
            assert!(def.repeatable);
            assert_eq!(
                def.locations,
                vec![
                    ast::DirectiveLocation::FieldDefinition,
                    ast::DirectiveLocation::Object,
                ],
            );
            assert_eq!(def.arguments[0].name, "maxAge");
        },
        other => panic!("expected directive definition, got {other:?}"),
    }
}

#[test]
fn type_and_schema_extensions() {
    let doc = parse_schema(
        "extend type Query { extra: Int }
         extend union U = C
         extend scalar S @dir
         extend schema { subscription: Sub }",
    );
    assert_eq!(doc.definitions.len(), 4);
    assert!(matches!(
        &doc.definitions[0],
        ast::Definition::TypeExtension(ast::TypeDefinition::Object(obj)) if obj.name == "Query",
    ));
    assert!(matches!(&doc.definitions[3], ast::Definition::SchemaExtension(_)));
}

#[test]
fn type_without_fields_is_allowed() {
    match only_type("type Empty") {
        ast::TypeDefinition::Object(obj) => assert!(obj.fields.is_empty()),
        other => panic!("expected object type, got {other:?}"),
    }
}
