use crate::Schema;
use crate::SchemaBuilder;
use gqlengine_parser::ast;

/// Builds a schema from `sdl`, panicking on any build error.
pub(crate) fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(sdl)
        .expect("schema parses")
        .build()
        .expect("schema builds")
}

pub(crate) fn parse_query(query: &str) -> ast::Document {
    gqlengine_parser::parse_executable_document(query).expect("query parses")
}

/// Parses `literal` as a standalone GraphQL value by wrapping it in an
/// argument of a throwaway query.
pub(crate) fn parse_literal(literal: &str) -> ast::Value {
    let doc = parse_query(&format!("{{ f(v: {literal}) }}"));
    let op = doc.operations().next().expect("one operation");
    match &op.selection_set.selections[0] {
        ast::Selection::Field(field) => field.arguments[0].value.clone(),
        other => panic!("unexpected selection: {other:?}"),
    }
}

/// Parses a type annotation such as `[Int!]!`.
pub(crate) fn parse_type(type_str: &str) -> ast::TypeAnnotation {
    let doc = parse_query(&format!("query($v: {type_str}) {{ f }}"));
    let op = doc.operations().next().expect("one operation");
    op.variable_definitions[0].var_type.clone()
}

/// A schema touching every input-side type kind, shared by the coercion and
/// validation tests.
pub(crate) const INPUT_SCHEMA_SDL: &str = r#"
type Query {
    echo(input: EchoInput, ids: [ID!], color: Color, count: Int = 3): String
    required(id: ID!): String
    dog: Dog
    pet: Pet
    search: SearchResult
}

type Mutation {
    addDog(name: String!): Dog
}

type Subscription {
    newDog: Dog
    newCat: Cat
}

input EchoInput {
    text: String!
    times: Int = 1
    tags: [String!]
    nested: EchoInput
}

enum Color { RED GREEN BLUE }

interface Pet {
    name: String!
}

type Dog implements Pet {
    name: String!
    barks: Boolean
    owner: Human
    doesKnowCommand(command: Color!): Boolean
}

type Cat implements Pet {
    name: String!
    meows: Boolean
}

type Human {
    name: String
    pets: [Pet!]
}

union SearchResult = Dog | Human
"#;
