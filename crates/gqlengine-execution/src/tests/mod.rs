mod executable_schema_tests;
mod executor_tests;
mod introspection_tests;

use crate::ExecutableSchema;
use crate::ExecutableSchemaBuilder;
use crate::FieldError;
use crate::FieldValue;
use crate::Request;
use crate::ResolverContext;
use gqlengine_core::Schema;
use gqlengine_core::SchemaBuilder;
use gqlengine_core::Value;

pub(super) const STAR_WARS_SDL: &str = r#"
enum Episode { NEWHOPE EMPIRE JEDI }

interface Character {
    id: ID!
    name: String
    friends: [Character]
    appearsIn: [Episode]
}

type Human implements Character {
    id: ID!
    name: String
    friends: [Character]
    appearsIn: [Episode]
    homePlanet: String
}

type Droid implements Character {
    id: ID!
    name: String!
    friends: [Character]
    appearsIn: [Episode]
    primaryFunction: String
}

type Query {
    hero(episode: Episode): Character
    human(id: ID!): Human
    droid(id: ID!): Droid
}
"#;

pub(super) fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(sdl)
        .expect("schema parses")
        .build()
        .expect("schema builds")
}

/// Wraps a resolver result so closures don't need their error type spelled
/// out.
pub(super) fn ok(value: impl Into<FieldValue>) -> Result<FieldValue, FieldError> {
    Ok(value.into())
}

fn luke() -> Value {
    Value::object([
        ("__typename", Value::from("Human")),
        ("id", Value::from("1000")),
        ("name", Value::from("Luke Skywalker")),
        ("appearsIn", Value::List(vec![
            Value::Enum("NEWHOPE".to_string()),
            Value::Enum("EMPIRE".to_string()),
            Value::Enum("JEDI".to_string()),
        ])),
        ("homePlanet", Value::from("Tatooine")),
    ])
}

fn r2d2() -> Value {
    Value::object([
        ("__typename", Value::from("Droid")),
        ("id", Value::from("2001")),
        ("name", Value::from("R2-D2")),
        ("appearsIn", Value::List(vec![Value::Enum("NEWHOPE".to_string())])),
        ("primaryFunction", Value::from("Astromech")),
    ])
}

fn character(id: &str) -> FieldValue {
    match id {
        "1000" => luke().into(),
        "2001" => r2d2().into(),
        _ => FieldValue::Null,
    }
}

/// The Star Wars schema with `hero`, `human` and `droid` bound, ready for
/// more bindings.
pub(super) fn star_wars_builder() -> ExecutableSchemaBuilder {
    ExecutableSchema::builder(build_schema(STAR_WARS_SDL))
        .resolver("Query", "hero", |ctx: ResolverContext| async move {
            match ctx.argument("episode").and_then(Value::as_str) {
                Some("EMPIRE") => ok(character("1000")),
                _ => ok(character("2001")),
            }
        })
        .resolver("Query", "human", |ctx: ResolverContext| async move {
            let id = ctx.argument("id").and_then(Value::as_str).unwrap_or_default();
            ok(character(id))
        })
        .resolver("Query", "droid", |ctx: ResolverContext| async move {
            let id = ctx.argument("id").and_then(Value::as_str).unwrap_or_default();
            ok(character(id))
        })
}

pub(super) fn star_wars() -> ExecutableSchema {
    star_wars_builder().build().expect("resolvers bind")
}

pub(super) async fn run(schema: &ExecutableSchema, query: &str) -> serde_json::Value {
    schema.execute(Request::new(query)).await.to_json()
}
