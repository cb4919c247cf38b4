use super::build_schema;
use super::ok;
use super::run;
use super::star_wars;
use super::star_wars_builder;
use crate::ExecutableSchema;
use crate::ExecutorOptions;
use crate::FieldError;
use crate::FieldValue;
use crate::Request;
use crate::ResolverContext;
use gqlengine_core::Value;
use serde_json::json;

#[tokio::test]
async fn resolves_a_human_by_id() {
    let response = run(&star_wars(), r#"{ human(id: "1000") { name } }"#).await;
    assert_eq!(response, json!({ "data": { "human": { "name": "Luke Skywalker" } } }));
}

#[tokio::test]
async fn resolves_abstract_types_from_typename_entries() {
    let response = run(
        &star_wars(),
        r#"
        {
            r2: hero { __typename name ... on Droid { primaryFunction } }
            luke: hero(episode: EMPIRE) { name ... on Human { homePlanet } appearsIn }
        }
        "#,
    )
    .await;
    assert_eq!(
        response,
        json!({
            "data": {
                "r2": {
                    "__typename": "Droid",
                    "name": "R2-D2",
                    "primaryFunction": "Astromech",
                },
                "luke": {
                    "name": "Luke Skywalker",
                    "homePlanet": "Tatooine",
                    "appearsIn": ["NEWHOPE", "EMPIRE", "JEDI"],
                },
            },
        }),
    );
}

#[tokio::test]
async fn root_typename_names_the_root_type() {
    let response = run(&star_wars(), "{ __typename }").await;
    assert_eq!(response, json!({ "data": { "__typename": "Query" } }));
}

#[tokio::test]
async fn missing_value_for_nullable_field_is_null() {
    let response = run(&star_wars(), r#"{ human(id: "9999") { name } }"#).await;
    assert_eq!(response, json!({ "data": { "human": null } }));
}

#[tokio::test]
async fn non_null_field_error_nulls_nearest_nullable_ancestor() {
    let schema = star_wars_builder()
        .resolver("Droid", "name", |_: ResolverContext| async move {
            Err::<FieldValue, _>(FieldError::new("name unavailable"))
        })
        .build()
        .unwrap();
    let response = run(&schema, "{ hero { name } }").await;
    assert_eq!(
        response,
        json!({
            "data": { "hero": null },
            "errors": [{
                "message": "name unavailable",
                "locations": [{ "line": 1, "column": 10 }],
                "path": ["hero", "name"],
            }],
        }),
    );
}

#[tokio::test]
async fn resolver_error_extensions_reach_the_response() {
    let schema = star_wars_builder()
        .resolver("Human", "homePlanet", |_: ResolverContext| async move {
            Err::<FieldValue, _>(FieldError::new("classified").with_extension("code", "FORBIDDEN"))
        })
        .build()
        .unwrap();
    let response = run(&schema, r#"{ human(id: "1000") { name homePlanet } }"#).await;
    assert_eq!(
        response,
        json!({
            "data": { "human": { "name": "Luke Skywalker", "homePlanet": null } },
            "errors": [{
                "message": "classified",
                "locations": [{ "line": 1, "column": 28 }],
                "path": ["human", "homePlanet"],
                "extensions": { "code": "FORBIDDEN" },
            }],
        }),
    );
}

#[tokio::test]
async fn null_for_non_null_root_field_nulls_data() {
    let schema = ExecutableSchema::builder(build_schema("type Query { must: String! other: Int }"))
        .resolver("Query", "must", |_: ResolverContext| async move { ok(FieldValue::Null) })
        .resolver("Query", "other", |_: ResolverContext| async move { ok(1) })
        .build()
        .unwrap();
    let response = run(&schema, "{ other must }").await;
    assert_eq!(
        response,
        json!({
            "data": null,
            "errors": [{
                "message": "Cannot return null for non-nullable field Query.must.",
                "locations": [{ "line": 1, "column": 9 }],
                "path": ["must"],
            }],
        }),
    );
}

#[tokio::test]
async fn null_list_item_in_non_null_position_nulls_the_list() {
    let schema = ExecutableSchema::builder(build_schema("type Query { numbers: [Int!] }"))
        .resolver("Query", "numbers", |_: ResolverContext| async move {
            ok(FieldValue::list([FieldValue::from(1), FieldValue::Null, FieldValue::from(3)]))
        })
        .build()
        .unwrap();
    let response = run(&schema, "{ numbers }").await;
    assert_eq!(
        response,
        json!({
            "data": { "numbers": null },
            "errors": [{
                "message": "Cannot return null for non-nullable field Query.numbers.",
                "locations": [{ "line": 1, "column": 3 }],
                "path": ["numbers", 1],
            }],
        }),
    );
}

#[tokio::test]
async fn one_error_per_cause_when_nulls_propagate_through_several_levels() {
    let sdl = "type Query { a: A } type A { b: B! } type B { c: String! }";
    let schema = ExecutableSchema::builder(build_schema(sdl))
        .resolver("Query", "a", |_: ResolverContext| async move {
            ok(Value::object([("b", Value::object([("c", Value::Null)]))]))
        })
        .build()
        .unwrap();
    let response = schema.execute(Request::new("{ a { b { c } } }")).await;
    assert_eq!(response.data, Some(Value::object([("a", Value::Null)])));
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Cannot return null for non-nullable field B.c.");
}

#[tokio::test]
async fn skip_wins_over_include() {
    let response = star_wars()
        .execute(
            Request::new(
                r#"
                query ($yes: Boolean!) {
                    skipped: hero @skip(if: true) @include(if: true) { name }
                    included: hero @include(if: $yes) { name }
                    hero { ... on Droid @skip(if: $yes) { primaryFunction } id }
                }
                "#,
            )
            .with_json_variables(json!({ "yes": true })),
        )
        .await;
    assert_eq!(
        response.to_json(),
        json!({ "data": { "included": { "name": "R2-D2" }, "hero": { "id": "2001" } } }),
    );
}

#[tokio::test]
async fn fragments_merge_into_one_entry_per_response_key() {
    let response = run(
        &star_wars(),
        r#"
        { hero { ...Named ... on Character { id name } name } }
        fragment Named on Character { name }
        "#,
    )
    .await;
    assert_eq!(response, json!({ "data": { "hero": { "name": "R2-D2", "id": "2001" } } }));
}

#[tokio::test]
async fn list_results_keep_item_order() {
    let sdl = "type Query { items: [Item] } type Item { value: Int }";
    let schema = ExecutableSchema::builder(build_schema(sdl))
        .resolver("Query", "items", |_: ResolverContext| async move {
            ok(FieldValue::list((0..4).map(FieldValue::opaque)))
        })
        .resolver("Item", "value", |ctx: ResolverContext| async move {
            let n = *ctx.parent.downcast_ref::<i32>().unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(u64::from(4 - n as u32) * 10)).await;
            ok(n)
        })
        .build()
        .unwrap();
    let response = run(&schema, "{ items { value } }").await;
    assert_eq!(
        response,
        json!({ "data": { "items": [{ "value": 0 }, { "value": 1 }, { "value": 2 }, { "value": 3 }] } }),
    );
}

#[tokio::test]
async fn unresolvable_abstract_value_is_an_internal_error() {
    let schema = ExecutableSchema::builder(build_schema(super::STAR_WARS_SDL))
        .resolver("Query", "hero", |_: ResolverContext| async move {
            ok(Value::object([("name", Value::from("nobody"))]))
        })
        .build()
        .unwrap();
    let response = run(&schema, "{ hero { name } }").await;
    assert_eq!(
        response,
        json!({
            "data": { "hero": null },
            "errors": [{
                "message": "Internal error while resolving \"Query.hero\".",
                "locations": [{ "line": 1, "column": 3 }],
                "path": ["hero"],
            }],
        }),
    );
}

#[tokio::test]
async fn enum_values_outside_the_enum_are_internal_errors() {
    let sdl = "enum Color { RED } type Query { color: Color }";
    let schema = ExecutableSchema::builder(build_schema(sdl))
        .resolver("Query", "color", |_: ResolverContext| async move { ok("PURPLE") })
        .build()
        .unwrap();
    let response = schema.execute(Request::new("{ color }")).await;
    assert_eq!(response.data, Some(Value::object([("color", Value::Null)])));
    assert_eq!(response.errors[0].message, "Internal error while resolving \"Query.color\".");
}

#[tokio::test]
async fn syntax_errors_reject_the_request() {
    let response = run(&star_wars(), "{ hero { name }").await;
    assert!(response.get("data").is_none());
    let message = response["errors"][0]["message"].as_str().unwrap();
    assert!(message.starts_with("Syntax Error: "), "{message}");
}

#[tokio::test]
async fn validation_errors_reject_the_request() {
    let response = run(&star_wars(), "{ hero { homePlanet } }").await;
    assert_eq!(
        response,
        json!({
            "errors": [{
                "message": "Cannot query field \"homePlanet\" on type \"Character\".",
                "locations": [{ "line": 1, "column": 10 }],
            }],
        }),
    );
}

#[tokio::test]
async fn operation_selection() {
    let schema = star_wars();
    let query = "query A { hero { id } } query B { hero { name } }";

    let response = schema.execute(Request::new(query)).await;
    assert_eq!(
        response.errors[0].message,
        "Must provide operation name if query contains multiple operations.",
    );

    let response = schema.execute(Request::new(query).with_operation_name("C")).await;
    assert_eq!(response.errors[0].message, "Unknown operation named \"C\".");

    let response = schema.execute(Request::new(query).with_operation_name("B")).await;
    assert_eq!(response.to_json(), json!({ "data": { "hero": { "name": "R2-D2" } } }));
}

#[tokio::test]
async fn operation_kind_without_root_type_is_rejected() {
    let response = run(&star_wars(), "mutation { hero { id } }").await;
    assert!(response.get("data").is_none());
    assert!(!response["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn variable_coercion_errors_reject_the_request() {
    let response = star_wars()
        .execute(Request::new("query ($id: ID!) { human(id: $id) { name } }"))
        .await;
    assert_eq!(response.data, None);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "Variable \"$id\" of required type \"ID!\" was not provided.",
    );
}

#[tokio::test]
async fn variables_reach_resolver_arguments() {
    let response = star_wars()
        .execute(
            Request::new("query ($id: ID!) { human(id: $id) { name } }")
                .with_json_variables(json!({ "id": 1000 })),
        )
        .await;
    assert_eq!(
        response.to_json(),
        json!({ "data": { "human": { "name": "Luke Skywalker" } } }),
    );
}

#[tokio::test]
async fn queries_longer_than_the_limit_are_rejected() {
    let schema = star_wars_builder()
        .options(ExecutorOptions {
            max_query_length: Some(10),
            ..ExecutorOptions::default()
        })
        .build()
        .unwrap();
    let response = schema.execute(Request::new("{ hero { name } }")).await;
    assert_eq!(response.data, None);
    assert_eq!(
        response.errors[0].message,
        "Query is 17 bytes long, which exceeds the limit of 10 bytes.",
    );
}

#[tokio::test]
async fn max_depth_is_enforced_during_validation() {
    let schema = star_wars_builder()
        .options(ExecutorOptions {
            max_depth: Some(2),
            ..ExecutorOptions::default()
        })
        .build()
        .unwrap();
    let response = schema.execute(Request::new("{ hero { friends { name } } }")).await;
    assert_eq!(response.data, None);
    assert_eq!(
        response.errors[0].message,
        "Field \"name\" has depth 3 that exceeds max depth 2.",
    );
}

#[tokio::test]
async fn context_data_reaches_resolvers() {
    struct Viewer(&'static str);

    let schema = ExecutableSchema::builder(build_schema("type Query { viewer: String }"))
        .resolver("Query", "viewer", |ctx: ResolverContext| async move {
            ok(ctx.request.data::<Viewer>().map_or(FieldValue::Null, |viewer| viewer.0.into()))
        })
        .build()
        .unwrap();
    let request = Request::new("{ viewer }")
        .with_context(crate::RequestContext::new().with_data(Viewer("leia")));
    let response = schema.execute(request).await;
    assert_eq!(response.to_json(), json!({ "data": { "viewer": "leia" } }));
}

const HERO_SDL: &str = "
    type Query { hero(id: ID!): Character }
    type Character { name: String! friends: [Character!] }
";

const HERO_QUERY: &str = r#"{ hero(id:"1"){ name friends { name } } }"#;

fn hero_schema(failing_name: Option<&'static str>) -> ExecutableSchema {
    let mut builder = ExecutableSchema::builder(build_schema(HERO_SDL))
        .resolver("Query", "hero", |_: ResolverContext| async move {
            ok(Value::from(json!({ "name": "Luke", "friends": [{ "name": "Leia" }] })))
        });
    if let Some(failing_name) = failing_name {
        builder = builder.resolver("Character", "name", move |ctx: ResolverContext| async move {
            let name = match &ctx.parent {
                FieldValue::Value(parent) => parent
                    .as_object()
                    .and_then(|entries| entries.get("name"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                _ => String::new(),
            };
            if name == failing_name {
                Err(FieldError::new("name is unavailable"))
            } else {
                ok(name)
            }
        });
    }
    builder.build().unwrap()
}

#[tokio::test]
async fn hero_with_friends_matches_the_selection_shape() {
    let response = run(&hero_schema(None), HERO_QUERY).await;
    assert_eq!(
        response,
        json!({ "data": { "hero": { "name": "Luke", "friends": [{ "name": "Leia" }] } } }),
    );
}

#[tokio::test]
async fn failing_non_null_name_nulls_only_the_hero() {
    let response = run(&hero_schema(Some("Luke")), HERO_QUERY).await;
    assert_eq!(
        response,
        json!({
            "data": { "hero": null },
            "errors": [{
                "message": "name is unavailable",
                "locations": [{ "line": 1, "column": 17 }],
                "path": ["hero", "name"],
            }],
        }),
    );
}
