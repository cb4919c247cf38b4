use super::build_schema;
use super::run;
use super::star_wars;
use super::star_wars_builder;
use crate::ExecutableSchema;
use crate::ExecutorOptions;
use crate::Request;
use serde_json::json;

#[tokio::test]
async fn type_by_name_with_enum_values() {
    let response = run(
        &star_wars(),
        r#"{ __type(name: "Episode") { kind name enumValues { name isDeprecated } } }"#,
    )
    .await;
    assert_eq!(
        response,
        json!({
            "data": {
                "__type": {
                    "kind": "ENUM",
                    "name": "Episode",
                    "enumValues": [
                        { "name": "NEWHOPE", "isDeprecated": false },
                        { "name": "EMPIRE", "isDeprecated": false },
                        { "name": "JEDI", "isDeprecated": false },
                    ],
                },
            },
        }),
    );
}

#[tokio::test]
async fn unknown_type_name_is_null() {
    let response = run(&star_wars(), r#"{ __type(name: "Wookiee") { name } }"#).await;
    assert_eq!(response, json!({ "data": { "__type": null } }));
}

#[tokio::test]
async fn wrapping_types_unfold_through_of_type() {
    let response = run(
        &star_wars(),
        r#"
        {
            __type(name: "Droid") {
                fields { name type { kind name ofType { kind name } } }
                interfaces { name }
            }
        }
        "#,
    )
    .await;
    let fields = &response["data"]["__type"]["fields"];
    assert_eq!(
        fields[0],
        json!({
            "name": "id",
            "type": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "ID" } },
        }),
    );
    assert_eq!(
        fields[2],
        json!({
            "name": "friends",
            "type": { "kind": "LIST", "name": null, "ofType": { "kind": "INTERFACE", "name": "Character" } },
        }),
    );
    assert_eq!(response["data"]["__type"]["interfaces"], json!([{ "name": "Character" }]));
}

#[tokio::test]
async fn possible_types_of_an_interface() {
    let response = run(
        &star_wars(),
        r#"{ __type(name: "Character") { possibleTypes { name } fields { name } } }"#,
    )
    .await;
    assert_eq!(
        response["data"]["__type"]["possibleTypes"],
        json!([{ "name": "Human" }, { "name": "Droid" }]),
    );
}

#[tokio::test]
async fn schema_root_types_and_directives() {
    let response = run(
        &star_wars(),
        "{ __schema { queryType { name } mutationType { name } directives { name isRepeatable } } }",
    )
    .await;
    let schema = &response["data"]["__schema"];
    assert_eq!(schema["queryType"], json!({ "name": "Query" }));
    assert_eq!(schema["mutationType"], json!(null));
    let directives = schema["directives"].as_array().unwrap();
    assert!(directives.contains(&json!({ "name": "skip", "isRepeatable": false })));
    assert!(directives.contains(&json!({ "name": "deprecated", "isRepeatable": false })));
}

#[tokio::test]
async fn schema_types_include_introspection_types() {
    let response = run(&star_wars(), "{ __schema { types { name } } }").await;
    let names: Vec<&str> = response["data"]["__schema"]["types"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    for expected in ["Query", "Droid", "Episode", "String", "__Schema", "__TypeKind"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
}

#[tokio::test]
async fn deprecated_members_are_hidden_unless_requested() {
    let sdl = r#"
        type Query {
            current: String
            legacy: String @deprecated(reason: "Use `current`.")
            search(limit: Int = 10, exact: Boolean @deprecated): String
        }
    "#;
    let schema = ExecutableSchema::builder(build_schema(sdl)).build().unwrap();
    let response = run(
        &schema,
        r#"
        {
            __type(name: "Query") {
                visible: fields { name }
                all: fields(includeDeprecated: true) { name deprecationReason }
            }
        }
        "#,
    )
    .await;
    let query_type = &response["data"]["__type"];
    assert_eq!(
        query_type["visible"],
        json!([{ "name": "current" }, { "name": "search" }]),
    );
    assert_eq!(
        query_type["all"][1],
        json!({ "name": "legacy", "deprecationReason": "Use `current`." }),
    );

    let response = run(
        &schema,
        r#"
        {
            __type(name: "Query") {
                fields {
                    args { name defaultValue }
                    allArgs: args(includeDeprecated: true) { name }
                }
            }
        }
        "#,
    )
    .await;
    let search = &response["data"]["__type"]["fields"][1];
    assert_eq!(search["args"], json!([{ "name": "limit", "defaultValue": "10" }]));
    assert_eq!(search["allArgs"], json!([{ "name": "limit" }, { "name": "exact" }]));
}

#[tokio::test]
async fn specified_by_url_of_custom_scalars() {
    let sdl = r#"
        scalar Url @specifiedBy(url: "https://url.spec.whatwg.org/")
        type Query { home: Url }
    "#;
    let schema = ExecutableSchema::builder(build_schema(sdl)).build().unwrap();
    let response = run(&schema, r#"{ __type(name: "Url") { kind specifiedByURL } }"#).await;
    assert_eq!(
        response,
        json!({
            "data": {
                "__type": { "kind": "SCALAR", "specifiedByURL": "https://url.spec.whatwg.org/" },
            },
        }),
    );
}

#[tokio::test]
async fn disabled_introspection_rejects_schema_queries() {
    let schema = star_wars_builder()
        .options(ExecutorOptions {
            disable_introspection: true,
            ..ExecutorOptions::default()
        })
        .build()
        .unwrap();

    let response = schema
        .execute(Request::new("query Q { ...Meta } fragment Meta on Query { __schema { description } }"))
        .await;
    assert_eq!(response.data, None);
    assert_eq!(
        response.errors[0].message,
        "GraphQL introspection has been disabled, but the requested query contained the field \
        \"__schema\".",
    );

    let response = schema.execute(Request::new("{ hero { __typename } }")).await;
    assert_eq!(
        response.to_json(),
        json!({ "data": { "hero": { "__typename": "Droid" } } }),
    );
}

#[tokio::test]
async fn full_introspection_query_runs_cleanly() {
    let response = star_wars().execute(Request::new(crate::INTROSPECTION_QUERY)).await;
    assert!(response.is_ok(), "{:?}", response.errors);
    let json = response.to_json();
    let character = json["data"]["__schema"]["types"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "Character")
        .unwrap();
    assert_eq!(character["kind"], "INTERFACE");
    assert_eq!(character["possibleTypes"][1]["name"], "Droid");
    assert_eq!(character["fields"][0]["type"]["ofType"]["name"], "ID");
}
