use crate::execution::ExecutableSchema;
use crate::execution::FieldError;
use crate::execution::FieldValue;
use crate::execution::Request;
use crate::execution::ResolverContext;
use crate::SchemaBuilder;
use crate::Value;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

const TODO_SDL: &str = r#"
"A list of things to do."
schema { query: Query mutation: Mutation }

type Todo {
    id: ID!
    title: String!
    done: Boolean!
}

type Query {
    todos(done: Boolean): [Todo!]!
}

type Mutation {
    addTodo(title: String!): Todo!
}
"#;

fn todo(id: usize, title: &str) -> Value {
    Value::object([
        ("id", Value::from(id.to_string())),
        ("title", Value::from(title)),
        ("done", Value::from(false)),
    ])
}

fn todo_schema() -> ExecutableSchema {
    let todos = Arc::new(Mutex::new(vec![todo(1, "write tests")]));
    let schema = SchemaBuilder::new()
        .load_str(TODO_SDL)
        .unwrap()
        .build()
        .unwrap();

    let listed = Arc::clone(&todos);
    let added = Arc::clone(&todos);
    ExecutableSchema::builder(schema)
        .resolver("Query", "todos", move |ctx: ResolverContext| {
            let todos = listed.lock().unwrap().clone();
            async move {
                let wanted = ctx.argument("done").and_then(Value::as_bool);
                let matching = todos.into_iter().filter(|t| {
                    wanted.is_none_or(|done| t.as_object().and_then(|o| o.get("done")) == Some(&Value::from(done)))
                });
                Ok::<_, FieldError>(FieldValue::list(matching))
            }
        })
        .resolver("Mutation", "addTodo", move |ctx: ResolverContext| {
            let added = Arc::clone(&added);
            async move {
                let title = ctx.argument("title").and_then(Value::as_str).unwrap_or_default();
                let mut todos = added.lock().unwrap();
                let new_todo = todo(todos.len() + 1, title);
                todos.push(new_todo.clone());
                Ok::<_, FieldError>(FieldValue::from(new_todo))
            }
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn mutations_are_visible_to_later_queries() {
    let schema = todo_schema();

    let response = schema
        .execute(
            Request::new("mutation Add($title: String!) { addTodo(title: $title) { id title } }")
                .with_json_variables(json!({ "title": "ship it" })),
        )
        .await;
    assert_eq!(
        response.to_json(),
        json!({ "data": { "addTodo": { "id": "2", "title": "ship it" } } }),
    );

    let response = schema.execute(Request::new("{ todos(done: false) { title } }")).await;
    assert_eq!(
        response.to_json(),
        json!({ "data": { "todos": [{ "title": "write tests" }, { "title": "ship it" }] } }),
    );
}

#[tokio::test]
async fn schema_description_is_introspectable() {
    let response = todo_schema()
        .execute(Request::new("{ __schema { description mutationType { name } } }"))
        .await;
    assert_eq!(
        response.to_json(),
        json!({
            "data": {
                "__schema": { "description": "A list of things to do.", "mutationType": { "name": "Mutation" } },
            },
        }),
    );
}

#[tokio::test]
async fn responses_serialize_with_serde() {
    let response = todo_schema().execute(Request::new("{ todos { id } }")).await;
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "data": { "todos": [{ "id": "1" }] } }),
    );
}
