use super::ok;
use super::star_wars_builder;
use crate::EventStream;
use crate::FieldError;
use crate::ResolverContext;
use crate::ResolverTableError;
use futures::stream;
use futures::StreamExt;

async fn noop(_: ResolverContext) -> Result<crate::FieldValue, FieldError> {
    ok(crate::FieldValue::Null)
}

fn bind_err(type_name: &str, field_name: &str) -> ResolverTableError {
    match star_wars_builder().resolver(type_name, field_name, noop).build() {
        Ok(_) => panic!("expected `{type_name}.{field_name}` to be rejected"),
        Err(err) => err,
    }
}

#[test]
fn rejects_undefined_types() {
    assert_eq!(
        bind_err("Wookiee", "name"),
        ResolverTableError::UndefinedType {
            type_name: "Wookiee".to_string(),
        },
    );
}

#[test]
fn rejects_undefined_fields() {
    assert_eq!(
        bind_err("Droid", "homePlanet"),
        ResolverTableError::UndefinedField {
            field_name: "homePlanet".to_string(),
            type_name: "Droid".to_string(),
        },
    );
}

#[test]
fn rejects_non_object_types() {
    assert_eq!(
        bind_err("Character", "name"),
        ResolverTableError::NonObjectType {
            type_name: "Character".to_string(),
        },
    );
    assert_eq!(
        bind_err("Episode", "NEWHOPE"),
        ResolverTableError::NonObjectType {
            type_name: "Episode".to_string(),
        },
    );
}

#[test]
fn rejects_introspection_fields() {
    assert_eq!(
        bind_err("__Type", "name"),
        ResolverTableError::ReservedIntrospectionField {
            field_name: "name".to_string(),
            type_name: "__Type".to_string(),
        },
    );
    assert_eq!(
        bind_err("Query", "__schema"),
        ResolverTableError::ReservedIntrospectionField {
            field_name: "__schema".to_string(),
            type_name: "Query".to_string(),
        },
    );
}

#[test]
fn rejects_duplicate_bindings() {
    let result = star_wars_builder().resolver("Query", "hero", noop).build();
    assert_eq!(
        result.err(),
        Some(ResolverTableError::DuplicateResolver {
            field_name: "hero".to_string(),
            type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn rejects_subscription_resolvers_outside_the_subscription_root() {
    let result = star_wars_builder()
        .subscription_resolver("Query", "hero", |_: ResolverContext| async move {
            let events: EventStream = stream::empty().boxed();
            Ok::<_, FieldError>(events)
        })
        .build();
    assert_eq!(
        result.err(),
        Some(ResolverTableError::SubscriptionResolverOutsideSubscriptionRoot {
            field_name: "hero".to_string(),
            type_name: "Query".to_string(),
        }),
    );
}

#[test]
fn error_messages_name_the_binding() {
    assert_eq!(
        bind_err("Droid", "homePlanet").to_string(),
        "Attempted to bind a resolver to `Droid.homePlanet`, which is not defined",
    );
}
