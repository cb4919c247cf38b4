//! Resolvers for the `__schema` and `__type` root fields and for every field
//! of the introspection types.
//!
//! Introspection data is walked lazily: each resolver returns an opaque
//! [`Introspected`] handle naming a schema element, and the resolvers of the
//! next level look the element up again in the [`Schema`].

use crate::executable_schema::ResolverTable;
use crate::FieldError;
use crate::FieldResolver;
use crate::FieldValue;
use crate::ResolverContext;
use gqlengine_core::gqlengine_parser::ast::TypeAnnotation;
use gqlengine_core::types::GraphQLType;
use gqlengine_core::types::InputValue;
use gqlengine_core::Schema;
use gqlengine_core::Value;
use indexmap::IndexMap;
use std::sync::Arc;

const INTROSPECTION_TYPES: [&str; 6] = [
    "__Directive",
    "__EnumValue",
    "__Field",
    "__InputValue",
    "__Schema",
    "__Type",
];

/// The full introspection query most GraphQL tooling sends to learn a schema.
pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    description
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types { ...FullType }
    directives {
      name
      description
      isRepeatable
      locations
      args(includeDeprecated: true) { ...InputValue }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  specifiedByURL
  fields(includeDeprecated: true) {
    name
    description
    args(includeDeprecated: true) { ...InputValue }
    type { ...TypeRef }
    isDeprecated
    deprecationReason
  }
  inputFields(includeDeprecated: true) { ...InputValue }
  interfaces { ...TypeRef }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes { ...TypeRef }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
  isDeprecated
  deprecationReason
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// A schema element being introspected.
#[derive(Clone, Debug)]
enum Introspected {
    Schema,
    /// A type reference; wrapping types (`LIST`, `NON_NULL`) are the
    /// non-null flags and list levels of the annotation.
    Type(TypeAnnotation),
    Field {
        type_name: String,
        field_name: String,
    },
    InputValue {
        owner: InputValueOwner,
        name: String,
    },
    EnumValue {
        enum_name: String,
        value_name: String,
    },
    Directive(String),
}

#[derive(Clone, Debug)]
enum InputValueOwner {
    Directive(String),
    Field {
        type_name: String,
        field_name: String,
    },
    InputObject(String),
}

impl InputValueOwner {
    fn input_values<'s>(&self, schema: &'s Schema) -> Option<&'s IndexMap<String, InputValue>> {
        match self {
            InputValueOwner::Directive(name) => Some(schema.directive(name)?.arguments()),
            InputValueOwner::Field { type_name, field_name } => {
                Some(schema.field_def(type_name, field_name)?.arguments())
            },
            InputValueOwner::InputObject(name) => {
                Some(schema.get_type(name)?.as_input_object()?.fields())
            },
        }
    }
}

struct IntrospectionResolver {
    schema: Arc<Schema>,
}

#[async_trait::async_trait]
impl FieldResolver for IntrospectionResolver {
    async fn resolve(&self, ctx: ResolverContext) -> Result<FieldValue, FieldError> {
        resolve_meta_field(&self.schema, &ctx)
    }
}

/// Binds the introspection resolvers into `table`.
pub(crate) fn bind_resolvers(schema: &Arc<Schema>, table: &mut ResolverTable<dyn FieldResolver>) {
    let resolver: Arc<dyn FieldResolver> = Arc::new(IntrospectionResolver {
        schema: Arc::clone(schema),
    });
    for type_name in INTROSPECTION_TYPES {
        let Some(object_type) = schema.get_type(type_name).and_then(GraphQLType::as_object) else {
            continue;
        };
        let fields = table.entry(type_name.to_string()).or_default();
        for field_name in object_type.fields().keys() {
            fields.insert(field_name.clone(), Arc::clone(&resolver));
        }
    }
    let root_fields = table.entry(schema.query_type_name().to_string()).or_default();
    root_fields.insert("__schema".to_string(), Arc::clone(&resolver));
    root_fields.insert("__type".to_string(), resolver);
}

fn handle(node: Introspected) -> FieldValue {
    FieldValue::opaque(node)
}

fn named_type(name: &str) -> FieldValue {
    handle(Introspected::Type(TypeAnnotation::named(name, true)))
}

fn optional_string(value: Option<&str>) -> FieldValue {
    value.map_or(FieldValue::Null, FieldValue::from)
}

fn include_deprecated(ctx: &ResolverContext) -> bool {
    ctx.argument("includeDeprecated")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn resolve_meta_field(schema: &Schema, ctx: &ResolverContext) -> Result<FieldValue, FieldError> {
    if !ctx.parent_type_name.starts_with("__") {
        return match ctx.field_name.as_str() {
            "__schema" => Ok(handle(Introspected::Schema)),
            "__type" => {
                let name = ctx.argument("name").and_then(Value::as_str).unwrap_or_default();
                Ok(match schema.get_type(name) {
                    Some(_) => named_type(name),
                    None => FieldValue::Null,
                })
            },
            other => Err(FieldError::new(format!("\"{other}\" is not an introspection field."))),
        };
    }

    let Some(node) = ctx.parent.downcast_ref::<Introspected>() else {
        return Err(FieldError::new(format!(
            "Expected an introspection value as the parent of \"{}.{}\".",
            ctx.parent_type_name,
            ctx.field_name,
        )));
    };
    let field = ctx.field_name.as_str();
    let value = match node {
        Introspected::Schema => schema_field(schema, field),
        Introspected::Type(annotation) => type_field(schema, annotation, field, ctx),
        Introspected::Field { type_name, field_name } => {
            field_field(schema, type_name, field_name, field, ctx)
        },
        Introspected::InputValue { owner, name } => input_value_field(schema, owner, name, field),
        Introspected::EnumValue { enum_name, value_name } => {
            enum_value_field(schema, enum_name, value_name, field)
        },
        Introspected::Directive(name) => directive_field(schema, name, field, ctx),
    };
    value.ok_or_else(|| {
        FieldError::new(format!(
            "Cannot introspect \"{}.{}\" on this value.",
            ctx.parent_type_name,
            ctx.field_name,
        ))
    })
}

fn schema_field(schema: &Schema, field: &str) -> Option<FieldValue> {
    Some(match field {
        "description" => optional_string(schema.description()),
        "types" => FieldValue::List(schema.types().keys().map(|name| named_type(name)).collect()),
        "queryType" => named_type(schema.query_type_name()),
        "mutationType" => schema.mutation_type_name().map_or(FieldValue::Null, named_type),
        "subscriptionType" => schema.subscription_type_name().map_or(FieldValue::Null, named_type),
        "directives" => FieldValue::List(
            schema
                .directives()
                .keys()
                .map(|name| handle(Introspected::Directive(name.clone())))
                .collect(),
        ),
        _ => return None,
    })
}

fn type_field(
    schema: &Schema,
    annotation: &TypeAnnotation,
    field: &str,
    ctx: &ResolverContext,
) -> Option<FieldValue> {
    if !annotation.nullable() {
        return Some(match field {
            "kind" => FieldValue::Value(Value::Enum("NON_NULL".to_string())),
            "ofType" => handle(Introspected::Type(annotation.as_nullable())),
            _ => FieldValue::Null,
        });
    }
    if let Some(item) = annotation.list_item() {
        return Some(match field {
            "kind" => FieldValue::Value(Value::Enum("LIST".to_string())),
            "ofType" => handle(Introspected::Type(item.clone())),
            _ => FieldValue::Null,
        });
    }

    let type_name = annotation.innermost_name();
    let named = schema.get_type(type_name)?;
    let deprecated_too = include_deprecated(ctx);
    Some(match field {
        "kind" => FieldValue::Value(Value::Enum(named.kind().as_str().to_string())),
        "name" => FieldValue::from(type_name),
        "description" => optional_string(named.description()),
        "specifiedByURL" => optional_string(named.as_scalar().and_then(|s| s.specified_by_url())),
        "fields" => match named.as_object_or_interface() {
            Some(fields_type) => FieldValue::List(
                fields_type
                    .fields()
                    .values()
                    .filter(|f| !f.name().starts_with("__"))
                    .filter(|f| deprecated_too || !f.is_deprecated())
                    .map(|f| {
                        handle(Introspected::Field {
                            type_name: type_name.to_string(),
                            field_name: f.name().to_string(),
                        })
                    })
                    .collect(),
            ),
            None => FieldValue::Null,
        },
        "interfaces" => match named.as_object_or_interface() {
            Some(fields_type) => FieldValue::List(
                fields_type.interface_names().into_iter().map(named_type).collect(),
            ),
            None => FieldValue::Null,
        },
        "possibleTypes" => {
            if named.is_abstract() {
                FieldValue::List(
                    schema
                        .possible_types(type_name)
                        .iter()
                        .map(|name| named_type(name))
                        .collect(),
                )
            } else {
                FieldValue::Null
            }
        },
        "enumValues" => match named.as_enum() {
            Some(enum_type) => FieldValue::List(
                enum_type
                    .values()
                    .values()
                    .filter(|v| deprecated_too || !v.is_deprecated())
                    .map(|v| {
                        handle(Introspected::EnumValue {
                            enum_name: type_name.to_string(),
                            value_name: v.name().to_string(),
                        })
                    })
                    .collect(),
            ),
            None => FieldValue::Null,
        },
        "inputFields" => match named.as_input_object() {
            Some(input_type) => input_value_list(
                input_type.fields(),
                InputValueOwner::InputObject(type_name.to_string()),
                deprecated_too,
            ),
            None => FieldValue::Null,
        },
        "ofType" => FieldValue::Null,
        _ => return None,
    })
}

fn input_value_list(
    input_values: &IndexMap<String, InputValue>,
    owner: InputValueOwner,
    deprecated_too: bool,
) -> FieldValue {
    FieldValue::List(
        input_values
            .values()
            .filter(|v| deprecated_too || !v.is_deprecated())
            .map(|v| {
                handle(Introspected::InputValue {
                    owner: owner.clone(),
                    name: v.name().to_string(),
                })
            })
            .collect(),
    )
}

fn field_field(
    schema: &Schema,
    type_name: &str,
    field_name: &str,
    field: &str,
    ctx: &ResolverContext,
) -> Option<FieldValue> {
    let field_def = schema.field_def(type_name, field_name)?;
    Some(match field {
        "name" => FieldValue::from(field_def.name()),
        "description" => optional_string(field_def.description()),
        "args" => input_value_list(
            field_def.arguments(),
            InputValueOwner::Field {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            },
            include_deprecated(ctx),
        ),
        "type" => handle(Introspected::Type(field_def.type_annotation().clone())),
        "isDeprecated" => FieldValue::from(field_def.is_deprecated()),
        "deprecationReason" => optional_string(field_def.deprecation_reason()),
        _ => return None,
    })
}

fn input_value_field(
    schema: &Schema,
    owner: &InputValueOwner,
    name: &str,
    field: &str,
) -> Option<FieldValue> {
    let input_value = owner.input_values(schema)?.get(name)?;
    Some(match field {
        "name" => FieldValue::from(input_value.name()),
        "description" => optional_string(input_value.description()),
        "type" => handle(Introspected::Type(input_value.type_annotation().clone())),
        "defaultValue" => input_value
            .default_value()
            .map_or(FieldValue::Null, |literal| FieldValue::from(literal.to_string())),
        "isDeprecated" => FieldValue::from(input_value.is_deprecated()),
        "deprecationReason" => optional_string(input_value.deprecation_reason()),
        _ => return None,
    })
}

fn enum_value_field(
    schema: &Schema,
    enum_name: &str,
    value_name: &str,
    field: &str,
) -> Option<FieldValue> {
    let enum_value = schema.get_type(enum_name)?.as_enum()?.value(value_name)?;
    Some(match field {
        "name" => FieldValue::from(enum_value.name()),
        "description" => optional_string(enum_value.description()),
        "isDeprecated" => FieldValue::from(enum_value.is_deprecated()),
        "deprecationReason" => optional_string(enum_value.deprecation_reason()),
        _ => return None,
    })
}

fn directive_field(
    schema: &Schema,
    name: &str,
    field: &str,
    ctx: &ResolverContext,
) -> Option<FieldValue> {
    let directive = schema.directive(name)?;
    Some(match field {
        "name" => FieldValue::from(directive.name()),
        "description" => optional_string(directive.description()),
        "isRepeatable" => FieldValue::from(directive.is_repeatable()),
        "locations" => FieldValue::List(
            directive
                .locations()
                .iter()
                .map(|location| FieldValue::Value(Value::Enum(location.as_str().to_string())))
                .collect(),
        ),
        "args" => input_value_list(
            directive.arguments(),
            InputValueOwner::Directive(name.to_string()),
            include_deprecated(ctx),
        ),
        _ => return None,
    })
}
