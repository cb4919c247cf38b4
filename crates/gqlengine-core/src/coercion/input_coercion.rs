use crate::coercion::CoercionError;
use crate::coercion::Variables;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::PathSegment;
use crate::Value;
use gqlengine_parser::ast;
use gqlengine_parser::ast::TypeAnnotation;
use indexmap::IndexMap;

/// Coerces externally supplied input (e.g. a JSON variable value) to
/// `type_annotation`.
///
/// A non-list value supplied where a list is expected is wrapped in a
/// one-element list, so coercing `x` and `[x]` against a list type give the
/// same result.
///
/// https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values
pub fn coerce_input_value(
    schema: &Schema,
    value: &Value,
    type_annotation: &TypeAnnotation,
) -> Result<Value, Vec<CoercionError>> {
    let mut errors = vec![];
    let coerced = InputCoercer { schema, errors: &mut errors }
        .coerce_value(value, type_annotation, &mut vec![]);
    if errors.is_empty() { Ok(coerced) } else { Err(errors) }
}

/// Produces the value of a literal written in a document.
///
/// With `variables` of `None` (static validation, before any variables are
/// known) variable references are accepted as-is and yield `Null`. With
/// `Some(variables)`, references are replaced by the already-coerced
/// variable values, and input object fields given an unset variable are
/// treated as absent.
///
/// https://spec.graphql.org/October2021/#sec-Input-Values
pub fn value_from_ast(
    schema: &Schema,
    literal: &ast::Value,
    type_annotation: &TypeAnnotation,
    variables: Option<&Variables>,
) -> Result<Value, Vec<CoercionError>> {
    let mut errors = vec![];
    let coerced = InputCoercer { schema, errors: &mut errors }
        .coerce_literal(literal, type_annotation, variables, &mut vec![]);
    if errors.is_empty() { Ok(coerced) } else { Err(errors) }
}

struct InputCoercer<'a> {
    errors: &'a mut Vec<CoercionError>,
    schema: &'a Schema,
}

impl InputCoercer<'_> {
    fn coerce_value(
        &mut self,
        value: &Value,
        type_annotation: &TypeAnnotation,
        path: &mut Vec<PathSegment>,
    ) -> Value {
        if value.is_null() {
            if !type_annotation.nullable() {
                self.errors.push(CoercionError::at_path(
                    format!("Expected non-nullable type \"{type_annotation}\" not to be null."),
                    vec![],
                    path,
                ));
            }
            return Value::Null;
        }

        let named = match type_annotation {
            TypeAnnotation::List(list) => {
                return match value {
                    Value::List(items) => Value::List(
                        items.iter()
                            .enumerate()
                            .map(|(idx, item)| {
                                path.push(PathSegment::Index(idx));
                                let coerced = self.coerce_value(item, &list.inner, path);
                                path.pop();
                                coerced
                            })
                            .collect(),
                    ),
                    _ => Value::List(vec![self.coerce_value(value, &list.inner, path)]),
                };
            },
            TypeAnnotation::Named(named) => named,
        };

        let Some(graphql_type) = self.schema.get_type(&named.name) else {
            self.errors.push(CoercionError::at_path(
                format!("Unknown type \"{}\".", named.name),
                vec![],
                path,
            ));
            return Value::Null;
        };

        match graphql_type {
            GraphQLType::Scalar(scalar) => match scalar.parser().parse_value(value) {
                Ok(coerced) => coerced,
                Err(message) => {
                    self.errors.push(CoercionError::at_path(message, vec![], path));
                    Value::Null
                },
            },

            GraphQLType::Enum(enum_type) => match value {
                Value::String(name) | Value::Enum(name) if enum_type.value(name).is_some() => {
                    Value::Enum(name.clone())
                },
                Value::String(name) | Value::Enum(name) => {
                    self.errors.push(CoercionError::at_path(
                        format!("Value \"{name}\" does not exist in \"{}\" enum.", enum_type.name()),
                        vec![],
                        path,
                    ));
                    Value::Null
                },
                _ => {
                    self.errors.push(CoercionError::at_path(
                        format!("Enum \"{}\" cannot represent non-string value: {value}.", enum_type.name()),
                        vec![],
                        path,
                    ));
                    Value::Null
                },
            },

            GraphQLType::InputObject(input_type) => {
                let Value::Object(fields) = value else {
                    self.errors.push(CoercionError::at_path(
                        format!("Expected type \"{}\" to be an object.", input_type.name()),
                        vec![],
                        path,
                    ));
                    return Value::Null;
                };
                let mut coerced = IndexMap::new();
                for (field_name, field_def) in input_type.fields() {
                    let field_type = field_def.type_annotation();
                    path.push(PathSegment::Key(field_name.clone()));
                    match fields.get(field_name) {
                        Some(field_value) => {
                            coerced.insert(
                                field_name.clone(),
                                self.coerce_value(field_value, field_type, path),
                            );
                        },
                        None => match field_def.default_value() {
                            Some(default) => {
                                coerced.insert(
                                    field_name.clone(),
                                    self.coerce_literal(default, field_type, None, path),
                                );
                            },
                            None if !field_type.nullable() => {
                                self.errors.push(CoercionError::at_path(
                                    format!(
                                        "Field \"{field_name}\" of required type \
                                        \"{field_type}\" was not provided.",
                                    ),
                                    vec![],
                                    path,
                                ));
                            },
                            None => (),
                        },
                    }
                    path.pop();
                }
                for field_name in fields.keys() {
                    if input_type.field(field_name).is_none() {
                        self.errors.push(CoercionError::at_path(
                            format!(
                                "Field \"{field_name}\" is not defined by type \"{}\".",
                                input_type.name(),
                            ),
                            vec![],
                            path,
                        ));
                    }
                }
                Value::Object(coerced)
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                self.errors.push(CoercionError::at_path(
                    format!("Type \"{}\" is not an input type.", named.name),
                    vec![],
                    path,
                ));
                Value::Null
            },
        }
    }

    fn coerce_literal(
        &mut self,
        literal: &ast::Value,
        type_annotation: &TypeAnnotation,
        variables: Option<&Variables>,
        path: &mut Vec<PathSegment>,
    ) -> Value {
        let location = vec![literal.span().location()];

        if let ast::Value::Variable(var) = literal {
            let Some(variables) = variables else {
                return Value::Null;
            };
            return match variables.get(&var.name) {
                Some(value) if value.is_null() && !type_annotation.nullable() => {
                    self.errors.push(CoercionError::at_path(
                        format!(
                            "Variable \"${}\" of non-null type \"{type_annotation}\" \
                            must not be null.",
                            var.name,
                        ),
                        location,
                        path,
                    ));
                    Value::Null
                },
                Some(value) => value.clone(),
                None if !type_annotation.nullable() => {
                    self.errors.push(CoercionError::at_path(
                        format!(
                            "Variable \"${}\" of required type \"{type_annotation}\" \
                            was not provided.",
                            var.name,
                        ),
                        location,
                        path,
                    ));
                    Value::Null
                },
                None => Value::Null,
            };
        }

        if literal.is_null() {
            if !type_annotation.nullable() {
                self.errors.push(CoercionError::at_path(
                    format!("Expected value of type \"{type_annotation}\", found null."),
                    location,
                    path,
                ));
            }
            return Value::Null;
        }

        let named = match type_annotation {
            TypeAnnotation::List(list) => {
                return match literal {
                    ast::Value::List(items) => Value::List(
                        items.values
                            .iter()
                            .enumerate()
                            .map(|(idx, item)| {
                                path.push(PathSegment::Index(idx));
                                let coerced =
                                    self.coerce_literal(item, &list.inner, variables, path);
                                path.pop();
                                coerced
                            })
                            .collect(),
                    ),
                    _ => Value::List(vec![
                        self.coerce_literal(literal, &list.inner, variables, path),
                    ]),
                };
            },
            TypeAnnotation::Named(named) => named,
        };

        let Some(graphql_type) = self.schema.get_type(&named.name) else {
            self.errors.push(CoercionError::at_path(
                format!("Unknown type \"{}\".", named.name),
                location,
                path,
            ));
            return Value::Null;
        };

        match graphql_type {
            GraphQLType::Scalar(scalar) => match scalar.parser().parse_literal(literal) {
                Ok(coerced) => coerced,
                Err(message) => {
                    self.errors.push(CoercionError::at_path(
                        format!(
                            "Expected value of type \"{type_annotation}\", found {}; {message}",
                            literal.to_graphql_string(),
                        ),
                        location,
                        path,
                    ));
                    Value::Null
                },
            },

            GraphQLType::Enum(enum_type) => match literal {
                ast::Value::Enum(e) if enum_type.value(&e.value).is_some() => {
                    Value::Enum(e.value.clone())
                },
                ast::Value::Enum(e) => {
                    self.errors.push(CoercionError::at_path(
                        format!(
                            "Value \"{}\" does not exist in \"{}\" enum.",
                            e.value,
                            enum_type.name(),
                        ),
                        location,
                        path,
                    ));
                    Value::Null
                },
                _ => {
                    self.errors.push(CoercionError::at_path(
                        format!(
                            "Enum \"{}\" cannot represent non-enum value: {}.",
                            enum_type.name(),
                            literal.to_graphql_string(),
                        ),
                        location,
                        path,
                    ));
                    Value::Null
                },
            },

            GraphQLType::InputObject(input_type) => {
                let ast::Value::Object(object) = literal else {
                    self.errors.push(CoercionError::at_path(
                        format!(
                            "Expected value of type \"{type_annotation}\", found {}.",
                            literal.to_graphql_string(),
                        ),
                        location,
                        path,
                    ));
                    return Value::Null;
                };
                let mut coerced = IndexMap::new();
                for (field_name, field_def) in input_type.fields() {
                    let field_type = field_def.type_annotation();
                    let provided = object.get(field_name).filter(|field_literal| {
                        !is_unset_variable(field_literal, variables)
                    });
                    path.push(PathSegment::Key(field_name.clone()));
                    match provided {
                        Some(field_literal) => {
                            coerced.insert(
                                field_name.clone(),
                                self.coerce_literal(field_literal, field_type, variables, path),
                            );
                        },
                        None => match field_def.default_value() {
                            Some(default) => {
                                coerced.insert(
                                    field_name.clone(),
                                    self.coerce_literal(default, field_type, None, path),
                                );
                            },
                            None if !field_type.nullable() => {
                                self.errors.push(CoercionError::at_path(
                                    format!(
                                        "Field \"{}.{field_name}\" of required type \
                                        \"{field_type}\" was not provided.",
                                        input_type.name(),
                                    ),
                                    location.clone(),
                                    path,
                                ));
                            },
                            None => (),
                        },
                    }
                    path.pop();
                }
                for field in &object.fields {
                    if input_type.field(&field.name).is_none() {
                        self.errors.push(CoercionError::at_path(
                            format!(
                                "Field \"{}\" is not defined by type \"{}\".",
                                field.name,
                                input_type.name(),
                            ),
                            vec![field.span.location()],
                            path,
                        ));
                    }
                }
                Value::Object(coerced)
            },

            GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                self.errors.push(CoercionError::at_path(
                    format!("Type \"{}\" is not an input type.", named.name),
                    location,
                    path,
                ));
                Value::Null
            },
        }
    }
}

fn is_unset_variable(literal: &ast::Value, variables: Option<&Variables>) -> bool {
    match (literal, variables) {
        (ast::Value::Variable(var), Some(variables)) => !variables.contains_key(&var.name),
        _ => false,
    }
}
