use crate::coercion::value_from_ast;
use crate::coercion::CoercionError;
use crate::coercion::Variables;
use crate::schema::Schema;
use crate::types::InputValue;
use crate::Value;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

/// Produces the argument values of a field or directive from its literal
/// arguments, the already-coerced operation variables and the declared
/// argument definitions.
///
/// Arguments that are neither provided nor defaulted are left out of the
/// result entirely (as opposed to being set to `null`), so resolvers can
/// tell "absent" from "explicitly null".
///
/// https://spec.graphql.org/October2021/#sec-Coercing-Field-Arguments
pub fn coerce_argument_values(
    schema: &Schema,
    arg_defs: &IndexMap<String, InputValue>,
    arguments: &[ast::Argument],
    variables: &Variables,
    location: Location,
) -> Result<IndexMap<String, Value>, Vec<CoercionError>> {
    let mut coerced = IndexMap::new();
    let mut errors = vec![];

    for (arg_name, arg_def) in arg_defs {
        let arg_type = arg_def.type_annotation();
        let provided = arguments.iter().find(|arg| &arg.name == arg_name);

        // A variable with no runtime value counts as an absent argument.
        let (literal, has_value) = match provided {
            Some(arg) => match &arg.value {
                ast::Value::Variable(var) => {
                    (Some(&arg.value), variables.contains_key(&var.name))
                },
                _ => (Some(&arg.value), true),
            },
            None => (None, false),
        };

        if !has_value {
            if let Some(default) = arg_def.default_value() {
                match value_from_ast(schema, default, arg_type, None) {
                    Ok(value) => {
                        coerced.insert(arg_name.clone(), value);
                    },
                    Err(default_errors) => errors.extend(default_errors),
                }
            } else if !arg_type.nullable() {
                let message = match literal {
                    Some(ast::Value::Variable(var)) => format!(
                        "Argument \"{arg_name}\" of required type \"{arg_type}\" was \
                        provided the variable \"${}\" which was not provided a \
                        runtime value.",
                        var.name,
                    ),
                    _ => format!(
                        "Argument \"{arg_name}\" of required type \"{arg_type}\" was \
                        not provided.",
                    ),
                };
                let error_location = literal
                    .map(|literal| literal.span().location())
                    .unwrap_or(location);
                errors.push(CoercionError::new(message, vec![error_location]));
            }
            continue;
        }

        let Some(literal) = literal else { continue };
        if let ast::Value::Variable(var) = literal {
            let value = variables.get(&var.name).cloned().unwrap_or_default();
            if value.is_null() && !arg_type.nullable() {
                errors.push(CoercionError::new(
                    format!(
                        "Argument \"{arg_name}\" of non-null type \"{arg_type}\" \
                        must not be null.",
                    ),
                    vec![literal.span().location()],
                ));
                continue;
            }
            coerced.insert(arg_name.clone(), value);
            continue;
        }

        match value_from_ast(schema, literal, arg_type, Some(variables)) {
            Ok(value) => {
                coerced.insert(arg_name.clone(), value);
            },
            Err(literal_errors) => errors.extend(literal_errors.into_iter().map(|err| {
                CoercionError {
                    message: format!("Argument \"{arg_name}\" has invalid value; {}", err.message),
                    ..err
                }
            })),
        }
    }

    if errors.is_empty() { Ok(coerced) } else { Err(errors) }
}
