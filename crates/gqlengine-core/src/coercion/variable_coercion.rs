use crate::coercion::coerce_input_value;
use crate::coercion::value_from_ast;
use crate::coercion::CoercionError;
use crate::coercion::Variables;
use crate::schema::Schema;
use crate::types::GraphQLType;
use gqlengine_parser::ast;

/// Coerces the raw variable input of a request against the variable
/// definitions of `operation`.
///
/// Variables that are neither provided nor defaulted are left out of the
/// result, which lets argument coercion fall back to argument defaults.
///
/// https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values
pub fn coerce_variable_values(
    schema: &Schema,
    operation: &ast::OperationDefinition,
    inputs: &Variables,
) -> Result<Variables, Vec<CoercionError>> {
    let mut coerced = Variables::new();
    let mut errors = vec![];

    for var_def in &operation.variable_definitions {
        let var_name = &var_def.name;
        let var_type = &var_def.var_type;
        let location = vec![var_def.span.location()];

        let is_input_type = schema
            .get_type(var_type.innermost_name())
            .is_some_and(GraphQLType::is_input_type);
        if !is_input_type {
            errors.push(CoercionError::new(
                format!(
                    "Variable \"${var_name}\" expected value of type \"{var_type}\" \
                    which cannot be used as an input type.",
                ),
                location,
            ));
            continue;
        }

        let Some(input) = inputs.get(var_name) else {
            if let Some(default) = &var_def.default_value {
                match value_from_ast(schema, default, var_type, None) {
                    Ok(value) => {
                        coerced.insert(var_name.clone(), value);
                    },
                    Err(default_errors) => errors.extend(default_errors),
                }
            } else if !var_type.nullable() {
                errors.push(CoercionError::new(
                    format!(
                        "Variable \"${var_name}\" of required type \"{var_type}\" was \
                        not provided.",
                    ),
                    location,
                ));
            }
            continue;
        };

        if input.is_null() && !var_type.nullable() {
            errors.push(CoercionError::new(
                format!(
                    "Variable \"${var_name}\" of non-null type \"{var_type}\" must not \
                    be null.",
                ),
                location,
            ));
            continue;
        }

        match coerce_input_value(schema, input, var_type) {
            Ok(value) => {
                coerced.insert(var_name.clone(), value);
            },
            Err(input_errors) => {
                errors.extend(input_errors.into_iter().map(|err| {
                    let at = if err.path.is_empty() {
                        String::new()
                    } else {
                        format!(" at \"{var_name}{}\"", render_path_suffix(&err))
                    };
                    CoercionError {
                        message: format!(
                            "Variable \"${var_name}\" got invalid value {input}{at}; {}",
                            err.message,
                        ),
                        locations: location.clone(),
                        path: err.path,
                    }
                }));
            },
        }
    }

    if errors.is_empty() {
        tracing::trace!(count = coerced.len(), "coerced variable values");
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// `input.ids[2]` style suffix, joined onto the variable name.
fn render_path_suffix(err: &CoercionError) -> String {
    let rendered = err.path_string();
    if rendered.starts_with('[') {
        rendered
    } else {
        format!(".{rendered}")
    }
}
