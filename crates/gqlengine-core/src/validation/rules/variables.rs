use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::TypeAnnotation;
use std::collections::HashMap;
use std::collections::HashSet;

pub(super) struct VariablesAreInputTypes;

impl<'a> Visitor<'a> for VariablesAreInputTypes {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::VariableDefinition,
    ) {
        let named_type = ctx.schema.get_type(var_def.var_type.innermost_name());
        if named_type.is_some_and(|ty| !ty.is_input_type()) {
            ctx.report(
                format!(
                    "Variable \"${}\" cannot be non-input type \"{}\".",
                    var_def.name,
                    var_def.var_type,
                ),
                vec![var_def.var_type.span().location()],
            );
        }
    }
}

pub(super) struct UniqueVariableNames;

impl<'a> Visitor<'a> for UniqueVariableNames {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        let mut seen = HashMap::new();
        for var_def in &operation.variable_definitions {
            let location = var_def.span.location();
            if let Some(first) = seen.get(var_def.name.as_str()) {
                ctx.report(
                    format!("There can be only one variable named \"${}\".", var_def.name),
                    vec![*first, location],
                );
            } else {
                seen.insert(var_def.name.as_str(), location);
            }
        }
    }
}

fn operation_subject(operation: &ast::OperationDefinition) -> String {
    match &operation.name {
        Some(name) => format!(" by operation \"{name}\""),
        None => String::new(),
    }
}

/// Every variable referenced by an operation, or by a fragment it spreads,
/// is defined by that operation.
pub(super) struct NoUndefinedVariables;

impl<'a> Visitor<'a> for NoUndefinedVariables {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        let defined: HashSet<&str> = operation
            .variable_definitions
            .iter()
            .map(|var_def| var_def.name.as_str())
            .collect();
        for usage in ctx.operation_variable_usages(operation) {
            if !defined.contains(usage.variable.name.as_str()) {
                ctx.report(
                    format!(
                        "Variable \"${}\" is not defined{}.",
                        usage.variable.name,
                        operation_subject(operation),
                    ),
                    vec![usage.variable.span.location(), operation.span.location()],
                );
            }
        }
    }
}

pub(super) struct NoUnusedVariables;

impl<'a> Visitor<'a> for NoUnusedVariables {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        let used: HashSet<&str> = ctx
            .operation_variable_usages(operation)
            .into_iter()
            .map(|usage| usage.variable.name.as_str())
            .collect();
        for var_def in &operation.variable_definitions {
            if !used.contains(var_def.name.as_str()) {
                let subject = match &operation.name {
                    Some(name) => format!(" in operation \"{name}\""),
                    None => String::new(),
                };
                ctx.report(
                    format!("Variable \"${}\" is never used{subject}.", var_def.name),
                    vec![var_def.span.location()],
                );
            }
        }
    }
}

/// The declared type of each variable fits every position it is passed to.
/// A nullable variable may fill a non-null position only if the variable or
/// the position has a default to fall back on.
pub(super) struct VariablesInAllowedPosition;

impl<'a> Visitor<'a> for VariablesInAllowedPosition {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        let var_defs: HashMap<&str, &ast::VariableDefinition> = operation
            .variable_definitions
            .iter()
            .map(|var_def| (var_def.name.as_str(), var_def))
            .collect();
        for usage in ctx.operation_variable_usages(operation) {
            let (Some(var_def), Some(location_type)) = (
                var_defs.get(usage.variable.name.as_str()),
                usage.expected_type,
            ) else {
                continue;
            };
            let var_type_known = ctx
                .schema
                .get_type(var_def.var_type.innermost_name())
                .is_some_and(GraphQLType::is_input_type);
            if !var_type_known {
                continue;
            }
            if !is_variable_usage_allowed(ctx.schema, var_def, location_type, usage.location_has_default) {
                ctx.report(
                    format!(
                        "Variable \"${}\" of type \"{}\" used in position expecting type \
                        \"{location_type}\".",
                        var_def.name,
                        var_def.var_type,
                    ),
                    vec![var_def.span.location(), usage.variable.span.location()],
                );
            }
        }
    }
}

fn is_variable_usage_allowed(
    schema: &Schema,
    var_def: &ast::VariableDefinition,
    location_type: &TypeAnnotation,
    location_has_default: bool,
) -> bool {
    let var_type = &var_def.var_type;
    if !location_type.nullable() && var_type.nullable() {
        let has_non_null_default = var_def
            .default_value
            .as_ref()
            .is_some_and(|default| !default.is_null());
        if !has_non_null_default && !location_has_default {
            return false;
        }
        return schema.is_type_subtype_of(var_type, &location_type.as_nullable());
    }
    schema.is_type_subtype_of(var_type, location_type)
}
