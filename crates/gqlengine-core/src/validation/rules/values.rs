use crate::coercion::value_from_ast;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::DirectiveLocation;
use gqlengine_parser::ast::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Literal argument values and variable defaults coerce to their expected
/// input types. Variable references are accepted here; their types are
/// checked by `VariablesInAllowedPosition`.
pub(super) struct ValuesOfCorrectType;

impl ValuesOfCorrectType {
    fn check_value(ctx: &mut ValidationContext<'_>, value: &ast::Value, expected_type: &TypeAnnotation) {
        let schema = ctx.schema;
        if let Err(errors) = value_from_ast(schema, value, expected_type, None) {
            for error in errors {
                ctx.report(error.message, error.locations);
            }
        }
    }

    fn check_arguments(
        ctx: &mut ValidationContext<'_>,
        arg_defs: &IndexMap<String, InputValue>,
        arguments: &[ast::Argument],
    ) {
        for argument in arguments {
            if let Some(arg_def) = arg_defs.get(&argument.name) {
                Self::check_value(ctx, &argument.value, arg_def.type_annotation());
            }
        }
    }
}

impl<'a> Visitor<'a> for ValuesOfCorrectType {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::VariableDefinition,
    ) {
        let Some(default_value) = &var_def.default_value else { return };
        let is_input_type = ctx
            .schema
            .get_type(var_def.var_type.innermost_name())
            .is_some_and(GraphQLType::is_input_type);
        if is_input_type {
            Self::check_value(ctx, default_value, &var_def.var_type);
        }
    }

    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        field_def: Option<&'a Field>,
        field: &'a ast::Field,
    ) {
        if let Some(field_def) = field_def {
            Self::check_arguments(ctx, field_def.arguments(), &field.arguments);
        }
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::DirectiveAnnotation,
        _location: DirectiveLocation,
    ) {
        let schema = ctx.schema;
        if let Some(directive_def) = schema.directive(&directive.name) {
            Self::check_arguments(ctx, directive_def.arguments(), &directive.arguments);
        }
    }
}

pub(super) struct UniqueInputFieldNames;

impl<'a> Visitor<'a> for UniqueInputFieldNames {
    fn enter_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        value: &'a ast::Value,
        _expected_type: Option<&'a TypeAnnotation>,
    ) {
        let ast::Value::Object(object) = value else { return };
        let mut seen = HashMap::new();
        for field in &object.fields {
            let location = field.span.location();
            if let Some(first) = seen.get(field.name.as_str()) {
                ctx.report(
                    format!("There can be only one input field named \"{}\".", field.name),
                    vec![*first, location],
                );
            } else {
                seen.insert(field.name.as_str(), location);
            }
        }
    }
}
