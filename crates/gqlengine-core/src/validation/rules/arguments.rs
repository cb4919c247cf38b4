use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::DirectiveLocation;
use indexmap::IndexMap;
use std::collections::HashMap;

pub(super) struct KnownArgumentNames;

impl<'a> Visitor<'a> for KnownArgumentNames {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        field_def: Option<&'a Field>,
        field: &'a ast::Field,
    ) {
        let (Some(parent_type), Some(field_def)) = (parent_type, field_def) else {
            return;
        };
        for argument in &field.arguments {
            if field_def.argument(&argument.name).is_none() {
                ctx.report(
                    format!(
                        "Unknown argument \"{}\" on field \"{}.{}\".",
                        argument.name,
                        parent_type.name(),
                        field.name,
                    ),
                    vec![argument.span.location()],
                );
            }
        }
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::DirectiveAnnotation,
        _location: DirectiveLocation,
    ) {
        let Some(directive_def) = ctx.schema.directive(&directive.name) else { return };
        for argument in &directive.arguments {
            if !directive_def.arguments().contains_key(&argument.name) {
                ctx.report(
                    format!(
                        "Unknown argument \"{}\" on directive \"@{}\".",
                        argument.name,
                        directive.name,
                    ),
                    vec![argument.span.location()],
                );
            }
        }
    }
}

pub(super) struct UniqueArgumentNames;

impl UniqueArgumentNames {
    fn check(ctx: &mut ValidationContext<'_>, arguments: &[ast::Argument]) {
        let mut seen = HashMap::new();
        for argument in arguments {
            let location = argument.span.location();
            if let Some(first) = seen.get(argument.name.as_str()) {
                ctx.report(
                    format!("There can be only one argument named \"{}\".", argument.name),
                    vec![*first, location],
                );
            } else {
                seen.insert(argument.name.as_str(), location);
            }
        }
    }
}

impl<'a> Visitor<'a> for UniqueArgumentNames {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _field_def: Option<&'a Field>,
        field: &'a ast::Field,
    ) {
        Self::check(ctx, &field.arguments);
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::DirectiveAnnotation,
        _location: DirectiveLocation,
    ) {
        Self::check(ctx, &directive.arguments);
    }
}

/// Non-null arguments without a default value must be supplied.
pub(super) struct ProvidedRequiredArguments;

impl ProvidedRequiredArguments {
    fn missing<'d>(
        arg_defs: &'d IndexMap<String, InputValue>,
        arguments: &[ast::Argument],
    ) -> impl Iterator<Item = &'d InputValue> {
        let provided: Vec<String> = arguments.iter().map(|arg| arg.name.clone()).collect();
        arg_defs
            .values()
            .filter(move |arg_def| arg_def.is_required() && !provided.contains(&arg_def.name))
    }
}

impl<'a> Visitor<'a> for ProvidedRequiredArguments {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        field_def: Option<&'a Field>,
        field: &'a ast::Field,
    ) {
        let Some(field_def) = field_def else { return };
        for arg_def in Self::missing(field_def.arguments(), &field.arguments) {
            ctx.report(
                format!(
                    "Field \"{}\" argument \"{}\" of type \"{}\" is required, but it was \
                    not provided.",
                    field.name,
                    arg_def.name(),
                    arg_def.type_annotation(),
                ),
                vec![field.span.location()],
            );
        }
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::DirectiveAnnotation,
        _location: DirectiveLocation,
    ) {
        let Some(directive_def) = ctx.schema.directive(&directive.name) else { return };
        for arg_def in Self::missing(directive_def.arguments(), &directive.arguments) {
            ctx.report(
                format!(
                    "Directive \"@{}\" argument \"{}\" of type \"{}\" is required, but it \
                    was not provided.",
                    directive.name,
                    arg_def.name(),
                    arg_def.type_annotation(),
                ),
                vec![directive.span.location()],
            );
        }
    }
}
