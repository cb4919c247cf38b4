use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::DirectiveLocation;
use std::collections::HashMap;

/// Directives are declared by the schema and used only where their
/// definition allows.
pub(super) struct KnownDirectives;

impl<'a> Visitor<'a> for KnownDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::DirectiveAnnotation,
        location: DirectiveLocation,
    ) {
        match ctx.schema.directive(&directive.name) {
            None => ctx.report(
                format!("Unknown directive \"@{}\".", directive.name),
                vec![directive.span.location()],
            ),
            Some(directive_def) if !directive_def.allows_location(location) => ctx.report(
                format!(
                    "Directive \"@{}\" may not be used on {}.",
                    directive.name,
                    location.as_str(),
                ),
                vec![directive.span.location()],
            ),
            Some(_) => (),
        }
    }
}

pub(super) struct UniqueDirectivesPerLocation;

impl<'a> Visitor<'a> for UniqueDirectivesPerLocation {
    fn enter_directives(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocation,
    ) {
        let mut seen = HashMap::new();
        for directive in directives {
            let repeatable = ctx
                .schema
                .directive(&directive.name)
                .is_none_or(|def| def.is_repeatable());
            if repeatable {
                continue;
            }
            let location = directive.span.location();
            if let Some(first) = seen.get(directive.name.as_str()) {
                ctx.report(
                    format!(
                        "The directive \"@{}\" can only be used once at this location.",
                        directive.name,
                    ),
                    vec![*first, location],
                );
            } else {
                seen.insert(directive.name.as_str(), location);
            }
        }
    }
}
