use crate::types::GraphQLType;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationKind;
use gqlengine_parser::Location;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

/// Only operations and fragments may appear in a request document.
pub(super) struct ExecutableDefinitions;

impl<'a> Visitor<'a> for ExecutableDefinitions {
    fn enter_document(&mut self, ctx: &mut ValidationContext<'a>, document: &'a ast::Document) {
        for definition in &document.definitions {
            if !definition.is_executable() {
                ctx.report(
                    format!("The {} is not executable.", definition.describe()),
                    vec![definition.span().location()],
                );
            }
        }
    }
}

#[derive(Default)]
pub(super) struct UniqueOperationNames<'a> {
    seen: HashMap<&'a str, Location>,
}

impl<'a> Visitor<'a> for UniqueOperationNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        let Some(name) = &operation.name else { return };
        let location = operation.span.location();
        if let Some(first) = self.seen.get(name.as_str()) {
            ctx.report(
                format!("There can be only one operation named \"{name}\"."),
                vec![*first, location],
            );
        } else {
            self.seen.insert(name.as_str(), location);
        }
    }
}

/// An anonymous operation is only allowed when it is the sole operation.
pub(super) struct LoneAnonymousOperation;

impl<'a> Visitor<'a> for LoneAnonymousOperation {
    fn enter_document(&mut self, ctx: &mut ValidationContext<'a>, document: &'a ast::Document) {
        let operation_count = document.operations().count();
        if operation_count < 2 {
            return;
        }
        for operation in document.operations().filter(|op| op.name.is_none()) {
            ctx.report(
                "This anonymous operation must be the only defined operation.",
                vec![operation.span.location()],
            );
        }
    }
}

/// A subscription selects exactly one root field, and not an introspection
/// one.
pub(super) struct SingleFieldSubscriptions;

impl<'a> Visitor<'a> for SingleFieldSubscriptions {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        if operation.kind != OperationKind::Subscription {
            return;
        }
        let mut fields_by_key = IndexMap::new();
        collect_root_fields(ctx, &operation.selection_set, &mut HashSet::new(), &mut fields_by_key);

        let subject = match &operation.name {
            Some(name) => format!("Subscription \"{name}\""),
            None => "Anonymous Subscription".to_string(),
        };
        if fields_by_key.len() > 1 {
            ctx.report(
                format!("{subject} must select only one top level field."),
                fields_by_key
                    .values()
                    .skip(1)
                    .flatten()
                    .map(|field| field.span.location())
                    .collect(),
            );
        }
        for field in fields_by_key.values().flatten() {
            if field.name.starts_with("__") {
                ctx.report(
                    format!("{subject} must not select an introspection top level field."),
                    vec![field.span.location()],
                );
            }
        }
    }
}

fn collect_root_fields<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::SelectionSet,
    visited_fragments: &mut HashSet<&'a str>,
    fields_by_key: &mut IndexMap<&'a str, Vec<&'a ast::Field>>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                fields_by_key.entry(field.response_key()).or_default().push(field);
            },
            ast::Selection::InlineFragment(fragment) => {
                collect_root_fields(ctx, &fragment.selection_set, visited_fragments, fields_by_key);
            },
            ast::Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.name.as_str()) {
                    continue;
                }
                if let Some(fragment) = ctx.fragment(&spread.name) {
                    collect_root_fields(ctx, &fragment.selection_set, visited_fragments, fields_by_key);
                }
            },
        }
    }
}

/// Every type named in a variable definition or type condition exists.
pub(super) struct KnownTypeNames;

impl KnownTypeNames {
    fn check(ctx: &mut ValidationContext<'_>, type_name: &str, location: Location) {
        if ctx.schema.get_type(type_name).is_none() {
            ctx.report(format!("Unknown type \"{type_name}\"."), vec![location]);
        }
    }
}

impl<'a> Visitor<'a> for KnownTypeNames {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::VariableDefinition,
    ) {
        Self::check(ctx, var_def.var_type.innermost_name(), var_def.var_type.span().location());
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::FragmentDefinition,
    ) {
        Self::check(ctx, &fragment.type_condition, fragment.span.location());
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        fragment: &'a ast::InlineFragment,
    ) {
        if let Some(type_name) = &fragment.type_condition {
            Self::check(ctx, type_name, fragment.span.location());
        }
    }
}
