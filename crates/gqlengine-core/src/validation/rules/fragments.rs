use crate::types::GraphQLType;
use crate::validation::validation_context::fragment_spreads;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use std::collections::HashMap;
use std::collections::HashSet;

pub(super) struct FragmentsOnCompositeTypes;

impl<'a> Visitor<'a> for FragmentsOnCompositeTypes {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::FragmentDefinition,
    ) {
        let is_composite = ctx.schema.get_type(&fragment.type_condition).map(GraphQLType::is_composite);
        if is_composite == Some(false) {
            ctx.report(
                format!(
                    "Fragment \"{}\" cannot condition on non composite type \"{}\".",
                    fragment.name,
                    fragment.type_condition,
                ),
                vec![fragment.span.location()],
            );
        }
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        fragment: &'a ast::InlineFragment,
    ) {
        let Some(type_name) = &fragment.type_condition else { return };
        let is_composite = ctx.schema.get_type(type_name).map(GraphQLType::is_composite);
        if is_composite == Some(false) {
            ctx.report(
                format!("Fragment cannot condition on non composite type \"{type_name}\"."),
                vec![fragment.span.location()],
            );
        }
    }
}

#[derive(Default)]
pub(super) struct UniqueFragmentNames<'a> {
    seen: HashMap<&'a str, Location>,
}

impl<'a> Visitor<'a> for UniqueFragmentNames<'a> {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::FragmentDefinition,
    ) {
        let location = fragment.span.location();
        if let Some(first) = self.seen.get(fragment.name.as_str()) {
            ctx.report(
                format!("There can be only one fragment named \"{}\".", fragment.name),
                vec![*first, location],
            );
        } else {
            self.seen.insert(&fragment.name, location);
        }
    }
}

pub(super) struct KnownFragmentNames;

impl<'a> Visitor<'a> for KnownFragmentNames {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        spread: &'a ast::FragmentSpread,
    ) {
        if ctx.fragment(&spread.name).is_none() {
            ctx.report(
                format!("Unknown fragment \"{}\".", spread.name),
                vec![spread.span.location()],
            );
        }
    }
}

/// Every fragment definition is reachable from some operation.
pub(super) struct NoUnusedFragments;

impl<'a> Visitor<'a> for NoUnusedFragments {
    fn leave_document(&mut self, ctx: &mut ValidationContext<'a>, document: &'a ast::Document) {
        let used: HashSet<&str> = document
            .operations()
            .flat_map(|op| ctx.recursively_referenced_fragments(&op.selection_set))
            .map(|fragment| fragment.name.as_str())
            .collect();
        for fragment in document.fragments() {
            if !used.contains(fragment.name.as_str()) {
                ctx.report(
                    format!("Fragment \"{}\" is never used.", fragment.name),
                    vec![fragment.span.location()],
                );
            }
        }
    }
}

/// A fragment may only be spread where a value could be of its type
/// condition.
pub(super) struct PossibleFragmentSpreads;

impl PossibleFragmentSpreads {
    fn can_never_overlap(
        ctx: &ValidationContext<'_>,
        parent_type: &GraphQLType,
        fragment_type: &GraphQLType,
    ) -> bool {
        parent_type.is_composite()
            && fragment_type.is_composite()
            && !ctx.schema.do_types_overlap(parent_type.name(), fragment_type.name())
    }
}

impl<'a> Visitor<'a> for PossibleFragmentSpreads {
    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        fragment: &'a ast::InlineFragment,
    ) {
        let schema = ctx.schema;
        let fragment_type = fragment.type_condition.as_deref().and_then(|name| schema.get_type(name));
        let (Some(parent_type), Some(fragment_type)) = (parent_type, fragment_type) else {
            return;
        };
        if Self::can_never_overlap(ctx, parent_type, fragment_type) {
            ctx.report(
                format!(
                    "Fragment cannot be spread here as objects of type \"{}\" can never \
                    be of type \"{}\".",
                    parent_type.name(),
                    fragment_type.name(),
                ),
                vec![fragment.span.location()],
            );
        }
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        spread: &'a ast::FragmentSpread,
    ) {
        let schema = ctx.schema;
        let fragment_type = ctx
            .fragment(&spread.name)
            .and_then(|fragment| schema.get_type(&fragment.type_condition));
        let (Some(parent_type), Some(fragment_type)) = (parent_type, fragment_type) else {
            return;
        };
        if Self::can_never_overlap(ctx, parent_type, fragment_type) {
            ctx.report(
                format!(
                    "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can \
                    never be of type \"{}\".",
                    spread.name,
                    parent_type.name(),
                    fragment_type.name(),
                ),
                vec![spread.span.location()],
            );
        }
    }
}

/// Fragments must not spread themselves, directly or through other
/// fragments. Each cycle is reported once, from the first fragment of the
/// cycle that is defined.
#[derive(Default)]
pub(super) struct NoFragmentCycles<'a> {
    spread_path: Vec<&'a ast::FragmentSpread>,
    spread_path_index_by_name: HashMap<&'a str, usize>,
    visited: HashSet<&'a str>,
}

impl<'a> NoFragmentCycles<'a> {
    fn detect_cycles(&mut self, ctx: &mut ValidationContext<'a>, fragment: &'a ast::FragmentDefinition) {
        if !self.visited.insert(&fragment.name) {
            return;
        }
        let spreads = fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }
        self.spread_path_index_by_name.insert(&fragment.name, self.spread_path.len());
        for spread in spreads {
            let cycle_index = self.spread_path_index_by_name.get(spread.name.as_str()).copied();
            self.spread_path.push(spread);
            match cycle_index {
                None => {
                    if let Some(spread_fragment) = ctx.fragment(&spread.name) {
                        self.detect_cycles(ctx, spread_fragment);
                    }
                },
                Some(cycle_index) => {
                    let cycle_path = &self.spread_path[cycle_index..];
                    let via = &cycle_path[..cycle_path.len() - 1];
                    let via_message = if via.is_empty() {
                        ".".to_string()
                    } else {
                        let names: Vec<String> =
                            via.iter().map(|s| format!("\"{}\"", s.name)).collect();
                        format!(" via {}.", names.join(", "))
                    };
                    ctx.report(
                        format!(
                            "Cannot spread fragment \"{}\" within itself{via_message}",
                            spread.name,
                        ),
                        cycle_path.iter().map(|s| s.span.location()).collect(),
                    );
                },
            }
            self.spread_path.pop();
        }
        self.spread_path_index_by_name.remove(fragment.name.as_str());
    }
}

impl<'a> Visitor<'a> for NoFragmentCycles<'a> {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::FragmentDefinition,
    ) {
        self.detect_cycles(ctx, fragment);
    }
}
