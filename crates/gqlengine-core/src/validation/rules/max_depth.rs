use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use std::collections::HashSet;

/// Rejects fields nested deeper than
/// [`ValidationOptions::max_depth`](crate::validation::ValidationOptions).
/// Root fields are at depth 1; fragments count at the depth they are
/// spread.
pub(super) struct MaxDepth;

impl<'a> Visitor<'a> for MaxDepth {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a ast::OperationDefinition,
    ) {
        let Some(max_depth) = ctx.options.max_depth else { return };
        check_depth(ctx, &operation.selection_set, 1, max_depth, &mut HashSet::new());
    }
}

fn check_depth<'a>(
    ctx: &mut ValidationContext<'a>,
    selection_set: &'a ast::SelectionSet,
    depth: usize,
    max_depth: usize,
    active_fragments: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if depth > max_depth {
                    ctx.report(
                        format!(
                            "Field \"{}\" has depth {depth} that exceeds max depth {max_depth}.",
                            field.name,
                        ),
                        vec![field.span.location()],
                    );
                    continue;
                }
                if let Some(sub_selection_set) = &field.selection_set {
                    check_depth(ctx, sub_selection_set, depth + 1, max_depth, active_fragments);
                }
            },
            ast::Selection::InlineFragment(fragment) => {
                check_depth(ctx, &fragment.selection_set, depth, max_depth, active_fragments);
            },
            ast::Selection::FragmentSpread(spread) => {
                // Cycles are reported by `NoFragmentCycles`.
                let Some(fragment) = ctx.fragment(&spread.name) else { continue };
                if !active_fragments.insert(&fragment.name) {
                    continue;
                }
                check_depth(ctx, &fragment.selection_set, depth, max_depth, active_fragments);
                active_fragments.remove(fragment.name.as_str());
            },
        }
    }
}
