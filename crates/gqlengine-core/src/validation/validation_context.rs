use crate::schema::Schema;
use crate::validation::visitor;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationError;
use crate::validation::ValidationOptions;
use gqlengine_parser::ast;
use gqlengine_parser::ast::TypeAnnotation;
use gqlengine_parser::Location;
use std::collections::HashSet;

/// State shared by the rules while validating one document.
pub(crate) struct ValidationContext<'a> {
    pub(crate) current_rule: &'static str,
    pub(crate) document: &'a ast::Document,
    pub(crate) errors: Vec<ValidationError>,
    pub(crate) options: &'a ValidationOptions,
    pub(crate) schema: &'a Schema,
}

/// A reference to a variable and the input type expected where it appears.
#[derive(Clone, Copy, Debug)]
pub(crate) struct VariableUsage<'a> {
    pub(crate) expected_type: Option<&'a TypeAnnotation>,
    pub(crate) location_has_default: bool,
    pub(crate) variable: &'a ast::VariableValue,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        document: &'a ast::Document,
        options: &'a ValidationOptions,
    ) -> Self {
        Self {
            current_rule: "",
            document,
            errors: vec![],
            options,
            schema,
        }
    }

    pub(crate) fn report(&mut self, message: impl Into<String>, locations: Vec<Location>) {
        self.errors.push(ValidationError {
            message: message.into(),
            locations,
            rule: self.current_rule,
        });
    }

    pub(crate) fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.document.fragment(name)
    }

    /// Every fragment reachable from `selection_set` through spreads, each
    /// listed once, in the order first encountered.
    pub(crate) fn recursively_referenced_fragments(
        &self,
        selection_set: &'a ast::SelectionSet,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut seen = HashSet::new();
        let mut fragments = vec![];
        let mut to_visit = vec![selection_set];
        while !to_visit.is_empty() {
            let selection_set = to_visit.remove(0);
            for spread in fragment_spreads(selection_set) {
                if !seen.insert(spread.name.as_str()) {
                    continue;
                }
                if let Some(fragment) = self.fragment(&spread.name) {
                    fragments.push(fragment);
                    to_visit.push(&fragment.selection_set);
                }
            }
        }
        fragments
    }

    /// Every variable reference made by `operation`, including references
    /// inside the fragments it (transitively) spreads.
    pub(crate) fn operation_variable_usages(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<VariableUsage<'a>> {
        let mut scratch = ValidationContext::new(self.schema, self.document, self.options);
        let mut collector = VariableUsageCollector { usages: vec![] };
        visitor::walk_operation(&mut scratch, &mut collector, operation);
        for fragment in self.recursively_referenced_fragments(&operation.selection_set) {
            visitor::walk_fragment_definition(&mut scratch, &mut collector, fragment);
        }
        collector.usages
    }
}

/// The fragment spreads made directly in `selection_set`, looking through
/// inline fragments and sub-selections but not into other fragment
/// definitions.
pub(crate) fn fragment_spreads(selection_set: &ast::SelectionSet) -> Vec<&ast::FragmentSpread> {
    fn collect<'b>(selection_set: &'b ast::SelectionSet, spreads: &mut Vec<&'b ast::FragmentSpread>) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    if let Some(sub_selection_set) = &field.selection_set {
                        collect(sub_selection_set, spreads);
                    }
                },
                ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                ast::Selection::InlineFragment(fragment) => {
                    collect(&fragment.selection_set, spreads);
                },
            }
        }
    }

    let mut spreads = vec![];
    collect(selection_set, &mut spreads);
    spreads
}

struct VariableUsageCollector<'a> {
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> Visitor<'a> for VariableUsageCollector<'a> {
    fn enter_variable_usage(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        variable: &'a ast::VariableValue,
        expected_type: Option<&'a TypeAnnotation>,
        location_has_default: bool,
    ) {
        self.usages.push(VariableUsage {
            expected_type,
            location_has_default,
            variable,
        });
    }
}
