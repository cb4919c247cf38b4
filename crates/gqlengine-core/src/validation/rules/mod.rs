mod arguments;
mod directives;
mod documents;
mod fields;
mod fragments;
mod max_depth;
mod overlapping_fields;
mod values;
mod variables;

use crate::validation::visitor::Visitor;

type BoxedRule<'a> = Box<dyn Visitor<'a> + 'a>;

/// Every rule, paired with the name it reports errors under, in the order
/// they run.
pub(super) fn ordered_rules<'a>() -> Vec<(&'static str, BoxedRule<'a>)> {
    vec![
        rule("ExecutableDefinitions", documents::ExecutableDefinitions),
        rule("UniqueOperationNames", documents::UniqueOperationNames::default()),
        rule("LoneAnonymousOperation", documents::LoneAnonymousOperation),
        rule("SingleFieldSubscriptions", documents::SingleFieldSubscriptions),
        rule("KnownTypeNames", documents::KnownTypeNames),
        rule("FragmentsOnCompositeTypes", fragments::FragmentsOnCompositeTypes),
        rule("VariablesAreInputTypes", variables::VariablesAreInputTypes),
        rule("FieldsOnCorrectType", fields::FieldsOnCorrectType),
        rule("ScalarLeafs", fields::ScalarLeafs),
        rule("UniqueFragmentNames", fragments::UniqueFragmentNames::default()),
        rule("KnownFragmentNames", fragments::KnownFragmentNames),
        rule("NoUnusedFragments", fragments::NoUnusedFragments),
        rule("PossibleFragmentSpreads", fragments::PossibleFragmentSpreads),
        rule("NoFragmentCycles", fragments::NoFragmentCycles::default()),
        rule("UniqueVariableNames", variables::UniqueVariableNames),
        rule("NoUndefinedVariables", variables::NoUndefinedVariables),
        rule("NoUnusedVariables", variables::NoUnusedVariables),
        rule("KnownDirectives", directives::KnownDirectives),
        rule("UniqueDirectivesPerLocation", directives::UniqueDirectivesPerLocation),
        rule("KnownArgumentNames", arguments::KnownArgumentNames),
        rule("UniqueArgumentNames", arguments::UniqueArgumentNames),
        rule("ValuesOfCorrectType", values::ValuesOfCorrectType),
        rule("ProvidedRequiredArguments", arguments::ProvidedRequiredArguments),
        rule("VariablesInAllowedPosition", variables::VariablesInAllowedPosition),
        rule(
            "OverlappingFieldsCanBeMerged",
            overlapping_fields::OverlappingFieldsCanBeMerged::default(),
        ),
        rule("UniqueInputFieldNames", values::UniqueInputFieldNames),
        rule("MaxDepth", max_depth::MaxDepth),
    ]
}

fn rule<'a>(name: &'static str, rule: impl Visitor<'a> + 'a) -> (&'static str, BoxedRule<'a>) {
    (name, Box::new(rule))
}
