use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::TypeAnnotation;
use gqlengine_parser::Location;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fields sharing a response key must be mergeable into a single result
/// entry: unless their parent types can never both apply, they select the
/// same field with the same arguments, and in every case their return
/// types (and sub-selections) are compatible.
///
/// https://spec.graphql.org/October2021/#sec-Field-Selection-Merging
#[derive(Default)]
pub(super) struct OverlappingFieldsCanBeMerged {
    compared_pairs: ComparedPairs,
    reported_pairs: HashSet<(Location, Location)>,
}

#[derive(Clone, Copy)]
struct CollectedField<'a> {
    field: &'a ast::Field,
    field_def: Option<&'a Field>,
    parent_type: Option<&'a GraphQLType>,
}

#[derive(Clone)]
struct Conflict {
    locations: Vec<Location>,
    reason: String,
    response_key: String,
}

type FieldsByKey<'a> = IndexMap<&'a str, Vec<CollectedField<'a>>>;

/// Results of field-pair comparisons, keyed by the addresses of both
/// fields and whether their parents were already mutually exclusive. A
/// pair still being compared maps to `None`, which cuts fragment cycles.
type ComparedPairs = HashMap<(usize, usize, bool), Option<Conflict>>;

impl<'a> Visitor<'a> for OverlappingFieldsCanBeMerged {
    fn enter_selection_set(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::SelectionSet,
    ) {
        let mut fields_by_key = FieldsByKey::new();
        collect_fields(ctx, parent_type, selection_set, &mut HashSet::new(), &mut fields_by_key);

        for fields in fields_by_key.values() {
            for (idx, field_a) in fields.iter().enumerate() {
                for field_b in &fields[idx + 1..] {
                    let pair = ordered_pair(field_a.field, field_b.field);
                    if self.reported_pairs.contains(&pair) {
                        continue;
                    }
                    let compared_pairs = &mut self.compared_pairs;
                    if let Some(conflict) = find_conflict(ctx, compared_pairs, false, *field_a, *field_b) {
                        self.reported_pairs.insert(pair);
                        ctx.report(
                            format!(
                                "Fields \"{}\" conflict because {}. Use different aliases on \
                                the fields to fetch both if this was intentional.",
                                conflict.response_key,
                                conflict.reason,
                            ),
                            conflict.locations,
                        );
                    }
                }
            }
        }
    }
}

fn ordered_pair(a: &ast::Field, b: &ast::Field) -> (Location, Location) {
    let (a, b) = (a.span.location(), b.span.location());
    if a <= b { (a, b) } else { (b, a) }
}

/// Gathers the fields of `selection_set` by response key, looking through
/// inline fragments and fragment spreads.
fn collect_fields<'a>(
    ctx: &ValidationContext<'a>,
    parent_type: Option<&'a GraphQLType>,
    selection_set: &'a ast::SelectionSet,
    visited_fragments: &mut HashSet<&'a str>,
    fields_by_key: &mut FieldsByKey<'a>,
) {
    let schema = ctx.schema;
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                let field_def = parent_type
                    .and_then(|parent| schema.field_def(parent.name(), &field.name));
                fields_by_key.entry(field.response_key()).or_default().push(CollectedField {
                    field,
                    field_def,
                    parent_type,
                });
            },
            ast::Selection::InlineFragment(fragment) => {
                let fragment_type = match &fragment.type_condition {
                    Some(type_name) => schema.get_type(type_name),
                    None => parent_type,
                };
                collect_fields(ctx, fragment_type, &fragment.selection_set, visited_fragments, fields_by_key);
            },
            ast::Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.name.as_str()) {
                    continue;
                }
                if let Some(fragment) = ctx.fragment(&spread.name) {
                    let fragment_type = schema.get_type(&fragment.type_condition);
                    collect_fields(ctx, fragment_type, &fragment.selection_set, visited_fragments, fields_by_key);
                }
            },
        }
    }
}

fn find_conflict<'a>(
    ctx: &ValidationContext<'a>,
    compared_pairs: &mut ComparedPairs,
    parents_mutually_exclusive: bool,
    a: CollectedField<'a>,
    b: CollectedField<'a>,
) -> Option<Conflict> {
    let key = (
        std::ptr::from_ref(a.field) as usize,
        std::ptr::from_ref(b.field) as usize,
        parents_mutually_exclusive,
    );
    if let Some(known) = compared_pairs.get(&key) {
        return known.clone();
    }
    compared_pairs.insert(key, None);
    let conflict = compare_fields(ctx, compared_pairs, parents_mutually_exclusive, a, b);
    compared_pairs.insert(key, conflict.clone());
    conflict
}

fn compare_fields<'a>(
    ctx: &ValidationContext<'a>,
    compared_pairs: &mut ComparedPairs,
    parents_mutually_exclusive: bool,
    a: CollectedField<'a>,
    b: CollectedField<'a>,
) -> Option<Conflict> {
    let schema = ctx.schema;
    let response_key = a.field.response_key().to_string();
    let base_locations = vec![a.field.span.location(), b.field.span.location()];

    // Two different object types can never apply to the same value, so
    // their fields only need compatible shapes.
    let mutually_exclusive = parents_mutually_exclusive
        || match (a.parent_type, b.parent_type) {
            (Some(parent_a), Some(parent_b)) => {
                parent_a.name() != parent_b.name()
                    && parent_a.as_object().is_some()
                    && parent_b.as_object().is_some()
            },
            _ => false,
        };

    if !mutually_exclusive {
        if a.field.name != b.field.name {
            return Some(Conflict {
                locations: base_locations,
                reason: format!(
                    "\"{}\" and \"{}\" are different fields",
                    a.field.name,
                    b.field.name,
                ),
                response_key,
            });
        }
        if !same_arguments(&a.field.arguments, &b.field.arguments) {
            return Some(Conflict {
                locations: base_locations,
                reason: "they have differing arguments".to_string(),
                response_key,
            });
        }
    }

    if let (Some(def_a), Some(def_b)) = (a.field_def, b.field_def) {
        let (type_a, type_b) = (def_a.type_annotation(), def_b.type_annotation());
        if do_types_conflict(schema, type_a, type_b) {
            return Some(Conflict {
                locations: base_locations,
                reason: format!("they return conflicting types \"{type_a}\" and \"{type_b}\""),
                response_key,
            });
        }
    }

    let (Some(selection_set_a), Some(selection_set_b)) =
        (&a.field.selection_set, &b.field.selection_set)
    else {
        return None;
    };
    let sub_type_a = a.field_def.and_then(|def| schema.get_type(def.type_annotation().innermost_name()));
    let sub_type_b = b.field_def.and_then(|def| schema.get_type(def.type_annotation().innermost_name()));
    let mut sub_fields_a = FieldsByKey::new();
    collect_fields(ctx, sub_type_a, selection_set_a, &mut HashSet::new(), &mut sub_fields_a);
    let mut sub_fields_b = FieldsByKey::new();
    collect_fields(ctx, sub_type_b, selection_set_b, &mut HashSet::new(), &mut sub_fields_b);

    let mut sub_conflicts = vec![];
    for (key, fields_a) in &sub_fields_a {
        let Some(fields_b) = sub_fields_b.get(key) else { continue };
        for sub_a in fields_a {
            for sub_b in fields_b {
                if let Some(conflict) =
                    find_conflict(ctx, compared_pairs, mutually_exclusive, *sub_a, *sub_b)
                {
                    sub_conflicts.push(conflict);
                }
            }
        }
    }
    if sub_conflicts.is_empty() {
        return None;
    }

    let reason = sub_conflicts
        .iter()
        .map(|conflict| {
            format!("subfields \"{}\" conflict because {}", conflict.response_key, conflict.reason)
        })
        .collect::<Vec<_>>()
        .join(" and ");
    let mut locations = base_locations;
    for conflict in sub_conflicts {
        locations.extend(conflict.locations);
    }
    Some(Conflict {
        locations,
        reason,
        response_key,
    })
}

/// Argument lists are the same when they name the same arguments with
/// textually identical values, regardless of order.
fn same_arguments(a: &[ast::Argument], b: &[ast::Argument]) -> bool {
    a.len() == b.len()
        && a.iter().all(|arg_a| {
            b.iter().any(|arg_b| {
                arg_a.name == arg_b.name
                    && arg_a.value.to_graphql_string() == arg_b.value.to_graphql_string()
            })
        })
}

/// Two return types conflict if they could produce differently shaped
/// output: different list/non-null wrapping, or different leaf types.
fn do_types_conflict(schema: &Schema, a: &TypeAnnotation, b: &TypeAnnotation) -> bool {
    if a.nullable() != b.nullable() {
        return true;
    }
    match (a, b) {
        (TypeAnnotation::List(list_a), TypeAnnotation::List(list_b)) => {
            do_types_conflict(schema, &list_a.inner, &list_b.inner)
        },
        (TypeAnnotation::List(_), _) | (_, TypeAnnotation::List(_)) => true,
        (TypeAnnotation::Named(named_a), TypeAnnotation::Named(named_b)) => {
            let is_leaf = |name: &str| schema.get_type(name).is_some_and(GraphQLType::is_leaf);
            (is_leaf(&named_a.name) || is_leaf(&named_b.name)) && named_a.name != named_b.name
        },
    }
}
