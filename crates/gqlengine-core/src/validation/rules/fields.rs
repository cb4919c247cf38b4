use crate::types::Field;
use crate::types::GraphQLType;
use crate::validation::visitor::Visitor;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;

/// Selected fields exist on their parent type. `__typename` is available
/// on every composite type and `__schema`/`__type` on the query root.
pub(super) struct FieldsOnCorrectType;

impl<'a> Visitor<'a> for FieldsOnCorrectType {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        field_def: Option<&'a Field>,
        field: &'a ast::Field,
    ) {
        if let (Some(parent_type), None) = (parent_type, field_def) {
            ctx.report(
                format!(
                    "Cannot query field \"{}\" on type \"{}\".",
                    field.name,
                    parent_type.name(),
                ),
                vec![field.span.location()],
            );
        }
    }
}

/// Leaf-typed fields have no sub-selection and composite-typed fields
/// require one.
pub(super) struct ScalarLeafs;

impl<'a> Visitor<'a> for ScalarLeafs {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        field_def: Option<&'a Field>,
        field: &'a ast::Field,
    ) {
        let Some(field_def) = field_def else { return };
        let field_type = field_def.type_annotation();
        let Some(named_type) = ctx.schema.get_type(field_type.innermost_name()) else {
            return;
        };
        match (named_type.is_leaf(), &field.selection_set) {
            (true, Some(selection_set)) => ctx.report(
                format!(
                    "Field \"{}\" must not have a selection since type \"{field_type}\" \
                    has no subfields.",
                    field.name,
                ),
                vec![selection_set.span.location()],
            ),
            (false, None) => ctx.report(
                format!(
                    "Field \"{name}\" of type \"{field_type}\" must have a selection \
                    of subfields. Did you mean \"{name} {{ ... }}\"?",
                    name = field.name,
                ),
                vec![field.span.location()],
            ),
            (true, None) | (false, Some(_)) => (),
        }
    }
}
