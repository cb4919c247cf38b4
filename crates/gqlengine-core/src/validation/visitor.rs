use crate::types::Field;
use crate::types::GraphQLType;
use crate::validation::ValidationContext;
use gqlengine_parser::ast;
use gqlengine_parser::ast::DirectiveLocation;
use gqlengine_parser::ast::TypeAnnotation;

/// Hooks fired while walking an executable document. Every hook defaults to
/// a no-op, so a rule implements only the ones it cares about.
///
/// Type information is computed by the walker and handed to the hooks: the
/// parent type of every selection set and field, the schema definition of
/// every field and the expected input type of every value. `None` means the
/// type could not be determined (an unknown type or field), which some
/// other rule reports.
///
/// Fragment spreads are *not* followed; fragment definitions are walked
/// once, in document order, against their type condition.
pub(crate) trait Visitor<'a> {
    fn enter_document(&mut self, _ctx: &mut ValidationContext<'a>, _document: &'a ast::Document) {}

    fn leave_document(&mut self, _ctx: &mut ValidationContext<'a>, _document: &'a ast::Document) {}

    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a ast::OperationDefinition,
    ) {}

    fn leave_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a ast::OperationDefinition,
    ) {}

    fn enter_fragment_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _fragment: &'a ast::FragmentDefinition,
    ) {}

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _var_def: &'a ast::VariableDefinition,
    ) {}

    fn enter_selection_set(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _selection_set: &'a ast::SelectionSet,
    ) {}

    fn leave_selection_set(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _selection_set: &'a ast::SelectionSet,
    ) {}

    fn enter_field(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _field_def: Option<&'a Field>,
        _field: &'a ast::Field,
    ) {}

    fn leave_field(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _field_def: Option<&'a Field>,
        _field: &'a ast::Field,
    ) {}

    fn enter_fragment_spread(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _spread: &'a ast::FragmentSpread,
    ) {}

    fn enter_inline_fragment(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _parent_type: Option<&'a GraphQLType>,
        _fragment: &'a ast::InlineFragment,
    ) {}

    /// Fired once per annotated node, before the individual directives.
    fn enter_directives(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directives: &'a [ast::DirectiveAnnotation],
        _location: DirectiveLocation,
    ) {}

    fn enter_directive(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directive: &'a ast::DirectiveAnnotation,
        _location: DirectiveLocation,
    ) {}

    /// Fired for every value, including the items of list literals and the
    /// fields of object literals.
    fn enter_value(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _value: &'a ast::Value,
        _expected_type: Option<&'a TypeAnnotation>,
    ) {}

    /// Fired for every variable reference. `location_has_default` is set
    /// when the argument or input field the variable is passed to declares
    /// a default value.
    fn enter_variable_usage(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _variable: &'a ast::VariableValue,
        _expected_type: Option<&'a TypeAnnotation>,
        _location_has_default: bool,
    ) {}
}

pub(crate) fn walk_document<'a>(
    ctx: &mut ValidationContext<'a>,
    visitor: &mut dyn Visitor<'a>,
) {
    let document = ctx.document;
    visitor.enter_document(ctx, document);
    for definition in &document.definitions {
        match definition {
            ast::Definition::Operation(operation) => walk_operation(ctx, visitor, operation),
            ast::Definition::Fragment(fragment) => {
                walk_fragment_definition(ctx, visitor, fragment)
            },
            ast::Definition::Directive(_)
            | ast::Definition::Schema(_)
            | ast::Definition::SchemaExtension(_)
            | ast::Definition::Type(_)
            | ast::Definition::TypeExtension(_) => (),
        }
    }
    visitor.leave_document(ctx, document);
}

pub(crate) fn walk_operation<'a>(
    ctx: &mut ValidationContext<'a>,
    visitor: &mut dyn Visitor<'a>,
    operation: &'a ast::OperationDefinition,
) {
    let schema = ctx.schema;
    visitor.enter_operation(ctx, operation);
    for var_def in &operation.variable_definitions {
        visitor.enter_variable_definition(ctx, var_def);
        walk_directives(ctx, visitor, &var_def.directives, DirectiveLocation::VariableDefinition);
        if let Some(default_value) = &var_def.default_value {
            walk_value(ctx, visitor, default_value, Some(&var_def.var_type), false);
        }
    }
    walk_directives(ctx, visitor, &operation.directives, operation_location(operation.kind));
    let root_type = schema
        .root_type_name(operation.kind)
        .and_then(|name| schema.get_type(name));
    walk_selection_set(ctx, visitor, root_type, &operation.selection_set);
    visitor.leave_operation(ctx, operation);
}

pub(crate) fn walk_fragment_definition<'a>(
    ctx: &mut ValidationContext<'a>,
    visitor: &mut dyn Visitor<'a>,
    fragment: &'a ast::FragmentDefinition,
) {
    let schema = ctx.schema;
    visitor.enter_fragment_definition(ctx, fragment);
    walk_directives(ctx, visitor, &fragment.directives, DirectiveLocation::FragmentDefinition);
    let type_condition = schema.get_type(&fragment.type_condition);
    walk_selection_set(ctx, visitor, type_condition, &fragment.selection_set);
}

pub(crate) fn walk_selection_set<'a>(
    ctx: &mut ValidationContext<'a>,
    visitor: &mut dyn Visitor<'a>,
    parent_type: Option<&'a GraphQLType>,
    selection_set: &'a ast::SelectionSet,
) {
    let schema = ctx.schema;
    let parent_type = parent_type.filter(|ty| ty.is_composite());
    visitor.enter_selection_set(ctx, parent_type, selection_set);
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                let field_def = parent_type
                    .and_then(|parent| schema.field_def(parent.name(), &field.name));
                visitor.enter_field(ctx, parent_type, field_def, field);
                walk_directives(ctx, visitor, &field.directives, DirectiveLocation::Field);
                for argument in &field.arguments {
                    let arg_def = field_def.and_then(|def| def.argument(&argument.name));
                    walk_value(
                        ctx,
                        visitor,
                        &argument.value,
                        arg_def.map(|def| def.type_annotation()),
                        arg_def.is_some_and(|def| def.default_value().is_some()),
                    );
                }
                if let Some(sub_selection_set) = &field.selection_set {
                    let field_type = field_def.and_then(|def| {
                        schema.get_type(def.type_annotation().innermost_name())
                    });
                    walk_selection_set(ctx, visitor, field_type, sub_selection_set);
                }
                visitor.leave_field(ctx, parent_type, field_def, field);
            },

            ast::Selection::FragmentSpread(spread) => {
                visitor.enter_fragment_spread(ctx, parent_type, spread);
                walk_directives(ctx, visitor, &spread.directives, DirectiveLocation::FragmentSpread);
            },

            ast::Selection::InlineFragment(fragment) => {
                visitor.enter_inline_fragment(ctx, parent_type, fragment);
                walk_directives(ctx, visitor, &fragment.directives, DirectiveLocation::InlineFragment);
                let fragment_type = match &fragment.type_condition {
                    Some(type_name) => schema.get_type(type_name),
                    None => parent_type,
                };
                walk_selection_set(ctx, visitor, fragment_type, &fragment.selection_set);
            },
        }
    }
    visitor.leave_selection_set(ctx, parent_type, selection_set);
}

fn walk_directives<'a>(
    ctx: &mut ValidationContext<'a>,
    visitor: &mut dyn Visitor<'a>,
    directives: &'a [ast::DirectiveAnnotation],
    location: DirectiveLocation,
) {
    let schema = ctx.schema;
    visitor.enter_directives(ctx, directives, location);
    for directive in directives {
        visitor.enter_directive(ctx, directive, location);
        let directive_def = schema.directive(&directive.name);
        for argument in &directive.arguments {
            let arg_def = directive_def.and_then(|def| def.arguments().get(&argument.name));
            walk_value(
                ctx,
                visitor,
                &argument.value,
                arg_def.map(|def| def.type_annotation()),
                arg_def.is_some_and(|def| def.default_value().is_some()),
            );
        }
    }
}

fn walk_value<'a>(
    ctx: &mut ValidationContext<'a>,
    visitor: &mut dyn Visitor<'a>,
    value: &'a ast::Value,
    expected_type: Option<&'a TypeAnnotation>,
    location_has_default: bool,
) {
    let schema = ctx.schema;
    visitor.enter_value(ctx, value, expected_type);
    match value {
        ast::Value::Variable(variable) => {
            visitor.enter_variable_usage(ctx, variable, expected_type, location_has_default);
        },
        ast::Value::List(list) => {
            // A single item may stand in for a whole list, so an item of a
            // list literal is expected to have the list's item type.
            let item_type = expected_type.and_then(TypeAnnotation::list_item);
            for item in &list.values {
                walk_value(ctx, visitor, item, item_type, false);
            }
        },
        ast::Value::Object(object) => {
            let input_type = expected_type
                .filter(|ty| !ty.is_list())
                .and_then(|ty| schema.get_type(ty.innermost_name()))
                .and_then(GraphQLType::as_input_object);
            for field in &object.fields {
                let field_def = input_type.and_then(|ty| ty.field(&field.name));
                walk_value(
                    ctx,
                    visitor,
                    &field.value,
                    field_def.map(|def| def.type_annotation()),
                    field_def.is_some_and(|def| def.default_value().is_some()),
                );
            }
        },
        ast::Value::Boolean(_)
        | ast::Value::Enum(_)
        | ast::Value::Float(_)
        | ast::Value::Int(_)
        | ast::Value::Null(_)
        | ast::Value::String(_) => (),
    }
}

pub(crate) fn operation_location(kind: ast::OperationKind) -> DirectiveLocation {
    match kind {
        ast::OperationKind::Query => DirectiveLocation::Query,
        ast::OperationKind::Mutation => DirectiveLocation::Mutation,
        ast::OperationKind::Subscription => DirectiveLocation::Subscription,
    }
}
