use crate::types::GraphQLType;
use crate::types::TypesMap;
use gqlengine_parser::ast::TypeAnnotation;

/// Whether `object_type_name` is one of the concrete (or, for interfaces,
/// implementing) types of `abstract_type`.
///
/// https://spec.graphql.org/October2021/#IsSubType()
pub(crate) fn is_possible_type(
    types_map: &TypesMap,
    abstract_type: &GraphQLType,
    maybe_sub_type_name: &str,
) -> bool {
    match abstract_type {
        GraphQLType::Union(union_type) => union_type.has_member(maybe_sub_type_name),
        GraphQLType::Interface(iface) => types_map
            .get(maybe_sub_type_name)
            .and_then(GraphQLType::as_object_or_interface)
            .is_some_and(|t| t.implements_interface(iface.name())),
        _ => false,
    }
}

/// `sub` may be used wherever `sup` is expected: it is at least as
/// non-null, has the same list structure and names the same type or a
/// possible type of it.
pub(crate) fn is_type_subtype_of(
    types_map: &TypesMap,
    sub: &TypeAnnotation,
    sup: &TypeAnnotation,
) -> bool {
    if !sup.nullable() {
        return !sub.nullable()
            && is_type_subtype_of(types_map, &sub.as_nullable(), &sup.as_nullable());
    }
    if !sub.nullable() {
        return is_type_subtype_of(types_map, &sub.as_nullable(), sup);
    }
    match (sub, sup) {
        (TypeAnnotation::List(sub_list), TypeAnnotation::List(sup_list)) => {
            is_type_subtype_of(types_map, &sub_list.inner, &sup_list.inner)
        },
        (TypeAnnotation::Named(sub_named), TypeAnnotation::Named(sup_named)) => {
            if sub_named.name == sup_named.name {
                return true;
            }
            types_map
                .get(&sup_named.name)
                .is_some_and(|sup_type| {
                    sup_type.is_abstract()
                        && is_possible_type(types_map, sup_type, &sub_named.name)
                })
        },
        _ => false,
    }
}
