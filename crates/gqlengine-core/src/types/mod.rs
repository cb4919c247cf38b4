//! The closed set of named type definitions stored in a
//! [`Schema`](crate::schema::Schema).
//!
//! Types never own each other. Every cross-reference (a field's type, an
//! implemented interface, a union member) is a name that is resolved through
//! the schema's [`TypesMap`].

mod directive_definition;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod input_object_type_validator;
mod input_value;
mod object_or_interface_type;
mod object_or_interface_type_validator;
mod scalar_parser;
mod scalar_type;
mod type_comparators;
mod union_type;
mod union_type_validator;

pub use directive_definition::DirectiveDefinition;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_value::InputValue;
pub use object_or_interface_type::ObjectOrInterfaceType;
pub use scalar_parser::BooleanScalar;
pub use scalar_parser::CustomScalar;
pub use scalar_parser::FloatScalar;
pub use scalar_parser::IdScalar;
pub use scalar_parser::IntScalar;
pub use scalar_parser::ScalarParser;
pub use scalar_parser::StringScalar;
pub use scalar_type::ScalarType;
pub use union_type::UnionType;

pub(crate) use input_object_type_validator::InputObjectTypeValidator;
pub(crate) use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub(crate) use type_comparators::is_possible_type;
pub(crate) use type_comparators::is_type_subtype_of;
pub(crate) use union_type_validator::UnionTypeValidator;

use crate::named_ref::NamedRef;
use indexmap::IndexMap;

/// Every named type in a schema, keyed by name, in definition order.
pub type TypesMap = IndexMap<String, GraphQLType>;

pub type NamedGraphQLTypeRef = NamedRef<GraphQLType>;

#[cfg(test)]
mod tests;
