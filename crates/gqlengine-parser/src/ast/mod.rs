//! The owned abstract syntax tree produced by
//! [`GraphQLParser`](crate::GraphQLParser).
//!
//! Every node records the [`GraphQLSourceSpan`](crate::GraphQLSourceSpan) it
//! was parsed from. Nodes own their strings, so a `Document` can outlive the
//! source text it came from and be shared freely across threads.

mod ast_node;
mod directive_location;
mod document;
mod executable_defs;
mod operation_kind;
mod type_annotation;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use directive_location::DirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Argument;
pub use executable_defs::DirectiveAnnotation;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use operation_kind::OperationKind;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::VariableValue;
