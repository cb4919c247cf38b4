use gqlengine_parser::ast::OperationKind;
use gqlengine_parser::Location;
use thiserror::Error;

/// A structural problem found while checking the fully-assembled set of
/// types. All of these are collected before a build fails, so a single
/// [`SchemaBuildError::TypeValidationErrors`](crate::schema::SchemaBuildError)
/// reports every one of them.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error("The `{union_type_name}` union type must define one or more member types")]
    EmptyUnion {
        location: Location,
        union_type_name: String,
    },

    #[error(
        "The `{type_name}` type attempts to implement `{non_interface_type_name}`, \
        which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        location: Location,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type attempts to implement `{undefined_interface_name}`, \
        which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        location: Location,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is an output type"
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        location: Location,
        parent_type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field implements the field of the same \
        name on `{interface_name}`, but its parameter `{parameter_name}` is \
        declared as `{invalid_parameter_type}` where the interface declares \
        `{expected_parameter_type}`"
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        expected_parameter_type: String,
        field_name: String,
        interface_name: String,
        invalid_parameter_type: String,
        location: Location,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field is declared as `{invalid_field_type}`, \
        which is not a valid implementation of the `{expected_field_type}` type \
        declared for that field on `{interface_name}`"
    )]
    InvalidInterfaceSpecifiedFieldType {
        expected_field_type: String,
        field_name: String,
        interface_name: String,
        invalid_field_type: String,
        location: Location,
        type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        location: Location,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input types: The \
        `{parameter_name}` parameter of `{owner_name}` is declared with the \
        `{invalid_type_name}` output type"
    )]
    InvalidParameterWithOutputType {
        invalid_type_name: String,
        location: Location,
        owner_name: String,
        parameter_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field declares a required parameter \
        `{parameter_name}` that is not declared on `{interface_name}.{field_name}`; \
        additional parameters on an implementing field must be optional"
    )]
    InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        location: Location,
        parameter_name: String,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is not"
    )]
    InvalidRootOperationType {
        location: Location,
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        interface_name: String,
        location: Location,
    },

    #[error(
        "The `{union_type_name}` union includes `{invalid_member_type_name}`, but \
        union members must be object types"
    )]
    InvalidUnionMemberTypeKind {
        invalid_member_type_name: String,
        location: Location,
        union_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements `{interface_name}` but does not define \
        its `{field_name}` field"
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        location: Location,
        type_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field does not declare the \
        `{missing_parameter_name}` parameter that `{interface_name}.{field_name}` \
        declares"
    )]
    MissingInterfaceSpecifiedFieldParameter {
        field_name: String,
        interface_name: String,
        location: Location,
        missing_parameter_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type must also declare that it implements \
        `{missing_recursive_interface_name}` (via {})",
        inheritance_path.join(" -> "),
    )]
    MissingRecursiveInterfaceImplementation {
        inheritance_path: Vec<String>,
        location: Location,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` type must define one or more fields")]
    TypeWithNoFields {
        location: Location,
        type_name: String,
    },

    #[error("Reference to undefined type `{undefined_type_name}` (at {location})")]
    UndefinedTypeName {
        location: Location,
        undefined_type_name: String,
    },
}
