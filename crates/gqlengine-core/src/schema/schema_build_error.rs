use crate::schema::TypeValidationError;
use gqlengine_parser::ast::OperationKind;
use gqlengine_parser::GraphQLParseError;
use gqlengine_parser::Location;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Multiple arguments named `{argument_name}` are defined on `{owner_name}`")]
    DuplicateArgumentDefinition {
        argument_name: String,
        location1: Location,
        location2: Location,
        owner_name: String,
    },

    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: Location,
        location2: Location,
    },

    #[error(
        "The `{enum_name}.{value_name}` enum value is defined more than once"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        location1: Location,
        location2: Location,
        value_name: String,
    },

    #[error("The `{type_name}` type has multiple fields named `{field_name}`")]
    DuplicateFieldNameDefinition {
        field_name: String,
        location1: Location,
        location2: Location,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        duplicated_interface_name: String,
        location: Location,
        type_name: String,
    },

    #[error("Multiple {operation} root operation types were defined")]
    DuplicateOperationDefinition {
        location1: Location,
        location2: Location,
        operation: OperationKind,
    },

    #[error("Multiple `schema` definitions were found")]
    DuplicateSchemaDefinition {
        location1: Location,
        location2: Location,
    },

    #[error("Multiple GraphQL types with the same name were defined: `{type_name}`")]
    DuplicateTypeDefinition {
        location1: Location,
        location2: Location,
        type_name: String,
    },

    #[error(
        "The `{union_name}` union declares the `{member_name}` member more \
        than once"
    )]
    DuplicatedUnionMember {
        location: Location,
        member_name: String,
        union_name: String,
    },

    #[error("Enums must have at least one value, but `{type_name}` has none")]
    EnumWithNoVariants {
        location: Location,
        type_name: String,
    },

    #[error(
        "Schema documents may not contain executable definitions, but found \
        {definition} (at {location})"
    )]
    ExecutableDefinitionInSchema {
        definition: String,
        location: Location,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined")]
    ExtensionOfUndefinedType {
        location: Location,
        type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` with `extend {extension_keyword}`, but \
        it is defined with `{definition_keyword}`"
    )]
    InvalidExtensionType {
        definition_keyword: &'static str,
        extension_keyword: &'static str,
        location: Location,
        type_name: String,
    },

    #[error("Directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
        location: Location,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        field_name: String,
        location: Location,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`: `{param_name}` on `{owner_name}`")]
    InvalidDunderPrefixedParamName {
        location: Location,
        owner_name: String,
        param_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        location: Location,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations are both defined as \
        `{reused_type_name}`, but all root operations must use different types"
    )]
    NonUniqueOperationTypes {
        operation1: OperationKind,
        operation2: OperationKind,
        reused_type_name: String,
    },

    #[error("Error parsing schema{}: {err}", display_file(file))]
    ParseError {
        err: GraphQLParseError,
        file: Option<PathBuf>,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: Location,
    },

    #[error("Failed to read schema file `{}`: {message}", file.display())]
    SchemaFileReadError {
        file: PathBuf,
        message: String,
    },

    #[error(
        "A custom parser was registered for the `{scalar_name}` scalar, but no \
        such scalar is defined"
    )]
    UndefinedRegisteredScalar {
        scalar_name: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

fn display_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(file) => format!(" file `{}`", file.display()),
        None => String::new(),
    }
}
