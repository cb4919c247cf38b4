use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceType;
use crate::types::ScalarType;
use crate::types::TypesMap;
use crate::types::UnionType;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

/// A named type defined in a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Enum(Box<EnumType>),
    InputObject(Box<InputObjectType>),
    Interface(Box<ObjectOrInterfaceType>),
    Object(Box<ObjectOrInterfaceType>),
    Scalar(Box<ScalarType>),
    Union(Box<UnionType>),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) | GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
            GraphQLType::Interface(t) | GraphQLType::Object(t) => t.description(),
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
        }
    }

    pub fn def_location(&self) -> Location {
        match self {
            GraphQLType::Enum(t) => t.def_location(),
            GraphQLType::InputObject(t) => t.def_location(),
            GraphQLType::Interface(t) | GraphQLType::Object(t) => t.def_location(),
            GraphQLType::Scalar(t) => t.def_location(),
            GraphQLType::Union(t) => t.def_location(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    /// Scalars, enums and input objects may appear in argument, variable
    /// and input-field positions.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Enum(_)
                | GraphQLType::InputObject(_)
                | GraphQLType::Scalar(_)
        )
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }

    /// Object, interface and union types: the types a selection set can be
    /// made against.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_)
        )
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, GraphQLType::Interface(_) | GraphQLType::Union(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GraphQLType::Enum(_) | GraphQLType::Scalar(_))
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&ObjectOrInterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectOrInterfaceType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    /// The shared field-bearing payload of object and interface types.
    pub fn as_object_or_interface(&self) -> Option<&ObjectOrInterfaceType> {
        match self {
            Self::Interface(t) | Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    /// Fields defined on an object or interface type. Meta fields like
    /// `__typename` are not included; see
    /// [`Schema::field_def`](crate::schema::Schema::field_def).
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        self.as_object_or_interface().map(|t| t.fields())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }

    /// Directive annotations written on the type's definition (and its
    /// extensions).
    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        match self {
            GraphQLType::Enum(t) => t.directives(),
            GraphQLType::InputObject(t) => t.directives(),
            GraphQLType::Interface(t) | GraphQLType::Object(t) => t.directives(),
            GraphQLType::Scalar(t) => t.directives(),
            GraphQLType::Union(t) => t.directives(),
        }
    }
}

impl DerefByName for GraphQLType {
    type Source = TypesMap;

    fn deref_name<'a>(
        types_map: &'a TypesMap,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        types_map
            .get(name)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
