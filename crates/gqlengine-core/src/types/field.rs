use crate::types::InputValue;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

/// A field defined on an object or interface type.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) def_location: Location,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) arguments: IndexMap<String, InputValue>,
    pub(crate) type_annotation: ast::TypeAnnotation,
}

impl Field {
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments.get(name)
    }

    pub fn def_location(&self) -> Location {
        self.def_location
    }

    /// The reason given by `@deprecated`, if the field is deprecated.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        &self.directives
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared output type, e.g. `[Character!]`.
    pub fn type_annotation(&self) -> &ast::TypeAnnotation {
        &self.type_annotation
    }
}
