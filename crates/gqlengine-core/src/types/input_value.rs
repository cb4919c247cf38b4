use gqlengine_parser::ast;
use gqlengine_parser::Location;

/// An argument of a field or directive, or a field of an input object type.
#[derive(Clone, Debug)]
pub struct InputValue {
    pub(crate) def_location: Location,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: ast::TypeAnnotation,
}

impl InputValue {
    pub fn def_location(&self) -> Location {
        self.def_location
    }

    /// The default as written in the schema. It is coerced against
    /// [`Self::type_annotation`] each time it is applied.
    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
    }

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

    /// Non-null and without a default: callers must supply a value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &ast::TypeAnnotation {
        &self.type_annotation
    }
}
