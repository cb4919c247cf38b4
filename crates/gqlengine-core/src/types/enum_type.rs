use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub struct EnumType {
    pub(crate) def_location: Location,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}

impl EnumType {
    pub fn def_location(&self) -> Location {
        self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// One symbol of an [`EnumType`].
#[derive(Clone, Debug)]
pub struct EnumValue {
    pub(crate) def_location: Location,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) name: String,
}

impl EnumValue {
    pub fn def_location(&self) -> Location {
        self.def_location
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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
