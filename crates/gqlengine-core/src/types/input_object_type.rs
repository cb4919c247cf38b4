use crate::types::InputValue;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub struct InputObjectType {
    pub(crate) def_location: Location,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, InputValue>,
    pub(crate) name: String,
}

impl InputObjectType {
    pub fn def_location(&self) -> Location {
        self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&InputValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
