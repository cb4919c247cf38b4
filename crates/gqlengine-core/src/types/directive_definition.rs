use crate::types::InputValue;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

/// A `directive @name(...) on ...` definition.
#[derive(Clone, Debug)]
pub struct DirectiveDefinition {
    pub(crate) arguments: IndexMap<String, InputValue>,
    pub(crate) builtin: bool,
    pub(crate) def_location: Location,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<ast::DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}

impl DirectiveDefinition {
    pub fn arguments(&self) -> &IndexMap<String, InputValue> {
        &self.arguments
    }

    pub fn def_location(&self) -> Location {
        self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
    pub fn is_builtin(&self) -> bool {
        self.builtin
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[ast::DirectiveLocation] {
        &self.locations
    }

    pub fn allows_location(&self, location: ast::DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
