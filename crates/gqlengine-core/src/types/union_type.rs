use crate::types::NamedGraphQLTypeRef;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub struct UnionType {
    pub(crate) def_location: Location,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}

impl UnionType {
    pub fn def_location(&self) -> Location {
        self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        &self.directives
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
