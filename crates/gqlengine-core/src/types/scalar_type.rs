use crate::types::ScalarParser;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use std::sync::Arc;

/// A scalar type together with the [`ScalarParser`] that coerces its input
/// and serializes its output.
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) def_location: Location,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parser: Arc<dyn ScalarParser>,
    pub(crate) specified_by_url: Option<String>,
}

impl ScalarType {
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

    pub fn parser(&self) -> &dyn ScalarParser {
        self.parser.as_ref()
    }

    /// The URL given by `@specifiedBy(url:)`.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specified_by_url", &self.specified_by_url)
            .field("def_location", &self.def_location)
            .finish_non_exhaustive()
    }
}
