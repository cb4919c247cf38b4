use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypesMap;
use gqlengine_parser::ast;
use gqlengine_parser::Location;
use indexmap::IndexMap;

/// The data shared by object types and interface types: a name, a set of
/// fields and the interfaces it declares that it implements.
#[derive(Clone, Debug)]
pub struct ObjectOrInterfaceType {
    pub(crate) def_location: Location,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}

impl ObjectOrInterfaceType {
    pub fn def_location(&self) -> Location {
        self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::DirectiveAnnotation] {
        &self.directives
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Whether this type declares `interface_name` among its interfaces.
    /// Interfaces must list transitive implementations explicitly, so this
    /// need not walk up the hierarchy.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|iface| iface.name() == interface_name)
    }

    /// The declared interfaces, resolved against `types_map`. Names that
    /// do not resolve to an interface are skipped; a built schema has none.
    pub fn interfaces<'a>(
        &self,
        types_map: &'a TypesMap,
    ) -> Vec<&'a GraphQLType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| iface_ref.deref(types_map).ok())
            .filter(|t| t.as_interface().is_some())
            .collect()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|iface| iface.name()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
