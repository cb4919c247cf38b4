use crate::types::is_possible_type;
use crate::types::is_type_subtype_of;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::ObjectOrInterfaceType;
use crate::types::TypesMap;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationKind;
use gqlengine_parser::Location;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A fully-built, validated type registry.
///
/// A `Schema` is immutable once built by a
/// [`SchemaBuilder`](crate::schema::SchemaBuilder) and is safe to share
/// across threads for concurrent reads.
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) description: Option<String>,
    pub(crate) directives: IndexMap<String, DirectiveDefinition>,
    pub(crate) implementations: HashMap<String, Vec<String>>,
    pub(crate) meta_fields: MetaFields,
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: String,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: TypesMap,
}

impl Schema {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directives
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn types(&self) -> &TypesMap {
        &self.types
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type_name()),
            OperationKind::Mutation => self.mutation_type_name(),
            OperationKind::Subscription => self.subscription_type_name(),
        }
    }

    /// The object type serving as the root of `kind` operations, if the
    /// schema supports them.
    pub fn root_type(&self, kind: OperationKind) -> Option<&ObjectOrInterfaceType> {
        self.root_type_name(kind)
            .and_then(|name| self.types.get(name))
            .and_then(GraphQLType::as_object)
    }

    /// Looks up a field on a composite type, including the `__typename`,
    /// `__schema` and `__type` meta fields where they are allowed.
    pub fn field_def(&self, parent_type_name: &str, field_name: &str) -> Option<&Field> {
        let parent_type = self.types.get(parent_type_name)?;
        if !parent_type.is_composite() {
            return None;
        }
        match field_name {
            "__typename" => Some(&self.meta_fields.typename),
            "__schema" if parent_type_name == self.query_type_name => {
                Some(&self.meta_fields.schema)
            },
            "__type" if parent_type_name == self.query_type_name => {
                Some(&self.meta_fields.type_)
            },
            _ => parent_type.field(field_name),
        }
    }

    /// The object types a value of `abstract_type_name` may be at runtime:
    /// union members, or objects implementing an interface.
    pub fn possible_types(&self, abstract_type_name: &str) -> &[String] {
        self.implementations
            .get(abstract_type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `object_type_name` is a possible runtime type of
    /// `abstract_type_name`.
    pub fn is_possible_type(&self, abstract_type_name: &str, object_type_name: &str) -> bool {
        self.types
            .get(abstract_type_name)
            .is_some_and(|t| is_possible_type(&self.types, t, object_type_name))
    }

    /// Whether a value could be of both types, i.e. a fragment on one may be
    /// spread where the other is expected.
    pub fn do_types_overlap(&self, type_a: &str, type_b: &str) -> bool {
        if type_a == type_b {
            return true;
        }
        let (Some(a), Some(b)) = (self.types.get(type_a), self.types.get(type_b)) else {
            return false;
        };
        match (a.is_abstract(), b.is_abstract()) {
            (true, true) => self
                .possible_types(type_a)
                .iter()
                .any(|t| self.possible_types(type_b).contains(t)),
            (true, false) => self.possible_types(type_a).iter().any(|t| t == type_b),
            (false, true) => self.possible_types(type_b).iter().any(|t| t == type_a),
            (false, false) => false,
        }
    }

    /// Whether a value of type `sub` may be used where `sup` is expected.
    pub fn is_type_subtype_of(&self, sub: &ast::TypeAnnotation, sup: &ast::TypeAnnotation) -> bool {
        is_type_subtype_of(&self.types, sub, sup)
    }
}

/// Fields every composite type (or, for `__schema` and `__type`, the query
/// root) answers without declaring them.
#[derive(Clone, Debug)]
pub(crate) struct MetaFields {
    pub(crate) schema: Field,
    pub(crate) type_: Field,
    pub(crate) typename: Field,
}

impl MetaFields {
    pub(crate) fn new() -> Self {
        let meta_field = |
            name: &str,
            type_annotation: ast::TypeAnnotation,
            arguments: IndexMap<String, InputValue>,
        | Field {
            arguments,
            def_location: Location { line: 0, column: 0 },
            deprecation_reason: None,
            description: None,
            directives: vec![],
            name: name.to_string(),
            type_annotation,
        };
        let mut type_args = IndexMap::new();
        type_args.insert("name".to_string(), InputValue {
            def_location: Location { line: 0, column: 0 },
            default_value: None,
            deprecation_reason: None,
            description: None,
            directives: vec![],
            name: "name".to_string(),
            type_annotation: ast::TypeAnnotation::named("String", false),
        });
        MetaFields {
            schema: meta_field(
                "__schema",
                ast::TypeAnnotation::named("__Schema", false),
                IndexMap::new(),
            ),
            type_: meta_field(
                "__type",
                ast::TypeAnnotation::named("__Type", true),
                type_args,
            ),
            typename: meta_field(
                "__typename",
                ast::TypeAnnotation::named("String", false),
                IndexMap::new(),
            ),
        }
    }
}
