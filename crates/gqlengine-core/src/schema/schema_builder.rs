use crate::named_ref::DerefByName;
use crate::schema::builtins::BUILTIN_SCALAR_NAMES;
use crate::schema::builtins::BUILTIN_SCHEMA_SDL;
use crate::schema::builtins::DEFAULT_DEPRECATION_REASON;
use crate::schema::schema::MetaFields;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::BooleanScalar;
use crate::types::CustomScalar;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::FloatScalar;
use crate::types::GraphQLType;
use crate::types::IdScalar;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeValidator;
use crate::types::InputValue;
use crate::types::IntScalar;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ScalarParser;
use crate::types::ScalarType;
use crate::types::StringScalar;
use crate::types::TypesMap;
use crate::types::UnionType;
use crate::types::UnionTypeValidator;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationKind;
use gqlengine_parser::Location;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Assembles a [`Schema`] from one or more SDL sources.
///
/// ```
/// use gqlengine_core::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str("type Query { hello: String }")?
///     .build()?;
/// assert_eq!(schema.query_type_name(), "Query");
/// # Ok::<(), gqlengine_core::schema::SchemaBuildError>(())
/// ```
///
/// Definitions may be spread across sources in any order; `extend`
/// definitions are merged into their base definition at [`Self::build`],
/// which is also where every cross-reference is checked.
pub struct SchemaBuilder {
    builtin_type_names: HashSet<String>,
    directive_defs: IndexMap<String, (ast::DirectiveDefinition, bool)>,
    scalar_parsers: HashMap<String, Arc<dyn ScalarParser>>,
    schema_def: Option<ast::SchemaDefinition>,
    schema_extensions: Vec<ast::SchemaDefinition>,
    type_defs: IndexMap<String, ast::TypeDefinition>,
    type_extensions: Vec<ast::TypeDefinition>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let mut builder = SchemaBuilder {
            builtin_type_names: HashSet::new(),
            directive_defs: IndexMap::new(),
            scalar_parsers: HashMap::new(),
            schema_def: None,
            schema_extensions: vec![],
            type_defs: IndexMap::new(),
            type_extensions: vec![],
        };
        let builtins = gqlengine_parser::parse_schema_document(BUILTIN_SCHEMA_SDL)
            .expect("builtin definitions are valid SDL");
        for def in builtins.definitions {
            match def {
                ast::Definition::Type(type_def) => {
                    let name = type_def.name().to_string();
                    builder.builtin_type_names.insert(name.clone());
                    builder.type_defs.insert(name, type_def);
                },
                ast::Definition::Directive(directive_def) => {
                    builder.directive_defs.insert(
                        directive_def.name.clone(),
                        (directive_def, true),
                    );
                },
                _ => (),
            }
        }
        builder
    }

    /// Parses `content` as SDL and adds its definitions.
    pub fn load_str(self, content: impl AsRef<str>) -> Result<Self> {
        let document = gqlengine_parser::parse_schema_document(content.as_ref())
            .map_err(|err| SchemaBuildError::ParseError { err, file: None })?;
        self.load_document(document)
    }

    /// Reads and parses an SDL file and adds its definitions.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            SchemaBuildError::SchemaFileReadError {
                file: file_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        tracing::debug!(file = %file_path.display(), "loading schema file");
        let document = gqlengine_parser::parse_schema_document(&content)
            .map_err(|err| SchemaBuildError::ParseError {
                err,
                file: Some(file_path.to_path_buf()),
            })?;
        self.load_document(document)
    }

    pub fn load_files<P: AsRef<Path>>(
        self,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        file_paths
            .into_iter()
            .try_fold(self, |builder, file_path| builder.load_file(file_path))
    }

    /// Adds the type-system definitions of an already-parsed document.
    pub fn load_document(mut self, document: ast::Document) -> Result<Self> {
        for def in document.definitions {
            match def {
                ast::Definition::Operation(_) | ast::Definition::Fragment(_) => {
                    return Err(SchemaBuildError::ExecutableDefinitionInSchema {
                        definition: def.describe(),
                        location: def.span().location(),
                    });
                },
                ast::Definition::Directive(directive_def) => {
                    self.visit_directive_definition(directive_def)?;
                },
                ast::Definition::Schema(schema_def) => {
                    if let Some(existing) = &self.schema_def {
                        return Err(SchemaBuildError::DuplicateSchemaDefinition {
                            location1: existing.span.location(),
                            location2: schema_def.span.location(),
                        });
                    }
                    self.schema_def = Some(schema_def);
                },
                ast::Definition::SchemaExtension(schema_ext) => {
                    self.schema_extensions.push(schema_ext);
                },
                ast::Definition::Type(type_def) => {
                    self.visit_type_definition(type_def)?;
                },
                ast::Definition::TypeExtension(type_ext) => {
                    self.type_extensions.push(type_ext);
                },
            }
        }
        Ok(self)
    }

    /// Uses `parser` to coerce values of the custom scalar `scalar_name`.
    /// Scalars without a registered parser pass values through unchanged.
    pub fn register_scalar(
        mut self,
        scalar_name: impl Into<String>,
        parser: impl ScalarParser + 'static,
    ) -> Self {
        self.scalar_parsers.insert(scalar_name.into(), Arc::new(parser));
        self
    }

    fn visit_directive_definition(
        &mut self,
        directive_def: ast::DirectiveDefinition,
    ) -> Result<()> {
        let location = directive_def.span.location();
        if directive_def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                directive_name: directive_def.name,
                location,
            });
        }
        if let Some((existing, builtin)) = self.directive_defs.get(&directive_def.name) {
            return Err(if *builtin {
                SchemaBuildError::RedefinitionOfBuiltinDirective {
                    directive_name: directive_def.name,
                    location,
                }
            } else {
                SchemaBuildError::DuplicateDirectiveDefinition {
                    directive_name: directive_def.name,
                    location1: existing.span.location(),
                    location2: location,
                }
            });
        }
        self.directive_defs.insert(
            directive_def.name.clone(),
            (directive_def, false),
        );
        Ok(())
    }

    fn visit_type_definition(&mut self, type_def: ast::TypeDefinition) -> Result<()> {
        let type_name = type_def.name();
        let location = type_def.span().location();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                location,
                type_name: type_name.to_string(),
            });
        }
        if let Some(existing) = self.type_defs.get(type_name) {
            // Schema dumps commonly restate the builtin scalars.
            let restates_builtin_scalar =
                BUILTIN_SCALAR_NAMES.contains(&type_name)
                    && matches!(type_def, ast::TypeDefinition::Scalar(_));
            if restates_builtin_scalar {
                tracing::debug!(type_name, "ignoring redefinition of builtin scalar");
                return Ok(());
            }
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                location1: existing.span().location(),
                location2: location,
                type_name: type_name.to_string(),
            });
        }
        self.type_defs.insert(type_name.to_string(), type_def);
        Ok(())
    }

    /// Merges extensions, converts and validates every definition, and
    /// resolves the root operation types.
    pub fn build(self) -> Result<Schema> {
        let SchemaBuilder {
            builtin_type_names,
            directive_defs,
            scalar_parsers,
            schema_def,
            schema_extensions,
            mut type_defs,
            type_extensions,
        } = self;

        for type_ext in type_extensions {
            let Some(type_def) = type_defs.get_mut(type_ext.name()) else {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    location: type_ext.span().location(),
                    type_name: type_ext.name().to_string(),
                });
            };
            merge_type_extension(type_def, type_ext)?;
        }

        for scalar_name in scalar_parsers.keys() {
            if !matches!(type_defs.get(scalar_name), Some(ast::TypeDefinition::Scalar(_))) {
                return Err(SchemaBuildError::UndefinedRegisteredScalar {
                    scalar_name: scalar_name.to_string(),
                });
            }
        }

        let mut types = TypesMap::with_capacity(type_defs.len());
        for (type_name, type_def) in type_defs {
            let builtin = builtin_type_names.contains(&type_name);
            let graphql_type = build_type(type_def, builtin, &scalar_parsers)?;
            types.insert(type_name, graphql_type);
        }

        let mut directives = IndexMap::with_capacity(directive_defs.len());
        for (name, (directive_def, builtin)) in directive_defs {
            let owner_name = format!("@{name}");
            directives.insert(name, DirectiveDefinition {
                arguments: build_input_values(&owner_name, directive_def.arguments, builtin)?,
                builtin,
                def_location: directive_def.span.location(),
                description: directive_def.description,
                locations: directive_def.locations,
                name: directive_def.name,
                repeatable: directive_def.repeatable,
            });
        }

        let (description, roots) = resolve_root_operations(
            schema_def,
            schema_extensions,
            &types,
        )?;

        let mut errors = vec![];
        for graphql_type in types.values() {
            match graphql_type {
                GraphQLType::Interface(t) | GraphQLType::Object(t) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(t, &types).validate(),
                ),
                GraphQLType::Union(t) => errors.append(
                    &mut UnionTypeValidator::new(t, &types).validate(),
                ),
                GraphQLType::InputObject(t) => errors.append(
                    &mut InputObjectTypeValidator::new(t, &types).validate(),
                ),
                GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),
            }
        }
        for directive in directives.values() {
            for (param_name, param) in directive.arguments() {
                let param_type_name = param.type_annotation().innermost_name();
                match types.get(param_type_name) {
                    None => errors.push(TypeValidationError::UndefinedTypeName {
                        location: param.def_location(),
                        undefined_type_name: param_type_name.to_string(),
                    }),
                    Some(param_type) if !param_type.is_input_type() => errors.push(
                        TypeValidationError::InvalidParameterWithOutputType {
                            invalid_type_name: param_type_name.to_string(),
                            location: param.def_location(),
                            owner_name: format!("@{}", directive.name()),
                            parameter_name: param_name.to_string(),
                        }
                    ),
                    Some(_) => (),
                }
            }
        }
        for (operation, (type_name, location)) in &roots {
            match types.get(type_name) {
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    location: *location,
                    undefined_type_name: type_name.to_string(),
                }),
                Some(GraphQLType::Object(_)) => (),
                Some(_) => errors.push(TypeValidationError::InvalidRootOperationType {
                    location: *location,
                    operation: *operation,
                    type_name: type_name.to_string(),
                }),
            }
        }
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let mut implementations: HashMap<String, Vec<String>> = HashMap::new();
        for graphql_type in types.values() {
            match graphql_type {
                GraphQLType::Object(obj) => {
                    for iface_name in obj.interface_names() {
                        implementations
                            .entry(iface_name.to_string())
                            .or_default()
                            .push(obj.name().to_string());
                    }
                },
                GraphQLType::Union(union_type) => {
                    implementations.insert(
                        union_type.name().to_string(),
                        union_type.member_names().map(str::to_string).collect(),
                    );
                },
                _ => (),
            }
        }

        let root_name = |kind: OperationKind| roots.get(&kind).map(|(name, _)| name.clone());
        let Some(query_type_name) = root_name(OperationKind::Query) else {
            return Err(SchemaBuildError::NoQueryOperationTypeDefined);
        };
        let schema = Schema {
            description,
            directives,
            implementations,
            meta_fields: MetaFields::new(),
            mutation_type_name: root_name(OperationKind::Mutation),
            query_type_name,
            subscription_type_name: root_name(OperationKind::Subscription),
            types,
        };
        tracing::debug!(
            types = schema.types.len(),
            directives = schema.directives.len(),
            "built schema",
        );
        Ok(schema)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_type_extension(
    type_def: &mut ast::TypeDefinition,
    type_ext: ast::TypeDefinition,
) -> Result<()> {
    use ast::TypeDefinition as T;
    match (type_def, type_ext) {
        (T::Enum(def), T::Enum(ext)) => {
            def.directives.extend(ext.directives);
            def.values.extend(ext.values);
        },
        (T::InputObject(def), T::InputObject(ext)) => {
            def.directives.extend(ext.directives);
            def.fields.extend(ext.fields);
        },
        (T::Interface(def), T::Interface(ext)) => {
            def.directives.extend(ext.directives);
            def.fields.extend(ext.fields);
            def.interfaces.extend(ext.interfaces);
        },
        (T::Object(def), T::Object(ext)) => {
            def.directives.extend(ext.directives);
            def.fields.extend(ext.fields);
            def.interfaces.extend(ext.interfaces);
        },
        (T::Scalar(def), T::Scalar(ext)) => {
            def.directives.extend(ext.directives);
        },
        (T::Union(def), T::Union(ext)) => {
            def.directives.extend(ext.directives);
            def.members.extend(ext.members);
        },
        (type_def, type_ext) => {
            return Err(SchemaBuildError::InvalidExtensionType {
                definition_keyword: type_def.keyword(),
                extension_keyword: type_ext.keyword(),
                location: type_ext.span().location(),
                type_name: type_ext.name().to_string(),
            });
        },
    }
    Ok(())
}

type RootOperations = HashMap<OperationKind, (String, Location)>;

fn resolve_root_operations(
    schema_def: Option<ast::SchemaDefinition>,
    schema_extensions: Vec<ast::SchemaDefinition>,
    types: &TypesMap,
) -> Result<(Option<String>, RootOperations)> {
    let mut roots = RootOperations::new();
    let description = schema_def.as_ref().and_then(|def| def.description.clone());

    if schema_def.is_none() && schema_extensions.is_empty() {
        for kind in [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription] {
            let default_name = match kind {
                OperationKind::Query => "Query",
                OperationKind::Mutation => "Mutation",
                OperationKind::Subscription => "Subscription",
            };
            if let Some(root_type) = types.get(default_name) {
                roots.insert(kind, (default_name.to_string(), root_type.def_location()));
            }
        }
    } else {
        let root_operations = schema_def
            .into_iter()
            .chain(schema_extensions)
            .flat_map(|def| def.root_operations);
        for root_op in root_operations {
            let location = root_op.span.location();
            if let Some((_, existing_location)) = roots.get(&root_op.kind) {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    location1: *existing_location,
                    location2: location,
                    operation: root_op.kind,
                });
            }
            roots.insert(root_op.kind, (root_op.type_name, location));
        }
    }

    let kinds = [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription];
    for (i, kind1) in kinds.iter().enumerate() {
        for kind2 in &kinds[i + 1..] {
            if let (Some((name1, _)), Some((name2, _))) = (roots.get(kind1), roots.get(kind2)) {
                if name1 == name2 {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        operation1: *kind1,
                        operation2: *kind2,
                        reused_type_name: name1.to_string(),
                    });
                }
            }
        }
    }
    Ok((description, roots))
}

fn build_type(
    type_def: ast::TypeDefinition,
    builtin: bool,
    scalar_parsers: &HashMap<String, Arc<dyn ScalarParser>>,
) -> Result<GraphQLType> {
    Ok(match type_def {
        ast::TypeDefinition::Enum(def) => {
            if def.values.is_empty() {
                return Err(SchemaBuildError::EnumWithNoVariants {
                    location: def.span.location(),
                    type_name: def.name,
                });
            }
            let mut values: IndexMap<String, EnumValue> =
                IndexMap::with_capacity(def.values.len());
            for value_def in def.values {
                let location = value_def.span.location();
                if let Some(existing) = values.get(&value_def.name) {
                    return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                        enum_name: def.name,
                        location1: existing.def_location(),
                        location2: location,
                        value_name: value_def.name,
                    });
                }
                values.insert(value_def.name.clone(), EnumValue {
                    def_location: location,
                    deprecation_reason: deprecation_reason(&value_def.directives),
                    description: value_def.description,
                    directives: value_def.directives,
                    name: value_def.name,
                });
            }
            GraphQLType::Enum(Box::new(EnumType {
                def_location: def.span.location(),
                description: def.description,
                directives: def.directives,
                name: def.name,
                values,
            }))
        },

        ast::TypeDefinition::InputObject(def) => {
            let fields = build_input_values(&def.name, def.fields, builtin)?;
            GraphQLType::InputObject(Box::new(InputObjectType {
                def_location: def.span.location(),
                description: def.description,
                directives: def.directives,
                fields,
                name: def.name,
            }))
        },

        ast::TypeDefinition::Interface(def) => GraphQLType::Interface(Box::new(
            build_object_or_interface(
                def.name,
                def.description,
                def.interfaces,
                def.directives,
                def.fields,
                def.span.location(),
                builtin,
            )?,
        )),

        ast::TypeDefinition::Object(def) => GraphQLType::Object(Box::new(
            build_object_or_interface(
                def.name,
                def.description,
                def.interfaces,
                def.directives,
                def.fields,
                def.span.location(),
                builtin,
            )?,
        )),

        ast::TypeDefinition::Scalar(def) => {
            let parser: Arc<dyn ScalarParser> = match def.name.as_str() {
                "Boolean" if builtin => Arc::new(BooleanScalar),
                "Float" if builtin => Arc::new(FloatScalar),
                "ID" if builtin => Arc::new(IdScalar),
                "Int" if builtin => Arc::new(IntScalar),
                "String" if builtin => Arc::new(StringScalar),
                name => scalar_parsers
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| Arc::new(CustomScalar)),
            };
            GraphQLType::Scalar(Box::new(ScalarType {
                def_location: def.span.location(),
                description: def.description,
                specified_by_url: specified_by_url(&def.directives),
                directives: def.directives,
                name: def.name,
                parser,
            }))
        },

        ast::TypeDefinition::Union(def) => {
            let location = def.span.location();
            let mut members: IndexMap<String, NamedGraphQLTypeRef> =
                IndexMap::with_capacity(def.members.len());
            for member_name in def.members {
                if members.contains_key(&member_name) {
                    return Err(SchemaBuildError::DuplicatedUnionMember {
                        location,
                        member_name,
                        union_name: def.name,
                    });
                }
                let member_ref = GraphQLType::named_ref(&member_name, location);
                members.insert(member_name, member_ref);
            }
            GraphQLType::Union(Box::new(UnionType {
                def_location: location,
                description: def.description,
                directives: def.directives,
                members,
                name: def.name,
            }))
        },
    })
}

fn build_object_or_interface(
    name: String,
    description: Option<String>,
    interface_names: Vec<String>,
    directives: Vec<ast::DirectiveAnnotation>,
    field_defs: Vec<ast::FieldDefinition>,
    def_location: Location,
    builtin: bool,
) -> Result<ObjectOrInterfaceType> {
    let mut interfaces: Vec<NamedGraphQLTypeRef> = Vec::with_capacity(interface_names.len());
    for iface_name in interface_names {
        if interfaces.iter().any(|iface| iface.name() == iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                duplicated_interface_name: iface_name,
                location: def_location,
                type_name: name,
            });
        }
        interfaces.push(GraphQLType::named_ref(&iface_name, def_location));
    }

    let mut fields: IndexMap<String, Field> = IndexMap::with_capacity(field_defs.len());
    for field_def in field_defs {
        let location = field_def.span.location();
        if !builtin && field_def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                field_name: field_def.name,
                location,
                type_name: name,
            });
        }
        if let Some(existing) = fields.get(&field_def.name) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_name: field_def.name,
                location1: existing.def_location(),
                location2: location,
                type_name: name,
            });
        }
        let owner_name = format!("{name}.{}", field_def.name);
        fields.insert(field_def.name.clone(), Field {
            arguments: build_input_values(&owner_name, field_def.arguments, builtin)?,
            def_location: location,
            deprecation_reason: deprecation_reason(&field_def.directives),
            description: field_def.description,
            directives: field_def.directives,
            name: field_def.name,
            type_annotation: field_def.field_type,
        });
    }

    Ok(ObjectOrInterfaceType {
        def_location,
        description,
        directives,
        fields,
        interfaces,
        name,
    })
}

/// Converts argument definitions (of a field or directive) or input object
/// fields. `owner_name` names the owner in errors.
fn build_input_values(
    owner_name: &str,
    defs: Vec<ast::InputValueDefinition>,
    builtin: bool,
) -> Result<IndexMap<String, InputValue>> {
    let mut input_values: IndexMap<String, InputValue> = IndexMap::with_capacity(defs.len());
    for def in defs {
        let location = def.span.location();
        if !builtin && def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                location,
                owner_name: owner_name.to_string(),
                param_name: def.name,
            });
        }
        if let Some(existing) = input_values.get(&def.name) {
            return Err(SchemaBuildError::DuplicateArgumentDefinition {
                argument_name: def.name,
                location1: existing.def_location(),
                location2: location,
                owner_name: owner_name.to_string(),
            });
        }
        input_values.insert(def.name.clone(), InputValue {
            def_location: location,
            default_value: def.default_value,
            deprecation_reason: deprecation_reason(&def.directives),
            description: def.description,
            directives: def.directives,
            name: def.name,
            type_annotation: def.value_type,
        });
    }
    Ok(input_values)
}

fn string_argument<'a>(
    directives: &'a [ast::DirectiveAnnotation],
    directive_name: &str,
    argument_name: &str,
) -> Option<Option<&'a str>> {
    let directive = directives.iter().find(|d| d.name == directive_name)?;
    Some(directive.argument(argument_name).and_then(|arg| match &arg.value {
        ast::Value::String(s) => Some(s.value.as_str()),
        _ => None,
    }))
}

fn deprecation_reason(directives: &[ast::DirectiveAnnotation]) -> Option<String> {
    string_argument(directives, "deprecated", "reason").map(|reason| {
        reason.unwrap_or(DEFAULT_DEPRECATION_REASON).to_string()
    })
}

fn specified_by_url(directives: &[ast::DirectiveAnnotation]) -> Option<String> {
    string_argument(directives, "specifiedBy", "url").flatten().map(str::to_string)
}
