use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ScalarParser;
use crate::Value;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationKind;
use gqlengine_parser::Location;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn build_err(sdl: &str) -> SchemaBuildError {
    match SchemaBuilder::new().load_str(sdl).and_then(SchemaBuilder::build) {
        Ok(_) => panic!("expected the schema to be rejected"),
        Err(err) => err,
    }
}

fn type_validation_errors(sdl: &str) -> Vec<TypeValidationError> {
    match build_err(sdl) {
        SchemaBuildError::TypeValidationErrors { errors } => errors,
        other => panic!("expected type validation errors, got {other:?}"),
    }
}

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        assert_eq!(
            SchemaBuilder::new().build().err(),
            Some(SchemaBuildError::NoQueryOperationTypeDefined),
        );
    }

    #[test]
    fn default_root_operation_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("type Query { a: Int } type Mutation { b: Int } type Subscription { c: Int }")?
            .build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.subscription_type_name(), Some("Subscription"));
        assert!(schema.root_type(OperationKind::Mutation).is_some());
        Ok(())
    }

    #[test]
    fn explicit_schema_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "\"The root.\" schema { query: Root }\n",
                "type Root { a: Int }\n",
                "type Mutation { b: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.description(), Some("The root."));
        assert_eq!(schema.query_type_name(), "Root");
        // Once a schema definition exists, the default names are not used.
        assert_eq!(schema.mutation_type_name(), None);
        assert_eq!(schema.root_type_name(OperationKind::Subscription), None);
        Ok(())
    }

    #[test]
    fn definitions_may_span_sources_in_any_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("type Query { me: User }")?
            .load_str("type User { name: String }")?
            .build()?;

        assert!(schema.get_type("User").is_some_and(|t| t.as_object().is_some()));
        Ok(())
    }

    #[test]
    fn builtins_are_always_present() -> Result<()> {
        let schema = SchemaBuilder::new().load_str("type Query { a: Int }")?.build()?;

        for name in ["Boolean", "Float", "ID", "Int", "String", "__Schema", "__Type", "__TypeKind"] {
            assert!(schema.get_type(name).is_some(), "missing `{name}`");
        }
        for name in ["include", "skip", "deprecated", "specifiedBy"] {
            assert!(schema.directive(name).is_some_and(|d| d.is_builtin()), "missing `@{name}`");
        }
        Ok(())
    }

    #[test]
    fn restated_builtin_scalars_are_ignored() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("scalar String type Query { a: String }")?
            .build()?;

        let string_type = schema.get_type("String").and_then(GraphQLType::as_scalar);
        assert!(string_type.is_some_and(|t| t.description().is_some()));
        Ok(())
    }

    #[test]
    fn load_missing_file() {
        let err = SchemaBuilder::new()
            .load_file("/definitely/not/here.graphql")
            .err();
        assert!(matches!(err, Some(SchemaBuildError::SchemaFileReadError { .. })));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!(
            build_err("type Query {"),
            SchemaBuildError::ParseError { file: None, .. },
        ));
    }
}

mod definitions {
    use super::*;

    #[test]
    fn executable_definitions_are_rejected() {
        let document =
            gqlengine_parser::parse_mixed_document("type Query { a: Int } query { a }").unwrap();
        match SchemaBuilder::new().load_document(document) {
            Err(SchemaBuildError::ExecutableDefinitionInSchema { location, .. }) => {
                assert_eq!(location, Location { line: 1, column: 23 });
            },
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("expected the document to be rejected"),
        }
    }

    #[test]
    fn sdl_strings_do_not_parse_operations() {
        assert!(matches!(
            build_err("type Query { a: Int } query { a }"),
            SchemaBuildError::ParseError { file: None, .. },
        ));
    }

    #[test]
    fn duplicate_type() {
        assert_eq!(
            build_err("type Query { a: Int }\ntype Query { b: Int }"),
            SchemaBuildError::DuplicateTypeDefinition {
                location1: Location { line: 1, column: 1 },
                location2: Location { line: 2, column: 1 },
                type_name: "Query".to_string(),
            },
        );
    }

    #[test]
    fn duplicate_field() {
        assert!(matches!(
            build_err("type Query { a: Int a: String }"),
            SchemaBuildError::DuplicateFieldNameDefinition { field_name, type_name, .. }
                if field_name == "a" && type_name == "Query",
        ));
    }

    #[test]
    fn duplicate_argument() {
        assert!(matches!(
            build_err("type Query { a(x: Int, x: Int): Int }"),
            SchemaBuildError::DuplicateArgumentDefinition { argument_name, owner_name, .. }
                if argument_name == "x" && owner_name == "Query.a",
        ));
    }

    #[test]
    fn duplicate_enum_value() {
        assert!(matches!(
            build_err("type Query { a: E } enum E { A A }"),
            SchemaBuildError::DuplicateEnumValueDefinition { value_name, .. } if value_name == "A",
        ));
    }

    #[test]
    fn duplicate_union_member() {
        assert!(matches!(
            build_err("type Query { a: U } type A { a: Int } union U = A | A"),
            SchemaBuildError::DuplicatedUnionMember { member_name, .. } if member_name == "A",
        ));
    }

    #[test]
    fn dunder_names_are_reserved() {
        assert!(matches!(
            build_err("type Query { a: Int } type __Mine { a: Int }"),
            SchemaBuildError::InvalidDunderPrefixedTypeName { .. },
        ));
        assert!(matches!(
            build_err("type Query { __a: Int }"),
            SchemaBuildError::InvalidDunderPrefixedFieldName { .. },
        ));
        assert!(matches!(
            build_err("type Query { a(__x: Int): Int }"),
            SchemaBuildError::InvalidDunderPrefixedParamName { .. },
        ));
        assert!(matches!(
            build_err("type Query { a: Int } directive @__d on FIELD"),
            SchemaBuildError::InvalidDunderPrefixedDirectiveName { .. },
        ));
    }

    #[test]
    fn builtin_directives_cannot_be_redefined() {
        assert!(matches!(
            build_err("type Query { a: Int } directive @skip(if: Boolean!) on FIELD"),
            SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. }
                if directive_name == "skip",
        ));
    }

    #[test]
    fn custom_directive() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "type Query { a: Int }\n",
                "directive @cache(ttl: Int = 60) repeatable on FIELD | QUERY\n",
            ))?
            .build()?;

        let cache = schema.directive("cache").expect("directive is defined");
        assert!(cache.is_repeatable());
        assert!(!cache.is_builtin());
        assert!(cache.allows_location(ast::DirectiveLocation::Query));
        assert!(!cache.allows_location(ast::DirectiveLocation::Mutation));
        assert!(cache.arguments()["ttl"].default_value().is_some());
        Ok(())
    }

    #[test]
    fn deprecation() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "type Query {\n",
                "  a: Int @deprecated\n",
                "  b: Int @deprecated(reason: \"use a\")\n",
                "  c: Int\n",
                "}\n",
            ))?
            .build()?;

        let query = schema.get_type("Query").expect("Query is defined");
        let reason = |name: &str| query.field(name).and_then(|f| f.deprecation_reason());
        assert_eq!(reason("a"), Some("No longer supported"));
        assert_eq!(reason("b"), Some("use a"));
        assert_eq!(reason("c"), None);
        Ok(())
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_merge_into_their_base_type() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("extend type Query { b: Int } extend enum E { B }")?
            .load_str("type Query { a: E } enum E { A }")?
            .build()?;

        let query = schema.get_type("Query").expect("Query is defined");
        let field_names: Vec<_> = query.fields().expect("has fields").keys().collect();
        assert_eq!(field_names, vec!["a", "b"]);

        let enum_type = schema.get_type("E").and_then(GraphQLType::as_enum).expect("E is an enum");
        assert_eq!(enum_type.values().keys().collect::<Vec<_>>(), vec!["A", "B"]);
        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        assert!(matches!(
            build_err("type Query { a: Int } extend type Missing { b: Int }"),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. } if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_kind_must_match() {
        assert_eq!(
            build_err("type Query { a: Int } input Foo { a: Int } extend type Foo { b: Int }"),
            SchemaBuildError::InvalidExtensionType {
                definition_keyword: "input",
                extension_keyword: "type",
                location: Location { line: 1, column: 44 },
                type_name: "Foo".to_string(),
            },
        );
    }

    #[test]
    fn schema_extension_adds_root_operations() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "schema { query: Query }\n",
                "extend schema { mutation: Mutation }\n",
                "type Query { a: Int }\n",
                "type Mutation { b: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        Ok(())
    }
}

mod root_operations {
    use super::*;

    #[test]
    fn duplicate_root_operation() {
        assert!(matches!(
            build_err("schema { query: Query } extend schema { query: Query } type Query { a: Int }"),
            SchemaBuildError::DuplicateOperationDefinition { operation: OperationKind::Query, .. },
        ));
    }

    #[test]
    fn roots_must_be_distinct_types() {
        assert_eq!(
            build_err("schema { query: Query mutation: Query } type Query { a: Int }"),
            SchemaBuildError::NonUniqueOperationTypes {
                operation1: OperationKind::Query,
                operation2: OperationKind::Mutation,
                reused_type_name: "Query".to_string(),
            },
        );
    }

    #[test]
    fn roots_must_be_object_types() {
        let errors = type_validation_errors(
            "schema { query: Query mutation: In } type Query { a: Int } input In { a: Int }",
        );
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::InvalidRootOperationType { operation: OperationKind::Mutation, .. }],
        ));
    }
}

mod type_validation {
    use super::*;

    #[test]
    fn every_error_is_collected() {
        let errors = type_validation_errors(concat!(
            "type Query { a: Missing b(x: Query): Int }\n",
            "union U = Query | In\n",
            "input In { q: Query }\n",
        ));
        assert_eq!(errors.len(), 4, "{errors:#?}");
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. }
                if undefined_type_name == "Missing",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidParameterWithOutputType { parameter_name, .. }
                if parameter_name == "x",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidUnionMemberTypeKind { invalid_member_type_name, .. }
                if invalid_member_type_name == "In",
        )));
        assert!(errors.iter().any(|err| matches!(
            err,
            TypeValidationError::InvalidInputFieldWithOutputType { field_name, .. }
                if field_name == "q",
        )));
    }

    #[test]
    fn directive_parameters_must_be_input_types() {
        let errors = type_validation_errors(
            "type Query { a: Int } directive @d(q: Query) on FIELD",
        );
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::InvalidParameterWithOutputType { owner_name, .. }]
                if owner_name == "@d",
        ));
    }

    #[test]
    fn error_display_lists_each_problem() {
        let err = build_err("type Query { a: Missing }");
        assert_eq!(
            err.to_string(),
            "Encountered the following type-validation errors while building the schema:\n\n  \
            * Reference to undefined type `Missing` (at 1:14)",
        );
    }
}

mod custom_scalars {
    use super::*;

    struct UpperCase;

    impl ScalarParser for UpperCase {
        fn parse_value(&self, value: &Value) -> std::result::Result<Value, String> {
            value
                .as_str()
                .map(|s| Value::String(s.to_uppercase()))
                .ok_or_else(|| format!("UpperCase cannot represent value: {value}"))
        }

        fn parse_literal(&self, literal: &ast::Value) -> std::result::Result<Value, String> {
            self.parse_value(&Value::from_literal(literal))
        }

        fn serialize(&self, value: &Value) -> std::result::Result<Value, String> {
            self.parse_value(value)
        }
    }

    #[test]
    fn registered_parser_is_used() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("scalar Shout type Query { a: Shout }")?
            .register_scalar("Shout", UpperCase)
            .build()?;

        let parser = schema.get_type("Shout").and_then(GraphQLType::as_scalar).expect("scalar").parser();
        assert_eq!(parser.parse_value(&Value::from("hey")), Ok(Value::from("HEY")));
        Ok(())
    }

    #[test]
    fn unregistered_custom_scalar_passes_values_through() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("scalar Json type Query { a: Json }")?
            .build()?;

        let parser = schema.get_type("Json").and_then(GraphQLType::as_scalar).expect("scalar").parser();
        let value = Value::object([("k", Value::from(vec![1, 2]))]);
        assert_eq!(parser.parse_value(&value), Ok(value.clone()));
        Ok(())
    }

    #[test]
    fn registering_an_undefined_scalar_fails() {
        let err = SchemaBuilder::new()
            .load_str("type Query { a: Int }")
            .map(|builder| builder.register_scalar("Nope", UpperCase))
            .and_then(SchemaBuilder::build)
            .err();
        assert_eq!(
            err,
            Some(SchemaBuildError::UndefinedRegisteredScalar { scalar_name: "Nope".to_string() }),
        );
    }
}
