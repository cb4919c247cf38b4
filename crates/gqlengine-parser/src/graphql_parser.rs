//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] works with any token source implementing
//! [`GraphQLTokenSource`] and supports executable documents, schema (SDL)
//! documents and mixed documents.
//!
//! Parsing stops at the first syntax error. Each `parse_*` method mirrors one
//! grammar production and returns `Err` with a fully-formed
//! [`GraphQLParseError`] as soon as the input diverges from it.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use crate::ValueParsingError;

/// Lists, objects, list types and selection sets may not nest deeper than
/// this. Bounds stack usage on adversarial input.
pub const MAX_RECURSION_DEPTH: usize = 64;

type Result<T> = std::result::Result<T, GraphQLParseError>;

/// Which definitions a document may contain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DocumentKind {
    Executable,
    Schema,
    Mixed,
}

impl DocumentKind {
    fn name(&self) -> &'static str {
        match self {
            DocumentKind::Executable => "executable",
            DocumentKind::Schema => "schema",
            DocumentKind::Mixed => "mixed",
        }
    }

    fn allows(&self, definition: &ast::Definition) -> bool {
        match self {
            DocumentKind::Executable => definition.is_executable(),
            DocumentKind::Schema => !definition.is_executable(),
            DocumentKind::Mixed => true,
        }
    }
}

/// Type-system keywords that may follow a description.
const TYPE_SYSTEM_KEYWORDS: [&str; 8] = [
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
];

/// A recursive descent parser over a stream of GraphQL tokens.
///
/// ```rust
/// use gqlengine_parser::GraphQLParser;
///
/// let doc = GraphQLParser::new("{ hero { name } }")
///     .parse_executable_document()
///     .unwrap();
/// assert_eq!(doc.operations().count(), 1);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
    depth: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLParser<'src, TTokenSource>
{
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            depth: 0,
        }
    }

    /// Parse a document containing only operations and fragments.
    pub fn parse_executable_document(mut self) -> Result<ast::Document> {
        self.parse_document(DocumentKind::Executable)
    }

    /// Parse a document containing only type-system definitions and
    /// extensions.
    pub fn parse_schema_document(mut self) -> Result<ast::Document> {
        self.parse_document(DocumentKind::Schema)
    }

    /// Parse a document that may contain any kind of definition.
    pub fn parse_mixed_document(mut self) -> Result<ast::Document> {
        self.parse_document(DocumentKind::Mixed)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&self) -> &GraphQLToken<'src> {
        self.token_stream.peek()
    }

    fn peek_kind(&self) -> &GraphQLTokenKind<'src> {
        &self.token_stream.peek().kind
    }

    fn peek_is(&self, kind: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(self.peek_kind()) == std::mem::discriminant(kind)
    }

    fn peek_is_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek_kind(), GraphQLTokenKind::Name(name) if name == keyword)
    }

    fn peek_is_name(&self) -> bool {
        matches!(
            self.peek_kind(),
            GraphQLTokenKind::Name(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    fn peek_is_description(&self) -> bool {
        matches!(
            self.peek_kind(),
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_)
        )
    }

    fn start(&self) -> SourcePosition {
        self.peek().span.start_inclusive
    }

    fn span_from(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.token_stream.prev_span().end_exclusive)
    }

    /// Consumes the next token if it has the same kind as `kind`.
    fn eat(&mut self, kind: &GraphQLTokenKind<'_>) -> bool {
        if self.peek_is(kind) {
            self.token_stream.consume();
            true
        } else {
            false
        }
    }

    fn expect(
        &mut self,
        kind: &GraphQLTokenKind<'_>,
    ) -> Result<GraphQLSourceSpan> {
        if self.peek_is(kind) {
            return Ok(self.token_stream.consume().span);
        }
        let expected = kind.as_punctuator_str().unwrap_or("token");
        Err(self.unexpected(&[format!("`{expected}`").as_str()]))
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLSourceSpan> {
        if self.peek_is_keyword(keyword) {
            return Ok(self.token_stream.consume().span);
        }
        Err(self.unexpected(&[format!("`{keyword}`").as_str()]))
    }

    /// Names are lexically allowed to be `true`, `false` or `null`; the few
    /// contexts that forbid them check separately.
    fn expect_name(&mut self) -> Result<(String, GraphQLSourceSpan)> {
        if !self.peek_is_name() {
            return Err(self.unexpected(&["a name"]));
        }
        let token = self.token_stream.consume();
        let name = match token.kind {
            GraphQLTokenKind::Name(name) => name.into_owned(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            _ => "null".to_string(),
        };
        Ok((name, token.span))
    }

    fn unexpected(&self, expected: &[&str]) -> GraphQLParseError {
        error_for_token(self.peek(), expected)
    }

    /// Consumes the closing delimiter of a construct, reporting where it was
    /// opened if the input ends first.
    fn expect_closing(
        &mut self,
        close: &GraphQLTokenKind<'_>,
        open_span: GraphQLSourceSpan,
        construct: &str,
    ) -> Result<()> {
        if self.eat(close) {
            return Ok(());
        }
        let close_str = close.as_punctuator_str().unwrap_or("delimiter");
        if self.token_stream.is_at_end() {
            let open_str = match close_str {
                "}" => "{",
                ")" => "(",
                "]" => "[",
                other => other,
            };
            let mut error = GraphQLParseError::new(
                format!("unclosed `{open_str}` in {construct}"),
                self.peek().span,
                GraphQLParseErrorKind::UnclosedDelimiter {
                    delimiter: open_str.to_string(),
                },
            );
            error.add_note_with_span(format!("`{open_str}` opened here"), open_span);
            error.add_help(format!("add a closing `{close_str}`"));
            return Err(error);
        }
        Err(self.unexpected(&[format!("`{close_str}`").as_str()]))
    }

    fn enter_nesting(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(GraphQLParseError::new(
                format!("nesting exceeds the maximum depth of {MAX_RECURSION_DEPTH}"),
                self.peek().span,
                GraphQLParseErrorKind::RecursionLimitExceeded,
            ));
        }
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Documents and definitions
    // =========================================================================

    fn parse_document(&mut self, kind: DocumentKind) -> Result<ast::Document> {
        let start = self.start();
        let mut definitions = vec![];

        while !self.token_stream.is_at_end() {
            let definition = self.parse_definition()?;
            if !kind.allows(&definition) {
                let described = definition.describe();
                return Err(GraphQLParseError::new(
                    format!(
                        "{described} is not allowed in {} documents",
                        kind.name(),
                    ),
                    definition.span(),
                    GraphQLParseErrorKind::WrongDefinitionKind {
                        definition: described,
                        document_kind: kind.name(),
                    },
                ));
            }
            definitions.push(definition);
        }

        if definitions.is_empty() {
            return Err(GraphQLParseError::new(
                "a document must contain at least one definition",
                self.peek().span,
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "document".to_string(),
                },
            ));
        }

        Ok(ast::Document {
            definitions,
            span: self.span_from(start),
        })
    }

    fn parse_definition(&mut self) -> Result<ast::Definition> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ast::Definition::Operation(self.parse_operation()?));
        }

        if self.peek_is_description() {
            return self.parse_type_system_definition();
        }

        let keyword = match self.peek_kind() {
            GraphQLTokenKind::Name(name) => name.to_string(),
            _ => return Err(self.unexpected(&["a definition"])),
        };
        match keyword.as_str() {
            "query" | "mutation" | "subscription" => {
                Ok(ast::Definition::Operation(self.parse_operation()?))
            },
            "fragment" => Ok(ast::Definition::Fragment(self.parse_fragment_definition()?)),
            "extend" => self.parse_extension(),
            kw if TYPE_SYSTEM_KEYWORDS.contains(&kw) => {
                self.parse_type_system_definition()
            },
            _ => Err(self.unexpected(&["a definition"])),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn parse_operation(&mut self) -> Result<ast::OperationDefinition> {
        let start = self.start();

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                kind: ast::OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                span: self.span_from(start),
            });
        }

        let (keyword, _) = self.expect_name()?;
        let kind = ast::OperationKind::from_keyword(&keyword).ok_or_else(|| {
            GraphQLParseError::new(
                format!("expected `query`, `mutation` or `subscription`, found `{keyword}`"),
                self.token_stream.prev_span(),
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: vec!["an operation type".to_string()],
                    found: keyword.clone(),
                },
            )
        })?;

        let name = if self.peek_is_name() {
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        let open_span = self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut var_defs = vec![];
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            if self.token_stream.is_at_end() {
                break;
            }
            let start = self.start();
            self.expect(&GraphQLTokenKind::Dollar)?;
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let var_type = self.parse_type_annotation()?;
            let default_value = if self.eat(&GraphQLTokenKind::Equals) {
                Some(self.parse_value(true)?)
            } else {
                None
            };
            let directives = self.parse_directives(true)?;
            var_defs.push(ast::VariableDefinition {
                name,
                var_type,
                default_value,
                directives,
                span: self.span_from(start),
            });
        }
        self.expect_closing(&GraphQLTokenKind::ParenClose, open_span, "variable definitions")?;
        if var_defs.is_empty() {
            return Err(empty_construct("variable definition list", open_span));
        }
        Ok(var_defs)
    }

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet> {
        let start = self.start();
        let open_span = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.enter_nesting()?;

        let mut selections = vec![];
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)
            && !self.token_stream.is_at_end()
        {
            selections.push(self.parse_selection()?);
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose, open_span, "selection set")?;
        self.exit_nesting();

        if selections.is_empty() {
            return Err(empty_construct("selection set", self.span_from(start)));
        }
        Ok(ast::SelectionSet {
            selections,
            span: self.span_from(start),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            if !self.peek_is_name() {
                return Err(self.unexpected(&["a field", "`...`", "`}`"]));
            }
            return Ok(ast::Selection::Field(self.parse_field()?));
        }

        let start = self.start();
        self.token_stream.consume();

        if self.peek_is_name() && !self.peek_is_keyword("on") {
            let (name, _) = self.expect_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                span: self.span_from(start),
            }));
        }

        let type_condition = if self.peek_is_keyword("on") {
            self.token_stream.consume();
            Some(self.expect_name()?.0)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    fn parse_field(&mut self) -> Result<ast::Field> {
        let start = self.start();
        let (first, _) = self.expect_name()?;
        let (alias, name) = if self.eat(&GraphQLTokenKind::Colon) {
            (Some(first), self.expect_name()?.0)
        } else {
            (None, first)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> Result<Vec<ast::Argument>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        let open_span = self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut arguments = vec![];
        while !self.peek_is(&GraphQLTokenKind::ParenClose)
            && !self.token_stream.is_at_end()
        {
            let start = self.start();
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(is_const)?;
            arguments.push(ast::Argument {
                name,
                value,
                span: self.span_from(start),
            });
        }
        self.expect_closing(&GraphQLTokenKind::ParenClose, open_span, "argument list")?;
        if arguments.is_empty() {
            return Err(empty_construct("argument list", open_span));
        }
        Ok(arguments)
    }

    fn parse_directives(&mut self, is_const: bool) -> Result<Vec<ast::DirectiveAnnotation>> {
        let mut directives = vec![];
        while self.peek_is(&GraphQLTokenKind::At) {
            let start = self.start();
            self.token_stream.consume();
            let (name, _) = self.expect_name()?;
            let arguments = self.parse_arguments(is_const)?;
            directives.push(ast::DirectiveAnnotation {
                name,
                arguments,
                span: self.span_from(start),
            });
        }
        Ok(directives)
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition> {
        let start = self.start();
        self.expect_keyword("fragment")?;
        if self.peek_is_keyword("on") {
            let mut error = GraphQLParseError::new(
                "a fragment cannot be named `on`",
                self.peek().span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                },
            );
            error.add_help("give the fragment a name: `fragment Name on Type { ... }`");
            return Err(error);
        }
        let (name, _) = self.expect_name()?;
        self.expect_keyword("on")?;
        let (type_condition, _) = self.expect_name()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Values and types
    // =========================================================================

    fn parse_value(&mut self, is_const: bool) -> Result<ast::Value> {
        match self.peek_kind() {
            GraphQLTokenKind::Dollar => {
                let start = self.start();
                if is_const {
                    return Err(GraphQLParseError::new(
                        "variables are not allowed in constant values",
                        self.peek().span,
                        GraphQLParseErrorKind::UnexpectedToken {
                            expected: vec!["a constant value".to_string()],
                            found: "$".to_string(),
                        },
                    ));
                }
                self.token_stream.consume();
                let (name, _) = self.expect_name()?;
                return Ok(ast::Value::Variable(ast::VariableValue {
                    name,
                    span: self.span_from(start),
                }));
            },
            GraphQLTokenKind::SquareBracketOpen => {
                return self.parse_list_value(is_const);
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                return self.parse_object_value(is_const);
            },
            _ => (),
        }

        let token = self.token_stream.consume();
        let span = token.span;
        let value = match &token.kind {
            GraphQLTokenKind::IntValue(raw) => {
                let value = raw.parse::<i64>().map_err(|_| {
                    invalid_value(ValueParsingError::IntOverflow(raw.to_string()), span)
                })?;
                ast::Value::Int(ast::IntValue { value, span })
            },
            GraphQLTokenKind::FloatValue(raw) => {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| {
                        invalid_value(ValueParsingError::InvalidFloat(raw.to_string()), span)
                    })?;
                ast::Value::Float(ast::FloatValue { value, span })
            },
            GraphQLTokenKind::StringValue(_) | GraphQLTokenKind::BlockStringValue(_) => {
                let block = matches!(token.kind, GraphQLTokenKind::BlockStringValue(_));
                ast::Value::String(ast::StringValue {
                    value: decode_string(&token)?,
                    block,
                    span,
                })
            },
            GraphQLTokenKind::True => ast::Value::Boolean(ast::BooleanValue { value: true, span }),
            GraphQLTokenKind::False => ast::Value::Boolean(ast::BooleanValue { value: false, span }),
            GraphQLTokenKind::Null => ast::Value::Null(ast::NullValue { span }),
            GraphQLTokenKind::Name(name) => ast::Value::Enum(ast::EnumValue {
                value: name.to_string(),
                span,
            }),
            _ => return Err(error_for_token(&token, &["a value"])),
        };
        Ok(value)
    }

    fn parse_list_value(&mut self, is_const: bool) -> Result<ast::Value> {
        let start = self.start();
        let open_span = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.enter_nesting()?;
        let mut values = vec![];
        while !self.peek_is(&GraphQLTokenKind::SquareBracketClose)
            && !self.token_stream.is_at_end()
        {
            values.push(self.parse_value(is_const)?);
        }
        self.expect_closing(&GraphQLTokenKind::SquareBracketClose, open_span, "list value")?;
        self.exit_nesting();
        Ok(ast::Value::List(ast::ListValue {
            values,
            span: self.span_from(start),
        }))
    }

    fn parse_object_value(&mut self, is_const: bool) -> Result<ast::Value> {
        let start = self.start();
        let open_span = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.enter_nesting()?;
        let mut fields = vec![];
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)
            && !self.token_stream.is_at_end()
        {
            let field_start = self.start();
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(is_const)?;
            fields.push(ast::ObjectField {
                name,
                value,
                span: self.span_from(field_start),
            });
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose, open_span, "object value")?;
        self.exit_nesting();
        Ok(ast::Value::Object(ast::ObjectValue {
            fields,
            span: self.span_from(start),
        }))
    }

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation> {
        let start = self.start();
        let annotation = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            let open_span = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
            self.enter_nesting()?;
            let inner = self.parse_type_annotation()?;
            self.expect_closing(&GraphQLTokenKind::SquareBracketClose, open_span, "list type")?;
            self.exit_nesting();
            let nullable = !self.eat(&GraphQLTokenKind::Bang);
            ast::TypeAnnotation::List(ast::ListTypeAnnotation {
                inner: Box::new(inner),
                nullable,
                span: self.span_from(start),
            })
        } else {
            if !self.peek_is_name() {
                return Err(self.unexpected(&["a type"]));
            }
            let (name, _) = self.expect_name()?;
            let nullable = !self.eat(&GraphQLTokenKind::Bang);
            ast::TypeAnnotation::Named(ast::NamedTypeAnnotation {
                name,
                nullable,
                span: self.span_from(start),
            })
        };
        Ok(annotation)
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_description(&mut self) -> Result<Option<String>> {
        if !self.peek_is_description() {
            return Ok(None);
        }
        let token = self.token_stream.consume();
        Ok(Some(decode_string(&token)?))
    }

    fn parse_type_system_definition(&mut self) -> Result<ast::Definition> {
        let start = self.start();
        let description = self.parse_description()?;
        let keyword = match self.peek_kind() {
            GraphQLTokenKind::Name(name) if TYPE_SYSTEM_KEYWORDS.contains(&&**name) => {
                name.to_string()
            },
            _ => return Err(self.unexpected(&["a type-system definition"])),
        };

        if keyword == "schema" {
            let schema = self.parse_schema_body(start, description, false)?;
            return Ok(ast::Definition::Schema(schema));
        }
        if keyword == "directive" {
            return Ok(ast::Definition::Directive(
                self.parse_directive_definition(start, description)?,
            ));
        }
        let type_def = self.parse_type_definition(start, description)?;
        Ok(ast::Definition::Type(type_def))
    }

    fn parse_extension(&mut self) -> Result<ast::Definition> {
        let start = self.start();
        self.expect_keyword("extend")?;
        let keyword = match self.peek_kind() {
            GraphQLTokenKind::Name(name) => name.to_string(),
            _ => return Err(self.unexpected(&["an extendable definition"])),
        };
        match keyword.as_str() {
            "schema" => {
                let schema = self.parse_schema_body(start, None, true)?;
                if schema.directives.is_empty() && schema.root_operations.is_empty() {
                    return Err(empty_construct("schema extension", schema.span));
                }
                Ok(ast::Definition::SchemaExtension(schema))
            },
            "scalar" | "type" | "interface" | "union" | "enum" | "input" => {
                let type_def = self.parse_type_definition(start, None)?;
                if extension_is_empty(&type_def) {
                    return Err(empty_construct("type extension", type_def.span()));
                }
                Ok(ast::Definition::TypeExtension(type_def))
            },
            _ => Err(self.unexpected(&["an extendable definition"])),
        }
    }

    fn parse_schema_body(
        &mut self,
        start: SourcePosition,
        description: Option<String>,
        is_extension: bool,
    ) -> Result<ast::SchemaDefinition> {
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let mut root_operations = vec![];

        if is_extension && !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(ast::SchemaDefinition {
                description,
                directives,
                root_operations,
                span: self.span_from(start),
            });
        }

        let open_span = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)
            && !self.token_stream.is_at_end()
        {
            let op_start = self.start();
            let (keyword, keyword_span) = self.expect_name()?;
            let kind = ast::OperationKind::from_keyword(&keyword).ok_or_else(|| {
                GraphQLParseError::new(
                    format!("expected `query`, `mutation` or `subscription`, found `{keyword}`"),
                    keyword_span,
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec!["an operation type".to_string()],
                        found: keyword.clone(),
                    },
                )
            })?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let (type_name, _) = self.expect_name()?;
            root_operations.push(ast::RootOperationTypeDefinition {
                kind,
                type_name,
                span: self.span_from(op_start),
            });
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose, open_span, "schema definition")?;
        if root_operations.is_empty() {
            return Err(empty_construct("schema definition", open_span));
        }
        Ok(ast::SchemaDefinition {
            description,
            directives,
            root_operations,
            span: self.span_from(start),
        })
    }

    fn parse_type_definition(
        &mut self,
        start: SourcePosition,
        description: Option<String>,
    ) -> Result<ast::TypeDefinition> {
        let (keyword, _) = self.expect_name()?;
        let (name, _) = self.expect_name()?;

        let type_def = match keyword.as_str() {
            "scalar" => {
                let directives = self.parse_directives(true)?;
                ast::TypeDefinition::Scalar(ast::ScalarTypeDefinition {
                    description,
                    name,
                    directives,
                    span: self.span_from(start),
                })
            },
            "type" | "interface" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                let span = self.span_from(start);
                if keyword == "type" {
                    ast::TypeDefinition::Object(ast::ObjectTypeDefinition {
                        description,
                        name,
                        interfaces,
                        directives,
                        fields,
                        span,
                    })
                } else {
                    ast::TypeDefinition::Interface(ast::InterfaceTypeDefinition {
                        description,
                        name,
                        interfaces,
                        directives,
                        fields,
                        span,
                    })
                }
            },
            "union" => {
                let directives = self.parse_directives(true)?;
                let mut members = vec![];
                if self.eat(&GraphQLTokenKind::Equals) {
                    self.eat(&GraphQLTokenKind::Pipe);
                    loop {
                        members.push(self.expect_name()?.0);
                        if !self.eat(&GraphQLTokenKind::Pipe) {
                            break;
                        }
                    }
                }
                ast::TypeDefinition::Union(ast::UnionTypeDefinition {
                    description,
                    name,
                    directives,
                    members,
                    span: self.span_from(start),
                })
            },
            "enum" => {
                let directives = self.parse_directives(true)?;
                let values = self.parse_enum_values_definition()?;
                ast::TypeDefinition::Enum(ast::EnumTypeDefinition {
                    description,
                    name,
                    directives,
                    values,
                    span: self.span_from(start),
                })
            },
            _ => {
                let directives = self.parse_directives(true)?;
                let fields = self.parse_braced_input_values("input fields")?;
                ast::TypeDefinition::InputObject(ast::InputObjectTypeDefinition {
                    description,
                    name,
                    directives,
                    fields,
                    span: self.span_from(start),
                })
            },
        };

        Ok(type_def)
    }

    fn parse_implements_interfaces(&mut self) -> Result<Vec<String>> {
        let mut interfaces = vec![];
        if !self.peek_is_keyword("implements") {
            return Ok(interfaces);
        }
        self.token_stream.consume();
        self.eat(&GraphQLTokenKind::Ampersand);
        loop {
            interfaces.push(self.expect_name()?.0);
            if !self.eat(&GraphQLTokenKind::Ampersand) {
                break;
            }
        }
        Ok(interfaces)
    }

    fn parse_fields_definition(&mut self) -> Result<Vec<ast::FieldDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(vec![]);
        }
        let open_span = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut fields = vec![];
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)
            && !self.token_stream.is_at_end()
        {
            let start = self.start();
            let description = self.parse_description()?;
            let (name, _) = self.expect_name()?;
            let arguments = self.parse_argument_definitions()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let field_type = self.parse_type_annotation()?;
            let directives = self.parse_directives(true)?;
            fields.push(ast::FieldDefinition {
                description,
                name,
                arguments,
                field_type,
                directives,
                span: self.span_from(start),
            });
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose, open_span, "field definitions")?;
        if fields.is_empty() {
            return Err(empty_construct("field definition list", open_span));
        }
        Ok(fields)
    }

    fn parse_argument_definitions(&mut self) -> Result<Vec<ast::InputValueDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::ParenOpen) {
            return Ok(vec![]);
        }
        let open_span = self.expect(&GraphQLTokenKind::ParenOpen)?;
        let arguments = self.parse_input_values_until(&GraphQLTokenKind::ParenClose)?;
        self.expect_closing(&GraphQLTokenKind::ParenClose, open_span, "argument definitions")?;
        if arguments.is_empty() {
            return Err(empty_construct("argument definition list", open_span));
        }
        Ok(arguments)
    }

    fn parse_braced_input_values(
        &mut self,
        construct: &str,
    ) -> Result<Vec<ast::InputValueDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(vec![]);
        }
        let open_span = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let values = self.parse_input_values_until(&GraphQLTokenKind::CurlyBraceClose)?;
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose, open_span, construct)?;
        if values.is_empty() {
            return Err(empty_construct(construct, open_span));
        }
        Ok(values)
    }

    fn parse_input_values_until(
        &mut self,
        close: &GraphQLTokenKind<'_>,
    ) -> Result<Vec<ast::InputValueDefinition>> {
        let mut values = vec![];
        while !self.peek_is(close) && !self.token_stream.is_at_end() {
            let start = self.start();
            let description = self.parse_description()?;
            let (name, _) = self.expect_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value_type = self.parse_type_annotation()?;
            let default_value = if self.eat(&GraphQLTokenKind::Equals) {
                Some(self.parse_value(true)?)
            } else {
                None
            };
            let directives = self.parse_directives(true)?;
            values.push(ast::InputValueDefinition {
                description,
                name,
                value_type,
                default_value,
                directives,
                span: self.span_from(start),
            });
        }
        Ok(values)
    }

    fn parse_enum_values_definition(&mut self) -> Result<Vec<ast::EnumValueDefinition>> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(vec![]);
        }
        let open_span = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut values = vec![];
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose)
            && !self.token_stream.is_at_end()
        {
            let start = self.start();
            let description = self.parse_description()?;
            if matches!(
                self.peek_kind(),
                GraphQLTokenKind::True | GraphQLTokenKind::False | GraphQLTokenKind::Null
            ) {
                let name = self.peek_kind().display();
                return Err(GraphQLParseError::new(
                    format!("`{name}` cannot be used as an enum value"),
                    self.peek().span,
                    GraphQLParseErrorKind::ReservedName { name },
                ));
            }
            let (name, _) = self.expect_name()?;
            let directives = self.parse_directives(true)?;
            values.push(ast::EnumValueDefinition {
                description,
                name,
                directives,
                span: self.span_from(start),
            });
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose, open_span, "enum values")?;
        if values.is_empty() {
            return Err(empty_construct("enum value list", open_span));
        }
        Ok(values)
    }

    fn parse_directive_definition(
        &mut self,
        start: SourcePosition,
        description: Option<String>,
    ) -> Result<ast::DirectiveDefinition> {
        self.expect_keyword("directive")?;
        self.expect(&GraphQLTokenKind::At)?;
        let (name, _) = self.expect_name()?;
        let arguments = self.parse_argument_definitions()?;
        let repeatable = if self.peek_is_keyword("repeatable") {
            self.token_stream.consume();
            true
        } else {
            false
        };
        self.expect_keyword("on")?;
        self.eat(&GraphQLTokenKind::Pipe);
        let mut locations = vec![];
        loop {
            let (location_name, span) = self.expect_name()?;
            let location = ast::DirectiveLocation::from_name(&location_name)
                .ok_or_else(|| {
                    GraphQLParseError::new(
                        format!("unknown directive location `{location_name}`"),
                        span,
                        GraphQLParseErrorKind::UnknownDirectiveLocation(
                            location_name.clone(),
                        ),
                    )
                })?;
            locations.push(location);
            if !self.eat(&GraphQLTokenKind::Pipe) {
                break;
            }
        }
        Ok(ast::DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            span: self.span_from(start),
        })
    }
}

fn error_for_token(token: &GraphQLToken<'_>, expected: &[&str]) -> GraphQLParseError {
    let expected_list = expected.join(" or ");
    match &token.kind {
        GraphQLTokenKind::Error {
            message,
            error_notes,
        } => GraphQLParseError::from_lexer_error(
            message.clone(),
            token.span,
            error_notes.clone(),
        ),
        GraphQLTokenKind::Eof => GraphQLParseError::new(
            format!("expected {expected_list}, found end of input"),
            token.span,
            GraphQLParseErrorKind::UnexpectedEof {
                expected: expected.iter().map(|e| e.to_string()).collect(),
            },
        ),
        kind => {
            let found = kind.display();
            GraphQLParseError::new(
                format!("expected {expected_list}, found `{found}`"),
                token.span,
                GraphQLParseErrorKind::UnexpectedToken {
                    expected: expected.iter().map(|e| e.to_string()).collect(),
                    found,
                },
            )
        },
    }
}

fn empty_construct(construct: &str, span: GraphQLSourceSpan) -> GraphQLParseError {
    GraphQLParseError::new(
        format!("{construct} cannot be empty"),
        span,
        GraphQLParseErrorKind::InvalidEmptyConstruct {
            construct: construct.to_string(),
        },
    )
}

fn invalid_value(error: ValueParsingError, span: GraphQLSourceSpan) -> GraphQLParseError {
    GraphQLParseError::new(
        error.to_string(),
        span,
        GraphQLParseErrorKind::InvalidValue(error),
    )
}

fn decode_string(token: &GraphQLToken<'_>) -> Result<String> {
    match token.kind.parse_string_value() {
        Some(Ok(value)) => Ok(value),
        Some(Err(error)) => Err(invalid_value(error.into(), token.span)),
        None => Err(error_for_token(token, &["a string"])),
    }
}

fn extension_is_empty(type_def: &ast::TypeDefinition) -> bool {
    match type_def {
        ast::TypeDefinition::Enum(def) => def.directives.is_empty() && def.values.is_empty(),
        ast::TypeDefinition::InputObject(def) => {
            def.directives.is_empty() && def.fields.is_empty()
        },
        ast::TypeDefinition::Interface(def) => {
            def.directives.is_empty() && def.fields.is_empty() && def.interfaces.is_empty()
        },
        ast::TypeDefinition::Object(def) => {
            def.directives.is_empty() && def.fields.is_empty() && def.interfaces.is_empty()
        },
        ast::TypeDefinition::Scalar(def) => def.directives.is_empty(),
        ast::TypeDefinition::Union(def) => def.directives.is_empty() && def.members.is_empty(),
    }
}
