use crate::ast::ast_node::append_description;
use crate::ast::ast_node::push_indent;
use crate::ast::executable_defs::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveLocation;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// `schema { query: Query ... }`, also used for `extend schema`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub root_operations: Vec<RootOperationTypeDefinition>,
    pub span: GraphQLSourceSpan,
}

impl SchemaDefinition {
    pub(crate) fn append_with_keyword(&self, keyword: &str, sink: &mut String) {
        append_description(&self.description, 0, sink);
        sink.push_str(keyword);
        append_directives(&self.directives, sink);
        if self.root_operations.is_empty() {
            return;
        }
        sink.push_str(" {\n");
        for root_op in &self.root_operations {
            push_indent(sink, 1);
            root_op.append_graphql(sink);
            sink.push('\n');
        }
        sink.push('}');
    }
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        self.append_with_keyword("schema", sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `query: Query` inside a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition {
    pub kind: OperationKind,
    pub type_name: String,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for RootOperationTypeDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(self.kind.as_str());
        sink.push_str(": ");
        sink.push_str(&self.type_name);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// Any named-type definition (or extension, which shares the shape).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Object(ObjectTypeDefinition),
    Scalar(ScalarTypeDefinition),
    Union(UnionTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
        }
    }

    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            TypeDefinition::Enum(def) => def.span,
            TypeDefinition::InputObject(def) => def.span,
            TypeDefinition::Interface(def) => def.span,
            TypeDefinition::Object(def) => def.span,
            TypeDefinition::Scalar(def) => def.span,
            TypeDefinition::Union(def) => def.span,
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            TypeDefinition::Enum(def) => &def.directives,
            TypeDefinition::InputObject(def) => &def.directives,
            TypeDefinition::Interface(def) => &def.directives,
            TypeDefinition::Object(def) => &def.directives,
            TypeDefinition::Scalar(def) => &def.directives,
            TypeDefinition::Union(def) => &def.directives,
        }
    }

    /// The SDL keyword introducing this kind of type.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Object(_) => "type",
            TypeDefinition::Scalar(_) => "scalar",
            TypeDefinition::Union(_) => "union",
        }
    }

    /// Prints this definition, optionally as an `extend` clause.
    pub(crate) fn append_with_prefix(&self, extend: bool, sink: &mut String) {
        if !extend {
            let description = match self {
                TypeDefinition::Enum(def) => &def.description,
                TypeDefinition::InputObject(def) => &def.description,
                TypeDefinition::Interface(def) => &def.description,
                TypeDefinition::Object(def) => &def.description,
                TypeDefinition::Scalar(def) => &def.description,
                TypeDefinition::Union(def) => &def.description,
            };
            append_description(description, 0, sink);
        } else {
            sink.push_str("extend ");
        }
        sink.push_str(self.keyword());
        sink.push(' ');
        sink.push_str(self.name());

        match self {
            TypeDefinition::Enum(def) => {
                append_directives(&def.directives, sink);
                append_block(&def.values, sink, |value, sink| {
                    append_description(&value.description, 1, sink);
                    push_indent(sink, 1);
                    value.append_graphql(sink);
                });
            },
            TypeDefinition::InputObject(def) => {
                append_directives(&def.directives, sink);
                append_block(&def.fields, sink, |field, sink| {
                    append_description(&field.description, 1, sink);
                    push_indent(sink, 1);
                    field.append_without_description(sink);
                });
            },
            TypeDefinition::Interface(def) => {
                append_implements(&def.interfaces, sink);
                append_directives(&def.directives, sink);
                append_field_definitions(&def.fields, sink);
            },
            TypeDefinition::Object(def) => {
                append_implements(&def.interfaces, sink);
                append_directives(&def.directives, sink);
                append_field_definitions(&def.fields, sink);
            },
            TypeDefinition::Scalar(def) => {
                append_directives(&def.directives, sink);
            },
            TypeDefinition::Union(def) => {
                append_directives(&def.directives, sink);
                if !def.members.is_empty() {
                    sink.push_str(" = ");
                    sink.push_str(&def.members.join(" | "));
                }
            },
        }
    }
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        self.append_with_prefix(false, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub interfaces: Vec<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<FieldDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub members: Vec<String>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: Vec<EnumValueDefinition>,
    pub span: GraphQLSourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(&self.name);
        append_directives(&self.directives, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<String>,
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub fields: Vec<InputValueDefinition>,
    pub span: GraphQLSourceSpan,
}

/// A field on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        append_description(&self.description, 0, sink);
        sink.push_str(&self.name);
        append_argument_definitions(&self.arguments, sink);
        sink.push_str(": ");
        self.field_type.append_graphql(sink);
        append_directives(&self.directives, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// An argument definition or an input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<String>,
    pub name: String,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

impl InputValueDefinition {
    fn append_without_description(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value_type.append_graphql(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_graphql(sink);
        }
        append_directives(&self.directives, sink);
    }
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        append_description(&self.description, 0, sink);
        self.append_without_description(sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `directive @name(args) repeatable on LOCATION | ...`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<String>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        append_description(&self.description, 0, sink);
        sink.push_str("directive @");
        sink.push_str(&self.name);
        append_argument_definitions(&self.arguments, sink);
        if self.repeatable {
            sink.push_str(" repeatable");
        }
        sink.push_str(" on ");
        let locations: Vec<&str> =
            self.locations.iter().map(|loc| loc.as_str()).collect();
        sink.push_str(&locations.join(" | "));
    }

    pub fn to_graphql_string(&self) -> String;
}

fn append_implements(interfaces: &[String], sink: &mut String) {
    if !interfaces.is_empty() {
        sink.push_str(" implements ");
        sink.push_str(&interfaces.join(" & "));
    }
}

fn append_block<T>(
    items: &[T],
    sink: &mut String,
    mut append_item: impl FnMut(&T, &mut String),
) {
    if items.is_empty() {
        return;
    }
    sink.push_str(" {\n");
    for item in items {
        append_item(item, sink);
        sink.push('\n');
    }
    sink.push('}');
}

fn append_field_definitions(fields: &[FieldDefinition], sink: &mut String) {
    append_block(fields, sink, |field, sink| {
        append_description(&field.description, 1, sink);
        push_indent(sink, 1);
        sink.push_str(&field.name);
        append_argument_definitions(&field.arguments, sink);
        sink.push_str(": ");
        field.field_type.append_graphql(sink);
        append_directives(&field.directives, sink);
    });
}

/// Argument definitions print inline; a description forces the multi-line
/// form so the string does not run into the argument name.
fn append_argument_definitions(
    arguments: &[InputValueDefinition],
    sink: &mut String,
) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            sink.push_str(", ");
        }
        if let Some(description) = &arg.description {
            let mut quoted = String::new();
            crate::ast::ast_node::append_quoted_string(description, &mut quoted);
            sink.push_str(&quoted);
            sink.push(' ');
        }
        arg.append_without_description(sink);
    }
    sink.push(')');
}
