use crate::ast::ast_node::push_indent;
use crate::ast::AstNode;
use crate::ast::OperationKind;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A query, mutation or subscription.
///
/// The shorthand form `{ ... }` parses to an anonymous `Query` with no
/// variables or directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        let shorthand = self.kind == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty();
        if !shorthand {
            sink.push_str(self.kind.as_str());
            if let Some(name) = &self.name {
                sink.push(' ');
                sink.push_str(name);
            }
            if !self.variable_definitions.is_empty() {
                sink.push('(');
                for (i, var_def) in self.variable_definitions.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    var_def.append_graphql(sink);
                }
                sink.push(')');
            }
            append_directives(&self.directives, sink);
            sink.push(' ');
        }
        self.selection_set.append_indented(0, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.var_type.append_graphql(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_graphql(sink);
        }
        append_directives(&self.directives, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: GraphQLSourceSpan,
}

impl SelectionSet {
    fn append_indented(&self, indent: usize, sink: &mut String) {
        sink.push_str("{\n");
        for selection in &self.selections {
            push_indent(sink, indent + 1);
            selection.append_indented(indent + 1, sink);
            sink.push('\n');
        }
        push_indent(sink, indent);
        sink.push('}');
    }
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn append_graphql(&self, sink: &mut String) {
        self.append_indented(0, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Selection::Field(field) => field.span,
            Selection::FragmentSpread(spread) => spread.span,
            Selection::InlineFragment(inline) => inline.span,
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(inline) => &inline.directives,
        }
    }

    fn append_indented(&self, indent: usize, sink: &mut String) {
        match self {
            Selection::Field(field) => field.append_indented(indent, sink),
            Selection::FragmentSpread(spread) => spread.append_graphql(sink),
            Selection::InlineFragment(inline) => {
                inline.append_indented(indent, sink)
            },
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn append_graphql(&self, sink: &mut String) {
        self.append_indented(0, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// A field selection, optionally aliased, with arguments, directives and a
/// nested selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: Option<SelectionSet>,
    pub span: GraphQLSourceSpan,
}

impl Field {
    /// The key this field's value is stored under in the response: the
    /// alias if present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    fn append_indented(&self, indent: usize, sink: &mut String) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
        append_directives(&self.directives, sink);
        if let Some(selection_set) = &self.selection_set {
            sink.push(' ');
            selection_set.append_indented(indent, sink);
        }
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_graphql(&self, sink: &mut String) {
        self.append_indented(0, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `name: value`
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_graphql(sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str("...");
        sink.push_str(&self.name);
        append_directives(&self.directives, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `... on Type @directives { ... }`; the type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

impl InlineFragment {
    fn append_indented(&self, indent: usize, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_indented(indent, sink);
    }
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_graphql(&self, sink: &mut String) {
        self.append_indented(0, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `fragment Name on Type @directives { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_indented(0, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// A directive applied to some node, e.g. `@include(if: $flag)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub span: GraphQLSourceSpan,
}

impl DirectiveAnnotation {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[inherent]
impl AstNode for DirectiveAnnotation {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

pub(crate) fn append_arguments(arguments: &[Argument], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            sink.push_str(", ");
        }
        arg.append_graphql(sink);
    }
    sink.push(')');
}

/// Writes each directive preceded by a space.
pub(crate) fn append_directives(
    directives: &[DirectiveAnnotation],
    sink: &mut String,
) {
    for directive in directives {
        sink.push(' ');
        directive.append_graphql(sink);
    }
}
