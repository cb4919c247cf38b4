use crate::ast::ast_node::append_block_string;
use crate::ast::ast_node::append_quoted_string;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A literal or variable reference appearing in an argument, default value
/// or directive.
///
/// See [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(BooleanValue),
    Enum(EnumValue),
    Float(FloatValue),
    Int(IntValue),
    List(ListValue),
    Null(NullValue),
    Object(ObjectValue),
    String(StringValue),
    Variable(VariableValue),
}

impl Value {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Value::Boolean(v) => v.span,
            Value::Enum(v) => v.span,
            Value::Float(v) => v.span,
            Value::Int(v) => v.span,
            Value::List(v) => v.span,
            Value::Null(v) => v.span,
            Value::Object(v) => v.span,
            Value::String(v) => v.span,
            Value::Variable(v) => v.span,
        }
    }

    /// A short description of the literal's kind for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "Boolean",
            Value::Enum(_) => "Enum",
            Value::Float(_) => "Float",
            Value::Int(_) => "Int",
            Value::List(_) => "List",
            Value::Null(_) => "null",
            Value::Object(_) => "Object",
            Value::String(_) => "String",
            Value::Variable(_) => "Variable",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    /// Calls `visit` on every variable reference inside this value,
    /// including those nested in lists and objects.
    pub fn for_each_variable<'a>(&'a self, visit: &mut impl FnMut(&'a VariableValue)) {
        match self {
            Value::Variable(var) => visit(var),
            Value::List(list) => {
                for item in &list.values {
                    item.for_each_variable(visit);
                }
            },
            Value::Object(obj) => {
                for field in &obj.fields {
                    field.value.for_each_variable(visit);
                }
            },
            Value::Boolean(_)
            | Value::Enum(_)
            | Value::Float(_)
            | Value::Int(_)
            | Value::Null(_)
            | Value::String(_) => (),
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_graphql(&self, sink: &mut String) {
        match self {
            Value::Boolean(v) => v.append_graphql(sink),
            Value::Enum(v) => v.append_graphql(sink),
            Value::Float(v) => v.append_graphql(sink),
            Value::Int(v) => v.append_graphql(sink),
            Value::List(v) => v.append_graphql(sink),
            Value::Null(v) => v.append_graphql(sink),
            Value::Object(v) => v.append_graphql(sink),
            Value::String(v) => v.append_graphql(sink),
            Value::Variable(v) => v.append_graphql(sink),
        }
    }

    pub fn to_graphql_string(&self) -> String;
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(if self.value { "true" } else { "false" });
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(&self.value);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// A float literal. Values are always finite.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: f64,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn append_graphql(&self, sink: &mut String) {
        let text = self.value.to_string();
        sink.push_str(&text);
        // `1.0` displays as `1`, which would re-parse as an Int.
        if !text.contains(['.', 'e', 'E']) {
            sink.push_str(".0");
        }
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: i64,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for IntValue {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(&self.value.to_string());
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ListValue {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push('[');
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                sink.push_str(", ");
            }
            value.append_graphql(sink);
        }
        sink.push(']');
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for NullValue {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str("null");
    }

    pub fn to_graphql_string(&self) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub span: GraphQLSourceSpan,
}

impl ObjectValue {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn append_graphql(&self, sink: &mut String) {
        if self.fields.is_empty() {
            sink.push_str("{}");
            return;
        }
        sink.push_str("{ ");
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                sink.push_str(", ");
            }
            field.append_graphql(sink);
        }
        sink.push_str(" }");
    }

    pub fn to_graphql_string(&self) -> String;
}

/// A `name: value` entry inside an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_graphql(sink);
    }

    pub fn to_graphql_string(&self) -> String;
}

/// A decoded string literal. `block` records whether it was written with
/// triple quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for StringValue {
    pub fn append_graphql(&self, sink: &mut String) {
        if self.block {
            append_block_string(&self.value, 0, sink);
        } else {
            append_quoted_string(&self.value, sink);
        }
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `$name`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableValue {
    pub name: String,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for VariableValue {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.name);
    }

    pub fn to_graphql_string(&self) -> String;
}
