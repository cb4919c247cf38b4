use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// Root AST node for any GraphQL document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub span: GraphQLSourceSpan,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }

    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name == name)
    }
}

#[inherent]
impl AstNode for Document {
    pub fn append_graphql(&self, sink: &mut String) {
        for (i, def) in self.definitions.iter().enumerate() {
            if i > 0 {
                sink.push_str("\n\n");
            }
            def.append_graphql(sink);
        }
        if !self.definitions.is_empty() {
            sink.push('\n');
        }
    }

    pub fn to_graphql_string(&self) -> String;
}

/// A top-level definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Directive(DirectiveDefinition),
    Fragment(FragmentDefinition),
    Operation(OperationDefinition),
    Schema(SchemaDefinition),
    SchemaExtension(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeDefinition),
}

impl Definition {
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Fragment(_) | Definition::Operation(_))
    }

    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Definition::Directive(def) => def.span,
            Definition::Fragment(def) => def.span,
            Definition::Operation(def) => def.span,
            Definition::Schema(def) | Definition::SchemaExtension(def) => {
                def.span
            },
            Definition::Type(def) | Definition::TypeExtension(def) => {
                def.span()
            },
        }
    }

    /// A human-readable label, e.g. "type definition `Query`".
    pub fn describe(&self) -> String {
        match self {
            Definition::Directive(def) => {
                format!("directive definition `@{}`", def.name)
            },
            Definition::Fragment(def) => {
                format!("fragment definition `{}`", def.name)
            },
            Definition::Operation(def) => match &def.name {
                Some(name) => format!("{} operation `{name}`", def.kind),
                None => format!("anonymous {} operation", def.kind),
            },
            Definition::Schema(_) => "schema definition".to_string(),
            Definition::SchemaExtension(_) => "schema extension".to_string(),
            Definition::Type(def) => {
                format!("type definition `{}`", def.name())
            },
            Definition::TypeExtension(def) => {
                format!("type extension `{}`", def.name())
            },
        }
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn append_graphql(&self, sink: &mut String) {
        match self {
            Definition::Directive(def) => def.append_graphql(sink),
            Definition::Fragment(def) => def.append_graphql(sink),
            Definition::Operation(def) => def.append_graphql(sink),
            Definition::Schema(def) => def.append_with_keyword("schema", sink),
            Definition::SchemaExtension(def) => {
                def.append_with_keyword("extend schema", sink)
            },
            Definition::Type(def) => def.append_with_prefix(false, sink),
            Definition::TypeExtension(def) => {
                def.append_with_prefix(true, sink)
            },
        }
    }

    pub fn to_graphql_string(&self) -> String;
}
