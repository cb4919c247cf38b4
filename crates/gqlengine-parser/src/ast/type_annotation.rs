use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A reference to a type as written in a variable, argument or field
/// definition (e.g. `String`, `[Int!]!`).
///
/// Non-null is a flag on each level rather than a wrapping variant, so
/// `T!!` cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullable: bool) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable,
            span: GraphQLSourceSpan::default(),
        })
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            inner: Box::new(inner),
            nullable,
            span: GraphQLSourceSpan::default(),
        })
    }

    /// The name of the innermost named type (`[[Foo!]]!` -> `Foo`).
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::List(list) => list.inner.innermost_name(),
            TypeAnnotation::Named(named) => named.name.as_str(),
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(list) => list.nullable,
            TypeAnnotation::Named(named) => named.nullable,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeAnnotation::List(_))
    }

    /// This annotation with its outermost non-null marker removed.
    pub fn as_nullable(&self) -> TypeAnnotation {
        let mut nullable = self.clone();
        match &mut nullable {
            TypeAnnotation::List(list) => list.nullable = true,
            TypeAnnotation::Named(named) => named.nullable = true,
        }
        nullable
    }

    /// The element type of a list annotation.
    pub fn list_item(&self) -> Option<&TypeAnnotation> {
        match self {
            TypeAnnotation::List(list) => Some(&list.inner),
            TypeAnnotation::Named(_) => None,
        }
    }

    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            TypeAnnotation::List(list) => list.span,
            TypeAnnotation::Named(named) => named.span,
        }
    }

    /// Structural equality, ignoring spans.
    pub fn same_type(&self, other: &TypeAnnotation) -> bool {
        match (self, other) {
            (TypeAnnotation::List(a), TypeAnnotation::List(b)) => {
                a.nullable == b.nullable && a.inner.same_type(&b.inner)
            },
            (TypeAnnotation::Named(a), TypeAnnotation::Named(b)) => {
                a.nullable == b.nullable && a.name == b.name
            },
            _ => false,
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn append_graphql(&self, sink: &mut String) {
        match self {
            TypeAnnotation::List(list) => list.append_graphql(sink),
            TypeAnnotation::Named(named) => named.append_graphql(sink),
        }
    }

    pub fn to_graphql_string(&self) -> String;
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}

/// `[Inner]` or `[Inner]!`
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub inner: Box<TypeAnnotation>,
    pub nullable: bool,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ListTypeAnnotation {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push('[');
        self.inner.append_graphql(sink);
        sink.push(']');
        if !self.nullable {
            sink.push('!');
        }
    }

    pub fn to_graphql_string(&self) -> String;
}

/// `Name` or `Name!`
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub name: String,
    pub nullable: bool,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for NamedTypeAnnotation {
    pub fn append_graphql(&self, sink: &mut String) {
        sink.push_str(&self.name);
        if !self.nullable {
            sink.push('!');
        }
    }

    pub fn to_graphql_string(&self) -> String;
}
