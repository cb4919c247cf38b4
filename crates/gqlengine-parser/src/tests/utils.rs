//! Various test utils.

use crate::ast;
use crate::parse_executable_document;
use crate::parse_mixed_document;
use crate::parse_schema_document;

pub fn parse_executable(source: &str) -> ast::Document {
    parse_executable_document(source)
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}

pub fn parse_schema(source: &str) -> ast::Document {
    parse_schema_document(source)
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}

pub fn parse_mixed(source: &str) -> ast::Document {
    parse_mixed_document(source)
        .unwrap_or_else(|err| panic!("{}", err.format_detailed(Some(source))))
}

pub fn first_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    doc.operations().next().expect("document has no operations")
}

pub fn first_field(selection_set: &ast::SelectionSet) -> &ast::Field {
    match &selection_set.selections[0] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

/// The `Debug` rendering of `node` with every `span: GraphQLSourceSpan {..}`
/// entry removed, for comparing trees that came from different source text.
pub fn debug_without_spans(node: &impl std::fmt::Debug) -> String {
    const MARKER: &str = "span: GraphQLSourceSpan {";
    let debug = format!("{node:?}");
    let mut out = String::with_capacity(debug.len());
    let mut rest = debug.as_str();
    while let Some(idx) = rest.find(MARKER) {
        out.push_str(&rest[..idx]);
        let mut depth = 0usize;
        let mut end = rest.len();
        for (i, c) in rest[idx..].char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end = idx + i + 1;
                        break;
                    }
                },
                _ => (),
            }
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}
