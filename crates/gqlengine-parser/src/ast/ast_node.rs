use crate::token::parse_block_string;

/// Trait implemented by all AST node types to render them back to GraphQL
/// source text.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, so the
/// methods are callable without importing the trait.
///
/// The output is canonical rather than formatting-preserving: parsing the
/// printed text yields a tree equal to the original up to source spans.
pub trait AstNode {
    /// Append this node's GraphQL representation to `sink`.
    fn append_graphql(&self, sink: &mut String);

    /// Return this node as a GraphQL source string.
    fn to_graphql_string(&self) -> String {
        let mut s = String::new();
        self.append_graphql(&mut s);
        s
    }
}

pub(crate) fn push_indent(sink: &mut String, indent: usize) {
    for _ in 0..indent {
        sink.push_str("  ");
    }
}

/// Writes `value` as a quoted string literal with JSON-style escapes.
pub(crate) fn append_quoted_string(value: &str, sink: &mut String) {
    sink.push('"');
    for c in value.chars() {
        match c {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            c if c < '\u{0020}' || c == '\u{007F}' => {
                sink.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => sink.push(c),
        }
    }
    sink.push('"');
}

/// Writes `value` as a block string when some block form decodes back to
/// exactly `value`, and as a quoted string otherwise.
pub(crate) fn append_block_string(
    value: &str,
    indent: usize,
    sink: &mut String,
) {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");

    let mut multi_line = String::from("\"\"\"\n");
    for line in escaped.split('\n') {
        if !line.is_empty() {
            push_indent(&mut multi_line, indent);
        }
        multi_line.push_str(line);
        multi_line.push('\n');
    }
    push_indent(&mut multi_line, indent);
    multi_line.push_str("\"\"\"");

    // A trailing `"` would merge into the closing delimiter.
    let inline = (!escaped.ends_with('"'))
        .then(|| format!("\"\"\"{escaped}\"\"\""));

    for candidate in std::iter::once(multi_line).chain(inline) {
        if parse_block_string(&candidate).is_ok_and(|decoded| decoded == value) {
            sink.push_str(&candidate);
            return;
        }
    }
    append_quoted_string(value, sink);
}

/// Descriptions print as block strings when they span lines.
pub(crate) fn append_description(
    description: &Option<String>,
    indent: usize,
    sink: &mut String,
) {
    if let Some(text) = description {
        push_indent(sink, indent);
        if text.contains('\n') {
            append_block_string(text, indent, sink);
        } else {
            append_quoted_string(text, sink);
        }
        sink.push('\n');
    }
}
