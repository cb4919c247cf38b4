use crate::parse_schema_document;

#[test]
fn display_includes_location() {
    let err = parse_schema_document("type User { name String }").unwrap_err();
    assert_eq!(err.to_string(), "expected `:`, found `String` (at 1:18)");
}

#[test]
fn format_detailed_quotes_source_line() {
    let source = "type User {\n  name String\n}";
    let err = parse_schema_document(source).unwrap_err();
    let detailed = err.format_detailed(Some(source));
    assert!(detailed.starts_with("error: expected `:`, found `String`\n  --> 2:8\n"));
    assert!(detailed.contains("2 |   name String\n"));
    assert!(detailed.contains("  |        ^\n"));
}

#[test]
fn format_detailed_renders_notes() {
    let source = "{ a";
    let err = crate::parse_executable_document(source).unwrap_err();
    let detailed = err.format_detailed(None);
    assert!(detailed.contains("= note: `{` opened here (at 1:1)"));
    assert!(detailed.contains("= help: add a closing `}`"));
}
