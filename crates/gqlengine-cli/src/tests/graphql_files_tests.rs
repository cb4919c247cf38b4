use super::ScratchDir;
use crate::graphql_files::find_graphql_files;
use crate::graphql_files::normalize_exts;

fn default_exts() -> std::collections::HashSet<String> {
    normalize_exts(&[".graphql".to_string(), "graphqls".to_string()])
}

#[test]
fn normalizes_leading_dots() {
    let exts = default_exts();
    assert!(exts.contains("graphql"));
    assert!(exts.contains("graphqls"));
    assert_eq!(exts.len(), 2);
}

#[test]
fn finds_matching_files_recursively_in_name_order() {
    let dir = ScratchDir::new("recursive");
    let b = dir.write("b.graphql", "type B { x: Int }");
    let a = dir.write("nested/a.graphqls", "type A { x: Int }");
    dir.write("notes.txt", "not graphql");

    let found = find_graphql_files(&[dir.path().clone()], &default_exts()).unwrap();

    assert_eq!(found.paths, [b, a]);
    assert_eq!(found.num_skipped_files, 1);
}

#[test]
fn a_single_explicit_file_is_used_whatever_its_extension() {
    let dir = ScratchDir::new("explicit");
    let schema = dir.write("schema.sdl", "type Query { x: Int }");

    let found = find_graphql_files(&[schema.clone()], &default_exts()).unwrap();

    assert_eq!(found.paths, [schema]);
    assert_eq!(found.num_skipped_files, 0);
}

#[test]
fn missing_paths_are_errors() {
    let dir = ScratchDir::new("missing");
    let err = find_graphql_files(&[dir.path().join("nope")], &default_exts()).unwrap_err();
    assert!(format!("{err:#}").starts_with("Failed to read files at or under"), "{err:#}");
}
