use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// GraphQL files found under a set of input paths.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct GraphQLFiles {
    pub paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Normalizes extensions to their dotless form (`.graphql` and `graphql`
/// both become `graphql`).
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect()
}

/// Recursively collects every file at or under `input_paths` whose extension
/// is in `exts`, in a stable order.
///
/// A single file argument is always used, even if its extension doesn't
/// match: naming one file explicitly is taken to mean it should be read.
pub(crate) fn find_graphql_files(
    input_paths: &[PathBuf],
    exts: &HashSet<String>,
) -> anyhow::Result<GraphQLFiles> {
    log::debug!("Scanning {} input paths...", input_paths.len());
    let mut found = GraphQLFiles::default();
    for input_path in input_paths {
        for entry in WalkDir::new(input_path).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to read files at or under {}", input_path.display())
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if has_ext(path, exts) {
                log::trace!("Found GraphQL file at {path:#?}.");
                found.paths.push(path.to_path_buf());
            } else {
                log::trace!("Skipping non-GraphQL file: {path:#?}.");
                found.num_skipped_files += 1;
            }
        }
    }

    if found.paths.is_empty()
        && let [only_path] = input_paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any \
            of the GraphQL file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.paths.push(only_path.clone());
        found.num_skipped_files = 0;
    }

    log::debug!("Found {} GraphQL files.", found.paths.len());
    Ok(found)
}

fn has_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| exts.contains(ext.as_ref()))
}
