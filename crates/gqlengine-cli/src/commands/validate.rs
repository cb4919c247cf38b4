use crate::graphql_files::find_graphql_files;
use crate::graphql_files::normalize_exts;
use crate::graphql_files::GraphQLFiles;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlengine::gqlengine_parser;
use gqlengine::gqlengine_parser::Location;
use gqlengine::validation::validate;
use gqlengine::validation::ValidationOptions;
use gqlengine::Schema;
use gqlengine::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Reject operations whose selections nest deeper than this.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="Paths to GraphQL operation documents (or directories of them) \
             to validate against the schema.",
        long="operations",
        short='o',
        value_name="FILE_OR_DIR_PATH",
    )]
    operation_paths: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files which need to be validated.",
        name="SCHEMA_FILE_OR_DIR_PATHS",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.validate().unwrap_or_else(CommandResult::from_error)
    }
}

impl ValidateCmd {
    fn validate(&self) -> anyhow::Result<CommandResult> {
        let exts = normalize_exts(&self.graphql_file_exts);
        let schema_files = find_graphql_files(&self.schema_paths, &exts)?;
        let schema = SchemaBuilder::new()
            .load_files(&schema_files.paths)
            .and_then(SchemaBuilder::build)
            .context("Errors validating schema")?;
        log::debug!("Schema built from {} files.", schema_files.paths.len());

        let operation_files =
            if self.operation_paths.is_empty() {
                GraphQLFiles::default()
            } else {
                find_graphql_files(&self.operation_paths, &exts)?
            };
        let options = ValidationOptions {
            max_depth: self.max_depth,
        };
        let mut problems = vec![];
        let mut num_operations = 0;
        for path in &operation_files.paths {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            match gqlengine_parser::parse_executable_document(&source) {
                Ok(document) => {
                    num_operations += document.operations().count();
                    for error in validate(&schema, &document, &options) {
                        problems.push(describe_problem(path, &error.message, &error.locations));
                    }
                },
                Err(err) => problems.push(describe_problem(
                    path,
                    &format!("Syntax Error: {}", err.message()),
                    &[err.location()],
                )),
            }
        }

        if !problems.is_empty() {
            return Ok(CommandResult::stderr(format_args!(
                "{} {} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                problems.len(),
                problems.join("\n"),
            )));
        }

        Ok(CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            schema_files.paths.len() + operation_files.paths.len(),
            schema_files.num_skipped_files + operation_files.num_skipped_files,
            count_defined_types(&schema),
            schema.directives().values().filter(|d| !d.is_builtin()).count(),
            num_operations,
        )))
    }
}

fn count_defined_types(schema: &Schema) -> usize {
    schema
        .types()
        .keys()
        .filter(|name| !name.starts_with("__") && !BUILTIN_SCALAR_NAMES.contains(&name.as_str()))
        .count()
}

/// `path:line:column: message`, using the first location when there are
/// several.
pub(crate) fn describe_problem(path: &Path, message: &str, locations: &[Location]) -> String {
    match locations.first() {
        Some(loc) => format!("{}:{loc}: {message}", path.display()),
        None => format!("{}: {message}", path.display()),
    }
}
