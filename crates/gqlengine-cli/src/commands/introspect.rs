use crate::graphql_files::find_graphql_files;
use crate::graphql_files::normalize_exts;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlengine::execution::ExecutableSchema;
use gqlengine::execution::Request;
use gqlengine::execution::INTROSPECTION_QUERY;
use gqlengine::SchemaBuilder;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectCmd {
    #[arg(
        help="Print the result on a single line.",
        long,
    )]
    compact: bool,

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
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="SCHEMA_FILE_OR_DIR_PATHS",
        required=true,
    )]
    schema_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for IntrospectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.introspect().await.unwrap_or_else(CommandResult::from_error)
    }
}

impl IntrospectCmd {
    async fn introspect(&self) -> anyhow::Result<CommandResult> {
        let exts = normalize_exts(&self.graphql_file_exts);
        let schema_files = find_graphql_files(&self.schema_paths, &exts)?;
        let schema = SchemaBuilder::new()
            .load_files(&schema_files.paths)
            .and_then(SchemaBuilder::build)
            .context("Errors validating schema")?;
        let executable = ExecutableSchema::builder(schema)
            .build()
            .context("Failed to prepare the schema for execution")?;

        log::debug!("Running the introspection query...");
        let response = executable.execute(Request::new(INTROSPECTION_QUERY)).await;
        if !response.is_ok() {
            let messages: Vec<_> = response.errors.iter().map(|err| err.to_string()).collect();
            anyhow::bail!("Introspection failed:\n{}", messages.join("\n"));
        }

        let json = response.to_json();
        let rendered =
            if self.compact {
                serde_json::to_string(&json)?
            } else {
                serde_json::to_string_pretty(&json)?
            };
        Ok(CommandResult::stdout(format_args!("{rendered}")))
    }
}
