mod introspect;
mod validate;

use crate::Cli;
use crate::CommandResult;
use introspect::IntrospectCmd;
use validate::ValidateCmd;

pub(crate) use validate::describe_problem;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlengine")]
pub(crate) enum CommandEnum {
    /// Print the result of the standard introspection query against a
    /// schema as JSON.
    Introspect(Box<IntrospectCmd>),

    /// Check schema files and, optionally, operation documents against them.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Introspect(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
