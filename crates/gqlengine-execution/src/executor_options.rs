use std::time::Duration;

/// Limits applied to every request run by an
/// [`ExecutableSchema`](crate::ExecutableSchema). Everything is unlimited
/// by default.
#[derive(Clone, Debug, Default)]
pub struct ExecutorOptions {
    /// Deepest allowed field nesting, with root fields at depth 1. Checked
    /// during validation.
    pub max_depth: Option<usize>,

    /// Most resolvers allowed to run at once within a single request.
    pub max_parallelism: Option<usize>,

    /// Rejects documents that select `__schema` or `__type`.
    pub disable_introspection: bool,

    /// Longest accepted query text, in bytes.
    pub max_query_length: Option<usize>,

    /// Deadline applied to requests whose context does not carry one.
    pub default_timeout: Option<Duration>,
}
