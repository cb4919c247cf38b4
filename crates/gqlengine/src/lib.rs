pub use gqlengine_core::*;

/// Running requests against a [`Schema`](crate::Schema): resolvers,
/// requests and responses, introspection, subscriptions and tracing hooks.
pub mod execution {
    pub use gqlengine_execution::*;
}

#[cfg(test)]
mod tests;
