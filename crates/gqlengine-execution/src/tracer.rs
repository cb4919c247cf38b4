//! Hooks observing request execution.
//!
//! Hooks only observe: they cannot change a response, and a panicking hook
//! is logged and otherwise ignored.

use crate::GraphQLError;
use gqlengine_core::coercion::Variables;
use gqlengine_core::PathSegment;
use gqlengine_core::Value;
use indexmap::IndexMap;
use std::panic::AssertUnwindSafe;

/// Describes the request being run.
#[derive(Clone, Copy, Debug)]
pub struct QueryTraceInfo<'a> {
    pub query: &'a str,
    pub operation_name: Option<&'a str>,
    pub variables: &'a Variables,
}

/// Describes one non-trivial field resolution. Fields answered by the
/// default resolver and `__typename` are never traced.
#[derive(Clone, Copy, Debug)]
pub struct FieldTraceInfo<'a> {
    pub type_name: &'a str,
    pub field_name: &'a str,
    pub arguments: &'a IndexMap<String, Value>,
    pub path: &'a [PathSegment],
}

pub trait Tracer: Send + Sync {
    fn query_started(&self, _info: &QueryTraceInfo<'_>) {}

    fn query_finished(&self, _info: &QueryTraceInfo<'_>, _errors: &[GraphQLError]) {}

    fn validation_started(&self, _info: &QueryTraceInfo<'_>) {}

    fn validation_finished(&self, _info: &QueryTraceInfo<'_>, _errors: &[GraphQLError]) {}

    fn field_started(&self, _info: &FieldTraceInfo<'_>) {}

    /// `error` is the error the resolver returned, if any.
    fn field_finished(&self, _info: &FieldTraceInfo<'_>, _error: Option<&GraphQLError>) {}

    /// A resolver returned a value that does not fit the field's type. The
    /// client only sees a generic error; `detail` says what was wrong.
    fn internal_error(&self, _info: &FieldTraceInfo<'_>, _detail: &str) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// Reports every hook as a `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingTracer;

impl Tracer for LoggingTracer {
    fn query_started(&self, info: &QueryTraceInfo<'_>) {
        tracing::info!(
            operation_name = info.operation_name,
            query = info.query,
            variables = info.variables.len(),
            "GraphQL request started",
        );
    }

    fn query_finished(&self, info: &QueryTraceInfo<'_>, errors: &[GraphQLError]) {
        match summarize_errors(errors) {
            Some(error) => tracing::info!(
                operation_name = info.operation_name,
                error = %error,
                "GraphQL request finished with errors",
            ),
            None => tracing::info!(operation_name = info.operation_name, "GraphQL request finished"),
        }
    }

    fn validation_finished(&self, _info: &QueryTraceInfo<'_>, errors: &[GraphQLError]) {
        if let Some(error) = summarize_errors(errors) {
            tracing::debug!(error = %error, "validation failed");
        }
    }

    fn field_started(&self, info: &FieldTraceInfo<'_>) {
        tracing::debug!(
            type_name = info.type_name,
            field_name = info.field_name,
            arguments = ?info.arguments,
            "resolving field",
        );
    }

    fn field_finished(&self, info: &FieldTraceInfo<'_>, error: Option<&GraphQLError>) {
        if let Some(error) = error {
            tracing::debug!(
                type_name = info.type_name,
                field_name = info.field_name,
                error = %error,
                "field resolver failed",
            );
        }
    }

    fn internal_error(&self, info: &FieldTraceInfo<'_>, detail: &str) {
        tracing::warn!(
            type_name = info.type_name,
            field_name = info.field_name,
            detail,
            "resolver returned an invalid value",
        );
    }
}

/// The first error's message, noting how many others there were.
fn summarize_errors(errors: &[GraphQLError]) -> Option<String> {
    let first = errors.first()?;
    Some(match errors.len() {
        1 => first.message.clone(),
        n => format!("{} (and {} more errors)", first.message, n - 1),
    })
}

/// Runs one tracer hook, swallowing (and logging) any panic it raises.
pub(crate) fn guarded(hook: &'static str, call: impl FnOnce()) {
    if std::panic::catch_unwind(AssertUnwindSafe(call)).is_err() {
        tracing::warn!(hook, "tracer hook panicked; ignoring");
    }
}
