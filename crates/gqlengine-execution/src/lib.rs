//! Request execution for `gqlengine`.
//!
//! An [`ExecutableSchema`] pairs a [`gqlengine_core::Schema`] with the
//! resolvers bound to its object fields. [`ExecutableSchema::execute`] runs
//! a [`Request`] through parsing, validation, variable coercion and
//! execution and always produces a [`Response`]:
//!
//! ```no_run
//! # async fn run(schema: gqlengine_core::Schema) {
//! use gqlengine_execution::ExecutableSchema;
//! use gqlengine_execution::FieldError;
//! use gqlengine_execution::FieldValue;
//! use gqlengine_execution::Request;
//! use gqlengine_execution::ResolverContext;
//!
//! let executable = ExecutableSchema::builder(schema)
//!     .resolver("Query", "hello", |_ctx: ResolverContext| async move {
//!         Ok::<_, FieldError>(FieldValue::from("world"))
//!     })
//!     .build()
//!     .unwrap();
//! let response = executable.execute(Request::new("{ hello }")).await;
//! assert!(response.is_ok());
//! # }
//! ```
//!
//! Sibling fields resolve concurrently; top-level mutation fields resolve
//! one at a time. A field error nulls the nearest nullable ancestor and is
//! reported once in [`Response::errors`].

mod directives;
mod executable_schema;
mod executor;
mod executor_options;
mod field_error;
mod field_value;
mod graphql_error;
mod introspection;
mod request;
mod resolver;
mod resolver_table_error;
mod response;
mod subscription;
mod tracer;

pub use directives::should_include;
pub use executable_schema::ExecutableSchema;
pub use executable_schema::ExecutableSchemaBuilder;
pub use executor_options::ExecutorOptions;
pub use field_error::FieldError;
pub use field_value::FieldValue;
pub use graphql_error::GraphQLError;
pub use introspection::INTROSPECTION_QUERY;
pub use request::Request;
pub use request::RequestContext;
pub use resolver::EventStream;
pub use resolver::FieldResolver;
pub use resolver::ResolverContext;
pub use resolver::SubscriptionResolver;
pub use resolver_table_error::ResolverTableError;
pub use response::Response;
pub use tracer::FieldTraceInfo;
pub use tracer::LoggingTracer;
pub use tracer::NoopTracer;
pub use tracer::QueryTraceInfo;
pub use tracer::Tracer;

#[cfg(test)]
mod tests;
