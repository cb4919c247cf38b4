//! The type system half of `gqlengine`: a [`Schema`] registry built from SDL
//! by a [`SchemaBuilder`], the static [`validation`] rules run over
//! executable documents, and [`coercion`] of variables and literals into
//! runtime [`Value`]s.

pub mod coercion;
mod named_ref;
pub mod schema;
pub mod types;
pub mod validation;
mod value;

pub use gqlengine_parser;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use value::PathSegment;
pub use value::Value;

#[cfg(test)]
mod test_utils;
