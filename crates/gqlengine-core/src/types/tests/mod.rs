mod scalar_parser_tests;

use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::TypeValidationError;

/// The type-validation errors produced by building `sdl`, or none if it
/// builds.
fn type_errors(sdl: &str) -> Vec<TypeValidationError> {
    let result = SchemaBuilder::new()
        .load_str(sdl)
        .and_then(SchemaBuilder::build);
    match result {
        Ok(_) => vec![],
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        Err(other) => panic!("unexpected build error: {other}"),
    }
}
