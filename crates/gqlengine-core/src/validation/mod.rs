//! Static validation of executable documents against a [`Schema`].
//!
//! [`validate()`] runs every rule over the document, one full traversal per
//! rule, in a fixed order, and returns everything they report. A document
//! with any errors must not be executed.
//!
//! https://spec.graphql.org/October2021/#sec-Validation

mod rules;
mod validation_context;
mod validation_error;
mod visitor;

pub(crate) use validation_context::ValidationContext;
pub use validation_error::ValidationError;
pub use validation_error::ValidationOptions;

use crate::schema::Schema;
use gqlengine_parser::ast;

pub fn validate(
    schema: &Schema,
    document: &ast::Document,
    options: &ValidationOptions,
) -> Vec<ValidationError> {
    let mut ctx = ValidationContext::new(schema, document, options);
    for (rule_name, mut rule) in rules::ordered_rules() {
        ctx.current_rule = rule_name;
        visitor::walk_document(&mut ctx, rule.as_mut());
    }
    tracing::debug!(
        definitions = document.definitions.len(),
        errors = ctx.errors.len(),
        "validated document",
    );
    ctx.errors
}

#[cfg(test)]
mod tests;
