//! Conversion of variable input and document literals into typed
//! [`Value`](crate::Value)s.
//!
//! Everything here reports every problem it finds rather than stopping at the
//! first one, so a request with several bad inputs gets every error back at
//! once.

mod argument_coercion;
mod coercion_error;
mod input_coercion;
mod variable_coercion;

pub use argument_coercion::coerce_argument_values;
pub use coercion_error::CoercionError;
pub use input_coercion::coerce_input_value;
pub use input_coercion::value_from_ast;
pub use variable_coercion::coerce_variable_values;

/// Variable values keyed by name (without the `$`).
pub type Variables = indexmap::IndexMap<String, crate::Value>;

#[cfg(test)]
mod tests;
