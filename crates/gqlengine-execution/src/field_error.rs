use gqlengine_core::Value;
use indexmap::IndexMap;

/// An error returned by a resolver. It becomes a [`GraphQLError`] at the
/// failing field's path and nulls that field (or, for a non-null field, its
/// nearest nullable ancestor).
///
/// [`GraphQLError`]: crate::GraphQLError
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub message: String,
    pub extensions: IndexMap<String, Value>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: IndexMap::new(),
        }
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}

impl From<String> for FieldError {
    fn from(message: String) -> Self {
        FieldError::new(message)
    }
}

impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        FieldError::new(message)
    }
}
