use crate::GraphQLError;
use gqlengine_core::Value;

/// The result of executing one request (or one subscription event).
///
/// `data` is `None` when execution never started, e.g. because the document
/// failed to parse or validate, and `Some(Value::Null)` when a
/// non-nullable root field nulled the whole result.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

impl Response {
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: vec![],
        }
    }

    /// A response for a request that was rejected before execution.
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: None,
            errors,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::Map::new();
        if let Some(data) = &self.data {
            json.insert("data".to_string(), data.to_json());
        }
        if !self.errors.is_empty() {
            json.insert(
                "errors".to_string(),
                self.errors.iter().map(GraphQLError::to_json).collect(),
            );
        }
        json.into()
    }
}
