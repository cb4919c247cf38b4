use gqlengine_core::coercion::CoercionError;
use gqlengine_core::gqlengine_parser::GraphQLParseError;
use gqlengine_core::gqlengine_parser::Location;
use gqlengine_core::validation::ValidationError;
use gqlengine_core::PathSegment;
use gqlengine_core::Value;
use indexmap::IndexMap;

/// One entry of a response's `errors` list.
///
/// https://spec.graphql.org/October2021/#sec-Errors
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    pub message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,

    /// The response path of the field that failed, for field errors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: IndexMap<String, Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            extensions: IndexMap::new(),
        }
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::Map::new();
        json.insert("message".to_string(), self.message.clone().into());
        if !self.locations.is_empty() {
            json.insert(
                "locations".to_string(),
                self.locations
                    .iter()
                    .map(|loc| serde_json::json!({ "line": loc.line, "column": loc.column }))
                    .collect(),
            );
        }
        if let Some(path) = &self.path {
            json.insert(
                "path".to_string(),
                path.iter()
                    .map(|segment| match segment {
                        PathSegment::Key(key) => serde_json::Value::from(key.as_str()),
                        PathSegment::Index(idx) => serde_json::Value::from(*idx),
                    })
                    .collect(),
            );
        }
        if !self.extensions.is_empty() {
            json.insert(
                "extensions".to_string(),
                self.extensions
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect::<serde_json::Map<_, _>>()
                    .into(),
            );
        }
        json.into()
    }
}

impl From<GraphQLParseError> for GraphQLError {
    fn from(err: GraphQLParseError) -> Self {
        GraphQLError::new(format!("Syntax Error: {}", err.message()))
            .with_locations(vec![err.location()])
    }
}

impl From<ValidationError> for GraphQLError {
    fn from(err: ValidationError) -> Self {
        GraphQLError::new(err.message).with_locations(err.locations)
    }
}

impl From<CoercionError> for GraphQLError {
    fn from(err: CoercionError) -> Self {
        GraphQLError::new(err.message).with_locations(err.locations)
    }
}
