use crate::PathSegment;
use gqlengine_parser::Location;

/// A value could not be coerced to its expected input type.
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct CoercionError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    /// Where inside the coerced value the problem is, e.g. `["input", "ids", 2]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
}

impl CoercionError {
    pub fn new(message: impl Into<String>, locations: Vec<Location>) -> Self {
        Self {
            message: message.into(),
            locations,
            path: vec![],
        }
    }

    pub(crate) fn at_path(
        message: impl Into<String>,
        locations: Vec<Location>,
        path: &[PathSegment],
    ) -> Self {
        Self {
            message: message.into(),
            locations,
            path: path.to_vec(),
        }
    }

    /// `path` rendered the way it appears in messages: `input.ids[2]`.
    pub fn path_string(&self) -> String {
        let mut rendered = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Key(key) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }
                    rendered.push_str(key);
                },
                PathSegment::Index(idx) => {
                    rendered.push_str(&format!("[{idx}]"));
                },
            }
        }
        rendered
    }
}
