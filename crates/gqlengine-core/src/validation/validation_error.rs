use gqlengine_parser::Location;

/// A static problem found in an executable document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub locations: Vec<Location>,
    /// Name of the rule that reported this error, e.g. `"ScalarLeafs"`.
    #[serde(skip)]
    pub rule: &'static str,
}

/// Tunables for [`validate()`](crate::validation::validate).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationOptions {
    /// Reject operations whose selections nest deeper than this.
    pub max_depth: Option<usize>,
}
