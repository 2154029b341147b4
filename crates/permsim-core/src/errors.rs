use std::path::PathBuf;
use thiserror::Error;

/// A `grant` or `use` record that cannot become an [`crate::Event`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedEventError {
    #[error("event #{index} ({kind}): missing required field '{field}'")]
    MissingField {
        index: usize,
        kind: &'static str,
        field: &'static str,
    },

    #[error("event #{index} ({kind}): field '{field}' must be a string")]
    NotAString {
        index: usize,
        kind: &'static str,
        field: &'static str,
    },

    #[error("event #{index} ({kind}): field '{field}' must not be empty")]
    Empty {
        index: usize,
        kind: &'static str,
        field: &'static str,
    },
}

/// Case could not be loaded. Always fatal: no event is processed.
#[derive(Debug, Error)]
pub enum CaseLoadError {
    #[error("Failed to read case file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse case: {message}")]
    Parse { message: String },

    #[error("Case must be an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("Case has no 'events' list")]
    MissingEvents,

    #[error("Case 'events' must be a list, got {found}")]
    EventsNotSequence { found: &'static str },

    #[error("Case 'autofix' must be a boolean, got {found}")]
    InvalidAutofix { found: &'static str },

    #[error(transparent)]
    MalformedEvent(#[from] MalformedEventError),
}

/// JSON type name, for error messages.
pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
