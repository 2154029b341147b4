use std::path::PathBuf;
use thiserror::Error;

/// Policy could not be turned into a usable [`crate::Policy`].
#[derive(Debug, Error)]
pub enum PolicyLoadError {
    #[error("Failed to read policy file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse policy YAML: {message}")]
    Parse { message: String },

    #[error("Policy is missing required section '{section}'")]
    MissingSection { section: &'static str },

    #[error("allowed_grants[{index}] must be [subject, tool, right], got {len} element(s)")]
    InvalidGrant { index: usize, len: usize },

    #[error("{location}: {field} must not be empty")]
    EmptyIdentifier {
        location: String,
        field: &'static str,
    },
}
