use crate::errors::{type_name, CaseLoadError};
use crate::event::Event;
use serde_json::Value;
use std::path::Path;

/// A recorded run to replay: the operating mode and the ordered events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Case {
    pub autofix: bool,
    pub events: Vec<Event>,
}

impl Case {
    /// Load a case file. `.yaml` / `.yml` are read as YAML, anything else as
    /// JSON.
    pub fn from_file(path: &Path, default_subject: &str) -> Result<Self, CaseLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| CaseLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            Self::from_yaml_str(&content, default_subject)
        } else {
            Self::from_json_str(&content, default_subject)
        }
    }

    pub fn from_json_str(content: &str, default_subject: &str) -> Result<Self, CaseLoadError> {
        let value: Value = serde_json::from_str(content).map_err(|e| CaseLoadError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(value, default_subject)
    }

    pub fn from_yaml_str(content: &str, default_subject: &str) -> Result<Self, CaseLoadError> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| CaseLoadError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(value, default_subject)
    }

    /// Validate the whole case up front. A malformed `grant`/`use` anywhere
    /// rejects the case before any event is replayed.
    pub fn from_value(value: Value, default_subject: &str) -> Result<Self, CaseLoadError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(CaseLoadError::NotAnObject {
                    found: type_name(&other),
                })
            }
        };

        let autofix = match map.get("autofix") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(CaseLoadError::InvalidAutofix {
                    found: type_name(other),
                })
            }
        };

        let raw_events = match map.remove("events") {
            None => return Err(CaseLoadError::MissingEvents),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(CaseLoadError::EventsNotSequence {
                    found: type_name(&other),
                })
            }
        };

        let events = raw_events
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Event::from_value(index, raw, default_subject))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { autofix, events })
    }
}
