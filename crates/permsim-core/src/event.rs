use crate::errors::MalformedEventError;
use permsim_policy::RightKey;
use serde_json::{Map, Value};

/// What happened, decided once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Request that `key` become granted.
    Grant { key: RightKey, reason: String },
    /// Attempt to exercise `key`.
    Use { key: RightKey },
    Note { text: String },
    /// Unrecognised record, kept verbatim for the log.
    Unknown { raw: Value },
}

/// One replayed event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// Advisory flag set by the injection classifier. The engine ignores it.
    pub annotated_injection: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            annotated_injection: false,
        }
    }

    pub fn grant(key: RightKey, reason: impl Into<String>) -> Self {
        Self::new(EventKind::Grant {
            key,
            reason: reason.into(),
        })
    }

    pub fn use_right(key: RightKey) -> Self {
        Self::new(EventKind::Use { key })
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::new(EventKind::Note { text: text.into() })
    }

    pub fn unknown(raw: Value) -> Self {
        Self::new(EventKind::Unknown { raw })
    }

    /// Build an event from a raw case record.
    ///
    /// The `type` tag selects the variant; any other tag, a missing tag or a
    /// record that is not an object becomes [`EventKind::Unknown`]. `subject`
    /// falls back to `default_subject`; `tool` and `right` have no fallback.
    pub fn from_value(
        index: usize,
        value: Value,
        default_subject: &str,
    ) -> Result<Self, MalformedEventError> {
        let map = match value {
            Value::Object(map) => map,
            other => return Ok(Self::unknown(other)),
        };
        let annotated_injection = map
            .get("annotated_injection")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let fields = Fields { map: &map, index };
        let kind = match map.get("type").and_then(Value::as_str) {
            Some("grant") => EventKind::Grant {
                key: fields.right_key("grant", default_subject)?,
                reason: fields.text("reason"),
            },
            Some("use") => EventKind::Use {
                key: fields.right_key("use", default_subject)?,
            },
            Some("note") => EventKind::Note {
                text: fields.text("text"),
            },
            _ => EventKind::Unknown {
                raw: Value::Object(map.clone()),
            },
        };

        Ok(Self {
            kind,
            annotated_injection,
        })
    }

    /// Free text an operator might want screened: a note's text or a
    /// grant's reason.
    pub fn hint_text(&self) -> Option<&str> {
        match &self.kind {
            EventKind::Note { text } => Some(text),
            EventKind::Grant { reason, .. } => Some(reason),
            EventKind::Use { .. } | EventKind::Unknown { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::Grant { .. } => "grant",
            EventKind::Use { .. } => "use",
            EventKind::Note { .. } => "note",
            EventKind::Unknown { .. } => "unknown",
        }
    }
}

struct Fields<'a> {
    map: &'a Map<String, Value>,
    index: usize,
}

impl Fields<'_> {
    fn right_key(
        &self,
        kind: &'static str,
        default_subject: &str,
    ) -> Result<RightKey, MalformedEventError> {
        let subject = self
            .optional(kind, "subject")?
            .unwrap_or_else(|| default_subject.to_string());
        let key = RightKey::new(
            subject,
            self.required(kind, "tool")?,
            self.required(kind, "right")?,
        );
        if let Some(field) = key.empty_component() {
            return Err(MalformedEventError::Empty {
                index: self.index,
                kind,
                field,
            });
        }
        Ok(key)
    }

    fn required(
        &self,
        kind: &'static str,
        field: &'static str,
    ) -> Result<String, MalformedEventError> {
        self.optional(kind, field)?
            .ok_or(MalformedEventError::MissingField {
                index: self.index,
                kind,
                field,
            })
    }

    /// Free text is never fatal: absent or `null` reads as `""`, any other
    /// non-string value as its JSON text.
    fn text(&self, field: &str) -> String {
        match self.map.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Absent and `null` both read as `None`.
    fn optional(
        &self,
        kind: &'static str,
        field: &'static str,
    ) -> Result<Option<String>, MalformedEventError> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(MalformedEventError::NotAString {
                index: self.index,
                kind,
                field,
            }),
        }
    }
}
