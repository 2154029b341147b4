//! Records produced by a run.

use permsim_policy::RightKey;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A grant whose key is not in the policy's allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Zero-based position of the offending event in the run.
    pub event_index: usize,
    pub key: RightKey,
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UNAUTHORIZED GRANT DETECTED: {}  reason='{}'",
            self.key, self.reason
        )
    }
}

/// One line of the run log. Rendered as `[TAG] message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    Violation(Violation),
    GrantBlocked { key: RightKey },
    GrantApplied { key: RightKey },
    UseDenied { key: RightKey },
    UseAllowed { key: RightKey },
    Note { text: String },
    Unknown { raw: Value },
}

impl LogEntry {
    pub fn tag(&self) -> &'static str {
        match self {
            LogEntry::Violation(_) => "DETECTOR",
            LogEntry::GrantBlocked { .. } => "AUTOFIX",
            LogEntry::Note { .. } => "NOTE",
            LogEntry::GrantApplied { .. }
            | LogEntry::UseDenied { .. }
            | LogEntry::UseAllowed { .. }
            | LogEntry::Unknown { .. } => "ENGINE",
        }
    }

    pub fn message(&self) -> String {
        match self {
            LogEntry::Violation(v) => v.to_string(),
            LogEntry::GrantBlocked { .. } => "Blocked unauthorized grant.".to_string(),
            LogEntry::GrantApplied { key } => format!("Grant applied: {}", key),
            LogEntry::UseDenied { key } => {
                format!("DENIED use: {} lacks {}", key.subject, key.capability())
            }
            LogEntry::UseAllowed { key } => {
                format!("Allowed use: {} used {}", key.subject, key.capability())
            }
            LogEntry::Note { text } => text.clone(),
            LogEntry::Unknown { raw } => format!("Unknown event: {}", raw),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tag(), self.message())
    }
}
