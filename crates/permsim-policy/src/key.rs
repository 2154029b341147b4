use serde::{Deserialize, Serialize};
use std::fmt;

/// One grantable capability: `(subject, tool, right)`.
///
/// All three parts are opaque, case-sensitive identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RightKey {
    pub subject: String,
    pub tool: String,
    pub right: String,
}

impl RightKey {
    pub fn new(
        subject: impl Into<String>,
        tool: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            tool: tool.into(),
            right: right.into(),
        }
    }

    /// Name of the first empty component, if any.
    pub fn empty_component(&self) -> Option<&'static str> {
        if self.subject.is_empty() {
            Some("subject")
        } else if self.tool.is_empty() {
            Some("tool")
        } else if self.right.is_empty() {
            Some("right")
        } else {
            None
        }
    }

    /// `tool.right`, without the subject.
    pub fn capability(&self) -> String {
        format!("{}.{}", self.tool, self.right)
    }
}

impl fmt::Display for RightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}.{}", self.subject, self.tool, self.right)
    }
}
