//! Permission-state engine.
//!
//! The engine owns the live set of granted rights. Each event is one
//! transition:
//!
//! | event                       | state  | log                 | violations |
//! |-----------------------------|--------|---------------------|------------|
//! | grant, allowed              | insert | applied             |            |
//! | grant, not allowed, detect  | insert | violation, applied  | +1         |
//! | grant, not allowed, enforce |        | violation, blocked  | +1         |
//! | use                         |        | allowed or denied   |            |
//! | note                        |        | note                |            |
//! | unknown                     |        | raw record          |            |
//!
//! Detect-only mode still applies unauthorized grants so that the replay
//! reflects what the agent actually ended up holding.

use crate::audit::{LogEntry, Violation};
use crate::event::{Event, EventKind};
use permsim_policy::{Policy, PolicyLoadError, RightKey};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// What to do with a grant the policy does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Flag the grant and apply it anyway.
    #[default]
    DetectOnly,
    /// Flag the grant and block it (autofix).
    Enforce,
}

impl Mode {
    pub fn from_autofix(autofix: bool) -> Self {
        if autofix {
            Mode::Enforce
        } else {
            Mode::DetectOnly
        }
    }

    pub fn autofix(self) -> bool {
        matches!(self, Mode::Enforce)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::DetectOnly => "detect-only",
            Mode::Enforce => "enforce",
        }
    }
}

/// Result of one [`Engine::run`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutcome {
    pub log: Vec<LogEntry>,
    pub violations: Vec<Violation>,
}

#[derive(Debug)]
pub struct Engine {
    policy: Policy,
    mode: Mode,
    granted: HashSet<RightKey>,
    log: Vec<LogEntry>,
    violations: Vec<Violation>,
    /// Index of the event being processed.
    cursor: usize,
}

impl Engine {
    pub fn new(policy: Policy, mode: Mode) -> Self {
        let granted = policy.initial_grants().clone();
        Self {
            policy,
            mode,
            granted,
            log: Vec::new(),
            violations: Vec::new(),
            cursor: 0,
        }
    }

    pub fn from_policy_file(
        path: &Path,
        default_subject: &str,
        mode: Mode,
    ) -> Result<Self, PolicyLoadError> {
        Ok(Self::new(Policy::from_file(path, default_subject)?, mode))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn has_right(&self, key: &RightKey) -> bool {
        self.granted.contains(key)
    }

    /// Rights currently held.
    pub fn granted(&self) -> &HashSet<RightKey> {
        &self.granted
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn grant(&mut self, key: RightKey, reason: &str) {
        if !self.policy.allows(&key) {
            let violation = Violation {
                event_index: self.cursor,
                key: key.clone(),
                reason: reason.to_string(),
            };
            tracing::debug!(event = self.cursor, key = %key, "unauthorized grant");
            self.violations.push(violation.clone());
            self.log.push(LogEntry::Violation(violation));

            if self.mode.autofix() {
                self.log.push(LogEntry::GrantBlocked { key });
                return;
            }
        }
        self.granted.insert(key.clone());
        self.log.push(LogEntry::GrantApplied { key });
    }

    pub fn use_right(&mut self, key: RightKey) {
        let entry = if self.has_right(&key) {
            LogEntry::UseAllowed { key }
        } else {
            LogEntry::UseDenied { key }
        };
        self.log.push(entry);
    }

    pub fn note(&mut self, text: &str) {
        self.log.push(LogEntry::Note {
            text: text.to_string(),
        });
    }

    pub fn process_event(&mut self, event: &Event) {
        let logged = self.log.len();
        match &event.kind {
            EventKind::Grant { key, reason } => self.grant(key.clone(), reason),
            EventKind::Use { key } => self.use_right(key.clone()),
            EventKind::Note { text } => self.note(text),
            EventKind::Unknown { raw } => self.log.push(LogEntry::Unknown { raw: raw.clone() }),
        }
        tracing::debug!(
            event = self.cursor,
            kind = event.kind_name(),
            lines = self.log.len() - logged,
            held = self.granted.len(),
            "event processed"
        );
        self.cursor += 1;
    }

    /// Replay `events` in order and hand back the log and violations.
    ///
    /// Event indices restart at zero on every call. The granted set is
    /// carried over and left in place for inspection.
    pub fn run(&mut self, events: &[Event]) -> RunOutcome {
        self.cursor = 0;
        tracing::debug!(events = events.len(), mode = self.mode.as_str(), "replay start");
        for event in events {
            self.process_event(event);
        }
        tracing::debug!(
            log = self.log.len(),
            violations = self.violations.len(),
            "replay done"
        );
        RunOutcome {
            log: std::mem::take(&mut self.log),
            violations: std::mem::take(&mut self.violations),
        }
    }
}
