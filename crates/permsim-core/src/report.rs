use crate::audit::{LogEntry, Violation};
use crate::engine::{Mode, RunOutcome};
use crate::event::Event;
use serde::Serialize;

/// Everything a consumer needs to render or archive one replay.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub events: usize,
    pub log: Vec<LogEntry>,
    pub violations: Vec<Violation>,
    /// Indices of events flagged by the injection classifier.
    pub injection_hints: Vec<usize>,
}

impl RunReport {
    pub fn new(mode: Mode, events: &[Event], outcome: RunOutcome) -> Self {
        let injection_hints = events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.annotated_injection)
            .map(|(i, _)| i)
            .collect();
        Self {
            mode,
            events: events.len(),
            log: outcome.log,
            violations: outcome.violations,
            injection_hints,
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Log rendered one line per entry.
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }
}
