//! Replay engine for agent permission logs.
//!
//! A [`case::Case`] is an ordered list of [`event::Event`]s. The
//! [`engine::Engine`] replays them against a [`Policy`], keeping the live
//! set of granted rights and flagging every grant the policy does not
//! allow. [`hint::InjectionClassifier`] can annotate events beforehand; the
//! engine never looks at that annotation.

pub mod audit;
pub mod case;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hint;
pub mod report;

pub use audit::{LogEntry, Violation};
pub use case::Case;
pub use engine::{Engine, Mode, RunOutcome};
pub use errors::{CaseLoadError, MalformedEventError};
pub use event::{Event, EventKind};
pub use hint::InjectionClassifier;
pub use permsim_policy::{Policy, PolicyLoadError, RightKey, DEFAULT_SUBJECT};
pub use report::RunReport;
