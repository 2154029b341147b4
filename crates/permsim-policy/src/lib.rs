//! Policy model for permsim.
//!
//! A policy declares which rights may be granted during a run and which
//! rights are already held when the run starts:
//!
//! ```yaml
//! objects:
//!   tools:
//!     files: [read]
//! policies:
//!   allowed_grants:
//!     - [assistant, files, read]
//!     - [assistant, shell, exec]
//! ```
//!
//! Both sections are required. A [`Policy`] value can only be obtained
//! through the loader, so holding one means both sections were present.

pub mod error;
pub mod key;
pub mod model;

pub use error::PolicyLoadError;
pub use key::RightKey;
pub use model::Policy;

/// Actor assumed when a policy tool listing or an event omits the subject.
pub const DEFAULT_SUBJECT: &str = "assistant";
