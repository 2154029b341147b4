//! Exit codes of the `permsim` binary. Part of the public contract.

pub const SUCCESS: i32 = 0;
pub const VIOLATIONS_FOUND: i32 = 1; // Replay produced at least one unauthorized grant
pub const CONFIG_ERROR: i32 = 2; // Policy or case could not be loaded

/// `permsim hint`: text did not look like an injection.
pub const NO_HINT: i32 = 1;
