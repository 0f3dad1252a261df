//! Error handling for the probe engine.
//!
//! Per-probe failures (timeouts, connection errors) are never surfaced as
//! errors: they are converted into `ProbeResult` data by the probe itself.
//! The types here cover the failures that *do* propagate to the caller:
//! bad input, bad filter rules, and startup problems.

mod types;

pub use types::{InitializationError, RegistryError, TracerError};
