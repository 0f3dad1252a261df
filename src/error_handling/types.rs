//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors reported by the probe engine and the site filter.
///
/// These are the only failure modes that abort a run. Everything that goes
/// wrong inside an individual probe is represented as data in its
/// `ProbeResult` instead.
#[derive(Error, Debug)]
pub enum TracerError {
    /// The dispatch call received unusable input (empty username or an
    /// empty site registry). Reported before any network call is made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An include/exclude category name did not resolve to a known
    /// category. Fatal to filtering; nothing is dispatched.
    #[error("unknown category name: {0:?}")]
    UnknownCategory(String),
}

/// Errors raised while loading the site registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry data could not be parsed at all.
    #[error("failed to parse site registry: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every record was rejected during validation.
    #[error("site registry contains no valid entries")]
    Empty,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}
