//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (synthetic status codes, timeouts, endpoints)
//! - Default HTTP request headers
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

pub use constants::*;
pub use headers::default_headers;
pub use types::{Config, LogFormat, LogLevel};
