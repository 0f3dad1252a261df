//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{default_headers, Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client used by every probe.
///
/// Creates a `reqwest::Client` configured with:
/// - browser-shaped default headers and the configured User-Agent
/// - a TCP connect timeout (the per-probe timeout is applied by the probe
///   itself, so no global request timeout is set here)
/// - redirect following up to `MAX_REDIRECT_HOPS`
/// - no cookie store: responses to one site must never influence requests
///   to another, so cookies are simply not persisted at all
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .default_headers(default_headers())
        .user_agent(config.user_agent.clone())
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(client)
}
