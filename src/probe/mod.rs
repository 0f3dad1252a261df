//! The probe: one outbound classification attempt against a single site
//! for a single username.

mod classify;
mod engine;
mod result;

use std::sync::Arc;
use std::time::{Duration, Instant};

pub use classify::classify;
pub use engine::{dispatch, dispatch_with_cap, ProbeStream};
pub use result::ProbeResult;

use crate::registry::SiteDefinition;

/// Runs one probe. Never fails to its caller: every outcome, including
/// timeouts and transport errors, is converted into a `ProbeResult`.
///
/// If the site rejects dotted usernames and the username contains a dot,
/// no request is sent and a synthetic "not found" result is returned
/// immediately. Otherwise one GET request is issued through the shared
/// client, bounded by `timeout` when one is configured.
pub async fn run(
    site: Arc<SiteDefinition>,
    username: Arc<str>,
    client: reqwest::Client,
    timeout: Option<Duration>,
) -> ProbeResult {
    let display_url = site.display_url(&username);

    if site.reject_dotted && username.contains('.') {
        return ProbeResult::rejected(site, display_url);
    }

    let request_url = site.request_url(&username);
    let start = Instant::now();

    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, fetch(&site, &request_url, &client)).await
        {
            Ok(outcome) => outcome,
            Err(_) => return ProbeResult::timed_out(site, display_url, start.elapsed()),
        },
        None => fetch(&site, &request_url, &client).await,
    };

    match outcome {
        Ok(fetched) => ProbeResult::classified(
            site,
            fetched.status,
            fetched.exists,
            start.elapsed(),
            fetched.host,
            display_url,
        ),
        // reqwest reports its own internal timeouts (e.g. the connect
        // phase) as errors; fold them into the timeout verdict
        Err(e) if e.is_timeout() => ProbeResult::timed_out(site, display_url, start.elapsed()),
        Err(e) => ProbeResult::transport_error(site, display_url, start.elapsed(), e.to_string()),
    }
}

struct Fetched {
    status: u16,
    exists: bool,
    host: String,
}

/// Sends the GET request, reads the full body, and classifies it.
async fn fetch(
    site: &SiteDefinition,
    request_url: &str,
    client: &reqwest::Client,
) -> Result<Fetched, reqwest::Error> {
    let response = client.get(request_url).send().await?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let host = response
        .url()
        .host_str()
        .unwrap_or(&site.domain)
        .to_string();

    let body = response.text().await?;
    let exists = classify(status, &final_url, &body, site);

    Ok(Fetched {
        status,
        exists,
        host,
    })
}
