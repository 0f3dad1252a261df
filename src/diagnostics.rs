//! Pre-run diagnostics.

use log::debug;
use serde::Deserialize;

use crate::config::{IP_CHECK_TIMEOUT, MY_IP_URL};

#[derive(Debug, Deserialize)]
struct IpInfo {
    ip: String,
}

/// Retrieves the caller's public IP address.
///
/// Strictly informational: a reconnaissance run against hundreds of sites
/// is traceable, and users tend to want to know which address they are
/// exposing before the fan-out starts. Failures and timeouts degrade to
/// `None` rather than blocking the run.
pub async fn public_ip(client: &reqwest::Client) -> Option<String> {
    let request = client.get(MY_IP_URL).send();

    let response = match tokio::time::timeout(IP_CHECK_TIMEOUT, request).await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            debug!("public IP lookup failed: {e}");
            return None;
        }
        Err(_) => {
            debug!("public IP lookup timed out");
            return None;
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!("public IP lookup failed while reading the body: {e}");
            return None;
        }
    };

    match serde_json::from_str::<IpInfo>(&body) {
        Ok(info) => Some(info.ip),
        Err(e) => {
            debug!("public IP lookup returned unexpected payload: {e}");
            None
        }
    }
}
