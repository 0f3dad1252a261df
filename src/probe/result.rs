//! Probe results.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{STATUS_TIMEOUT_OR_REJECTED, STATUS_TRANSPORT_ERROR};
use crate::registry::SiteDefinition;

/// The outcome of one probe: site, verdict, and diagnostic metadata.
///
/// Constructed exactly once per probe, whatever happened, and never mutated.
/// Failures are represented here as data: a timeout carries the synthetic
/// status `400` and `timed_out`, an unclassified transport failure carries
/// `600` and an error description.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// The site definition this result belongs to.
    pub site: Arc<SiteDefinition>,
    /// HTTP status code, or a synthetic code for non-HTTP outcomes.
    pub status: u16,
    /// The verdict: whether the username appears to exist on the site.
    pub exists: bool,
    /// Wall-clock duration of the probe, rounded to millisecond precision.
    pub elapsed_seconds: f64,
    /// The display URL with the username substituted.
    pub url: String,
    /// The responding host; falls back to the site's domain when no
    /// response was received.
    pub host: String,
    /// Whether the probe hit its timeout.
    pub timed_out: bool,
    /// Description of an unclassified transport failure, if any.
    pub error: Option<String>,
}

impl ProbeResult {
    /// Result for a probe skipped by the dotted-username precondition.
    /// No network call was made, so the elapsed time is zero.
    pub(crate) fn rejected(site: Arc<SiteDefinition>, url: String) -> Self {
        let host = site.domain.clone();
        Self {
            site,
            status: STATUS_TIMEOUT_OR_REJECTED,
            exists: false,
            elapsed_seconds: 0.0,
            url,
            host,
            timed_out: false,
            error: None,
        }
    }

    /// Result for a classified HTTP response.
    pub(crate) fn classified(
        site: Arc<SiteDefinition>,
        status: u16,
        exists: bool,
        elapsed: Duration,
        host: String,
        url: String,
    ) -> Self {
        Self {
            site,
            status,
            exists,
            elapsed_seconds: round_to_millis(elapsed),
            url,
            host,
            timed_out: false,
            error: None,
        }
    }

    /// Result for a probe that exceeded its timeout.
    pub(crate) fn timed_out(site: Arc<SiteDefinition>, url: String, elapsed: Duration) -> Self {
        let host = site.domain.clone();
        Self {
            site,
            status: STATUS_TIMEOUT_OR_REJECTED,
            exists: false,
            elapsed_seconds: round_to_millis(elapsed),
            url,
            host,
            timed_out: true,
            error: None,
        }
    }

    /// Result for a transport-level failure (DNS, connect, protocol).
    pub(crate) fn transport_error(
        site: Arc<SiteDefinition>,
        url: String,
        elapsed: Duration,
        error: String,
    ) -> Self {
        let host = site.domain.clone();
        Self {
            site,
            status: STATUS_TRANSPORT_ERROR,
            exists: false,
            elapsed_seconds: round_to_millis(elapsed),
            url,
            host,
            timed_out: false,
            error: Some(error),
        }
    }

    /// Diagnostic one-liner: `0.523s <=> example.com <=> 200`.
    pub fn verbose(&self) -> String {
        format!("{}s <=> {} <=> {}", self.elapsed_seconds, self.host, self.status)
    }
}

fn round_to_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}
