//! Configuration constants.

use std::time::Duration;

/// Placeholder in URL templates that gets replaced with the username.
pub const USERNAME_PLACEHOLDER: &str = "{}";

/// Synthetic status code recorded when a probe timed out or was rejected
/// by the dotted-username precondition. No HTTP response carries it.
pub const STATUS_TIMEOUT_OR_REJECTED: u16 = 400;

/// Synthetic status code for transport-level failures (DNS, connect,
/// protocol errors) that produced neither a response nor a timeout.
pub const STATUS_TRANSPORT_ERROR: u16 = 600;

/// TCP connection timeout. Bounds the connect phase even when no per-probe
/// timeout is configured, so a blackholed host cannot hang a probe forever.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Endpoint used by the optional public-IP diagnostic check.
pub const MY_IP_URL: &str = "https://api.myip.com";

/// Timeout for the public-IP diagnostic check.
pub const IP_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Default User-Agent string for HTTP requests.
///
/// A browser-shaped User-Agent keeps profile pages from serving the
/// stripped-down markup some sites return to obvious bots, which would
/// break the not-found body patterns. Override via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0.4844.51 Safari/537.36";
