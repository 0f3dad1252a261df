//! Site probe definitions.

use regex::Regex;

use crate::config::USERNAME_PLACEHOLDER;
use crate::registry::Category;

/// One site's probe definition: where to send the request and how to read
/// the response.
///
/// Created once at registry load and shared read-only by every concurrent
/// probe; never mutated afterwards. The not-found patterns are compiled at
/// load time so each probe only runs a match.
#[derive(Debug, Clone)]
pub struct SiteDefinition {
    /// Canonical host string, unique key within the registry.
    pub domain: String,
    /// URL template the GET request is sent to, with a `{}` username slot.
    request_url: String,
    /// URL template for human-facing output. Some sites are probed through
    /// an API or workaround URL that would look wrong in a report.
    display_url: String,
    /// The category the site belongs to.
    pub category: Category,
    /// When true, a non-200 status does not by itself imply "not found".
    pub ignore_status_code: bool,
    /// A match on the response body means the username was not found.
    /// Compiled case-insensitive, multi-line, dot-matches-newline.
    pub body_not_found: Option<Regex>,
    /// A match on the final response URL means the username was not found.
    /// Compiled case-insensitive.
    pub url_not_found: Option<Regex>,
    /// When true, the site cannot answer for usernames containing a dot;
    /// the probe is skipped entirely and the verdict is "not found".
    pub reject_dotted: bool,
}

impl SiteDefinition {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        domain: String,
        request_url: String,
        display_url: Option<String>,
        category: Category,
        ignore_status_code: bool,
        body_not_found: Option<Regex>,
        url_not_found: Option<Regex>,
        reject_dotted: bool,
    ) -> Self {
        let display_url = display_url.unwrap_or_else(|| request_url.clone());
        Self {
            domain,
            request_url,
            display_url,
            category,
            ignore_status_code,
            body_not_found,
            url_not_found,
            reject_dotted,
        }
    }

    /// Short site name, e.g. `instagram` for `instagram.com`.
    pub fn name(&self) -> &str {
        self.domain.split('.').next().unwrap_or(&self.domain)
    }

    /// The URL the probe actually requests, with the username substituted.
    pub fn request_url(&self, username: &str) -> String {
        self.request_url.replace(USERNAME_PLACEHOLDER, username)
    }

    /// The URL shown to the user, with the username substituted.
    pub fn display_url(&self, username: &str) -> String {
        self.display_url.replace(USERNAME_PLACEHOLDER, username)
    }
}
