//! Registry loading and validation.
//!
//! The site table ships as JSON. Records are validated one by one: a record
//! with an empty domain or URL template, an unknown category, or a pattern
//! that fails to compile is dropped with a warning instead of aborting the
//! load. The source data historically carried half-filled placeholder
//! entries, and guessing their intent would be worse than skipping them.

use log::warn;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::config::USERNAME_PLACEHOLDER;
use crate::error_handling::RegistryError;
use crate::registry::{Category, Registry, SiteDefinition};

/// On-disk shape of one registry record.
#[derive(Debug, Deserialize)]
struct RawSite {
    #[serde(default)]
    domain: String,
    #[serde(default)]
    url: String,
    display_url: Option<String>,
    category: Option<String>,
    #[serde(default)]
    ignore_status_code: bool,
    body_not_found: Option<String>,
    url_not_found: Option<String>,
    #[serde(default)]
    reject_dotted: bool,
}

/// Parses and validates a JSON site table.
///
/// # Errors
///
/// Returns `RegistryError::Parse` if the document itself is malformed, or
/// `RegistryError::Empty` if no record survives validation.
pub fn from_json(data: &str) -> Result<Registry, RegistryError> {
    let raw: Vec<RawSite> = serde_json::from_str(data)?;

    let sites: Vec<SiteDefinition> = raw.into_iter().filter_map(validate).collect();

    if sites.is_empty() {
        return Err(RegistryError::Empty);
    }

    Ok(Registry::from_sites(sites))
}

/// Validates a single record, returning `None` (with a warning) when it
/// cannot become a usable `SiteDefinition`.
fn validate(raw: RawSite) -> Option<SiteDefinition> {
    if raw.domain.is_empty() || raw.url.is_empty() {
        warn!("skipping registry record with empty domain/url (placeholder entry)");
        return None;
    }

    if !raw.url.contains(USERNAME_PLACEHOLDER) {
        warn!(
            "skipping {}: request URL has no username placeholder",
            raw.domain
        );
        return None;
    }

    let category = match raw.category.as_deref().map(Category::resolve) {
        Some(Ok(category)) => category,
        Some(Err(_)) | None => {
            warn!("skipping {}: missing or unrecognized category", raw.domain);
            return None;
        }
    };

    let body_not_found = match raw.body_not_found.as_deref().map(compile_body_pattern) {
        Some(Ok(re)) => Some(re),
        Some(Err(e)) => {
            warn!("skipping {}: invalid body pattern: {e}", raw.domain);
            return None;
        }
        None => None,
    };

    let url_not_found = match raw.url_not_found.as_deref().map(compile_url_pattern) {
        Some(Ok(re)) => Some(re),
        Some(Err(e)) => {
            warn!("skipping {}: invalid URL pattern: {e}", raw.domain);
            return None;
        }
        None => None,
    };

    Some(SiteDefinition::new(
        raw.domain,
        raw.url,
        raw.display_url,
        category,
        raw.ignore_status_code,
        body_not_found,
        url_not_found,
        raw.reject_dotted,
    ))
}

/// Body patterns match HTML spanning arbitrary lines.
fn compile_body_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .dot_matches_new_line(true)
        .build()
}

/// URL patterns only ever see a single line.
fn compile_url_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
