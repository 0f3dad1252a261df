//! Response classification.

use crate::registry::SiteDefinition;

/// Classifies a response into an existence verdict. Pure; no I/O.
///
/// Short-circuits on the first "not found" signal:
///
/// 1. non-200 status, unless the site ignores status codes
/// 2. the final URL matches the site's URL not-found pattern
/// 3. the body matches the site's body not-found pattern
///
/// Most sites return 200 for existing and non-existing profiles alike
/// (client-side routed apps), so the patterns are the primary signal and
/// the status code is only a fast path for conventionally behaving sites.
pub fn classify(status: u16, final_url: &str, body: &str, site: &SiteDefinition) -> bool {
    if status != 200 && !site.ignore_status_code {
        return false;
    }

    if let Some(pattern) = &site.url_not_found {
        if pattern.is_match(final_url) {
            return false;
        }
    }

    if let Some(pattern) = &site.body_not_found {
        if pattern.is_match(body) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Category;
    use regex::RegexBuilder;

    fn site(
        ignore_status_code: bool,
        body_not_found: Option<&str>,
        url_not_found: Option<&str>,
    ) -> SiteDefinition {
        let body = body_not_found.map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .multi_line(true)
                .dot_matches_new_line(true)
                .build()
                .unwrap()
        });
        let url = url_not_found.map(|p| {
            RegexBuilder::new(p).case_insensitive(true).build().unwrap()
        });
        SiteDefinition::new(
            "example.com".into(),
            "https://example.com/{}".into(),
            None,
            Category::Other,
            ignore_status_code,
            body,
            url,
            false,
        )
    }

    #[test]
    fn test_200_without_patterns_means_exists() {
        let site = site(false, None, None);
        assert!(classify(200, "https://example.com/bob", "<html>", &site));
    }

    #[test]
    fn test_non_200_means_not_found() {
        let site = site(false, None, None);
        assert!(!classify(404, "https://example.com/bob", "<html>", &site));
    }

    #[test]
    fn test_non_200_ignored_when_configured() {
        let site = site(true, None, None);
        assert!(classify(404, "https://example.com/bob", "<html>", &site));
    }

    #[test]
    fn test_body_pattern_match_means_not_found() {
        let site = site(false, Some(r"404 Not Found"), None);
        assert!(!classify(
            200,
            "https://example.com/bob",
            "<title>404 Not Found</title>",
            &site
        ));
    }

    #[test]
    fn test_body_pattern_is_case_insensitive_and_spans_lines() {
        let site = site(false, Some(r"<title>page.*?not found</title>"), None);
        let body = "<TITLE>Page\nwas Not Found</TITLE>";
        assert!(!classify(200, "https://example.com/bob", body, &site));
    }

    #[test]
    fn test_url_pattern_match_means_not_found() {
        // redirect-to-login sites signal "not found" through the final URL
        let site = site(false, None, Some(r"/authwall\?"));
        assert!(!classify(
            200,
            "https://example.com/authwall?return=bob",
            "<html>",
            &site
        ));
    }

    #[test]
    fn test_url_pattern_checked_before_body_pattern() {
        let site = site(false, Some(r"never-matches"), Some(r"authwall"));
        assert!(!classify(
            200,
            "https://example.com/authwall",
            "irrelevant",
            &site
        ));
    }

    #[test]
    fn test_classifier_is_pure() {
        let site = site(false, Some(r"gone"), None);
        let first = classify(200, "https://example.com/bob", "all gone", &site);
        let second = classify(200, "https://example.com/bob", "all gone", &site);
        assert_eq!(first, second);
        assert!(!first);
    }
}
