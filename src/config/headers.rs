//! Default HTTP request headers.
//!
//! Every probe is sent with a browser-shaped set of headers. Several sites
//! route obvious non-browser clients to interstitial or consent pages whose
//! markup never matches the configured not-found patterns, which would turn
//! every verdict into a false "exists".

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

/// Builds the header map attached to every outgoing probe.
///
/// The `User-Agent` header is set separately on the client builder so the
/// CLI override applies. `Accept-Encoding` is deliberately left to reqwest:
/// setting it by hand would disable automatic response decompression.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?0"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static("Windows"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_contain_browser_hints() {
        let headers = default_headers();
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key("sec-fetch-mode"));
        // Accept-Encoding must stay unset so reqwest negotiates and
        // transparently decompresses the body itself.
        assert!(!headers.contains_key("accept-encoding"));
    }
}
