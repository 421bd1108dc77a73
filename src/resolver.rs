//! User-Agent resolution.
//!
//! Picks the string the detector tests: an explicit User-Agent when one is
//! given, otherwise the concatenated values of every UA-bearing header present
//! in the request, in header-list order.

use std::collections::HashMap;
use tracing::debug;

/// Request headers keyed by lower-cased name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    entries: HashMap<String, String>,
}

impl HttpHeaders {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(name.as_ref().to_lowercase(), value.into());
    }

    /// Get a header value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_lowercase())
            .map(|s| s.as_str())
    }

    /// Check whether a header is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no header is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(lower-cased name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for HttpHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl From<&http::HeaderMap> for HttpHeaders {
    /// Values that are not valid visible ASCII are skipped. For repeated
    /// names only the first value is kept.
    fn from(map: &http::HeaderMap) -> Self {
        map.keys()
            .filter_map(|name| {
                let value = map.get(name)?.to_str().ok()?;
                Some((name.as_str(), value))
            })
            .collect()
    }
}

impl From<HashMap<String, String>> for HttpHeaders {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Anything that carries request headers.
pub trait RequestLike {
    /// The request's headers. Sources without headers return an empty map.
    fn http_headers(&self) -> HttpHeaders;
}

impl<B> RequestLike for http::Request<B> {
    fn http_headers(&self) -> HttpHeaders {
        HttpHeaders::from(self.headers())
    }
}

impl RequestLike for http::HeaderMap {
    fn http_headers(&self) -> HttpHeaders {
        HttpHeaders::from(self)
    }
}

impl RequestLike for HttpHeaders {
    fn http_headers(&self) -> HttpHeaders {
        self.clone()
    }
}

impl RequestLike for HashMap<String, String> {
    fn http_headers(&self) -> HttpHeaders {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

/// Resolves the working User-Agent from explicit input or request headers.
#[derive(Debug, Clone)]
pub struct UserAgentResolver {
    /// UA-bearing header names, lower-cased, in priority order
    header_names: Vec<String>,
}

impl UserAgentResolver {
    /// Create a resolver scanning `header_names` in the given order.
    pub fn new<S: AsRef<str>>(header_names: &[S]) -> Self {
        Self {
            header_names: header_names
                .iter()
                .map(|h| h.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Header names scanned, lower-cased.
    pub fn header_names(&self) -> &[String] {
        &self.header_names
    }

    /// Pick the header map to scan.
    ///
    /// An explicit, non-empty map wins; otherwise the request's headers are
    /// used; with neither the result is empty.
    pub fn effective_headers(
        request: Option<&dyn RequestLike>,
        headers: Option<&HttpHeaders>,
    ) -> HttpHeaders {
        match headers {
            Some(h) if !h.is_empty() => h.clone(),
            _ => request.map(|r| r.http_headers()).unwrap_or_default(),
        }
    }

    /// Concatenate the values of all UA-bearing headers present in `headers`.
    ///
    /// Each value is followed by a single space. Returns an empty string when
    /// none of the headers is present.
    pub fn scan_headers(&self, headers: &HttpHeaders) -> String {
        let mut user_agent = String::new();
        for name in &self.header_names {
            if let Some(value) = headers.get(name) {
                user_agent.push_str(value);
                user_agent.push(' ');
            }
        }
        if !user_agent.is_empty() {
            debug!(
                user_agent_len = user_agent.len(),
                "Resolved user agent from request headers"
            );
        }
        user_agent
    }

    /// Resolve the working User-Agent.
    ///
    /// A non-empty `user_agent` is returned verbatim and no header is read.
    pub fn resolve(
        &self,
        request: Option<&dyn RequestLike>,
        headers: Option<&HttpHeaders>,
        user_agent: Option<&str>,
    ) -> String {
        self.resolve_with_headers(&Self::effective_headers(request, headers), user_agent)
    }

    /// Resolve the working User-Agent against an already chosen header map.
    ///
    /// A non-empty `user_agent` is returned verbatim; otherwise `headers` are
    /// scanned.
    pub fn resolve_with_headers(&self, headers: &HttpHeaders, user_agent: Option<&str>) -> String {
        match user_agent {
            Some(ua) if !ua.is_empty() => ua.to_string(),
            _ => self.scan_headers(headers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::{SignatureProvider, UaHeaders};

    fn resolver() -> UserAgentResolver {
        UserAgentResolver::new(UaHeaders.all())
    }

    #[test]
    fn test_headers_case_insensitive() {
        let mut headers = HttpHeaders::new();
        headers.insert("X-Device-User-Agent", "curl/7.68.0");

        assert_eq!(headers.get("x-device-user-agent"), Some("curl/7.68.0"));
        assert_eq!(headers.get("X-DEVICE-USER-AGENT"), Some("curl/7.68.0"));
        assert!(headers.contains("x-DEVICE-user-agent"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_explicit_user_agent_skips_headers() {
        let headers: HttpHeaders = [("user-agent", "curl/7.68.0")].into_iter().collect();
        let ua = resolver().resolve(None, Some(&headers), Some("Mozilla/5.0"));
        assert_eq!(ua, "Mozilla/5.0");
    }

    #[test]
    fn test_empty_user_agent_falls_back_to_headers() {
        let headers: HttpHeaders = [("user-agent", "curl/7.68.0")].into_iter().collect();
        let ua = resolver().resolve(None, Some(&headers), Some(""));
        assert_eq!(ua, "curl/7.68.0 ");
    }

    #[test]
    fn test_headers_concatenated_in_list_order() {
        let headers: HttpHeaders = [
            ("X-Device-User-Agent", "device"),
            ("User-Agent", "primary"),
            ("From", "googlebot(at)googlebot.com"),
            ("Accept", "text/html"),
        ]
        .into_iter()
        .collect();

        let ua = resolver().resolve(None, Some(&headers), None);
        assert_eq!(ua, "primary device googlebot(at)googlebot.com ");
    }

    #[test]
    fn test_request_headers_used_when_map_missing_or_empty() {
        let request = http::Request::builder()
            .header("User-Agent", "Wget/1.21")
            .body(())
            .unwrap();

        assert_eq!(resolver().resolve(Some(&request), None, None), "Wget/1.21 ");
        assert_eq!(
            resolver().resolve(Some(&request), Some(&HttpHeaders::new()), None),
            "Wget/1.21 "
        );
    }

    #[test]
    fn test_explicit_map_wins_over_request() {
        let request = http::Request::builder()
            .header("User-Agent", "Wget/1.21")
            .body(())
            .unwrap();
        let headers: HttpHeaders = [("user-agent", "curl/8.0")].into_iter().collect();

        assert_eq!(resolver().resolve(Some(&request), Some(&headers), None), "curl/8.0 ");
    }

    #[test]
    fn test_nothing_found_is_empty() {
        assert_eq!(resolver().resolve(None, None, None), "");
        let headers: HttpHeaders = [("accept", "*/*")].into_iter().collect();
        assert_eq!(resolver().resolve(None, Some(&headers), None), "");
    }

    #[test]
    fn test_header_map_skips_opaque_values() {
        let mut map = http::HeaderMap::new();
        map.insert(
            "user-agent",
            http::HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );
        map.insert("x-original-user-agent", http::HeaderValue::from_static("okhttp/4.9"));

        let headers = HttpHeaders::from(&map);
        assert_eq!(headers.get("user-agent"), None);
        assert_eq!(headers.get("x-original-user-agent"), Some("okhttp/4.9"));
    }

    #[test]
    fn test_header_map_first_value_wins() {
        let mut map = http::HeaderMap::new();
        map.append("user-agent", http::HeaderValue::from_static("first"));
        map.append("user-agent", http::HeaderValue::from_static("second"));

        assert_eq!(map.http_headers().get("user-agent"), Some("first"));
    }

    #[test]
    fn test_hash_map_request_like() {
        let mut map = HashMap::new();
        map.insert("User-Agent".to_string(), "python-requests/2.31".to_string());

        assert_eq!(resolver().resolve(Some(&map), None, None), "python-requests/2.31 ");
    }

    #[test]
    fn test_resolve_with_headers() {
        let headers: HttpHeaders = [("From", "crawler@example.com")].into_iter().collect();
        let resolver = resolver();

        assert_eq!(resolver.resolve_with_headers(&headers, None), "crawler@example.com ");
        assert_eq!(resolver.resolve_with_headers(&headers, Some("")), "crawler@example.com ");
        assert_eq!(resolver.resolve_with_headers(&headers, Some("Wget/1.21")), "Wget/1.21");
        assert_eq!(
            resolver.resolve_with_headers(&headers, None),
            resolver.resolve(None, Some(&headers), None)
        );
    }
}
