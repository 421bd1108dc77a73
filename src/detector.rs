//! Crawler detector.
//!
//! A [`CrawlerDetector`] is built per inbound request or page load. On
//! construction it resolves the working User-Agent from the explicit value or
//! the request headers; classification then runs against the shared,
//! pre-compiled [`SignatureSet`].

use crate::resolver::{HttpHeaders, RequestLike, UserAgentResolver};
use crate::signature_set::SignatureSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of a single classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Whether the candidate matched a crawler signature
    pub is_crawler: bool,

    /// Text of the matched signature occurrence
    pub matched_signature: Option<String>,
}

impl Detection {
    /// A positive classification.
    pub fn crawler(matched: impl Into<String>) -> Self {
        Self {
            is_crawler: true,
            matched_signature: Some(matched.into()),
        }
    }

    /// A negative classification.
    pub fn not_crawler() -> Self {
        Self::default()
    }
}

/// Per-request crawler detector.
#[derive(Debug, Clone)]
pub struct CrawlerDetector {
    /// Compiled signatures, shared between detectors
    signatures: Arc<SignatureSet>,
    /// Headers the User-Agent was resolved from
    headers: HttpHeaders,
    /// Resolved User-Agent
    user_agent: String,
    /// Matched text of the last positive classification
    last_match: Option<String>,
}

impl CrawlerDetector {
    /// Create a detector using the built-in signatures.
    ///
    /// `headers` is used when present and non-empty, otherwise the headers of
    /// `request`. A non-empty `user_agent` bypasses header scanning.
    pub fn new(
        request: Option<&dyn RequestLike>,
        headers: Option<&HttpHeaders>,
        user_agent: Option<&str>,
    ) -> Self {
        Self::with_signatures(SignatureSet::shared_default(), request, headers, user_agent)
    }

    /// Create a detector using a specific signature set.
    pub fn with_signatures(
        signatures: Arc<SignatureSet>,
        request: Option<&dyn RequestLike>,
        headers: Option<&HttpHeaders>,
        user_agent: Option<&str>,
    ) -> Self {
        let headers = UserAgentResolver::effective_headers(request, headers);
        let user_agent = signatures
            .resolver()
            .resolve_with_headers(&headers, user_agent);

        Self {
            signatures,
            headers,
            user_agent,
            last_match: None,
        }
    }

    /// Create a detector from an inbound request.
    pub fn from_request<R: RequestLike>(request: &R) -> Self {
        Self::new(Some(request), None, None)
    }

    /// Create a detector for a known User-Agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self::new(None, None, Some(user_agent))
    }

    /// Headers the User-Agent was resolved from.
    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    /// The resolved User-Agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The signature set in use.
    pub fn signatures(&self) -> &Arc<SignatureSet> {
        &self.signatures
    }

    /// Classify without touching detector state.
    ///
    /// `user_agent`, when given (even empty), replaces the resolved User-Agent.
    pub fn detect(&self, user_agent: Option<&str>) -> Detection {
        self.signatures
            .classify(user_agent.unwrap_or(&self.user_agent))
    }

    /// Classify and remember the matched signature.
    ///
    /// See [`detect`](Self::detect) for the meaning of `user_agent`. A negative
    /// result leaves the previously matched signature in place.
    pub fn is_crawler(&mut self, user_agent: Option<&str>) -> bool {
        let detection = self.detect(user_agent);
        if let Some(matched) = detection.matched_signature {
            self.last_match = Some(matched);
        }
        detection.is_crawler
    }

    /// Matched text of the last positive [`is_crawler`](Self::is_crawler) call.
    pub fn matches(&self) -> Option<&str> {
        self.last_match.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
    const CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

    #[test]
    fn test_googlebot() {
        let mut detector = CrawlerDetector::from_user_agent(GOOGLEBOT);
        assert!(detector.is_crawler(None));
        assert_eq!(detector.matches(), Some("Googlebot"));
    }

    #[test]
    fn test_chrome() {
        let mut detector = CrawlerDetector::from_user_agent(CHROME);
        assert!(!detector.is_crawler(None));
        assert_eq!(detector.matches(), None);
    }

    #[test]
    fn test_header_resolution() {
        let headers: HttpHeaders = [("x-device-user-agent", "curl/7.68.0")].into_iter().collect();
        let mut detector = CrawlerDetector::new(None, Some(&headers), None);

        assert_eq!(detector.user_agent(), "curl/7.68.0 ");
        assert!(detector.is_crawler(None));
        assert_eq!(detector.matches(), Some("curl"));
    }

    #[test]
    fn test_override_replaces_resolved_user_agent() {
        let headers: HttpHeaders = [("user-agent", "curl/7.68.0")].into_iter().collect();
        let mut detector = CrawlerDetector::new(None, Some(&headers), None);

        assert!(!detector.is_crawler(Some("Mozilla/5.0 Chrome/115.0 Safari/537.36")));
        assert!(detector.is_crawler(None));
    }

    #[test]
    fn test_empty_override_is_not_crawler() {
        let mut detector = CrawlerDetector::from_user_agent("curl/7.68.0");
        assert!(!detector.is_crawler(Some("")));
    }

    #[test]
    fn test_no_user_agent_is_not_crawler() {
        let mut detector = CrawlerDetector::new(None, None, None);
        assert_eq!(detector.user_agent(), "");
        assert!(!detector.is_crawler(None));
        assert!(detector.headers().is_empty());
    }

    #[test]
    fn test_last_match_survives_negative_result() {
        let mut detector = CrawlerDetector::from_user_agent("Wget/1.21");
        assert!(detector.is_crawler(None));
        assert!(!detector.is_crawler(Some(CHROME)));
        assert_eq!(detector.matches(), Some("Wget"));
    }

    #[test]
    fn test_detect_is_stateless() {
        let detector = CrawlerDetector::from_user_agent(GOOGLEBOT);
        let first = detector.detect(None);
        let second = detector.detect(None);

        assert_eq!(first, second);
        assert_eq!(first, Detection::crawler("Googlebot"));
        assert_eq!(detector.matches(), None);
    }

    #[test]
    fn test_from_request() {
        let request = http::Request::builder()
            .header("User-Agent", "python-requests/2.31.0")
            .body(())
            .unwrap();
        let mut detector = CrawlerDetector::from_request(&request);

        assert!(detector.headers().contains("user-agent"));
        assert!(detector.is_crawler(None));
        assert_eq!(detector.matches(), Some("python-requests"));
    }

    #[test]
    fn test_resolution_matches_resolver() {
        let headers: HttpHeaders = [("X-OperaMini-Phone-UA", "Nokia6300/2.0"), ("From", "ops")]
            .into_iter()
            .collect();
        let resolver = SignatureSet::shared_default().resolver().clone();

        for user_agent in [None, Some(""), Some("curl/7.68.0")] {
            let detector = CrawlerDetector::new(None, Some(&headers), user_agent);
            assert_eq!(
                detector.user_agent(),
                resolver.resolve(None, Some(&headers), user_agent)
            );
        }
    }
}
