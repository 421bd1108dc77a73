//! Compiled signature set.
//!
//! Holds the crawler and exclusion alternations together with the UA-bearing
//! header names. A set is immutable once built and is shared between
//! detectors through an `Arc`; the default set is compiled once per process.

use crate::compiler::{CompiledMatcher, MatchFlags, PatternCompiler, DEFAULT_SIZE_LIMIT};
use crate::config::{CrawlerDetectConfig, DEFAULT_MAX_USER_AGENT_BYTES};
use crate::detector::Detection;
use crate::error::{CrawlerDetectError, Result};
use crate::resolver::UserAgentResolver;
use crate::signatures::{Crawlers, Exclusions, SignatureProvider, UaHeaders};
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

/// Process-wide set built from the built-in lists.
static DEFAULT_SET: LazyLock<Arc<SignatureSet>> = LazyLock::new(|| {
    let set = SignatureSet::compile(
        &PatternCompiler::new(DEFAULT_SIZE_LIMIT),
        Crawlers.all(),
        Exclusions.all(),
        UaHeaders.all(),
        DEFAULT_MAX_USER_AGENT_BYTES,
    )
    .expect("valid regex: built-in signature lists");
    Arc::new(set)
});

/// Compiled crawler and exclusion matchers plus header resolution.
#[derive(Debug)]
pub struct SignatureSet {
    /// Crawler alternation (case-insensitive, single search)
    crawlers: CompiledMatcher,
    /// Exclusion alternation (case-insensitive, remove all)
    exclusions: CompiledMatcher,
    /// UA-bearing header lookup
    resolver: UserAgentResolver,
    /// Candidates above this byte length are not classified
    max_user_agent_bytes: usize,
}

impl SignatureSet {
    /// Get the shared set compiled from the built-in lists.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_SET)
    }

    /// Build a set from configuration.
    ///
    /// Extra signatures are appended to the built-in lists. Without extras and
    /// with default limits this returns the shared default set.
    pub fn from_config(config: &CrawlerDetectConfig) -> Result<Arc<Self>> {
        config.validate()?;

        let limits = &config.limits;
        let extras = &config.signatures;
        if extras.is_empty()
            && limits.max_user_agent_bytes == DEFAULT_MAX_USER_AGENT_BYTES
            && limits.regex_size_limit == DEFAULT_SIZE_LIMIT
        {
            return Ok(Self::shared_default());
        }

        let crawlers = merge(Crawlers.all(), &extras.extra_crawlers);
        let exclusions = merge(Exclusions.all(), &extras.extra_exclusions);
        let headers = merge(UaHeaders.all(), &extras.extra_headers);

        let set = Self::compile(
            &PatternCompiler::new(limits.regex_size_limit),
            &crawlers,
            &exclusions,
            &headers,
            limits.max_user_agent_bytes,
        )?;
        Ok(Arc::new(set))
    }

    fn compile<S: AsRef<str>>(
        compiler: &PatternCompiler,
        crawlers: &[S],
        exclusions: &[S],
        headers: &[S],
        max_user_agent_bytes: usize,
    ) -> Result<Self> {
        let crawlers = compiler
            .compile(crawlers, MatchFlags::CRAWLER)
            .map_err(|source| CrawlerDetectError::InvalidPattern {
                list: Crawlers.name(),
                source,
            })?;
        let exclusions = compiler
            .compile(exclusions, MatchFlags::EXCLUSION)
            .map_err(|source| CrawlerDetectError::InvalidPattern {
                list: Exclusions.name(),
                source,
            })?;
        let resolver = UserAgentResolver::new(headers);

        debug!(
            crawlers = crawlers.pattern_count(),
            exclusions = exclusions.pattern_count(),
            headers = resolver.header_names().len(),
            max_user_agent_bytes,
            "Compiled signature set"
        );

        Ok(Self {
            crawlers,
            exclusions,
            resolver,
            max_user_agent_bytes,
        })
    }

    /// The crawler alternation.
    pub fn crawlers(&self) -> &CompiledMatcher {
        &self.crawlers
    }

    /// The exclusion alternation.
    pub fn exclusions(&self) -> &CompiledMatcher {
        &self.exclusions
    }

    /// Header resolution for this set's UA-bearing headers.
    pub fn resolver(&self) -> &UserAgentResolver {
        &self.resolver
    }

    /// Byte-length bound for candidates.
    pub fn max_user_agent_bytes(&self) -> usize {
        self.max_user_agent_bytes
    }

    /// Remove every genuine-browser token from `candidate`.
    ///
    /// Removal repeats until nothing more matches, so tokens formed by
    /// joining the text around a removed token are removed as well.
    pub fn scrub<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        let mut scrubbed = self.exclusions.remove(candidate);
        loop {
            let next = match self.exclusions.remove(&scrubbed) {
                Cow::Borrowed(_) => break,
                Cow::Owned(next) => next,
            };
            // Only empty matches left.
            if next.len() == scrubbed.len() {
                break;
            }
            scrubbed = Cow::Owned(next);
        }
        scrubbed
    }

    /// Classify a candidate User-Agent.
    ///
    /// Oversized candidates and candidates that are blank once browser tokens
    /// are removed are not crawlers. Otherwise the crawler alternation runs
    /// once over the trimmed residue.
    pub fn classify(&self, candidate: &str) -> Detection {
        if candidate.len() > self.max_user_agent_bytes {
            debug!(
                bytes = candidate.len(),
                limit = self.max_user_agent_bytes,
                "User agent exceeds byte limit, skipping classification"
            );
            return Detection::not_crawler();
        }

        let scrubbed = self.scrub(candidate);
        let residue = scrubbed.trim();
        if residue.is_empty() {
            return Detection::not_crawler();
        }

        match self.crawlers.find(residue) {
            Some(matched) => {
                trace!(matched, "Crawler signature matched");
                Detection::crawler(matched)
            }
            None => Detection::not_crawler(),
        }
    }
}

fn merge<'a>(builtin: &'a [&'static str], extra: &'a [String]) -> Vec<&'a str> {
    builtin
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignatureConfig;

    #[test]
    fn test_default_set_is_shared() {
        let a = SignatureSet::shared_default();
        let b = SignatureSet::shared_default();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.crawlers().pattern_count(), Crawlers.all().len());
        assert_eq!(a.exclusions().pattern_count(), Exclusions.all().len());
        assert_eq!(a.max_user_agent_bytes(), 4096);
    }

    #[test]
    fn test_matcher_flags() {
        let set = SignatureSet::shared_default();
        assert_eq!(set.crawlers().flags(), MatchFlags::CRAWLER);
        assert!(!set.crawlers().flags().global);
        assert_eq!(set.exclusions().flags(), MatchFlags::EXCLUSION);
    }

    #[test]
    fn test_default_config_reuses_shared_set() {
        let set = SignatureSet::from_config(&CrawlerDetectConfig::default()).unwrap();
        assert!(Arc::ptr_eq(&set, &SignatureSet::shared_default()));
    }

    #[test]
    fn test_scrub_removes_browser_tokens() {
        let set = SignatureSet::shared_default();
        let scrubbed = set.scrub("Mozilla/5.0 (X11; Linux x86_64) Firefox/118.0");
        assert!(!scrubbed.contains("Mozilla"));
        assert!(!scrubbed.contains("Linux"));
        assert!(!scrubbed.contains("Firefox"));
    }

    #[test]
    fn test_scrub_removes_tokens_formed_by_removal() {
        let set = SignatureSet::shared_default();

        assert_eq!(set.scrub("x6x644"), "");
        assert_eq!(set.scrub("LinLinuxux"), "");
        assert_eq!(set.scrub("Mozilla/5.0 (X11; LiLinuxnux) curl"), " (; ) curl");
        assert!(matches!(set.scrub("curl/7.68.0"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_classify_crawler() {
        let set = SignatureSet::shared_default();
        let detection = set.classify("curl/7.68.0");
        assert!(detection.is_crawler);
        assert_eq!(detection.matched_signature.as_deref(), Some("curl"));
    }

    #[test]
    fn test_classify_browser_tokens_only() {
        let set = SignatureSet::shared_default();
        let detection = set.classify("Mozilla/5.0 (X11; Linux x86_64) Firefox/118.0");
        assert!(!detection.is_crawler);
        assert_eq!(detection.matched_signature, None);
    }

    #[test]
    fn test_classify_oversized() {
        let set = SignatureSet::shared_default();
        let candidate = format!("Googlebot {}", "a".repeat(4096));
        assert!(!set.classify(&candidate).is_crawler);
    }

    #[test]
    fn test_yandex_search_app_is_not_yandex_crawler() {
        let set = SignatureSet::shared_default();
        let yandex = set.classify("Yandex/1.01.001");
        assert!(yandex.is_crawler);
        assert!(yandex.matched_signature.unwrap().starts_with("Yandex"));

        assert!(!set.classify("YandexSearch/7.16").is_crawler);
    }

    #[test]
    fn test_extra_signatures() {
        let config = CrawlerDetectConfig {
            signatures: SignatureConfig {
                extra_crawlers: vec!["^acme-probe".to_string()],
                extra_exclusions: vec!["AcmeShell/[\\d\\.]*".to_string()],
                extra_headers: vec!["X-Acme-UA".to_string()],
            },
            ..Default::default()
        };
        let set = SignatureSet::from_config(&config).unwrap();

        assert!(set.classify("acme-probe/1").is_crawler);
        assert!(!set.classify("AcmeShell/2.0").is_crawler);
        assert_eq!(
            set.resolver().header_names().last().map(String::as_str),
            Some("x-acme-ua")
        );
    }

    #[test]
    fn test_invalid_extra_pattern() {
        let config = CrawlerDetectConfig {
            signatures: SignatureConfig {
                extra_exclusions: vec!["[unclosed".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let err = SignatureSet::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            CrawlerDetectError::InvalidPattern { list: "exclusions", .. }
        ));
    }

    #[test]
    fn test_custom_byte_limit() {
        let mut config = CrawlerDetectConfig::default();
        config.limits.max_user_agent_bytes = 8;
        let set = SignatureSet::from_config(&config).unwrap();

        assert!(set.classify("curl/7.1").is_crawler);
        assert!(!set.classify("curl/7.68.0").is_crawler);
    }
}
