//! Caching utilities for crawler detection.

use crate::config::CacheConfig;
use crate::detector::Detection;
use crate::signature_set::SignatureSet;
use moka::sync::Cache;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

/// Named cache wrapper.
pub struct DetectionCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<K, V>,
    name: String,
}

impl<K, V> DetectionCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a new cache with the given parameters.
    pub fn new(name: impl Into<String>, max_capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self {
            inner,
            name: name.into(),
        }
    }

    /// Get a value from the cache.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key)
    }

    /// Insert a value into the cache.
    pub fn insert(&self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    /// Get the value for `key`, computing and storing it on a miss.
    pub fn get_with(&self, key: K, init: impl FnOnce() -> V) -> V {
        self.inner.get_with(key, init)
    }

    /// Get the current entry count.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }

    /// Get the cache name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invalidate all entries.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

/// Classifier that memoizes verdicts by candidate string.
///
/// Safe to share between threads; the signature set is read-only and the
/// cache synchronizes internally.
pub struct CachedClassifier {
    signatures: Arc<SignatureSet>,
    cache: Option<DetectionCache<String, Detection>>,
}

impl CachedClassifier {
    /// Create a classifier over `signatures` using the cache settings.
    pub fn new(signatures: Arc<SignatureSet>, config: &CacheConfig) -> Self {
        let cache = config.enabled.then(|| {
            DetectionCache::new(
                "verdicts",
                config.max_capacity,
                Duration::from_secs(config.ttl_seconds),
            )
        });
        Self { signatures, cache }
    }

    /// Classify `user_agent`, consulting the cache first.
    ///
    /// Candidates above the byte limit are rejected without being cached.
    pub fn classify(&self, user_agent: &str) -> Detection {
        match &self.cache {
            Some(cache) if user_agent.len() <= self.signatures.max_user_agent_bytes() => cache
                .get_with(user_agent.to_string(), || self.signatures.classify(user_agent)),
            _ => self.signatures.classify(user_agent),
        }
    }

    /// The signature set in use.
    pub fn signatures(&self) -> &Arc<SignatureSet> {
        &self.signatures
    }

    /// The verdict cache, if enabled.
    pub fn cache(&self) -> Option<&DetectionCache<String, Detection>> {
        self.cache.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_basic() {
        let cache: DetectionCache<String, i32> =
            DetectionCache::new("test", 100, Duration::from_secs(60));

        cache.insert("key1".to_string(), 42);

        let value = cache.get(&"key1".to_string());
        assert_eq!(value, Some(42));

        let missing = cache.get(&"missing".to_string());
        assert_eq!(missing, None);
        assert_eq!(cache.name(), "test");
    }

    #[test]
    fn test_cache_entry_count() {
        let cache: DetectionCache<String, Detection> =
            DetectionCache::new("verdicts", 100, Duration::from_secs(60));

        cache.insert("curl".to_string(), Detection::crawler("curl"));
        cache.insert("Wget".to_string(), Detection::crawler("Wget"));
        cache.inner.run_pending_tasks();

        assert_eq!(cache.entry_count(), 2);
    }

    #[test]
    fn test_cache_expiry() {
        let cache: DetectionCache<String, i32> = DetectionCache::new(
            "test",
            100,
            Duration::from_millis(50), // 50ms TTL
        );

        cache.insert("key".to_string(), 42);

        // Should exist immediately
        assert!(cache.get(&"key".to_string()).is_some());

        // Wait for expiry
        std::thread::sleep(Duration::from_millis(100));

        // Should be gone
        assert!(cache.get(&"key".to_string()).is_none());
    }

    #[test]
    fn test_cached_classifier_matches_uncached() {
        let signatures = SignatureSet::shared_default();
        let classifier = CachedClassifier::new(Arc::clone(&signatures), &CacheConfig::default());

        for ua in ["curl/7.68.0", "Mozilla/5.0 (X11; Linux x86_64) Firefox/118.0", ""] {
            assert_eq!(classifier.classify(ua), signatures.classify(ua));
            assert_eq!(classifier.classify(ua), signatures.classify(ua));
        }
        assert!(classifier.cache().unwrap().get(&"curl/7.68.0".to_string()).is_some());
    }

    #[test]
    fn test_oversized_candidates_are_not_cached() {
        let classifier =
            CachedClassifier::new(SignatureSet::shared_default(), &CacheConfig::default());
        let oversized = "curl ".repeat(1000);

        assert!(!classifier.classify(&oversized).is_crawler);
        assert!(classifier.cache().unwrap().get(&oversized).is_none());
    }

    #[test]
    fn test_disabled_cache() {
        let config = CacheConfig {
            enabled: false,
            ..Default::default()
        };
        let classifier = CachedClassifier::new(SignatureSet::shared_default(), &config);

        assert!(classifier.cache().is_none());
        assert!(classifier.classify("Wget/1.21").is_crawler);
    }
}
