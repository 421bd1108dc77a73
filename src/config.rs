//! Configuration types for crawler detection.

use crate::compiler::DEFAULT_SIZE_LIMIT;
use crate::error::{CrawlerDetectError, Result};
use serde::{Deserialize, Serialize};

/// Default byte-length bound for a candidate User-Agent.
pub const DEFAULT_MAX_USER_AGENT_BYTES: usize = 4096;

/// Main configuration for crawler detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerDetectConfig {
    /// Input and compilation limits
    pub limits: LimitsConfig,

    /// Additional signatures layered on the built-in lists
    pub signatures: SignatureConfig,

    /// Verdict cache settings
    pub cache: CacheConfig,
}

impl CrawlerDetectConfig {
    /// Reject out-of-range settings.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_user_agent_bytes == 0 {
            return Err(CrawlerDetectError::Config(
                "limits.max_user_agent_bytes must be greater than 0".to_string(),
            ));
        }
        if self.limits.regex_size_limit == 0 {
            return Err(CrawlerDetectError::Config(
                "limits.regex_size_limit must be greater than 0".to_string(),
            ));
        }
        if self.cache.enabled && self.cache.max_capacity == 0 {
            return Err(CrawlerDetectError::Config(
                "cache.max_capacity must be greater than 0 when the cache is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input and compilation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Candidates longer than this many bytes are never classified as crawlers
    pub max_user_agent_bytes: usize,

    /// Compiled program size limit in bytes
    pub regex_size_limit: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_user_agent_bytes: DEFAULT_MAX_USER_AGENT_BYTES,
            regex_size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Extra signatures appended to the built-in lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    /// Additional crawler fragments (regex syntax)
    pub extra_crawlers: Vec<String>,

    /// Additional exclusion fragments (regex syntax)
    pub extra_exclusions: Vec<String>,

    /// Additional UA-bearing header names, looked up after the built-ins
    pub extra_headers: Vec<String>,
}

impl SignatureConfig {
    /// Returns true if nothing is added to the built-in lists.
    pub fn is_empty(&self) -> bool {
        self.extra_crawlers.is_empty()
            && self.extra_exclusions.is_empty()
            && self.extra_headers.is_empty()
    }
}

/// Verdict cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache classification results by candidate string
    pub enabled: bool,

    /// Maximum cached verdicts
    pub max_capacity: u64,

    /// Verdict TTL in seconds
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_capacity: 10_000,
            ttl_seconds: 3600,
        }
    }
}
