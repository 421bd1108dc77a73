//! Error types for crawler detection.

/// Errors raised while building a signature set from configuration.
///
/// Classification itself never fails; only compiling user-supplied patterns
/// or applying an invalid configuration can.
#[derive(Debug, thiserror::Error)]
pub enum CrawlerDetectError {
    /// A signature list does not compile into a valid expression.
    #[error("invalid pattern in {list} list: {source}")]
    InvalidPattern {
        list: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A configuration value is out of range.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type using [`CrawlerDetectError`].
pub type Result<T> = std::result::Result<T, CrawlerDetectError>;
