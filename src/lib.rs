//! Crawler detection for web experience tracking.
//!
//! Decides whether a visiting agent is an automated crawler, so that it can be
//! left out of analytics and personalization, by matching its User-Agent
//! against a large list of crawler signatures.
//!
//! # How it works
//!
//! - The crawler and exclusion signature lists are each compiled into one
//!   case-insensitive alternation, once per process.
//! - The working User-Agent comes from an explicit value or, failing that, from
//!   the UA-bearing request headers.
//! - Genuine-browser tokens are stripped from the candidate; what remains is
//!   tested against the crawler alternation.
//! - Candidates over 4096 bytes and candidates with nothing left after
//!   stripping are never classified as crawlers.
//!
//! # Example
//!
//! ```
//! use crawler_detect::CrawlerDetector;
//!
//! let mut detector = CrawlerDetector::from_user_agent(
//!     "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
//! );
//! assert!(detector.is_crawler(None));
//! assert_eq!(detector.matches(), Some("Googlebot"));
//! ```

pub mod cache;
pub mod compiler;
pub mod config;
pub mod detector;
pub mod error;
pub mod resolver;
pub mod signature_set;
pub mod signatures;

pub use cache::CachedClassifier;
pub use compiler::{CompiledMatcher, MatchFlags, PatternCompiler};
pub use config::CrawlerDetectConfig;
pub use detector::{CrawlerDetector, Detection};
pub use error::{CrawlerDetectError, Result};
pub use resolver::{HttpHeaders, RequestLike, UserAgentResolver};
pub use signature_set::SignatureSet;
pub use signatures::SignatureProvider;
