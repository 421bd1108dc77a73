//! Signature lists.
//!
//! Each provider exposes a fixed, ordered list of strings through the same
//! capability. The lists are static data versioned with the code.

pub mod crawlers;
pub mod exclusions;
pub mod headers;

pub use crawlers::Crawlers;
pub use exclusions::Exclusions;
pub use headers::UaHeaders;

/// A named, immutable list of patterns.
pub trait SignatureProvider: Send + Sync {
    /// All entries, in declaration order.
    fn all(&self) -> &'static [&'static str];

    /// Get the list name.
    fn name(&self) -> &'static str;
}
