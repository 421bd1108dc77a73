//! Headers that may carry a User-Agent.
//!
//! Besides the standard `User-Agent`, proxies, transcoders and some mobile
//! browsers forward the original device User-Agent in vendor headers. Order is
//! significant: values are gathered in list order.

use super::SignatureProvider;

/// UA-bearing header names, in lookup order.
pub(crate) static UA_HEADERS: &[&str] = &[
    "USER-AGENT",
    "X-OPERAMINI-PHONE-UA",
    "X-DEVICE-USER-AGENT",
    "X-ORIGINAL-USER-AGENT",
    "X-SKYFIRE-PHONE",
    "X-BOLT-PHONE-UA",
    "DEVICE-STOCK-UA",
    "X-UCBROWSER-DEVICE-UA",
    "FROM",
    "X-SCANNER",
];

/// Provider for the UA-bearing header names.
#[derive(Debug, Clone, Copy, Default)]
pub struct UaHeaders;

impl SignatureProvider for UaHeaders {
    fn all(&self) -> &'static [&'static str] {
        UA_HEADERS
    }

    fn name(&self) -> &'static str {
        "headers"
    }
}
