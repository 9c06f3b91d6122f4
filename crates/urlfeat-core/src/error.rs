//! Errors at the collaborator boundary (page fetch, registration lookup).
//!
//! Feature computation itself never fails; these only surface from the
//! collaborators and are turned into "absent" by `FeaturizerContext::capture`.

use thiserror::Error;

/// Page retrieval failed before any response was available.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed as an absolute URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// libcurl reported a transport error (DNS, connect, TLS, timeout...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Body exceeded the configured cap; transfer aborted.
    #[error("body exceeds {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Registration lookup failed or returned nothing usable.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Domain was empty after scheme/path stripping.
    #[error("empty domain")]
    EmptyDomain,
    /// WHOIS client error (server resolution, I/O, timeout).
    #[error("whois: {0}")]
    Whois(String),
}
