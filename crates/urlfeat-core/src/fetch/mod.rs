//! Page retrieval collaborator.
//!
//! The core only consumes a `FetchResult`; the transport lives behind the
//! `PageFetcher` trait so the featurizer can run against canned pages.

mod client;

pub use client::CurlFetcher;

use crate::error::FetchError;

/// Outcome of a completed HTTP exchange. Any status code counts as completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Final HTTP status after redirects.
    pub status: u32,
    /// Raw document, decoded lossily as UTF-8.
    pub body: String,
    /// URL after redirects, if libcurl reported one.
    pub effective_url: Option<String>,
}

impl FetchResult {
    pub fn new(status: u32, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            effective_url: None,
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can GET a URL and hand back status + body.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}
