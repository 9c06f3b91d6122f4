//! Per-URL evaluation context.
//!
//! Built once per URL and never mutated afterwards. Collaborator failures are
//! recorded as absent values here; feature code only ever sees `Option`s.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::{DocumentQuery, HtmlDocument};
use crate::fetch::{FetchResult, PageFetcher};
use crate::registration::{RegistrationLookup, RegistrationRecord};
use crate::url_model;

/// Which collaborators `FeaturizerContext::capture` should call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    pub fetch_page: bool,
    pub lookup_registration: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            fetch_page: true,
            lookup_registration: true,
        }
    }
}

impl CaptureOptions {
    /// Everything the reduced vector needs: registration only, no page fetch.
    pub fn reduced() -> Self {
        Self {
            fetch_page: false,
            lookup_registration: true,
        }
    }

    /// No network at all; only lexical features carry information.
    pub fn offline() -> Self {
        Self {
            fetch_page: false,
            lookup_registration: false,
        }
    }
}

/// Presence flags, so callers can tell a measured zero from missing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub fetch: bool,
    pub registration: bool,
    pub document: bool,
}

pub struct FeaturizerContext {
    url: String,
    domain: String,
    as_of: DateTime<Utc>,
    registration: Option<RegistrationRecord>,
    fetch: Option<FetchResult>,
    document: Option<Box<dyn DocumentQuery>>,
}

impl FeaturizerContext {
    /// Build from already-obtained collaborator results. The document is
    /// parsed from the fetched body when a fetch result is present.
    pub fn new(
        url: impl Into<String>,
        as_of: DateTime<Utc>,
        registration: Option<RegistrationRecord>,
        fetch: Option<FetchResult>,
    ) -> Self {
        let document = fetch
            .as_ref()
            .map(|f| Box::new(HtmlDocument::parse(&f.body)) as Box<dyn DocumentQuery>);
        Self::with_document(url, as_of, registration, fetch, document)
    }

    /// Build with an explicit document implementation instead of parsing the body.
    pub fn with_document(
        url: impl Into<String>,
        as_of: DateTime<Utc>,
        registration: Option<RegistrationRecord>,
        fetch: Option<FetchResult>,
        document: Option<Box<dyn DocumentQuery>>,
    ) -> Self {
        let url = url.into();
        let domain = url_model::domain_of(&url).to_string();
        Self {
            url,
            domain,
            as_of,
            registration,
            fetch,
            document,
        }
    }

    /// Run the collaborators (registration lookup, then page fetch) and build
    /// the context. Each call is independent: a failure in one is logged and
    /// recorded as absent without affecting the other. Never fails.
    pub fn capture(
        url: &str,
        as_of: DateTime<Utc>,
        fetcher: &dyn PageFetcher,
        lookup: &dyn RegistrationLookup,
        options: CaptureOptions,
    ) -> Self {
        let domain = url_model::domain_of(url);

        let registration = if options.lookup_registration {
            match lookup.lookup(domain) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("registration lookup for {} unavailable: {}", domain, e);
                    None
                }
            }
        } else {
            None
        };

        let fetch = if options.fetch_page {
            match fetcher.fetch(url) {
                Ok(result) => Some(result),
                Err(e) => {
                    tracing::warn!("fetch of {} unavailable: {}", url, e);
                    None
                }
            }
        } else {
            None
        };

        Self::new(url, as_of, registration, fetch)
    }

    /// The URL exactly as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host part used for registration lookup.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Reference time for every date difference.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    pub fn registration(&self) -> Option<&RegistrationRecord> {
        self.registration.as_ref()
    }

    pub fn fetch_result(&self) -> Option<&FetchResult> {
        self.fetch.as_ref()
    }

    pub fn document(&self) -> Option<&dyn DocumentQuery> {
        self.document.as_deref()
    }

    pub fn availability(&self) -> Availability {
        Availability {
            fetch: self.fetch.is_some(),
            registration: self.registration.is_some(),
            document: self.document.is_some(),
        }
    }
}

impl std::fmt::Debug for FeaturizerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturizerContext")
            .field("url", &self.url)
            .field("domain", &self.domain)
            .field("as_of", &self.as_of)
            .field("registration", &self.registration)
            .field("fetch", &self.fetch.as_ref().map(|r| r.status))
            .field("document", &self.document.is_some())
            .finish()
    }
}
