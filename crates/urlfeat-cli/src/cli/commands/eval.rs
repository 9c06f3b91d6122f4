//! Shared setup for commands that evaluate URLs.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use urlfeat_core::batch::EvalSettings;
use urlfeat_core::config::UrlfeatConfig;
use urlfeat_core::fetch::CurlFetcher;
use urlfeat_core::registration::WhoisLookup;
use urlfeat_core::{CaptureOptions, Shape};

use crate::cli::FormatArg;

/// Flags common to `featurize` and `batch`.
#[derive(Debug, Clone, Copy)]
pub struct EvalArgs {
    pub shape: Shape,
    pub format: FormatArg,
    pub no_fetch: bool,
    pub no_whois: bool,
    pub as_of: Option<DateTime<Utc>>,
}

impl EvalArgs {
    /// Settings for this run; the reference time is fixed here once.
    pub fn settings(&self, cfg: &UrlfeatConfig) -> EvalSettings {
        let mut settings = EvalSettings::new(self.as_of.unwrap_or_else(Utc::now), self.shape);
        settings.liveness = cfg.liveness;
        settings.capture = CaptureOptions {
            fetch_page: !self.no_fetch,
            lookup_registration: !self.no_whois,
        };
        settings
    }
}

pub fn collaborators(cfg: &UrlfeatConfig) -> Result<(CurlFetcher, WhoisLookup)> {
    let fetcher = CurlFetcher::new(cfg.fetch.clone());
    let lookup = WhoisLookup::new(&cfg.whois)
        .with_context(|| format!("whois client for {}", cfg.whois.server))?;
    Ok((fetcher, lookup))
}
