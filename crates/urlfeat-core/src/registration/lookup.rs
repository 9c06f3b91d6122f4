//! Registration lookup collaborator.

use std::time::Duration;

use whois_rust::{WhoIs, WhoIsLookupOptions};

use super::{parse_whois_text, RegistrationRecord};
use crate::config::WhoisConfig;
use crate::error::LookupError;

/// Anything that can resolve a domain to its registration record.
pub trait RegistrationLookup {
    fn lookup(&self, domain: &str) -> Result<RegistrationRecord, LookupError>;
}

/// WHOIS over port 43, starting at a root server and following referrals.
pub struct WhoisLookup {
    client: WhoIs,
    follow: u16,
    timeout: Duration,
}

impl WhoisLookup {
    pub fn new(cfg: &WhoisConfig) -> Result<Self, LookupError> {
        let client =
            WhoIs::from_host(cfg.server.as_str()).map_err(|e| LookupError::Whois(e.to_string()))?;
        Ok(Self {
            client,
            follow: cfg.follow,
            timeout: Duration::from_secs(cfg.timeout_secs),
        })
    }
}

impl RegistrationLookup for WhoisLookup {
    fn lookup(&self, domain: &str) -> Result<RegistrationRecord, LookupError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(LookupError::EmptyDomain);
        }
        let mut options =
            WhoIsLookupOptions::from_string(domain).map_err(|e| LookupError::Whois(e.to_string()))?;
        options.follow = self.follow;
        options.timeout = Some(self.timeout);

        let text = self
            .client
            .lookup(options)
            .map_err(|e| LookupError::Whois(e.to_string()))?;
        tracing::debug!("whois {}: {} bytes", domain, text.len());
        Ok(parse_whois_text(&text))
    }
}
