//! libcurl-backed page fetcher.

use std::time::Duration;

use super::{FetchResult, PageFetcher};
use crate::config::FetchConfig;
use crate::error::FetchError;

/// Blocking GET via the curl crate. Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    cfg: FetchConfig,
}

impl CurlFetcher {
    pub fn new(cfg: FetchConfig) -> Self {
        Self { cfg }
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        url::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let limit = self.cfg.max_body_bytes;
        let mut body: Vec<u8> = Vec::new();
        let mut too_large = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.cfg.max_redirections)?;
        easy.useragent(&self.cfg.user_agent)?;
        easy.accept_encoding("")?; // any encoding libcurl can decode
        easy.connect_timeout(Duration::from_secs(self.cfg.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.cfg.timeout_secs))?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if body.len() as u64 + data.len() as u64 > limit {
                    too_large = true;
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };
        if too_large {
            return Err(FetchError::TooLarge { limit });
        }
        performed?;

        let status = easy.response_code()?;
        let effective_url = easy.effective_url()?.map(str::to_string);
        tracing::debug!(
            "GET {} -> HTTP {} ({} bytes)",
            url,
            status,
            body.len()
        );

        Ok(FetchResult {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
            effective_url,
        })
    }
}
