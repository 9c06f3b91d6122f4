//! `urlfeat batch <file>` – features for many URLs.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use urlfeat_core::batch::evaluate_many;
use urlfeat_core::config::UrlfeatConfig;

use super::eval::{collaborators, EvalArgs};
use super::output;

/// URLs from a list file: one per line, trimmed; blank lines and `#` comments skipped.
pub(crate) fn read_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub async fn run_batch(cfg: &UrlfeatConfig, path: &Path, jobs: usize, args: EvalArgs) -> Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let urls = read_url_list(&text);
    if urls.is_empty() {
        tracing::warn!("no URLs in {}", path.display());
        return Ok(());
    }

    let settings = args.settings(cfg);
    let (fetcher, lookup) = collaborators(cfg)?;
    let reports = evaluate_many(urls, settings, jobs, Arc::new(fetcher), Arc::new(lookup)).await?;
    print!("{}", output::render(&reports, args.format, false)?);
    Ok(())
}
