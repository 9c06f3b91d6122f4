//! `urlfeat featurize <url>` – features for a single URL.

use anyhow::{Context, Result};
use urlfeat_core::batch::evaluate_one;
use urlfeat_core::config::UrlfeatConfig;

use super::eval::{collaborators, EvalArgs};
use super::output;

pub async fn run_featurize(cfg: &UrlfeatConfig, url: &str, args: EvalArgs) -> Result<()> {
    let settings = args.settings(cfg);
    let (fetcher, lookup) = collaborators(cfg)?;
    let report = tokio::task::spawn_blocking({
        let url = url.to_string();
        move || evaluate_one(&url, &settings, &fetcher, &lookup)
    })
    .await
    .context("featurize task join")?;
    tracing::info!("featurized {} ({:?})", report.url, report.availability);
    print!("{}", output::render(std::slice::from_ref(&report), args.format, true)?);
    Ok(())
}
