//! Evaluate many URLs concurrently.
//!
//! Each URL gets its own context built inside a blocking task; nothing is
//! shared between evaluations except the (stateless) collaborators.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::context::{CaptureOptions, FeaturizerContext};
use crate::features::{FeatureReport, Featurizer, LivenessMode, Shape};
use crate::fetch::PageFetcher;
use crate::registration::RegistrationLookup;

/// Per-run evaluation settings shared by every URL in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalSettings {
    /// Reference time for every date feature in the run.
    pub as_of: DateTime<Utc>,
    pub shape: Shape,
    pub liveness: LivenessMode,
    pub capture: CaptureOptions,
}

impl EvalSettings {
    pub fn new(as_of: DateTime<Utc>, shape: Shape) -> Self {
        Self {
            as_of,
            shape,
            liveness: LivenessMode::default(),
            capture: CaptureOptions::default(),
        }
    }

    /// Capture options actually used: the reduced shape never fetches.
    pub fn effective_capture(&self) -> CaptureOptions {
        CaptureOptions {
            fetch_page: self.capture.fetch_page && self.shape.needs_page(),
            ..self.capture
        }
    }
}

/// Capture one URL and assemble the requested shape. Blocking; never fails.
pub fn evaluate_one(
    url: &str,
    settings: &EvalSettings,
    fetcher: &dyn PageFetcher,
    lookup: &dyn RegistrationLookup,
) -> FeatureReport {
    let ctx = FeaturizerContext::capture(
        url,
        settings.as_of,
        fetcher,
        lookup,
        settings.effective_capture(),
    );
    tracing::debug!("captured {:?}", ctx);
    Featurizer::new(&ctx)
        .with_liveness(settings.liveness)
        .report(settings.shape)
}

/// Evaluates `urls` with up to `jobs` in flight at once. Results are
/// returned in input order.
pub async fn evaluate_many(
    urls: Vec<String>,
    settings: EvalSettings,
    jobs: usize,
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
    lookup: Arc<dyn RegistrationLookup + Send + Sync>,
) -> Result<Vec<FeatureReport>> {
    let jobs = jobs.max(1);
    let total = urls.len();
    let mut results: Vec<Option<FeatureReport>> = (0..total).map(|_| None).collect();
    let mut pending = urls.into_iter().enumerate();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < jobs {
            let Some((idx, url)) = pending.next() else {
                break;
            };
            let fetcher = Arc::clone(&fetcher);
            let lookup = Arc::clone(&lookup);
            join_set.spawn_blocking(move || {
                let report = evaluate_one(&url, &settings, &*fetcher, &*lookup);
                (idx, report)
            });
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let (idx, report) = res.context("featurize task join")?;
        results[idx] = Some(report);
    }

    tracing::info!("evaluated {} urls with {} jobs", total, jobs);
    Ok(results.into_iter().flatten().collect())
}
