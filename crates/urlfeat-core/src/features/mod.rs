//! Feature computation over a `FeaturizerContext`.
//!
//! Every feature has a total default: lexical features always have a value,
//! date features fall back to 0 without a usable registration date, page
//! features fall back to 0 without a parsed document.

mod assemble;
mod dates;
mod page;

pub use assemble::{FeatureMap, FeatureReport, FeatureValues, FULL_KEYS, REDUCED_KEYS};
pub use dates::whole_days;
pub use page::PageStats;

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use crate::context::FeaturizerContext;
use crate::url_model;

/// A single feature value as it appears in the named mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Float(f64),
    Int(i64),
    Bool(bool),
}

impl FeatureValue {
    /// Numeric encoding used by the vectors (booleans as 0/1).
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Float(v) => v,
            FeatureValue::Int(v) => v as f64,
            FeatureValue::Bool(v) => u8::from(v) as f64,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<usize> for FeatureValue {
    fn from(v: usize) -> Self {
        FeatureValue::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Bool(v)
    }
}

/// How `url_is_live` is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LivenessMode {
    /// Reference behavior: the response object is compared with the number
    /// 200, which never matches, so the feature is always false.
    #[default]
    Legacy,
    /// True when a fetch completed with a 2xx status.
    Status2xx,
}

/// Output shape requested from the featurizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Named mapping of 19 features.
    #[default]
    Map,
    /// Fixed-order vector of 19 features.
    Full,
    /// Fixed-order vector of 9 features; never touches page data.
    Reduced,
}

impl Shape {
    /// Whether producing this shape needs the page to be fetched.
    pub fn needs_page(self) -> bool {
        !matches!(self, Shape::Reduced)
    }
}

/// Computes features from a borrowed context. Page statistics are derived
/// from the document at most once, and only when a page feature is asked for.
pub struct Featurizer<'a> {
    ctx: &'a FeaturizerContext,
    liveness: LivenessMode,
    page: OnceCell<Option<PageStats>>,
}

impl<'a> Featurizer<'a> {
    pub fn new(ctx: &'a FeaturizerContext) -> Self {
        Self {
            ctx,
            liveness: LivenessMode::default(),
            page: OnceCell::new(),
        }
    }

    pub fn with_liveness(mut self, liveness: LivenessMode) -> Self {
        self.liveness = liveness;
        self
    }

    pub fn context(&self) -> &FeaturizerContext {
        self.ctx
    }

    pub fn entropy(&self) -> f64 {
        url_model::entropy(self.ctx.url())
    }

    pub fn num_digits(&self) -> usize {
        url_model::num_digits(self.ctx.url())
    }

    pub fn url_length(&self) -> usize {
        url_model::url_length(self.ctx.url())
    }

    pub fn num_parameters(&self) -> usize {
        url_model::num_parameters(self.ctx.url())
    }

    /// Available but not part of any assembled output.
    pub fn num_fragments(&self) -> usize {
        url_model::num_fragments(self.ctx.url())
    }

    pub fn num_sub_domains(&self) -> usize {
        url_model::num_sub_domains(self.ctx.url())
    }

    /// Available but not part of any assembled output.
    pub fn domain_extension(&self) -> &str {
        url_model::domain_extension(self.ctx.url())
    }

    pub fn has_http(&self) -> bool {
        url_model::has_http(self.ctx.url())
    }

    pub fn has_https(&self) -> bool {
        url_model::has_https(self.ctx.url())
    }

    pub fn url_is_live(&self) -> bool {
        match self.liveness {
            LivenessMode::Legacy => false,
            LivenessMode::Status2xx => self
                .ctx
                .fetch_result()
                .map(|f| f.is_success())
                .unwrap_or(false),
        }
    }
}
