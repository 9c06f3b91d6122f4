//! The three output shapes and the diagnostic report around them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FeatureValue, Featurizer, Shape};
use crate::context::Availability;

/// Named mapping returned by `Featurizer::run`.
pub type FeatureMap = BTreeMap<&'static str, FeatureValue>;

/// Names of the full vector's entries, in index order.
pub const FULL_KEYS: [&str; 19] = [
    "entropy",
    "numDigits",
    "urlLength",
    "numParams",
    "hasHttp",
    "hasHttps",
    "urlIsLive",
    "bodyLength",
    "numTitles",
    "numImages",
    "numLinks",
    "scriptLength",
    "specialChars",
    "dsr",
    "dse",
    "dsu",
    "sscr",
    "sbr",
    "bscr",
];

/// Names of the reduced vector's entries, in index order.
pub const REDUCED_KEYS: [&str; 9] = [
    "entropy",
    "numDigits",
    "urlLength",
    "numParams",
    "hasHttp",
    "hasHttps",
    "dsr",
    "dse",
    "dsu",
];

impl Featurizer<'_> {
    /// All 19 features by name.
    pub fn run(&self) -> FeatureMap {
        let mut data = FeatureMap::new();
        data.insert("entropy", self.entropy().into());
        data.insert("numDigits", self.num_digits().into());
        data.insert("urlLength", self.url_length().into());
        data.insert("numParams", self.num_parameters().into());
        data.insert("hasHttp", self.has_http().into());
        data.insert("hasHttps", self.has_https().into());
        data.insert("urlIsLive", self.url_is_live().into());
        data.insert("bodyLength", self.body_length().into());
        data.insert("numTitles", self.num_titles().into());
        data.insert("numImages", self.num_images().into());
        data.insert("numLinks", self.num_links().into());
        data.insert("scriptLength", self.script_length().into());
        data.insert("specialChars", self.special_characters().into());
        data.insert("dsu", self.days_since_update().into());
        data.insert("dsr", self.days_since_registration().into());
        data.insert("dse", self.days_since_expiration().into());
        data.insert("sscr", self.script_to_special_chars_ratio().into());
        data.insert("sbr", self.script_to_body_ratio().into());
        data.insert("bscr", self.body_to_special_char_ratio().into());
        data
    }

    /// All 19 features in `FULL_KEYS` order; booleans as 0/1.
    pub fn run_array(&self) -> [f64; 19] {
        [
            self.entropy(),
            self.num_digits() as f64,
            self.url_length() as f64,
            self.num_parameters() as f64,
            bit(self.has_http()),
            bit(self.has_https()),
            bit(self.url_is_live()),
            self.body_length() as f64,
            self.num_titles() as f64,
            self.num_images() as f64,
            self.num_links() as f64,
            self.script_length() as f64,
            self.special_characters() as f64,
            self.days_since_registration() as f64,
            self.days_since_expiration() as f64,
            self.days_since_update() as f64,
            self.script_to_special_chars_ratio(),
            self.script_to_body_ratio(),
            self.body_to_special_char_ratio(),
        ]
    }

    /// Lexical and registration features in `REDUCED_KEYS` order. Never
    /// reads the fetched page or the document.
    pub fn run_array_reduced(&self) -> [f64; 9] {
        [
            self.entropy(),
            self.num_digits() as f64,
            self.url_length() as f64,
            self.num_parameters() as f64,
            bit(self.has_http()),
            bit(self.has_https()),
            self.days_since_registration() as f64,
            self.days_since_expiration() as f64,
            self.days_since_update() as f64,
        ]
    }

    /// The requested shape bundled with presence flags and identifying data.
    pub fn report(&self, shape: Shape) -> FeatureReport {
        let values = match shape {
            Shape::Map => FeatureValues::Map(self.run()),
            Shape::Full => FeatureValues::Vector(self.run_array().to_vec()),
            Shape::Reduced => FeatureValues::Vector(self.run_array_reduced().to_vec()),
        };
        let ctx = self.context();
        FeatureReport {
            url: ctx.url().to_string(),
            domain: ctx.domain().to_string(),
            as_of: ctx.as_of(),
            shape,
            availability: ctx.availability(),
            values,
        }
    }
}

fn bit(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValues {
    Map(FeatureMap),
    Vector(Vec<f64>),
}

/// One evaluated URL: the feature values plus enough context to tell a
/// measured zero from an unavailable input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureReport {
    pub url: String,
    pub domain: String,
    pub as_of: DateTime<Utc>,
    pub shape: Shape,
    pub availability: Availability,
    pub values: FeatureValues,
}

impl FeatureReport {
    /// Column names matching `numeric_values`.
    pub fn columns(&self) -> &'static [&'static str] {
        match self.shape {
            Shape::Map | Shape::Full => &FULL_KEYS,
            Shape::Reduced => &REDUCED_KEYS,
        }
    }

    /// Values as numbers in `columns()` order.
    pub fn numeric_values(&self) -> Vec<f64> {
        match &self.values {
            FeatureValues::Vector(v) => v.clone(),
            FeatureValues::Map(m) => FULL_KEYS
                .iter()
                .map(|k| m.get(k).map(|v| v.as_f64()).unwrap_or(0.0))
                .collect(),
        }
    }
}
