pub mod config;
pub mod logging;

pub mod batch;
pub mod context;
pub mod document;
pub mod error;
pub mod features;
pub mod fetch;
pub mod registration;
pub mod url_model;

pub use context::{Availability, CaptureOptions, FeaturizerContext};
pub use features::{FeatureMap, FeatureReport, FeatureValue, Featurizer, LivenessMode, Shape};
