//! Forecasting and validation for the tempcast forecasting toolkit.
//!
//! - [`Model`] - Linear, moving-average and momentum forecasters
//! - [`Forecaster`] - The common prediction capability
//! - [`validate`] - Forward-chaining validation without lookahead
//! - [`rolling_predictions`] - One historical forecast per eligible bar
//! - [`analyze`] - Complete analysis pass driven by [`AnalysisConfig`]

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tempcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod model;
mod report;
mod result;
mod rolling;
mod stats;
mod validation;

pub use config::{AnalysisConfig, ConfigError};
pub use model::{Forecaster, Model};
pub use report::{
    AnalysisReport, PredictionSpread, Recommendation, Uncertainty, analyze,
    analyze_with_validations,
};
pub use result::{ConfidenceLevel, PredictionResult, ValidationResult};
pub use rolling::{RollingSeries, rolling_all, rolling_predictions};
pub use validation::{ModelValidation, best_by_mae, validate, validate_all};
