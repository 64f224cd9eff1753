//! Temperature aggregation, forecasting and validation.
//!
//! This is a facade crate that re-exports functionality from the tempcast
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use tempcast_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let country: CountryCode = "de".parse()?;
//!     let readings = load_readings("weather.csv", &country, YearRange::new(1980, 2019)?)?;
//!     let bars = aggregate(&readings, Granularity::Yearly);
//!
//!     let report = analyze(&bars, &AnalysisConfig::default());
//!     for prediction in &report.predictions {
//!         println!("{}: {:.2}", prediction.model_name, prediction.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tempcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tempcast_types::*;

// Re-export aggregation
pub use tempcast_aggregate::{
    Bar, FilterError, NextPeriod, OpenPolicy, OpenPolicyParseError, ReadingAggregator,
    TemperatureRange, Trend, aggregate, aggregate_with, filter_by_date_range,
    filter_by_temperature_range, filter_by_trend, filter_by_volatility, next_period,
};

// Re-export forecasting
pub use tempcast_predict::{
    AnalysisConfig, AnalysisReport, ConfidenceLevel, ConfigError, Forecaster, Model,
    ModelValidation, PredictionResult, PredictionSpread, Recommendation, RollingSeries,
    Uncertainty, ValidationResult, analyze, analyze_with_validations, best_by_mae, rolling_all,
    rolling_predictions, validate, validate_all,
};

// Re-export loading
#[cfg(feature = "load")]
pub use tempcast_load::{
    LoadStats, LoadedReadings, available_countries, load_readings, load_readings_from_reader,
    load_with_stats,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tempcast_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, PredictionRow,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use tempcast_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use tempcast_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tempcast_types::{
        CountryCode, DateRange, Granularity, RangeError, Reading, Result, TempcastError, YearRange,
    };

    pub use tempcast_aggregate::{Bar, OpenPolicy, aggregate, aggregate_with, next_period};

    pub use tempcast_predict::{
        AnalysisConfig, AnalysisReport, Forecaster, Model, PredictionResult, ValidationResult,
        analyze, rolling_predictions, validate,
    };

    #[cfg(feature = "load")]
    pub use tempcast_load::load_readings;

    #[cfg(feature = "format")]
    pub use tempcast_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use tempcast_format::ParquetFormatter;
}
