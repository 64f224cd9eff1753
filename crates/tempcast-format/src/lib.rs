//! Output formatters for the tempcast forecasting toolkit.
//!
//! This crate provides formatters for writing bars and rolling predictions
//! to various output formats:
//!
//! - [`CsvFormatter`] - CSV or TSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`ParquetFormatter`] - Apache Parquet columnar format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tempcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

#[cfg(feature = "parquet")]
mod parquet;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, PredictionRow};
pub use json::{JsonFormatter, JsonStyle};

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetFormatter;
