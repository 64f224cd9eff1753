//! Core types for the tempcast temperature forecasting toolkit.
//!
//! This crate provides the fundamental data structures used throughout tempcast:
//!
//! - [`Reading`] - A single dated temperature observation
//! - [`Granularity`] - Aggregation bucket size (daily, monthly, yearly)
//! - [`CountryCode`] - Two-letter region code selecting a data column
//! - [`YearRange`] - Inclusive year range used when loading readings
//! - [`DateRange`] - Inclusive calendar date range used when filtering bars

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tempcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod country;
mod error;
mod granularity;
mod range;
mod reading;

pub use country::{CountryCode, CountryCodeError};
pub use error::{RangeError, Result, TempcastError};
pub use granularity::{Granularity, GranularityParseError};
pub use range::{DateRange, YearRange};
pub use reading::Reading;
