//! Temperature bar aggregation for the tempcast forecasting toolkit.
//!
//! This crate provides reading-to-bar (candlestick) aggregation:
//!
//! - [`Bar`] - One aggregated period (open/high/low/close)
//! - [`ReadingAggregator`] - Streaming aggregator over date-sorted readings
//! - [`aggregate`] - Sorts and aggregates an arbitrary slice of readings
//! - [`OpenPolicy`] - How a bar's open value is chosen
//! - [`next_period`] - The period following the last bar
//! - Bar filters by date, temperature, trend and volatility

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tempcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod bar;
mod filter;
mod period;

pub use aggregator::{
    OpenPolicy, OpenPolicyParseError, ReadingAggregator, aggregate, aggregate_with,
};
pub use bar::Bar;
pub use filter::{
    FilterError, TemperatureRange, Trend, filter_by_date_range, filter_by_temperature_range,
    filter_by_trend, filter_by_volatility,
};
pub use period::{NextPeriod, following_period_start, next_period, period_label, period_start};
