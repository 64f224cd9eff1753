//! CSV loading for the tempcast forecasting toolkit.
//!
//! - [`load_readings`] - Readings for one country and year range from a file
//! - [`load_readings_from_reader`] - The same over any [`std::io::Read`]
//! - [`load_with_stats`] - Readings plus per-row accounting
//! - [`available_countries`] - Country codes present in a source

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tempcast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod field;
mod loader;

pub use field::{TEMPERATURE_SANITY_LIMIT, TemperatureField, parse_temperature, parse_year};
pub use loader::{
    LoadStats, LoadedReadings, available_countries, load_readings, load_readings_from_reader,
    load_with_stats,
};
