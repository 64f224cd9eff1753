//! Bar filters.
//!
//! Each filter returns a new vector of the retained bars in their original
//! order and logs how many bars survived.

use serde::{Deserialize, Serialize};
use tempcast_types::DateRange;
use thiserror::Error;
use tracing::debug;

use crate::Bar;

/// Errors that can occur when building a filter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Minimum temperature is above the maximum.
    #[error("Invalid temperature range: {min} > {max}")]
    InvalidTemperatureRange {
        /// The minimum temperature.
        min: f64,
        /// The maximum temperature.
        max: f64,
    },
}

/// Inclusive range of mean temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    /// Lowest accepted mean temperature.
    pub min: f64,
    /// Highest accepted mean temperature.
    pub max: f64,
}

impl TemperatureRange {
    /// Creates a new temperature range, validating that min <= max.
    ///
    /// # Errors
    ///
    /// Returns an error if min > max.
    pub fn new(min: f64, max: f64) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvalidTemperatureRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns true if the range contains the given temperature.
    #[must_use]
    pub fn contains(&self, temperature: f64) -> bool {
        temperature >= self.min && temperature <= self.max
    }
}

/// Direction of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Close at or above open.
    Up,
    /// Close below open.
    Down,
}

/// Keeps bars whose period starts within the range.
#[must_use]
pub fn filter_by_date_range(bars: &[Bar], range: DateRange) -> Vec<Bar> {
    retain(bars, "date range", |bar| range.contains(bar.period_start))
}

/// Keeps bars whose mean temperature lies within the range.
#[must_use]
pub fn filter_by_temperature_range(bars: &[Bar], range: TemperatureRange) -> Vec<Bar> {
    retain(bars, "temperature range", |bar| {
        range.contains(bar.mean_temperature())
    })
}

/// Keeps bars moving in the given direction.
#[must_use]
pub fn filter_by_trend(bars: &[Bar], trend: Trend) -> Vec<Bar> {
    let want_up = trend == Trend::Up;
    retain(bars, "trend", |bar| bar.is_uptrend() == want_up)
}

/// Keeps bars whose high-low range is at least `min_range`.
///
/// A negative minimum is treated as zero.
#[must_use]
pub fn filter_by_volatility(bars: &[Bar], min_range: f64) -> Vec<Bar> {
    let min_range = min_range.max(0.0);
    retain(bars, "volatility", |bar| bar.range() >= min_range)
}

fn retain(bars: &[Bar], filter: &str, predicate: impl Fn(&Bar) -> bool) -> Vec<Bar> {
    let kept: Vec<Bar> = bars.iter().filter(|bar| predicate(bar)).cloned().collect();
    debug!(
        filter,
        original = bars.len(),
        retained = kept.len(),
        "applied bar filter"
    );
    kept
}
