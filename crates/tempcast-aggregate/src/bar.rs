//! Temperature bar (candlestick) data structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::period_label;

/// One aggregated time period of temperature readings.
///
/// `close` is the mean of every reading in the period and is the value all
/// forecasting models work with. Bars satisfy
/// `low <= min(open, close) <= max(open, close) <= high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Period start formatted as `YYYY-MM-DD`.
    pub period_label: String,
    /// Opening temperature, chosen by the aggregator's [`OpenPolicy`](crate::OpenPolicy).
    pub open: f64,
    /// Highest reading during the period.
    pub high: f64,
    /// Lowest reading during the period.
    pub low: f64,
    /// Mean temperature of the period.
    pub close: f64,
    /// Number of readings in the bar.
    pub reading_count: u32,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub fn new(
        period_start: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        reading_count: u32,
    ) -> Self {
        Self {
            period_start,
            period_label: period_label(period_start),
            open,
            high,
            low,
            close,
            reading_count,
        }
    }

    /// Creates a bar from a single reading, where all four values coincide.
    #[must_use]
    pub fn flat(period_start: NaiveDate, temperature: f64) -> Self {
        Self::new(
            period_start,
            temperature,
            temperature,
            temperature,
            temperature,
            1,
        )
    }

    /// Returns the temperature range (high - low), used as the bar's volatility.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if the period closed at or above its open.
    #[must_use]
    pub fn is_uptrend(&self) -> bool {
        self.close >= self.open
    }

    /// Returns the mean temperature of the period.
    #[must_use]
    pub const fn mean_temperature(&self) -> f64 {
        self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_bar() -> Bar {
        let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        Bar::new(start, 2.0, 9.5, -4.0, 3.25, 31)
    }

    #[test]
    fn test_label() {
        let bar = create_test_bar();
        assert_eq!(bar.period_label, "2019-01-01");
    }

    #[test]
    fn test_range() {
        let bar = create_test_bar();
        assert!((bar.range() - 13.5).abs() < 1e-10);
    }

    #[test]
    fn test_body() {
        let bar = create_test_bar();
        assert!((bar.body() - 1.25).abs() < 1e-10);
    }

    #[test]
    fn test_uptrend() {
        let bar = create_test_bar();
        assert!(bar.is_uptrend());

        let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let bar = Bar::new(start, 5.0, 9.5, -4.0, 3.25, 31);
        assert!(!bar.is_uptrend());
    }

    #[test]
    fn test_flat_bar() {
        let start = NaiveDate::from_ymd_opt(2019, 6, 1).unwrap();
        let bar = Bar::flat(start, 17.0);

        assert_eq!(bar.open, bar.close);
        assert_eq!(bar.high, bar.low);
        assert!(bar.is_uptrend());
        assert_eq!(bar.reading_count, 1);
    }
}
