//! Benchmark utilities for tempcast.

use chrono::{Datelike, Duration, NaiveDate};
use tempcast_lib::Reading;

/// Generates hourly readings starting at `start_year` for `years` years.
///
/// Temperatures follow a seasonal cycle plus a slow warming trend and a
/// deterministic hourly wobble, so every bar has a distinct open, high,
/// low and close.
#[must_use]
pub fn synthetic_readings(start_year: i32, years: u32) -> Vec<Reading> {
    let Some(start) = NaiveDate::from_ymd_opt(start_year, 1, 1) else {
        return Vec::new();
    };
    let Some(end) = NaiveDate::from_ymd_opt(start_year + years as i32, 1, 1) else {
        return Vec::new();
    };

    let hours = (end - start).num_hours();
    let origin = start.and_hms_opt(0, 0, 0).unwrap_or_default();

    (0..hours)
        .map(|hour| {
            let at = origin + Duration::hours(hour);
            let day = f64::from(at.ordinal0());
            let seasonal = -10.0 * (day / 365.25 * std::f64::consts::TAU).cos();
            let trend = (hour as f64) / 8_766.0 * 0.03;
            let wobble = ((hour % 24) as f64 - 12.0).abs() * -0.4;
            Reading::new(
                at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                9.0 + seasonal + trend + wobble,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_readings() {
        let readings = synthetic_readings(2001, 1);

        assert_eq!(readings.len(), 365 * 24);
        assert_eq!(readings[0].timestamp, "2001-01-01T00:00:00Z");
        assert!(readings.iter().all(|r| r.temperature.abs() < 100.0));
    }
}
