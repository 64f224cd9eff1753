//! Period arithmetic for each granularity.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tempcast_types::Granularity;

use crate::Bar;

/// Returns the first day of the period containing `date`.
#[must_use]
pub fn period_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Daily => date,
        Granularity::Monthly => date - Days::new(u64::from(date.day0())),
        Granularity::Yearly => date - Days::new(u64::from(date.ordinal0())),
    }
}

/// Returns the first day of the period after the one starting at `start`.
///
/// Returns `None` only when the result would overflow the calendar.
#[must_use]
pub fn following_period_start(start: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
    let start = period_start(start, granularity);
    match granularity {
        Granularity::Daily => start.succ_opt(),
        Granularity::Monthly => start.checked_add_months(Months::new(1)),
        Granularity::Yearly => start.checked_add_months(Months::new(12)),
    }
}

/// Formats a period start as a bar label.
#[must_use]
pub fn period_label(start: NaiveDate) -> String {
    start.format("%Y-%m-%d").to_string()
}

/// The period a forecast refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPeriod {
    /// First day of the forecast period.
    pub start: NaiveDate,
    /// Bar-style label of the period.
    pub label: String,
    /// Human-readable name (`2020`, `January 2020`, `2020-01-05`).
    pub description: String,
}

/// Returns the period immediately following the last bar.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn next_period(bars: &[Bar], granularity: Granularity) -> Option<NextPeriod> {
    let last = bars.last()?;
    let start = following_period_start(last.period_start, granularity)?;
    let description = match granularity {
        Granularity::Daily => start.format("%Y-%m-%d").to_string(),
        Granularity::Monthly => start.format("%B %Y").to_string(),
        Granularity::Yearly => start.year().to_string(),
    };

    Some(NextPeriod {
        start,
        label: period_label(start),
        description,
    })
}
