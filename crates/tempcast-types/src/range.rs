//! Validated year and date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RangeError;

/// An inclusive range of calendar years used when loading readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year (inclusive).
    pub start: i32,
    /// Last year (inclusive).
    pub end: i32,
}

impl YearRange {
    /// Creates a new year range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub const fn new(start: i32, end: i32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidYears { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single year.
    #[must_use]
    pub const fn single_year(year: i32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    /// Returns the number of years in the range.
    #[must_use]
    pub const fn total_years(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Returns true if the range contains the given year.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidDates { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_new() {
        let range = YearRange::new(1980, 2019).unwrap();

        assert_eq!(range.total_years(), 40);
        assert!(range.contains(1980));
        assert!(range.contains(2019));
        assert!(!range.contains(2020));
    }

    #[test]
    fn test_year_range_invalid() {
        assert_eq!(
            YearRange::new(2019, 1980),
            Err(RangeError::InvalidYears {
                start: 2019,
                end: 1980
            })
        );
    }

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.total_days(), 31);
        assert!(range.contains(start));
        assert!(range.contains(end));
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(YearRange::single_year(1999).to_string(), "1999-1999");
    }
}
