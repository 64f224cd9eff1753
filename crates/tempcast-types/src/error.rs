//! Error types for tempcast.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for tempcast operations.
pub type Result<T> = std::result::Result<T, TempcastError>;

/// Errors that can occur outside the pure analysis core.
#[derive(Error, Debug)]
pub enum TempcastError {
    /// Invalid data format.
    #[error("Parse error: {0}")]
    Parse(String),

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// The requested region has no column in the source.
    #[error(
        "Country '{country}' not found (looking for column '{column}'); available: {}",
        available.join(", ")
    )]
    MissingColumn {
        /// The region code that was requested.
        country: String,
        /// The column name that was searched for.
        column: String,
        /// Country columns present in the source.
        available: Vec<String>,
    },

    /// Invalid range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// No readings matched the requested region and years.
    #[error("No data available for {country} in {range}")]
    NoDataAvailable {
        /// The region code that had no data.
        country: String,
        /// The requested year range.
        range: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error for invalid ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidDates {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// Start year is after end year.
    #[error("Invalid year range: {start} > {end}")]
    InvalidYears {
        /// The start year.
        start: i32,
        /// The end year.
        end: i32,
    },
}
