//! Raw temperature observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of leading timestamp characters that carry the calendar date.
const DATE_PREFIX_LEN: usize = 10;

/// A single temperature observation for one region.
///
/// The timestamp is kept as loaded; only its leading `YYYY-MM-DD` part is
/// interpreted. Readings whose timestamp does not start with a valid date
/// are ignored by aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Timestamp as found in the source, at least `YYYY-MM-DD`.
    pub timestamp: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
}

impl Reading {
    /// Creates a new reading.
    #[must_use]
    pub fn new(timestamp: impl Into<String>, temperature: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature,
        }
    }

    /// Returns the calendar date of the reading, or `None` when the
    /// timestamp is too short or not a valid date.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        let prefix = self.timestamp.get(..DATE_PREFIX_LEN)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}
