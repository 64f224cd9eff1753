//! Reading-to-bar aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tempcast_types::{Granularity, Reading};
use tracing::debug;

use crate::Bar;
use crate::period::period_start;

/// How the open value of a bar is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpenPolicy {
    /// Temperature of the chronologically first reading in the period.
    #[default]
    FirstReading,
    /// Close of the previous bar. The first bar uses its first reading, and
    /// high/low are widened to include the open.
    PreviousClose,
    /// Mean of the period, so open equals close.
    GroupMean,
}

impl OpenPolicy {
    /// Returns the policy as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstReading => "first-reading",
            Self::PreviousClose => "previous-close",
            Self::GroupMean => "group-mean",
        }
    }
}

impl std::fmt::Display for OpenPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OpenPolicy {
    type Err = OpenPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "first" | "first-reading" => Ok(Self::FirstReading),
            "previous" | "previous-close" => Ok(Self::PreviousClose),
            "mean" | "group-mean" => Ok(Self::GroupMean),
            _ => Err(OpenPolicyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid open policy string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPolicyParseError(String);

impl std::fmt::Display for OpenPolicyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid open policy '{}', expected one of: first-reading, previous-close, group-mean",
            self.0
        )
    }
}

impl std::error::Error for OpenPolicyParseError {}

/// Streaming reading aggregator.
///
/// Readings must be fed in chronological order; a reading belonging to a
/// different period than the current one completes the current bar.
/// Readings without a valid date are ignored.
#[derive(Debug)]
pub struct ReadingAggregator {
    granularity: Granularity,
    policy: OpenPolicy,
    current_bar: Option<BarBuilder>,
    previous_close: Option<f64>,
}

impl ReadingAggregator {
    /// Creates a new aggregator using the first-reading open policy.
    #[must_use]
    pub const fn new(granularity: Granularity) -> Self {
        Self::with_policy(granularity, OpenPolicy::FirstReading)
    }

    /// Creates a new aggregator with an explicit open policy.
    #[must_use]
    pub const fn with_policy(granularity: Granularity, policy: OpenPolicy) -> Self {
        Self {
            granularity,
            policy,
            current_bar: None,
            previous_close: None,
        }
    }

    /// Returns the granularity being aggregated to.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the open policy in use.
    #[must_use]
    pub const fn policy(&self) -> OpenPolicy {
        self.policy
    }

    /// Processes a reading, potentially emitting a completed bar.
    ///
    /// Returns `Some(bar)` when a bar is completed by this reading,
    /// `None` otherwise.
    pub fn process(&mut self, reading: &Reading) -> Option<Bar> {
        let Some(date) = reading.date() else {
            debug!(timestamp = %reading.timestamp, "skipping reading without a valid date");
            return None;
        };
        let start = period_start(date, self.granularity);

        match self.current_bar.take() {
            Some(mut builder) if builder.period_start == start => {
                builder.update(reading.temperature);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                let completed = self.complete(builder);
                self.current_bar = Some(BarBuilder::new(start, reading.temperature));
                Some(completed)
            }
            None => {
                self.current_bar = Some(BarBuilder::new(start, reading.temperature));
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial bar.
    #[must_use]
    pub fn finish(mut self) -> Option<Bar> {
        let builder = self.current_bar.take()?;
        Some(self.complete(builder))
    }

    fn complete(&mut self, builder: BarBuilder) -> Bar {
        let bar = builder.finish(self.policy, self.previous_close);
        self.previous_close = Some(bar.close);
        bar
    }
}

/// Builder for bars.
#[derive(Debug)]
struct BarBuilder {
    period_start: NaiveDate,
    first: f64,
    high: f64,
    low: f64,
    sum: f64,
    count: u32,
}

impl BarBuilder {
    /// Creates a new builder from the first reading.
    const fn new(period_start: NaiveDate, temperature: f64) -> Self {
        Self {
            period_start,
            first: temperature,
            high: temperature,
            low: temperature,
            sum: temperature,
            count: 1,
        }
    }

    /// Updates the builder with a new reading.
    fn update(&mut self, temperature: f64) {
        self.high = self.high.max(temperature);
        self.low = self.low.min(temperature);
        self.sum += temperature;
        self.count += 1;
    }

    /// Finishes building and returns the bar.
    fn finish(self, policy: OpenPolicy, previous_close: Option<f64>) -> Bar {
        let close = self.sum / f64::from(self.count);
        let open = match policy {
            OpenPolicy::FirstReading => self.first,
            OpenPolicy::PreviousClose => previous_close.unwrap_or(self.first),
            OpenPolicy::GroupMean => close,
        };

        Bar::new(
            self.period_start,
            open,
            self.high.max(open),
            self.low.min(open),
            close,
            self.count,
        )
    }
}

/// Aggregates readings into bars using the first-reading open policy.
///
/// See [`aggregate_with`].
#[must_use]
pub fn aggregate(readings: &[Reading], granularity: Granularity) -> Vec<Bar> {
    aggregate_with(readings, granularity, OpenPolicy::FirstReading)
}

/// Aggregates readings into chronologically ordered bars.
///
/// Input order does not matter: readings are stably sorted by date, then by
/// timestamp, before grouping, so ties keep their original order. Readings
/// without a valid `YYYY-MM-DD` prefix do not contribute to any bar.
#[must_use]
pub fn aggregate_with(
    readings: &[Reading],
    granularity: Granularity,
    policy: OpenPolicy,
) -> Vec<Bar> {
    let mut dated: Vec<(NaiveDate, &Reading)> = readings
        .iter()
        .filter_map(|reading| reading.date().map(|date| (date, reading)))
        .collect();
    dated.sort_by(|(a_date, a), (b_date, b)| {
        a_date
            .cmp(b_date)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });

    let mut aggregator = ReadingAggregator::with_policy(granularity, policy);
    let mut bars = Vec::new();

    for (_, reading) in dated {
        if let Some(bar) = aggregator.process(reading) {
            bars.push(bar);
        }
    }

    if let Some(bar) = aggregator.finish() {
        bars.push(bar);
    }

    debug!(
        readings = readings.len(),
        bars = bars.len(),
        %granularity,
        %policy,
        "aggregated readings"
    );
    bars
}
