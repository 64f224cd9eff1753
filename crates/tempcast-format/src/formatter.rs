//! Output format abstraction.

use serde::Serialize;
use std::io::Write;
use tempcast_aggregate::Bar;
use tempcast_predict::RollingSeries;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Apache Parquet format.
    Parquet,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson, Self::Parquet]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "parquet" | "pq" => Ok(Self::Parquet),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arrow/Parquet error.
    #[error("Parquet error: {0}")]
    Parquet(String),
}

/// One rolling prediction next to the bar it targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    /// Label of the targeted period.
    pub period_label: String,
    /// Actual close of the targeted period.
    pub actual: f64,
    /// Forecast, absent when the prediction was invalid.
    pub predicted: Option<f64>,
    /// Model confidence.
    pub confidence: f64,
    /// Whether the prediction was valid.
    pub valid: bool,
    /// Absolute forecast error, absent when the prediction was invalid.
    pub error: Option<f64>,
}

impl PredictionRow {
    /// Aligns a rolling series with the bars it was computed from.
    #[must_use]
    pub fn from_series(history: &[Bar], series: &RollingSeries) -> Vec<Self> {
        series
            .aligned(history)
            .map(|(bar, prediction)| {
                let predicted = prediction.is_valid().then_some(prediction.value);
                Self {
                    period_label: bar.period_label.clone(),
                    actual: bar.close,
                    predicted,
                    confidence: prediction.confidence,
                    valid: prediction.is_valid(),
                    error: predicted.map(|value| (value - bar.close).abs()),
                }
            })
            .collect()
    }
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes bars to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError>;

    /// Writes aligned rolling predictions to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_predictions<W: Write + Send>(
        &self,
        rows: &[PredictionRow],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
