//! CSV output format.

use std::io::Write;
use tempcast_aggregate::Bar;

use crate::{FormatError, Formatter, PredictionRow};

/// CSV formatter.
#[derive(Debug, Clone, Default)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "date{d}open{d}high{d}low{d}close")?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}",
                bar.period_label, bar.open, bar.high, bar.low, bar.close
            )?;
        }

        Ok(())
    }

    fn write_predictions<W: Write + Send>(
        &self,
        rows: &[PredictionRow],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "period_label{d}actual{d}predicted{d}confidence{d}valid{d}error"
            )?;
        }

        for row in rows {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                row.period_label,
                row.actual,
                optional(row.predicted),
                row.confidence,
                row.valid,
                optional(row.error)
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
