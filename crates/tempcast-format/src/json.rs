//! JSON output format.

use serde::Serialize;
use std::io::Write;
use tempcast_aggregate::Bar;

use crate::{FormatError, Formatter, PredictionRow};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_items<T: Serialize, W: Write>(
        &self,
        items: &[T],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, items)?;
                } else {
                    serde_json::to_writer(&mut writer, items)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for item in items {
                    serde_json::to_writer(&mut writer, item)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError> {
        self.write_items(bars, writer)
    }

    fn write_predictions<W: Write + Send>(
        &self,
        rows: &[PredictionRow],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_items(rows, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn create_test_bar() -> Bar {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        Bar::new(start, 1.5, 30.0, -8.0, 10.25, 8784)
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"close\":10.25"));
        assert!(result.contains("\"period_label\":\"2020-01-01\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let bars = vec![create_test_bar(), create_test_bar()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  ")); // Indentation
    }

    #[test]
    fn test_prediction_nulls() {
        let rows = vec![PredictionRow {
            period_label: "2021-01-01".to_string(),
            actual: 9.0,
            predicted: None,
            confidence: 0.0,
            valid: false,
            error: None,
        }];
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new()
            .write_predictions(&rows, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("\"predicted\":null"));
        assert!(result.contains("\"valid\":false"));
    }
}
