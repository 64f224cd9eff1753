//! Apache Parquet output format.

use arrow::array::{BooleanArray, Date32Array, Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::Datelike;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;
use tempcast_aggregate::Bar;

use crate::{FormatError, Formatter, PredictionRow};

/// Days from 0001-01-01 to 1970-01-01 in the proleptic Gregorian calendar.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Parquet formatter.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    fn bar_schema() -> Schema {
        Schema::new(vec![
            Field::new("period_start", DataType::Date32, false),
            Field::new("period_label", DataType::Utf8, false),
            Field::new("open", DataType::Float64, false),
            Field::new("high", DataType::Float64, false),
            Field::new("low", DataType::Float64, false),
            Field::new("close", DataType::Float64, false),
            Field::new("reading_count", DataType::UInt32, false),
        ])
    }

    fn prediction_schema() -> Schema {
        Schema::new(vec![
            Field::new("period_label", DataType::Utf8, false),
            Field::new("actual", DataType::Float64, false),
            Field::new("predicted", DataType::Float64, true),
            Field::new("confidence", DataType::Float64, false),
            Field::new("valid", DataType::Boolean, false),
            Field::new("error", DataType::Float64, true),
        ])
    }

    fn bars_to_batch(bars: &[Bar]) -> Result<RecordBatch, FormatError> {
        let starts: Vec<i32> = bars
            .iter()
            .map(|b| b.period_start.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
            .collect();
        let labels: Vec<&str> = bars.iter().map(|b| b.period_label.as_str()).collect();
        let opens: Vec<_> = bars.iter().map(|b| b.open).collect();
        let highs: Vec<_> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<_> = bars.iter().map(|b| b.low).collect();
        let closes: Vec<_> = bars.iter().map(|b| b.close).collect();
        let counts: Vec<_> = bars.iter().map(|b| b.reading_count).collect();

        RecordBatch::try_new(
            Arc::new(Self::bar_schema()),
            vec![
                Arc::new(Date32Array::from(starts)),
                Arc::new(StringArray::from(labels)),
                Arc::new(Float64Array::from(opens)),
                Arc::new(Float64Array::from(highs)),
                Arc::new(Float64Array::from(lows)),
                Arc::new(Float64Array::from(closes)),
                Arc::new(UInt32Array::from(counts)),
            ],
        )
        .map_err(|e| FormatError::Parquet(e.to_string()))
    }

    fn predictions_to_batch(rows: &[PredictionRow]) -> Result<RecordBatch, FormatError> {
        let labels: Vec<&str> = rows.iter().map(|r| r.period_label.as_str()).collect();
        let actuals: Vec<_> = rows.iter().map(|r| r.actual).collect();
        let predicted: Vec<_> = rows.iter().map(|r| r.predicted).collect();
        let confidences: Vec<_> = rows.iter().map(|r| r.confidence).collect();
        let valid: Vec<_> = rows.iter().map(|r| r.valid).collect();
        let errors: Vec<_> = rows.iter().map(|r| r.error).collect();

        RecordBatch::try_new(
            Arc::new(Self::prediction_schema()),
            vec![
                Arc::new(StringArray::from(labels)),
                Arc::new(Float64Array::from(actuals)),
                Arc::new(Float64Array::from(predicted)),
                Arc::new(Float64Array::from(confidences)),
                Arc::new(BooleanArray::from(valid)),
                Arc::new(Float64Array::from(errors)),
            ],
        )
        .map_err(|e| FormatError::Parquet(e.to_string()))
    }

    fn write_batches<T, W: Write + Send>(
        &self,
        items: &[T],
        schema: Schema,
        to_batch: impl Fn(&[T]) -> Result<RecordBatch, FormatError>,
        writer: W,
    ) -> Result<(), FormatError> {
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, Arc::new(schema), Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        for chunk in items.chunks(self.row_group_size) {
            let batch = to_batch(chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }
}

impl Formatter for ParquetFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError> {
        self.write_batches(bars, Self::bar_schema(), Self::bars_to_batch, writer)
    }

    fn write_predictions<W: Write + Send>(
        &self,
        rows: &[PredictionRow],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_batches(
            rows,
            Self::prediction_schema(),
            Self::predictions_to_batch,
            writer,
        )
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}
