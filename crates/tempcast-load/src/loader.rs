//! CSV reading loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tempcast_types::{CountryCode, Reading, Result, TempcastError, YearRange};
use tracing::{debug, info, warn};

use crate::field::{TemperatureField, parse_temperature, parse_year};

/// Suffix shared by every temperature column.
const COLUMN_SUFFIX: &str = "_temperature";

/// Counts of what happened to each data row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read.
    pub rows: usize,
    /// Rows that produced a reading.
    pub loaded: usize,
    /// Rows outside the requested years.
    pub out_of_range: usize,
    /// Rows with a missing-value sentinel.
    pub missing: usize,
    /// Rows rejected as malformed or implausible.
    pub rejected: usize,
}

/// Readings loaded from one source together with their row accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReadings {
    /// Readings in file order.
    pub readings: Vec<Reading>,
    /// Row accounting.
    pub stats: LoadStats,
}

/// Loads the readings for `country` within `years` from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded, if it has no
/// column for `country`, or if no row yields a reading.
pub fn load_readings(
    path: impl AsRef<Path>,
    country: &CountryCode,
    years: YearRange,
) -> Result<Vec<Reading>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!(path = %path.display(), %country, %years, "loading readings");
    load_readings_from_reader(BufReader::new(file), country, years)
}

/// Loads the readings for `country` within `years` from any CSV source.
///
/// # Errors
///
/// See [`load_readings`].
pub fn load_readings_from_reader<R: Read>(
    reader: R,
    country: &CountryCode,
    years: YearRange,
) -> Result<Vec<Reading>> {
    let loaded = load_with_stats(reader, country, years)?;
    if loaded.readings.is_empty() {
        return Err(TempcastError::NoDataAvailable {
            country: country.to_string(),
            range: years.to_string(),
        });
    }
    Ok(loaded.readings)
}

/// Loads readings and reports how every row was handled.
///
/// Unlike [`load_readings_from_reader`], an empty result is not an error.
///
/// # Errors
///
/// Returns an error if the source cannot be decoded or has no column for
/// `country`.
pub fn load_with_stats<R: Read>(
    reader: R,
    country: &CountryCode,
    years: YearRange,
) -> Result<LoadedReadings> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| TempcastError::Csv(e.to_string()))?
        .clone();

    let column = country.column_name();
    let column_index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| TempcastError::MissingColumn {
            country: country.to_string(),
            column: column.clone(),
            available: country_columns(&headers),
        })?;

    let mut readings = Vec::new();
    let mut stats = LoadStats::default();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| TempcastError::Csv(e.to_string()))?;
        // Header is line 1
        let line = index + 2;
        stats.rows += 1;

        let (Some(timestamp), Some(field)) = (record.get(0), record.get(column_index)) else {
            debug!(line, "skipping short row");
            stats.rejected += 1;
            continue;
        };

        let Some(year) = parse_year(timestamp) else {
            debug!(line, timestamp, "skipping row without a year");
            stats.rejected += 1;
            continue;
        };
        if !years.contains(year) {
            stats.out_of_range += 1;
            continue;
        }

        match parse_temperature(field) {
            TemperatureField::Value(temperature) => {
                readings.push(Reading::new(timestamp, temperature));
                stats.loaded += 1;
            }
            TemperatureField::Missing => stats.missing += 1,
            TemperatureField::Unparseable => {
                warn!(line, field, "skipping unparseable temperature");
                stats.rejected += 1;
            }
            TemperatureField::Implausible(temperature) => {
                warn!(line, temperature, "skipping implausible temperature");
                stats.rejected += 1;
            }
        }
    }

    info!(
        %country,
        %years,
        rows = stats.rows,
        loaded = stats.loaded,
        missing = stats.missing,
        rejected = stats.rejected,
        "loaded readings"
    );
    Ok(LoadedReadings { readings, stats })
}

/// Lists the country codes that have a temperature column in a CSV source.
///
/// # Errors
///
/// Returns an error if the header row cannot be decoded.
pub fn available_countries<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| TempcastError::Csv(e.to_string()))?;
    Ok(country_columns(headers))
}

fn country_columns(headers: &csv::StringRecord) -> Vec<String> {
    headers
        .iter()
        .filter_map(|header| header.strip_suffix(COLUMN_SUFFIX))
        .map(str::to_string)
        .collect()
}
