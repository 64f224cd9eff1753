//! Loading readings from files on disk.

use std::io::Write;

use tempcast_load::load_readings;
use tempcast_types::{CountryCode, TempcastError, YearRange};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_csv(
        "utc_timestamp,AT_temperature,DE_temperature\n\
         2015-01-01T00:00:00Z,-2.0,-1.0\n\
         2015-01-01T01:00:00Z,-2.5,N/A\n\
         2016-01-01T00:00:00Z,-3.0,0.5\n",
    );
    let country: CountryCode = "de".parse().unwrap();
    let readings = load_readings(file.path(), &country, YearRange::new(2015, 2016).unwrap()).unwrap();

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[1].timestamp, "2016-01-01T00:00:00Z");
    assert!((readings[1].temperature - 0.5).abs() < 1e-10);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let country: CountryCode = "DE".parse().unwrap();
    let result = load_readings(
        dir.path().join("absent.csv"),
        &country,
        YearRange::single_year(2015),
    );

    assert!(matches!(result, Err(TempcastError::Io(_))));
}
