//! Parsing of individual CSV fields.

/// Absolute temperature above which a value is rejected as implausible.
pub const TEMPERATURE_SANITY_LIMIT: f64 = 100.0;

/// Values that mark a missing temperature.
const MISSING_SENTINELS: [&str; 8] = ["", "NA", "N/A", "-", "null", "NULL", "nan", "NaN"];

/// Classification of a temperature field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureField {
    /// A usable temperature in degrees Celsius.
    Value(f64),
    /// A missing-value sentinel.
    Missing,
    /// Text that is not a number.
    Unparseable,
    /// A number outside the plausible range.
    Implausible(f64),
}

/// Classifies a raw temperature field.
#[must_use]
pub fn parse_temperature(field: &str) -> TemperatureField {
    let field = field.trim();
    if MISSING_SENTINELS.contains(&field) {
        return TemperatureField::Missing;
    }

    match field.parse::<f64>() {
        Ok(value) if !value.is_finite() => TemperatureField::Unparseable,
        Ok(value) if value.abs() > TEMPERATURE_SANITY_LIMIT => TemperatureField::Implausible(value),
        Ok(value) => TemperatureField::Value(value),
        Err(_) => TemperatureField::Unparseable,
    }
}

/// Extracts the year from the first four characters of a timestamp.
#[must_use]
pub fn parse_year(timestamp: &str) -> Option<i32> {
    let prefix = timestamp.trim().get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(parse_temperature("12.5"), TemperatureField::Value(12.5));
        assert_eq!(parse_temperature(" -3 "), TemperatureField::Value(-3.0));
        assert_eq!(parse_temperature("100"), TemperatureField::Value(100.0));
    }

    #[test]
    fn test_sentinels() {
        for sentinel in ["", "NA", "N/A", "-", "null", "NaN", "  "] {
            assert_eq!(parse_temperature(sentinel), TemperatureField::Missing);
        }
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_temperature("warm"), TemperatureField::Unparseable);
        assert_eq!(parse_temperature("inf"), TemperatureField::Unparseable);
    }

    #[test]
    fn test_implausible() {
        assert_eq!(
            parse_temperature("150.2"),
            TemperatureField::Implausible(150.2)
        );
        assert_eq!(
            parse_temperature("-100.5"),
            TemperatureField::Implausible(-100.5)
        );
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1980-01-01T00:00:00Z"), Some(1980));
        assert_eq!(parse_year("2019"), Some(2019));
        assert_eq!(parse_year("201"), None);
        assert_eq!(parse_year("abcd-01-01"), None);
        assert_eq!(parse_year("-123-01-01"), None);
    }
}
