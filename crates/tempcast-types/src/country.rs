//! Region codes used to select a temperature column.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A two-letter region code such as `DE` or `FR`.
///
/// Codes are normalised to upper case on parse. The loader looks for the
/// column named [`CountryCode::column_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the CSV column holding this region's temperatures.
    #[must_use]
    pub fn column_name(&self) -> String {
        format!("{}_temperature", self.0)
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError(s.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// Error returned when parsing an invalid region code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCodeError(String);

impl std::fmt::Display for CountryCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid country code '{}', expected two letters (e.g. DE)",
            self.0
        )
    }
}

impl std::error::Error for CountryCodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalises_case() {
        let code: CountryCode = "de".parse().unwrap();
        assert_eq!(code.as_str(), "DE");
        assert_eq!(code.column_name(), "DE_temperature");
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!("DEU".parse::<CountryCode>().is_err());
        assert!("D".parse::<CountryCode>().is_err());
        assert!("1A".parse::<CountryCode>().is_err());
    }
}
