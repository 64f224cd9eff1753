//! Aggregation granularity definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time bucket size used to group readings into bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bar per calendar day.
    Daily,
    /// One bar per calendar month.
    Monthly,
    /// One bar per calendar year.
    #[default]
    Yearly,
}

impl Granularity {
    /// Returns the granularity as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Returns a capitalised name for display in report headers.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Returns all available granularities, finest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Daily, Self::Monthly, Self::Yearly]
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Self::Daily),
            "m" | "month" | "monthly" => Ok(Self::Monthly),
            "y" | "year" | "yearly" => Ok(Self::Yearly),
            _ => Err(GranularityParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid granularity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityParseError(String);

impl std::fmt::Display for GranularityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid granularity '{}', expected one of: daily, monthly, yearly",
            self.0
        )
    }
}

impl std::error::Error for GranularityParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_parse() {
        assert_eq!("daily".parse::<Granularity>().unwrap(), Granularity::Daily);
        assert_eq!("M".parse::<Granularity>().unwrap(), Granularity::Monthly);
        assert_eq!("Year".parse::<Granularity>().unwrap(), Granularity::Yearly);
        assert!("weekly".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_default_is_yearly() {
        assert_eq!(Granularity::default(), Granularity::Yearly);
    }

    #[test]
    fn test_display_round_trips() {
        for granularity in Granularity::all() {
            let parsed: Granularity = granularity.to_string().parse().unwrap();
            assert_eq!(parsed, *granularity);
        }
    }
}
