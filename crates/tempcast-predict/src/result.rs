//! Prediction and validation outcomes.

use serde::{Deserialize, Serialize};

use crate::stats::clamp_unit;

/// Confidence above which a forecast is considered reliable.
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Confidence above which a forecast is considered usable.
const MODERATE_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Qualitative reading of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Score above 0.7.
    High,
    /// Score above 0.4.
    Moderate,
    /// Anything else.
    Low,
}

impl ConfidenceLevel {
    /// Classifies a confidence score.
    #[must_use]
    pub fn from_score(confidence: f64) -> Self {
        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            Self::High
        } else if confidence > MODERATE_CONFIDENCE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Returns the level as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one model invocation.
///
/// Invalid results carry a reason and a zero value; they are data, not
/// errors, and callers decide how to present them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Forecast temperature for the next period.
    pub value: f64,
    /// Model-specific confidence in `[0, 1]`.
    pub confidence: f64,
    /// Name of the model that produced the result.
    pub model_name: String,
    /// Whether `value` is a usable forecast.
    pub valid: bool,
    /// Why the result is invalid, or a caveat on a valid one.
    pub error_reason: Option<String>,
    /// Short description of the confidence metric (e.g. `R² = 0.873`).
    pub confidence_description: String,
}

impl PredictionResult {
    /// Creates a valid result. The confidence is clamped into `[0, 1]`.
    #[must_use]
    pub fn success(
        model_name: impl Into<String>,
        value: f64,
        confidence: f64,
        confidence_description: impl Into<String>,
    ) -> Self {
        Self {
            value,
            confidence: clamp_unit(confidence),
            model_name: model_name.into(),
            valid: true,
            error_reason: None,
            confidence_description: confidence_description.into(),
        }
    }

    /// Creates an invalid result.
    #[must_use]
    pub fn failure(model_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            value: 0.0,
            confidence: 0.0,
            model_name: model_name.into(),
            valid: false,
            error_reason: Some(reason.into()),
            confidence_description: String::new(),
        }
    }

    /// Attaches a caveat to a result without changing its validity.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.error_reason = Some(note.into());
        self
    }

    /// Returns true if the result holds a usable forecast.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the qualitative confidence level.
    #[must_use]
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }
}

/// Aggregate error statistics from forward-chaining validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Mean of absolute errors over valid predictions.
    pub mean_absolute_error: f64,
    /// Mean of squared errors over valid predictions.
    pub mean_squared_error: f64,
    /// Largest absolute error.
    pub max_error: f64,
    /// Smallest absolute error.
    pub min_error: f64,
    /// Number of valid predictions.
    pub success_count: usize,
    /// Number of test indices attempted.
    pub attempt_count: usize,
    /// Whether the statistics are meaningful.
    pub valid: bool,
    /// Why validation could not produce statistics.
    pub error_reason: Option<String>,
}

impl ValidationResult {
    /// Creates an invalid result after `attempt_count` attempts.
    #[must_use]
    pub fn failure(reason: impl Into<String>, attempt_count: usize) -> Self {
        Self {
            mean_absolute_error: 0.0,
            mean_squared_error: 0.0,
            max_error: 0.0,
            min_error: 0.0,
            success_count: 0,
            attempt_count,
            valid: false,
            error_reason: Some(reason.into()),
        }
    }

    /// Root mean squared error.
    #[must_use]
    pub fn rmse(&self) -> f64 {
        self.mean_squared_error.sqrt()
    }

    /// Percentage of attempts that produced a valid prediction.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.attempt_count == 0 {
            return 0.0;
        }
        self.success_count as f64 / self.attempt_count as f64 * 100.0
    }

    /// Returns true if the statistics are meaningful.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from_score(0.9), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.7), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_score(0.41), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_score(0.4), ConfidenceLevel::Low);
    }

    #[test]
    fn test_success_clamps_confidence() {
        let result = PredictionResult::success("test", 1.0, 1.7, "");
        assert_eq!(result.confidence, 1.0);

        let result = PredictionResult::success("test", 1.0, -0.2, "");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_failure() {
        let result = PredictionResult::failure("test", "insufficient data");

        assert!(!result.is_valid());
        assert_eq!(result.error_reason.as_deref(), Some("insufficient data"));
    }

    #[test]
    fn test_derived_validation_metrics() {
        let result = ValidationResult {
            mean_absolute_error: 1.5,
            mean_squared_error: 4.0,
            max_error: 3.0,
            min_error: 0.5,
            success_count: 3,
            attempt_count: 4,
            valid: true,
            error_reason: None,
        };

        assert!((result.rmse() - 2.0).abs() < 1e-10);
        assert!((result.success_rate() - 75.0).abs() < 1e-10);
    }

    #[test]
    fn test_success_rate_without_attempts() {
        assert_eq!(ValidationResult::failure("none", 0).success_rate(), 0.0);
    }
}
