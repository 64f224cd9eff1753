//! Forward-chaining validation of forecasting models.

use serde::{Deserialize, Serialize};
use tempcast_aggregate::Bar;
use tracing::{debug, info};

use crate::stats::mean;
use crate::{Forecaster, Model, ValidationResult};

/// Replays `model` over `history` without lookahead.
///
/// For every test index from `min_training_size` to `n - 1` the model is
/// trained on the strictly earlier bars and its forecast is compared with
/// that bar's close. Invalid forecasts count as attempts but contribute no
/// error.
///
/// Returns an invalid result when `history` holds fewer than
/// `min_training_size + 1` bars or when no forecast was valid.
pub fn validate<F: Forecaster + ?Sized>(
    history: &[Bar],
    model: &F,
    min_training_size: usize,
) -> ValidationResult {
    if history.len() <= min_training_size {
        let required = min_training_size.saturating_add(1);
        return ValidationResult::failure(
            format!("insufficient data for validation (need at least {required} points)"),
            0,
        );
    }

    let mut errors = Vec::with_capacity(history.len() - min_training_size);
    let mut attempt_count = 0;

    for test_index in min_training_size..history.len() {
        attempt_count += 1;
        let prediction = model.predict(&history[..test_index]);
        if !prediction.is_valid() {
            debug!(
                model = %model.name(),
                test_index,
                reason = prediction.error_reason.as_deref().unwrap_or_default(),
                "skipping invalid prediction"
            );
            continue;
        }

        let error = (prediction.value - history[test_index].close).abs();
        debug!(model = %model.name(), test_index, error, "validated prediction");
        errors.push(error);
    }

    if errors.is_empty() {
        return ValidationResult::failure("no valid predictions generated", attempt_count);
    }

    let squared: Vec<f64> = errors.iter().map(|e| e * e).collect();
    let result = ValidationResult {
        mean_absolute_error: mean(&errors),
        mean_squared_error: mean(&squared),
        max_error: errors.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        min_error: errors.iter().copied().fold(f64::INFINITY, f64::min),
        success_count: errors.len(),
        attempt_count,
        valid: true,
        error_reason: None,
    };

    info!(
        model = %model.name(),
        mae = result.mean_absolute_error,
        rmse = result.rmse(),
        attempts = attempt_count,
        "validation complete"
    );
    result
}

/// Validation outcome for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelValidation {
    /// The validated model.
    pub model: Model,
    /// Model display name.
    pub model_name: String,
    /// Error statistics.
    pub result: ValidationResult,
}

impl ModelValidation {
    /// Validates `model` using its own minimum history as training size.
    #[must_use]
    pub fn run(history: &[Bar], model: Model) -> Self {
        Self {
            model,
            model_name: model.name(),
            result: validate(history, &model, model.min_history()),
        }
    }
}

/// Validates the linear, moving-average and heuristic models in that order.
#[must_use]
pub fn validate_all(history: &[Bar], window: usize) -> Vec<ModelValidation> {
    Model::all(window)
        .into_iter()
        .map(|model| ModelValidation::run(history, model))
        .collect()
}

/// Returns the valid validation with the lowest mean absolute error.
#[must_use]
pub fn best_by_mae(validations: &[ModelValidation]) -> Option<&ModelValidation> {
    validations
        .iter()
        .filter(|v| v.result.is_valid())
        .min_by(|a, b| {
            a.result
                .mean_absolute_error
                .total_cmp(&b.result.mean_absolute_error)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PredictionResult;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    fn bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let start = NaiveDate::from_ymd_opt(2000 + i as i32, 1, 1).unwrap();
                Bar::flat(start, c)
            })
            .collect()
    }

    /// Records the training length of every call and predicts the last close.
    struct Recorder {
        seen: RefCell<Vec<usize>>,
        fail_on: Option<usize>,
    }

    impl Forecaster for Recorder {
        fn predict(&self, history: &[Bar]) -> PredictionResult {
            self.seen.borrow_mut().push(history.len());
            if self.fail_on == Some(history.len()) {
                return PredictionResult::failure("recorder", "forced failure");
            }
            let last = history.last().map_or(0.0, |b| b.close);
            PredictionResult::success("recorder", last, 1.0, "")
        }

        fn name(&self) -> String {
            "recorder".to_string()
        }
    }

    #[test]
    fn test_forward_chaining_indices() {
        let recorder = Recorder {
            seen: RefCell::new(Vec::new()),
            fail_on: None,
        };
        let result = validate(&bars(&[1.0, 2.0, 3.0, 4.0, 5.0]), &recorder, 2);

        assert_eq!(result.attempt_count, 3);
        assert_eq!(result.success_count, 3);
        // Test indices 2, 3, 4 see only strictly earlier bars
        assert_eq!(*recorder.seen.borrow(), vec![2, 3, 4]);
    }

    #[test]
    fn test_invalid_predictions_are_attempted_but_skipped() {
        let recorder = Recorder {
            seen: RefCell::new(Vec::new()),
            fail_on: Some(3),
        };
        let result = validate(&bars(&[1.0, 2.0, 3.0, 4.0, 5.0]), &recorder, 2);

        assert!(result.is_valid());
        assert_eq!(result.attempt_count, 3);
        assert_eq!(result.success_count, 2);
        assert!((result.success_rate() - 200.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_error_statistics() {
        // Last-value forecasts of 1, 4, 9 against actuals 4, 9, 16
        let recorder = Recorder {
            seen: RefCell::new(Vec::new()),
            fail_on: None,
        };
        let result = validate(&bars(&[1.0, 4.0, 9.0, 16.0]), &recorder, 1);

        assert!((result.mean_absolute_error - 5.0).abs() < 1e-10);
        assert!((result.mean_squared_error - (9.0 + 25.0 + 49.0) / 3.0).abs() < 1e-10);
        assert!((result.max_error - 7.0).abs() < 1e-10);
        assert!((result.min_error - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_insufficient_history() {
        let result = validate(&bars(&[1.0, 2.0]), &Model::Linear, 2);

        assert!(!result.is_valid());
        assert_eq!(result.attempt_count, 0);
        assert!(result.error_reason.unwrap().contains("need at least 3 points"));
    }

    #[test]
    fn test_unsatisfiable_training_size() {
        let result = validate(&bars(&[1.0, 2.0, 3.0]), &Model::Linear, usize::MAX);

        assert!(!result.is_valid());
        assert_eq!(result.attempt_count, 0);
        assert!(
            result
                .error_reason
                .unwrap()
                .contains(&format!("need at least {} points", usize::MAX))
        );
    }

    #[test]
    fn test_no_valid_predictions() {
        let result = validate(&bars(&[1.0, 2.0, 3.0]), &Model::moving_average(0), 1);

        assert!(!result.is_valid());
        assert_eq!(result.attempt_count, 2);
        assert_eq!(
            result.error_reason.as_deref(),
            Some("no valid predictions generated")
        );
    }

    #[test]
    fn test_linear_trend_validates_perfectly() {
        let result = validate(&bars(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), &Model::Linear, 2);

        assert!(result.is_valid());
        assert!(result.mean_absolute_error < 1e-9);
        assert!((result.success_rate() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_all_order_and_best() {
        let validations = validate_all(&bars(&[10.0, 11.0, 12.0, 13.0, 14.0]), 3);
        let names: Vec<_> = validations.iter().map(|v| v.model_name.as_str()).collect();

        assert_eq!(
            names,
            ["Linear Regression", "Moving Average (3)", "Heuristic (Momentum)"]
        );
        assert_eq!(validations[0].result.attempt_count, 3);
        assert_eq!(validations[1].result.attempt_count, 4);

        // Moving average lags a trend; the other two are exact on a line
        let best = best_by_mae(&validations).unwrap();
        assert_ne!(best.model, Model::moving_average(3));
        assert!(best.result.mean_absolute_error < 1e-9);
    }

    #[test]
    fn test_best_by_mae_ignores_invalid() {
        let validations = validate_all(&bars(&[10.0]), 3);
        assert!(best_by_mae(&validations).is_none());
    }
}
