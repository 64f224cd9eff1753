//! Rolling historical predictions.

use serde::{Deserialize, Serialize};
use tempcast_aggregate::Bar;
use tracing::debug;

use crate::{Forecaster, Model, PredictionResult};

/// Predicts every bar from `start_index` onward using only earlier bars.
///
/// The result holds exactly `history.len() - start_index` entries in bar
/// order, valid or not, so entry `k` aligns with `history[start_index + k]`.
/// A `start_index` past the end yields an empty vector.
pub fn rolling_predictions<F: Forecaster + ?Sized>(
    history: &[Bar],
    model: &F,
    start_index: usize,
) -> Vec<PredictionResult> {
    let predictions: Vec<PredictionResult> = (start_index..history.len())
        .map(|i| model.predict(&history[..i]))
        .collect();

    debug!(
        model = %model.name(),
        start_index,
        count = predictions.len(),
        "generated rolling predictions"
    );
    predictions
}

/// Rolling predictions of one model together with their alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingSeries {
    /// The model that produced the predictions.
    pub model: Model,
    /// Model display name.
    pub model_name: String,
    /// Index of the bar the first prediction targets.
    pub start_index: usize,
    /// One prediction per bar from `start_index`.
    pub predictions: Vec<PredictionResult>,
}

impl RollingSeries {
    /// Builds the series for `model` starting at its minimum history.
    #[must_use]
    pub fn run(history: &[Bar], model: Model) -> Self {
        let start_index = model.min_history();
        Self {
            model,
            model_name: model.name(),
            start_index,
            predictions: rolling_predictions(history, &model, start_index),
        }
    }

    /// Pairs each prediction with the bar it targets.
    pub fn aligned<'a>(
        &'a self,
        history: &'a [Bar],
    ) -> impl Iterator<Item = (&'a Bar, &'a PredictionResult)> + 'a {
        history
            .iter()
            .skip(self.start_index)
            .zip(self.predictions.iter())
    }

    /// Mean absolute error of the valid predictions against the closes they
    /// target, or `None` if no prediction is valid.
    #[must_use]
    pub fn mean_absolute_error(&self, history: &[Bar]) -> Option<f64> {
        let errors: Vec<f64> = self
            .aligned(history)
            .filter(|(_, prediction)| prediction.is_valid())
            .map(|(bar, prediction)| (prediction.value - bar.close).abs())
            .collect();

        if errors.is_empty() {
            None
        } else {
            Some(errors.iter().sum::<f64>() / errors.len() as f64)
        }
    }
}

/// Rolling predictions for the three models in reporting order.
#[must_use]
pub fn rolling_all(history: &[Bar], window: usize) -> Vec<RollingSeries> {
    Model::all(window)
        .into_iter()
        .map(|model| RollingSeries::run(history, model))
        .collect()
}
