//! Full analysis pass over a bar sequence.

use serde::{Deserialize, Serialize};
use tempcast_aggregate::{Bar, NextPeriod, next_period};
use tracing::info;

use crate::{
    AnalysisConfig, Forecaster, Model, ModelValidation, PredictionResult, RollingSeries,
    best_by_mae, rolling_all, validate_all,
};

/// Spread at or below which the models are considered in agreement.
const LOW_SPREAD_THRESHOLD: f64 = 1.0;

/// Spread at or below which disagreement is considered moderate.
const MODERATE_SPREAD_THRESHOLD: f64 = 2.0;

/// How strongly the models disagree about the next period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uncertainty {
    /// Models agree.
    Low,
    /// Models differ noticeably.
    Moderate,
    /// Models disagree.
    High,
}

impl Uncertainty {
    /// Classifies a prediction spread in degrees.
    #[must_use]
    pub fn from_spread(spread: f64) -> Self {
        if spread > MODERATE_SPREAD_THRESHOLD {
            Self::High
        } else if spread > LOW_SPREAD_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Returns the level as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Range of the valid current predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionSpread {
    /// Lowest valid prediction.
    pub min: f64,
    /// Highest valid prediction.
    pub max: f64,
    /// Qualitative disagreement.
    pub uncertainty: Uncertainty,
}

impl PredictionSpread {
    /// Computes the spread of the valid predictions.
    ///
    /// Returns `None` when fewer than two predictions are valid.
    #[must_use]
    pub fn from_predictions(predictions: &[PredictionResult]) -> Option<Self> {
        let values: Vec<f64> = predictions
            .iter()
            .filter(|p| p.is_valid())
            .map(|p| p.value)
            .collect();
        if values.len() < 2 {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            min,
            max,
            uncertainty: Uncertainty::from_spread(max - min),
        })
    }

    /// Difference between the highest and lowest prediction.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// The model to trust for the next period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended model.
    pub model: Model,
    /// Its current prediction.
    pub prediction: PredictionResult,
}

impl Recommendation {
    /// Picks the valid prediction with the highest confidence.
    ///
    /// Ties keep the earlier model. Returns `None` unless some valid
    /// prediction has positive confidence.
    #[must_use]
    pub fn choose(models: &[Model], predictions: &[PredictionResult]) -> Option<Self> {
        let mut best: Option<(Model, &PredictionResult)> = None;
        for (model, prediction) in models.iter().zip(predictions) {
            if !prediction.is_valid() || prediction.confidence <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, current)| prediction.confidence > current.confidence) {
                best = Some((*model, prediction));
            }
        }

        best.map(|(model, prediction)| Self {
            model,
            prediction: prediction.clone(),
        })
    }
}

/// Everything an analysis pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Configuration the report was built with.
    pub config: AnalysisConfig,
    /// Number of bars analysed.
    pub bar_count: usize,
    /// Period being forecast.
    pub next_period: Option<NextPeriod>,
    /// Current prediction of each model, in reporting order.
    pub predictions: Vec<PredictionResult>,
    /// Highest-confidence valid prediction.
    pub recommendation: Option<Recommendation>,
    /// Disagreement between the valid predictions.
    pub spread: Option<PredictionSpread>,
    /// Forward-chaining validation per model, when evaluated.
    pub validations: Vec<ModelValidation>,
    /// Display name of the model with the lowest validation error.
    pub best_model: Option<String>,
    /// Rolling predictions per model, when evaluated.
    pub rolling: Vec<RollingSeries>,
}

/// Runs predictions, validation and rolling predictions over `bars`.
///
/// Validation and rolling predictions only run when enabled in `config`
/// and `bars` meets the evaluation threshold.
#[must_use]
pub fn analyze(bars: &[Bar], config: &AnalysisConfig) -> AnalysisReport {
    let validations = if config.show_validation && config.evaluates(bars.len()) {
        validate_all(bars, config.moving_average_window)
    } else {
        Vec::new()
    };
    analyze_with_validations(bars, config, validations)
}

/// Builds a report around validations computed elsewhere.
///
/// `validations` is discarded when validation is disabled or `bars` is
/// below the evaluation threshold.
#[must_use]
pub fn analyze_with_validations(
    bars: &[Bar],
    config: &AnalysisConfig,
    validations: Vec<ModelValidation>,
) -> AnalysisReport {
    let models = Model::all(config.moving_average_window);
    let predictions: Vec<PredictionResult> =
        models.iter().map(|model| model.predict(bars)).collect();

    let evaluated = config.evaluates(bars.len());
    let validations = if config.show_validation && evaluated {
        validations
    } else {
        Vec::new()
    };
    let rolling = if config.show_rolling && evaluated {
        rolling_all(bars, config.moving_average_window)
    } else {
        Vec::new()
    };

    let report = AnalysisReport {
        config: config.clone(),
        bar_count: bars.len(),
        next_period: next_period(bars, config.granularity),
        recommendation: Recommendation::choose(&models, &predictions),
        spread: PredictionSpread::from_predictions(&predictions),
        best_model: best_by_mae(&validations).map(|v| v.model_name.clone()),
        predictions,
        validations,
        rolling,
    };

    info!(
        bars = report.bar_count,
        recommendation = report
            .recommendation
            .as_ref()
            .map_or("none", |r| r.prediction.model_name.as_str()),
        validated = !report.validations.is_empty(),
        "analysis complete"
    );
    report
}
