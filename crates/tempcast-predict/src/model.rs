//! Forecasting models.

use serde::{Deserialize, Serialize};
use tempcast_aggregate::Bar;

use crate::PredictionResult;
use crate::stats::{EPSILON, LinearFit, clamp_unit, mean, sample_std_dev};

/// Scales relative volatility into the moving-average stability score.
const STABILITY_SCALE_FACTOR: f64 = 5.0;

/// Trait for anything that forecasts the next bar from a history.
///
/// Implementations must be pure: the same history always yields the same
/// result and no state is shared between calls.
pub trait Forecaster {
    /// Forecasts the close of the bar following `history`.
    fn predict(&self, history: &[Bar]) -> PredictionResult;

    /// Returns a human-readable model name.
    fn name(&self) -> String;
}

/// The three forecasting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    /// Least-squares trend of close against period index, extrapolated one step.
    Linear,
    /// Mean of the last `window` closes.
    MovingAverage {
        /// Number of trailing periods to average. Zero is rejected at prediction time.
        window: usize,
    },
    /// Last close plus the most recent change.
    Heuristic,
}

impl Model {
    /// Default moving-average window.
    pub const DEFAULT_WINDOW: usize = 3;

    /// Creates a moving-average model.
    #[must_use]
    pub const fn moving_average(window: usize) -> Self {
        Self::MovingAverage { window }
    }

    /// Returns the three models in reporting order.
    #[must_use]
    pub const fn all(window: usize) -> [Self; 3] {
        [Self::Linear, Self::moving_average(window), Self::Heuristic]
    }

    /// Smallest history the model can forecast from, also used as the
    /// recommended validation training size and rolling start index.
    #[must_use]
    pub const fn min_history(&self) -> usize {
        match self {
            Self::Linear | Self::Heuristic => 2,
            Self::MovingAverage { .. } => 1,
        }
    }

    /// One-line description of the method.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Linear => "Least squares trend line fitting - identifies long-term trends",
            Self::MovingAverage { .. } => {
                "Average of recent values - smooths short-term fluctuations"
            }
            Self::Heuristic => "Projects the most recent change forward - assumes momentum continues",
        }
    }

    fn predict_linear(&self, closes: &[f64]) -> PredictionResult {
        let name = self.name();
        if closes.len() < 2 {
            return insufficient(name, 2, closes.len());
        }

        match LinearFit::fit(closes) {
            Some(fit) => PredictionResult::success(
                name,
                fit.at(closes.len() as f64),
                fit.r_squared,
                format!("R² = {:.3}", fit.r_squared),
            ),
            None => PredictionResult::success(name, mean(closes), 0.0, "Degenerate fit, using mean"),
        }
    }

    fn predict_moving_average(&self, closes: &[f64], window: usize) -> PredictionResult {
        let name = self.name();
        if window == 0 {
            return PredictionResult::failure(name, "invalid window size: must be positive");
        }
        if closes.is_empty() {
            return insufficient(name, 1, 0);
        }

        let window = window.min(closes.len());
        let recent = &closes[closes.len() - window..];
        let average = mean(recent);
        let std_dev = sample_std_dev(recent, average);

        let relative_volatility = if average.abs() < EPSILON {
            std_dev
        } else {
            std_dev / average.abs()
        };
        let stability = clamp_unit(1.0 / (1.0 + relative_volatility * STABILITY_SCALE_FACTOR));

        PredictionResult::success(
            name,
            average,
            stability,
            format!("Stability = {stability:.3}"),
        )
    }

    fn predict_heuristic(&self, closes: &[f64]) -> PredictionResult {
        let name = self.name();
        let (last, second_last) = match closes {
            [] => return insufficient(name, 1, 0),
            [only] => {
                return PredictionResult::success(name, *only, 0.0, "Consistency unavailable")
                    .with_note("no momentum available");
            }
            [.., second_last, last] => (*last, *second_last),
        };

        let consistency = if closes.len() < 3 {
            0.0
        } else {
            let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
            let mean_change = mean(&changes);
            let variability = sample_std_dev(&changes, mean_change) / (mean_change.abs() + 1.0);
            clamp_unit(1.0 / (1.0 + variability))
        };

        PredictionResult::success(
            name,
            last + (last - second_last),
            consistency,
            format!("Consistency = {consistency:.3}"),
        )
    }
}

impl Forecaster for Model {
    fn predict(&self, history: &[Bar]) -> PredictionResult {
        let closes: Vec<f64> = history.iter().map(|bar| bar.close).collect();
        match *self {
            Self::Linear => self.predict_linear(&closes),
            Self::MovingAverage { window } => self.predict_moving_average(&closes, window),
            Self::Heuristic => self.predict_heuristic(&closes),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Linear => "Linear Regression".to_string(),
            Self::MovingAverage { window } => format!("Moving Average ({window})"),
            Self::Heuristic => "Heuristic (Momentum)".to_string(),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn insufficient(name: String, required: usize, actual: usize) -> PredictionResult {
    PredictionResult::failure(
        name,
        format!("insufficient data: need at least {required} periods, have {actual}"),
    )
}
