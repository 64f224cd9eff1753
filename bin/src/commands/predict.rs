//! Predict command implementation.

use anyhow::Result;
use tempcast_lib::{
    AnalysisConfig, Forecaster, Model, PredictionSpread, Recommendation, next_period,
};

use super::load_bars;
use crate::DataArgs;
use crate::display::print_predictions;

/// Forecast the next period with every model.
pub(crate) fn predict(args: &DataArgs, base: AnalysisConfig) -> Result<()> {
    let (bars, config) = load_bars(args, base)?;

    let models = Model::all(config.moving_average_window);
    let predictions: Vec<_> = models.iter().map(|model| model.predict(&bars)).collect();
    let next = next_period(&bars, config.granularity);

    print_predictions(
        &predictions,
        next.as_ref(),
        Recommendation::choose(&models, &predictions).as_ref(),
        PredictionSpread::from_predictions(&predictions).as_ref(),
    );

    println!();
    for model in &models {
        println!("{}: {}", model, model.description());
    }
    Ok(())
}
