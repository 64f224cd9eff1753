//! Validate command implementation.

use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::sync::Arc;
use tempcast_lib::{AnalysisConfig, Bar, Model, ModelValidation};
use tracing::debug;

use super::load_bars;
use crate::DataArgs;
use crate::display::print_validations;

/// Validates the three models on the blocking pool, one task per model.
///
/// Results keep the reporting order regardless of completion order.
pub(crate) async fn validate_concurrently(
    bars: Arc<Vec<Bar>>,
    window: usize,
) -> Result<Vec<ModelValidation>> {
    let tasks = Model::all(window).map(|model| {
        let bars = Arc::clone(&bars);
        tokio::task::spawn_blocking(move || {
            debug!(%model, "validating");
            ModelValidation::run(&bars, model)
        })
    });

    try_join_all(tasks).await.context("Validation task failed")
}

/// Measure each model's historical accuracy.
pub(crate) async fn validate(args: &DataArgs, base: AnalysisConfig) -> Result<()> {
    let (bars, config) = load_bars(args, base)?;

    if !config.evaluates(bars.len()) {
        println!(
            "Validation needs at least {} bars, have {}.",
            config.min_bars_for_evaluation,
            bars.len()
        );
        return Ok(());
    }

    let validations = validate_concurrently(Arc::new(bars), config.moving_average_window).await?;
    print_validations(&validations);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempcast_lib::{Granularity, Reading, aggregate, validate_all};

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let readings: Vec<Reading> = (0..10)
            .map(|i| Reading::new(format!("{}-01-01", 2000 + i), 5.0 + f64::from(i % 3)))
            .collect();
        let bars = aggregate(&readings, Granularity::Yearly);

        let concurrent = validate_concurrently(Arc::new(bars.clone()), 3).await.unwrap();
        assert_eq!(concurrent, validate_all(&bars, 3));
    }
}
