//! CLI command implementations.

pub(crate) mod analyze;
pub(crate) mod bars;
pub(crate) mod export;
pub(crate) mod predict;
pub(crate) mod rolling;
pub(crate) mod validate;

use anyhow::{Context, Result};
use tempcast_lib::{AnalysisConfig, Bar, YearRange, aggregate_with, load_readings};
use tracing::info;

use crate::DataArgs;
use crate::config::apply_overrides;

/// Loads the readings named by `args` and aggregates them into bars.
///
/// Returns the bars together with the effective configuration.
pub(crate) fn load_bars(args: &DataArgs, base: AnalysisConfig) -> Result<(Vec<Bar>, AnalysisConfig)> {
    let config = apply_overrides(base, args)?;
    let years = YearRange::new(args.start_year, args.end_year)?;

    let readings = load_readings(&args.input, &args.country, years)
        .with_context(|| format!("Failed to load readings from {}", args.input.display()))?;
    let bars = aggregate_with(&readings, config.granularity, config.open_policy);

    info!(
        country = %args.country,
        %years,
        readings = readings.len(),
        bars = bars.len(),
        granularity = %config.granularity,
        "prepared bars"
    );
    Ok((bars, config))
}
