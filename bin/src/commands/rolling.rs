//! Rolling command implementation.

use anyhow::Result;
use tempcast_lib::{AnalysisConfig, rolling_all};

use super::load_bars;
use crate::DataArgs;
use crate::display::print_rolling;

/// Show actual vs. predicted values per period for every model.
pub(crate) fn rolling(args: &DataArgs, base: AnalysisConfig) -> Result<()> {
    let (bars, config) = load_bars(args, base)?;

    if !config.evaluates(bars.len()) {
        println!(
            "Rolling predictions need at least {} bars, have {}.",
            config.min_bars_for_evaluation,
            bars.len()
        );
        return Ok(());
    }

    for series in rolling_all(&bars, config.moving_average_window) {
        print_rolling(&bars, &series);
    }
    Ok(())
}
