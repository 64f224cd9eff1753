//! Bars command implementation.

use anyhow::Result;
use tempcast_lib::AnalysisConfig;

use super::load_bars;
use crate::DataArgs;
use crate::display::print_bars;

/// Print the aggregated bars.
pub(crate) fn show_bars(args: &DataArgs, base: AnalysisConfig) -> Result<()> {
    let (bars, config) = load_bars(args, base)?;

    println!(
        "{} {} bars for {} ({}-{})\n",
        bars.len(),
        config.granularity,
        args.country,
        args.start_year,
        args.end_year
    );
    print_bars(&bars);
    Ok(())
}
