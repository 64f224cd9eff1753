//! Analyze command implementation.

use anyhow::Result;
use std::sync::Arc;
use tempcast_lib::{AnalysisConfig, analyze_with_validations};

use super::load_bars;
use super::validate::validate_concurrently;
use crate::DataArgs;
use crate::display::print_report;

/// Run the complete analysis and print it as a report or JSON.
pub(crate) async fn analyze(args: &DataArgs, base: AnalysisConfig, json: bool) -> Result<()> {
    let (bars, config) = load_bars(args, base)?;
    let bars = Arc::new(bars);

    let validations = if config.show_validation && config.evaluates(bars.len()) {
        validate_concurrently(Arc::clone(&bars), config.moving_average_window).await?
    } else {
        Vec::new()
    };

    let report = analyze_with_validations(&bars, &config, validations);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &bars);
    }
    Ok(())
}
