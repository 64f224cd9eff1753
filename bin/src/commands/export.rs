//! Export command implementation.

use anyhow::Result;
use std::path::PathBuf;
use tempcast_lib::{AnalysisConfig, OutputFormat, PredictionRow, rolling_all};
use tracing::info;

use super::load_bars;
use crate::DataArgs;
use crate::display::{write_bars, write_predictions};

/// Write the aggregated bars, and optionally rolling predictions, to files.
pub(crate) fn export(
    args: &DataArgs,
    base: AnalysisConfig,
    output: Option<PathBuf>,
    format: OutputFormat,
    predictions: bool,
) -> Result<()> {
    let (bars, config) = load_bars(args, base)?;

    // Determine output path (default to <country>_<granularity>.<format>)
    let output = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}_{}.{}",
            args.country.as_str().to_lowercase(),
            config.granularity,
            format.extension()
        ))
    });

    write_bars(&bars, &output, format)?;
    info!(path = %output.display(), bars = bars.len(), %format, "exported bars");
    println!("Wrote {} bars to {}", bars.len(), output.display());

    if predictions {
        let stem = output
            .file_stem()
            .map_or_else(|| "export".to_string(), |s| s.to_string_lossy().into_owned());

        for series in rolling_all(&bars, config.moving_average_window) {
            let slug = series.model_name.to_lowercase().replace(['(', ')'], "").replace(' ', "_");
            let path = output.with_file_name(format!(
                "{stem}_{slug}_predictions.{}",
                format.extension()
            ));
            let rows = PredictionRow::from_series(&bars, &series);
            write_predictions(&rows, &path, format)?;
            println!("Wrote {} predictions to {}", rows.len(), path.display());
        }
    }

    Ok(())
}
