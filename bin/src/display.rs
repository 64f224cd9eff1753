//! Display utilities and output formatting for the tempcast CLI.

use anyhow::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tempcast_lib::{
    AnalysisReport, Bar, CsvFormatter, Formatter, JsonFormatter, ModelValidation, NextPeriod,
    OutputFormat, PredictionResult, PredictionRow, PredictionSpread, Recommendation, RollingSeries,
};

#[cfg(feature = "parquet")]
use tempcast_lib::ParquetFormatter;

/// Write bars to a file in the specified format.
pub(crate) fn write_bars(bars: &[Bar], output: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => CsvFormatter::new().write_bars(bars, writer)?,
        OutputFormat::Json => JsonFormatter::new().write_bars(bars, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_bars(bars, writer)?,
        OutputFormat::Parquet => {
            #[cfg(feature = "parquet")]
            {
                ParquetFormatter::new().write_bars(bars, writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                anyhow::bail!("Parquet support not compiled in");
            }
        }
    }

    Ok(())
}

/// Write aligned rolling predictions to a file in the specified format.
pub(crate) fn write_predictions(
    rows: &[PredictionRow],
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => CsvFormatter::new().write_predictions(rows, writer)?,
        OutputFormat::Json => JsonFormatter::new().write_predictions(rows, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_predictions(rows, writer)?,
        OutputFormat::Parquet => {
            #[cfg(feature = "parquet")]
            {
                ParquetFormatter::new().write_predictions(rows, writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                anyhow::bail!("Parquet support not compiled in");
            }
        }
    }

    Ok(())
}

/// Print the bar table.
pub(crate) fn print_bars(bars: &[Bar]) {
    if bars.is_empty() {
        println!("No bars to display.");
        return;
    }

    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "DATE", "OPEN", "CLOSE", "HIGH", "LOW", "CHANGE"
    );
    println!("{}", "-".repeat(56));

    for bar in bars {
        println!(
            "{:<12} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>7}",
            bar.period_label,
            bar.open,
            bar.close,
            bar.high,
            bar.low,
            if bar.is_uptrend() { "UP" } else { "DOWN" }
        );
    }
}

/// Print the current prediction of every model.
pub(crate) fn print_predictions(
    predictions: &[PredictionResult],
    next_period: Option<&NextPeriod>,
    recommendation: Option<&Recommendation>,
    spread: Option<&PredictionSpread>,
) {
    let target = next_period.map_or("the next period", |p| p.description.as_str());
    println!("Predictions for {target}:");
    println!(
        "{:<24} {:>10} {:>12} {:<10} {}",
        "MODEL", "PREDICTION", "CONFIDENCE", "LEVEL", "DETAIL"
    );
    println!("{}", "-".repeat(76));

    for prediction in predictions {
        if prediction.is_valid() {
            println!(
                "{:<24} {:>10} {:>11.1}% {:<10} {}",
                prediction.model_name,
                format!("{:.2}°C", prediction.value),
                prediction.confidence * 100.0,
                prediction.confidence_level(),
                prediction.confidence_description
            );
        } else {
            println!(
                "{:<24} {:>10} {:>12} {:<10} {}",
                prediction.model_name,
                "-",
                "-",
                "-",
                prediction.error_reason.as_deref().unwrap_or("invalid")
            );
        }
    }

    if let Some(spread) = spread {
        println!(
            "\nPrediction range: {:.1}°C ({} uncertainty)",
            spread.width(),
            spread.uncertainty
        );
    }

    match recommendation {
        Some(r) => println!(
            "Recommendation: {} ({:.2}°C, {} confidence)",
            r.prediction.model_name,
            r.prediction.value,
            r.prediction.confidence_level()
        ),
        None => println!("Recommendation: none (no model produced a confident forecast)"),
    }
}

/// Print validation statistics per model.
pub(crate) fn print_validations(validations: &[ModelValidation]) {
    println!(
        "{:<24} {:>8} {:>8} {:>9} {:>9} {:>8}",
        "MODEL", "MAE", "RMSE", "MAX ERR", "MIN ERR", "SUCCESS"
    );
    println!("{}", "-".repeat(72));

    for validation in validations {
        let result = &validation.result;
        if result.is_valid() {
            println!(
                "{:<24} {:>8.3} {:>8.3} {:>9.3} {:>9.3} {:>7.1}%",
                validation.model_name,
                result.mean_absolute_error,
                result.rmse(),
                result.max_error,
                result.min_error,
                result.success_rate()
            );
        } else {
            println!(
                "{:<24} {}",
                validation.model_name,
                result.error_reason.as_deref().unwrap_or("invalid")
            );
        }
    }

    if let Some(best) = tempcast_lib::best_by_mae(validations) {
        println!(
            "\nBest model by MAE: {} ({:.3}°C)",
            best.model_name, best.result.mean_absolute_error
        );
    }
}

/// Print actual vs. predicted values for one rolling series.
pub(crate) fn print_rolling(bars: &[Bar], series: &RollingSeries) {
    println!("{}:", series.model_name);
    println!(
        "{:<12} {:>8} {:>10} {:>8}",
        "DATE", "ACTUAL", "PREDICTED", "ERROR"
    );
    println!("{}", "-".repeat(41));

    for row in PredictionRow::from_series(bars, series) {
        match (row.predicted, row.error) {
            (Some(predicted), Some(error)) => println!(
                "{:<12} {:>8.2} {:>10.2} {:>8.2}",
                row.period_label, row.actual, predicted, error
            ),
            _ => println!(
                "{:<12} {:>8.2} {:>10} {:>8}",
                row.period_label, row.actual, "-", "-"
            ),
        }
    }

    match series.mean_absolute_error(bars) {
        Some(mae) => println!("Average error: {mae:.3}°C\n"),
        None => println!("Average error: n/a\n"),
    }
}

/// Print a complete analysis report.
pub(crate) fn print_report(report: &AnalysisReport, bars: &[Bar]) {
    println!(
        "Analysed {} {} bars",
        report.bar_count,
        report.config.granularity
    );
    println!();

    print_predictions(
        &report.predictions,
        report.next_period.as_ref(),
        report.recommendation.as_ref(),
        report.spread.as_ref(),
    );

    if !report.validations.is_empty() {
        println!("\nValidation:");
        print_validations(&report.validations);
    }

    if !report.rolling.is_empty() {
        println!("\nRolling predictions:");
        for series in &report.rolling {
            print_rolling(bars, series);
        }
    }

    if !report.config.evaluates(report.bar_count) {
        println!(
            "\nValidation and rolling predictions need at least {} bars.",
            report.config.min_bars_for_evaluation
        );
    }
}
