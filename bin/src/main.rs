//! tempcast CLI - Temperature aggregation, forecasting and model validation.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tempcast_lib::{CountryCode, Granularity, OpenPolicy, OutputFormat};

mod commands;
mod config;
mod display;
mod logging;

#[derive(Parser)]
#[command(name = "tempcast")]
#[command(about = "Temperature aggregation, forecasting and model validation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Analysis config file (JSON). Defaults to the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Where the readings come from and how they are aggregated.
#[derive(Args, Debug, Clone)]
pub(crate) struct DataArgs {
    /// Input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Two-letter country code (e.g., DE, FR)
    #[arg(short, long)]
    country: CountryCode,

    /// First year to include
    #[arg(long, default_value = "1980")]
    start_year: i32,

    /// Last year to include
    #[arg(long, default_value = "2019")]
    end_year: i32,

    /// Aggregation timeframe (daily, monthly, yearly)
    #[arg(short, long)]
    granularity: Option<Granularity>,

    /// Moving-average window
    #[arg(short, long)]
    window: Option<usize>,

    /// How each bar's open is chosen (first-reading, previous-close, group-mean)
    #[arg(long)]
    open_policy: Option<OpenPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregated bars
    Bars {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Forecast the next period with every model
    Predict {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Measure each model's historical accuracy
    Validate {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Show actual vs. predicted values per period
    Rolling {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Run the complete analysis
    Analyze {
        #[command(flatten)]
        data: DataArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Skip validation
        #[arg(long)]
        no_validation: bool,

        /// Skip rolling predictions
        #[arg(long)]
        no_rolling: bool,
    },

    /// Write the aggregated bars to a file
    Export {
        #[command(flatten)]
        data: DataArgs,

        /// Output file path. Defaults to <country>_<granularity>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (csv, json, ndjson, parquet)
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Also write each model's rolling predictions next to the output file
        #[arg(long)]
        predictions: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let base = config::load(cli.config.as_deref())?;

    match command {
        Commands::Bars { data } => commands::bars::show_bars(&data, base),
        Commands::Predict { data } => commands::predict::predict(&data, base),
        Commands::Validate { data } => commands::validate::validate(&data, base).await,
        Commands::Rolling { data } => commands::rolling::rolling(&data, base),
        Commands::Analyze {
            data,
            json,
            no_validation,
            no_rolling,
        } => {
            let show_validation = base.show_validation && !no_validation;
            let show_rolling = base.show_rolling && !no_rolling;
            let base = base
                .with_validation(show_validation)
                .with_rolling(show_rolling);
            commands::analyze::analyze(&data, base, json).await
        }
        Commands::Export {
            data,
            output,
            format,
            predictions,
        } => commands::export::export(&data, base, output, format, predictions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "tempcast",
            "analyze",
            "--input",
            "weather.csv",
            "--country",
            "de",
            "--granularity",
            "monthly",
            "--window",
            "5",
            "--json",
        ])
        .unwrap();

        let Some(Commands::Analyze { data, json, .. }) = cli.command else {
            panic!("expected analyze");
        };
        assert!(json);
        assert_eq!(data.country.as_str(), "DE");
        assert_eq!(data.granularity, Some(Granularity::Monthly));
        assert_eq!(data.window, Some(5));
        assert_eq!(data.start_year, 1980);
    }

    #[test]
    fn test_export_format_aliases() {
        for (arg, expected) in [("jsonl", OutputFormat::Ndjson), ("PQ", OutputFormat::Parquet)] {
            let cli = Cli::try_parse_from([
                "tempcast", "export", "-i", "x.csv", "-c", "de", "--format", arg,
            ])
            .unwrap();
            let Some(Commands::Export { format, .. }) = cli.command else {
                panic!("expected export");
            };
            assert_eq!(format, expected);
        }

        let result = Cli::try_parse_from([
            "tempcast", "export", "-i", "x.csv", "-c", "de", "--format", "xlsx",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_country() {
        let result = Cli::try_parse_from([
            "tempcast", "bars", "--input", "x.csv", "--country", "DEU",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "tempcast",
            "export",
            "-i",
            "x.csv",
            "-c",
            "fr",
            "--format",
            "ndjson",
            "-vv",
            "--open-policy",
            "group-mean",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Some(Commands::Export { data, format, .. }) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(format, OutputFormat::Ndjson);
        assert_eq!(data.open_policy, Some(OpenPolicy::GroupMean));
    }
}
