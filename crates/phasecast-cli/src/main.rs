//! # phasecast
//!
//! Command-line interface for the three-phase power predictor.
//!
//! Reads daily records, prints the prediction result as JSON on stdout and
//! logs to stderr. Exit status: 0 success, 2 failure payload, 1 usage or
//! I/O error.

mod input;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phasecast_facade::{environment_report, load, PredictorBuilder};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use input::InputFormat;

const EXIT_FAILURE_PAYLOAD: u8 = 2;

#[derive(Parser)]
#[command(name = "phasecast", version)]
#[command(about = "Next-day three-phase power consumption forecaster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast tomorrow's consumption for phases A, B and C
    Predict {
        /// Records file (JSON or CSV), `-` for stdin
        #[arg(short, long)]
        input: PathBuf,

        /// Input format (detected from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,

        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON predictor config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Minimum valid records required
        #[arg(long)]
        min_points: Option<usize>,

        /// Seasonal cycle length in days
        #[arg(long)]
        seasonal_period: Option<usize>,

        /// Number of most recent records fitted
        #[arg(long)]
        max_window: Option<usize>,

        /// Fit the seasonal model on untransformed data
        #[arg(long)]
        no_box_cox: bool,

        /// Forecast the phases one after another on this thread
        #[arg(long)]
        sequential: bool,

        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// Check the numerical stack and print an environment report
    Doctor {
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "phasecast=info".into()))
        .init();
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize result")
}

fn emit(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("result written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_predict(
    input: PathBuf,
    format: Option<InputFormat>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    min_points: Option<usize>,
    seasonal_period: Option<usize>,
    max_window: Option<usize>,
    no_box_cox: bool,
    sequential: bool,
    pretty: bool,
) -> Result<ExitCode> {
    let mut builder = PredictorBuilder::from_config(load(config.as_deref())?);
    if let Some(n) = min_points {
        builder = builder.min_points(n);
    }
    if let Some(period) = seasonal_period {
        builder = builder.seasonal_period(period);
    }
    if let Some(window) = max_window {
        builder = builder.max_window(window);
    }
    if no_box_cox {
        builder = builder.box_cox(false);
    }
    if sequential {
        builder = builder.sequential();
    }
    let predictor = builder.build()?;

    let records = input::load_records(&input, format)?;
    info!("loaded {} records from {}", records.len(), input.display());

    let result = predictor.predict(&records);
    emit(&to_json(&result, pretty)?, output.as_deref())?;

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_FAILURE_PAYLOAD))
    }
}

fn run_doctor(pretty: bool) -> Result<ExitCode> {
    let report = environment_report();
    emit(&to_json(&report, pretty)?, None)?;

    if report.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_FAILURE_PAYLOAD))
    }
}

fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            input,
            format,
            output,
            config,
            min_points,
            seasonal_period,
            max_window,
            no_box_cox,
            sequential,
            pretty,
        } => run_predict(
            input,
            format,
            output,
            config,
            min_points,
            seasonal_period,
            max_window,
            no_box_cox,
            sequential,
            pretty,
        ),
        Commands::Doctor { pretty } => run_doctor(pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
