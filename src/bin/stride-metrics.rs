// ABOUTME: Stride metrics CLI - reports distance, speed and calories for activity records
// ABOUTME: Wraps the day and training report entry points with text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily steps: distance and walking calories
//! stride-metrics day "1000,30m" --weight 75 --height 1.75
//!
//! # Training session: running or walking formula picked by the label
//! stride-metrics training "1000,Бег,40m" --weight 75 --height 1.75
//!
//! # Machine-readable output
//! stride-metrics training "6000,Ходьба,1h" --weight 75 --height 1.75 --format json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use stride_metrics::{
    calculator::MetricsCalculator,
    commands::{run_command, RecordKind},
    config::MetricsConfig,
    formatters::OutputFormat,
    logging::LoggingConfig,
    models::UserProfile,
};
use tracing::info;
#[derive(Parser)]
#[command(
    name = "stride-metrics",
    about = "Step-based activity metrics",
    long_about = "Computes distance, mean speed and calories burned from step-count activity records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Day record "<steps>,<duration>", e.g. "1000,30m"
    Day {
        /// Activity record
        record: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Training record "<steps>,<activity>,<duration>", e.g. "1000,Бег,40m"
    Training {
        /// Activity record
        record: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in meters
    #[arg(long)]
    height: f64,
}

impl ProfileArgs {
    const fn to_profile(&self) -> UserProfile {
        UserProfile::new(self.weight, self.height)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = MetricsConfig::load()?;
    info!(stride_length_m = config.stride_length_m, "Metrics configuration loaded");
    let calculator = MetricsCalculator::new(config);
    let format = OutputFormat::from_str_param(&cli.format);

    let (kind, record, profile) = match cli.command {
        Command::Day { record, profile } => (RecordKind::Day, record, profile),
        Command::Training { record, profile } => (RecordKind::Training, record, profile),
    };

    if let Some(output) = run_command(kind, &record, &profile.to_profile(), &calculator, format)? {
        println!("{output}");
    }
    Ok(())
}
