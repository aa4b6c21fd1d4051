// ABOUTME: SmartSize CLI - analyze a photo, re-run recommendations, and convert or classify sizes
// ABOUTME: Parses arguments, sets up logging, and maps errors to process exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
//!
//! Usage:
//! ```bash
//! # Analyze a photo (waits the processing latency, then prints results)
//! smartsize-cli analyze photo.jpg
//!
//! # Reproducible run, no wait, export to JSON with centimetre column
//! smartsize-cli analyze photo.jpg --seed 42 --latency-ms 0 --metric --export out.json
//!
//! # Regenerate recommendations for a previous export
//! smartsize-cli recommend out.json
//!
//! # Convert inches to centimetres
//! smartsize-cli convert 40
//!
//! # Size category and fit label
//! smartsize-cli classify --upper-body 44 --midsection 36
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use smartsize::config::environment::{AppConfig, LogLevel};
use smartsize::errors::{AppError, AppResult};
use smartsize::logging::LoggingConfig;
use std::path::PathBuf;
use std::process;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "smartsize-cli",
    about = "SmartSize body measurement CLI",
    long_about = "Upload a photo to receive body measurements and clothing-fit suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Process a photo into measurements and recommendations
    Analyze {
        /// Path to the photo (png, jpg, jpeg, gif, webp, bmp, heic)
        image: PathBuf,

        /// Seed for reproducible measurements
        #[arg(long)]
        seed: Option<u64>,

        /// Processing delay in milliseconds (default: 3000)
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Write the results to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format (json, toon)
        #[arg(long)]
        format: Option<String>,

        /// Also show centimetres
        #[arg(long)]
        metric: bool,
    },

    /// Regenerate recommendations for an exported measurement set
    Recommend {
        /// JSON export written by `analyze --export`
        export: PathBuf,
    },

    /// Convert inches to centimetres
    Convert {
        /// Length in inches
        #[arg(allow_negative_numbers = true)]
        inches: f64,
    },

    /// Size category and fit label from raw measurements
    Classify {
        /// Upper body width in inches
        #[arg(long)]
        upper_body: f64,

        /// Midsection in inches
        #[arg(long)]
        midsection: Option<f64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    if let Err(e) = LoggingConfig::from_env().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = run(cli.command, &config).await {
        error!(code = ?e.code, "{}", e.message);
        exit_with(&e);
    }
}

fn exit_with(error: &AppError) -> ! {
    eprintln!("Error: {error}");
    process::exit(error.exit_code());
}

async fn run(command: Command, config: &AppConfig) -> AppResult<()> {
    match command {
        Command::Analyze {
            image,
            seed,
            latency_ms,
            export,
            format,
            metric,
        } => {
            commands::analyze::run(
                config,
                commands::analyze::AnalyzeArgs {
                    image,
                    seed,
                    latency_ms,
                    export,
                    format,
                    metric,
                },
            )
            .await
        }
        Command::Recommend { export } => commands::recommend::run(&export).await,
        Command::Convert { inches } => {
            commands::convert::run(inches);
            Ok(())
        }
        Command::Classify {
            upper_body,
            midsection,
        } => commands::classify::run(upper_body, midsection),
    }
}
