// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Analyze command: select a photo, process it, print and optionally export results
// ABOUTME: CLI flags override the environment configuration

use std::path::PathBuf;
use std::time::Duration;

use smartsize::config::{init_configs, AppConfig};
use smartsize::errors::{AppError, AppResult};
use smartsize::export::{write_export, MeasurementExport};
use smartsize::formatters::OutputFormat;
use smartsize::image::ImageToken;
use smartsize::intelligence::MeasurementSynthesizer;
use smartsize::session::MeasurementSession;
use tracing::info;

use crate::helpers::render;

/// Parsed `analyze` arguments
pub struct AnalyzeArgs {
    pub image: PathBuf,
    pub seed: Option<u64>,
    pub latency_ms: Option<u64>,
    pub export: Option<PathBuf>,
    pub format: Option<String>,
    pub metric: bool,
}

pub async fn run(config: &AppConfig, args: AnalyzeArgs) -> AppResult<()> {
    init_configs()?;

    let latency = args
        .latency_ms
        .map_or(config.processing_latency, Duration::from_millis);
    let seed = args.seed.or(config.seed);
    let format = args
        .format
        .as_deref()
        .map_or(config.export_format, OutputFormat::from_str_param);

    let mut session = MeasurementSession::new(latency);
    session.select_image(ImageToken::from_path(&args.image)?);

    let mut synthesizer = match seed {
        Some(seed) => {
            info!(seed, "Using seeded synthesizer");
            MeasurementSynthesizer::seeded(seed)
        }
        None => MeasurementSynthesizer::from_entropy(),
    };

    if !latency.is_zero() {
        println!("Analyzing {}...", args.image.display());
    }
    session.process(&mut synthesizer).await?;

    let (Some(measurements), Some(recommendations)) =
        (session.measurements(), session.recommendations())
    else {
        return Err(AppError::internal("processing finished without results"));
    };

    render::display_measurements(measurements, args.metric);
    render::display_recommendations(recommendations);
    if let Some(profile) = session.size_profile() {
        render::display_size_profile(&profile);
    }

    if let Some(path) = args.export {
        let export = MeasurementExport::from_session(&session)?;
        let written = write_export(&path, &export, format).await?;
        println!("\nExported measurements to {} ({format})", written.display());
    }

    Ok(())
}
