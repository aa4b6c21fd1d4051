// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Recommend command: re-run the recommendation engine over an exported set
// ABOUTME: The export is validated on load

use std::path::Path;

use smartsize::config::init_configs;
use smartsize::errors::AppResult;
use smartsize::export::read_export;
use smartsize::intelligence::{RecommendationEngine, RecommendationEngineTrait};

use crate::helpers::render;

pub async fn run(path: &Path) -> AppResult<()> {
    init_configs()?;
    let export = read_export(path).await?;

    let recommendations =
        RecommendationEngine::new().generate_recommendations(export.measurements.as_slice());

    render::display_measurements(&export.measurements, false);
    render::display_recommendations(&recommendations);
    Ok(())
}
