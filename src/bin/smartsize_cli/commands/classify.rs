// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Classify command: size category and, with a midsection, fit label
// ABOUTME: Uses the configured sizing thresholds

use smartsize::config::init_configs;
use smartsize::errors::{AppError, AppResult};
use smartsize::intelligence::classification::{fit_recommendation_with, size_category_with};

pub fn run(upper_body: f64, midsection: Option<f64>) -> AppResult<()> {
    if !upper_body.is_finite() || midsection.is_some_and(|m| !m.is_finite()) {
        return Err(AppError::invalid_input("measurements must be finite numbers"));
    }

    let thresholds = &init_configs()?.thresholds;

    println!(
        "Size category: {}",
        size_category_with(upper_body, thresholds)
    );
    if let Some(midsection) = midsection {
        println!(
            "Fit: {}",
            fit_recommendation_with(upper_body, midsection, thresholds)
        );
    }
    Ok(())
}
