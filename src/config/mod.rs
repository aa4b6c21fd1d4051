// ABOUTME: Configuration module for environment-driven application settings
// ABOUTME: Re-exports the application config and initializes the sizing config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
//! Configuration module for SmartSize
//!
//! Configuration is environment-only:
//!
//! - **Environment**: latency, seed, export format, log level, deployment environment
//! - **Sizing**: synthesis precision, size bands, fit thresholds (in `smartsize-intelligence`)

use smartsize_core::errors::AppResult;
use smartsize_intelligence::SizingConfig;
use tracing::{debug, info};

/// Environment and application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel};

/// Initialize all configurations
///
/// Unlike [`SizingConfig::global`], which falls back to defaults, this surfaces
/// invalid sizing overrides as an error.
///
/// # Errors
///
/// Returns an error if the sizing configuration fails to parse or validate
pub fn init_configs() -> AppResult<&'static SizingConfig> {
    SizingConfig::load()?;
    let sizing = SizingConfig::global();

    debug!(
        precision = sizing.synthesis.precision,
        size_small_max = sizing.thresholds.size_small_max,
        size_medium_max = sizing.thresholds.size_medium_max,
        size_large_max = sizing.thresholds.size_large_max,
        "Sizing config initialized"
    );

    info!("All configurations initialized successfully");
    Ok(sizing)
}
