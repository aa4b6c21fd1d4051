// ABOUTME: Sizing configuration for synthesis precision, classification bands, and messages
// ABOUTME: Loads defaults, applies environment overrides, validates, and exposes a global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

/// Configuration error types
pub mod error;

/// Recommendation message templates
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::RecommendationMessages;

use serde::{Deserialize, Serialize};
use smartsize_core::constants::{env_vars, fit_thresholds, size_thresholds, synthesis};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Top-level sizing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Measurement synthesis settings
    pub synthesis: SynthesisConfig,
    /// Size and fit classification bands
    pub thresholds: SizingThresholds,
    /// Recommendation sentence templates
    pub messages: RecommendationMessages,
}

/// Measurement synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Decimal places kept on generated values
    pub precision: u32,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            precision: synthesis::DEFAULT_PRECISION,
        }
    }
}

/// Size category and fit label thresholds (inches)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingThresholds {
    /// Upper body width below this is XS-S
    pub size_small_max: f64,
    /// Upper body width below this is M
    pub size_medium_max: f64,
    /// Upper body width below this is L, otherwise XL+
    pub size_large_max: f64,
    /// Chest-to-waist difference above this is a tapered fit
    pub fit_tapered_min_diff: f64,
    /// Chest-to-waist difference above this is a regular fit
    pub fit_regular_min_diff: f64,
}

impl Default for SizingThresholds {
    fn default() -> Self {
        Self {
            size_small_max: size_thresholds::SMALL_MAX,
            size_medium_max: size_thresholds::MEDIUM_MAX,
            size_large_max: size_thresholds::LARGE_MAX,
            fit_tapered_min_diff: fit_thresholds::TAPERED_MIN_DIFF,
            fit_regular_min_diff: fit_thresholds::REGULAR_MIN_DIFF,
        }
    }
}

/// Global configuration singleton
static SIZING_CONFIG: OnceLock<SizingConfig> = OnceLock::new();

impl SizingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SIZING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load sizing config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are not finite and ascending, or precision is too large
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.synthesis.precision > synthesis::MAX_PRECISION {
            return Err(ConfigError::ValueOutOfRange(
                "synthesis precision must be between 0 and 4",
            ));
        }

        let t = &self.thresholds;
        let all_finite = [
            t.size_small_max,
            t.size_medium_max,
            t.size_large_max,
            t.fit_tapered_min_diff,
            t.fit_regular_min_diff,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(ConfigError::ValueOutOfRange(
                "sizing thresholds must be finite numbers",
            ));
        }

        if t.size_small_max >= t.size_medium_max || t.size_medium_max >= t.size_large_max {
            return Err(ConfigError::InvalidRange(
                "size bands must satisfy small_max < medium_max < large_max",
            ));
        }

        if t.fit_regular_min_diff >= t.fit_tapered_min_diff {
            return Err(ConfigError::InvalidRange(
                "fit_regular_min_diff must be < fit_tapered_min_diff",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(precision) = parse_env(env_vars::SYNTH_PRECISION)? {
            self.synthesis.precision = precision;
        }
        if let Some(value) = parse_env(env_vars::SIZE_SMALL_MAX)? {
            self.thresholds.size_small_max = value;
        }
        if let Some(value) = parse_env(env_vars::SIZE_MEDIUM_MAX)? {
            self.thresholds.size_medium_max = value;
        }
        if let Some(value) = parse_env(env_vars::SIZE_LARGE_MAX)? {
            self.thresholds.size_large_max = value;
        }
        if let Some(value) = parse_env(env_vars::FIT_TAPERED_MIN_DIFF)? {
            self.thresholds.fit_tapered_min_diff = value;
        }
        if let Some(value) = parse_env(env_vars::FIT_REGULAR_MIN_DIFF)? {
            self.thresholds.fit_regular_min_diff = value;
        }
        Ok(self)
    }
}

fn parse_env<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {raw}"))),
        Err(_) => Ok(None),
    }
}
