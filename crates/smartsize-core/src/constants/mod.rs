// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Measurement intervals, unit factors, sizing thresholds, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Constants module
//!
//! Application constants grouped by domain rather than kept in a single flat list.

/// Unit conversion and measurement constants
pub mod units;

/// Closed intervals used by the measurement synthesizer (inches)
pub mod measurement_ranges {
    /// Upper Body Width interval
    pub const UPPER_BODY_WIDTH: (f64, f64) = (36.0, 48.0);
    /// Midsection interval
    pub const MIDSECTION: (f64, f64) = (28.0, 42.0);
    /// Lower Body Width interval
    pub const LOWER_BODY_WIDTH: (f64, f64) = (34.0, 50.0);
    /// Shoulder Span interval
    pub const SHOULDER_SPAN: (f64, f64) = (15.0, 20.0);
    /// Arm Measurement interval
    pub const ARM_MEASUREMENT: (f64, f64) = (22.0, 28.0);
    /// Torso Measurement interval
    pub const TORSO_MEASUREMENT: (f64, f64) = (16.0, 22.0);
    /// Leg Measurement interval
    pub const LEG_MEASUREMENT: (f64, f64) = (28.0, 36.0);
}

/// Size category band limits (upper body width, inches, exclusive upper bounds)
pub mod size_thresholds {
    /// Below this width the category is XS-S
    pub const SMALL_MAX: f64 = 38.0;
    /// Below this width the category is M
    pub const MEDIUM_MAX: f64 = 42.0;
    /// Below this width the category is L, otherwise XL+
    pub const LARGE_MAX: f64 = 46.0;
}

/// Fit label thresholds on `upper body width - midsection` (inches, strict)
pub mod fit_thresholds {
    /// Difference above this is a tapered fit
    pub const TAPERED_MIN_DIFF: f64 = 10.0;
    /// Difference above this is a regular fit, otherwise relaxed
    pub const REGULAR_MIN_DIFF: f64 = 6.0;
}

/// Synthesis defaults
pub mod synthesis {
    /// Decimal places applied to every generated value
    pub const DEFAULT_PRECISION: u32 = 0;
    /// Largest precision accepted from configuration
    pub const MAX_PRECISION: u32 = 4;
    /// Simulated processing delay before results appear (milliseconds)
    pub const DEFAULT_PROCESSING_LATENCY_MS: u64 = 3000;
}

/// Service identity used in logs
pub mod service_names {
    /// CLI binary / service name
    pub const SMARTSIZE_CLI: &str = "smartsize-cli";
}

/// Environment variable names
pub mod env_vars {
    /// Synthetic processing latency override (milliseconds)
    pub const PROCESSING_LATENCY_MS: &str = "SMARTSIZE_PROCESSING_LATENCY_MS";
    /// Fixed RNG seed for reproducible measurements
    pub const SEED: &str = "SMARTSIZE_SEED";
    /// Default export format (json, toon)
    pub const EXPORT_FORMAT: &str = "SMARTSIZE_EXPORT_FORMAT";
    /// Decimal places for synthesized values
    pub const SYNTH_PRECISION: &str = "SMARTSIZE_SYNTH_PRECISION";
    /// XS-S upper bound
    pub const SIZE_SMALL_MAX: &str = "SMARTSIZE_SIZE_SMALL_MAX";
    /// M upper bound
    pub const SIZE_MEDIUM_MAX: &str = "SMARTSIZE_SIZE_MEDIUM_MAX";
    /// L upper bound
    pub const SIZE_LARGE_MAX: &str = "SMARTSIZE_SIZE_LARGE_MAX";
    /// Tapered fit difference threshold
    pub const FIT_TAPERED_MIN_DIFF: &str = "SMARTSIZE_FIT_TAPERED_MIN_DIFF";
    /// Regular fit difference threshold
    pub const FIT_REGULAR_MIN_DIFF: &str = "SMARTSIZE_FIT_REGULAR_MIN_DIFF";
}

/// Accepted image file extensions (the `image/*` upload filter)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic"];
