// ABOUTME: Sizing intelligence: measurement synthesis, recommendations, and classification
// ABOUTME: Pure, synchronous logic with no I/O; the caller owns latency and state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

#![deny(unsafe_code)]

//! # SmartSize Intelligence
//!
//! The two-step pipeline at the heart of SmartSize:
//!
//! 1. [`synthesizer`] fabricates a seven-entry [`MeasurementSet`](smartsize_core::models::MeasurementSet)
//! 2. [`recommendation_engine`] derives four advice sentences from it
//!
//! plus independent [`conversions`] and [`classification`] utilities.
//!
//! ```rust
//! use smartsize_intelligence::{generate_recommendations, synthesize_measurements};
//!
//! let measurements = synthesize_measurements();
//! let advice = generate_recommendations(measurements.as_slice());
//! assert_eq!(measurements.len(), 7);
//! assert_eq!(advice.len(), 4);
//! ```

/// Sizing configuration (precision, thresholds, message templates)
pub mod config;

/// Inch/centimetre conversion and rounding
pub mod conversions;

/// Size category, fit label, and size profile
pub mod classification;

/// Random measurement generation
pub mod synthesizer;

/// Recommendation sentence generation
pub mod recommendation_engine;

pub use classification::{fit_recommendation, size_category, MetricConversion, SizeProfile};
pub use config::{ConfigError, SizingConfig};
pub use conversions::{cm_to_inches, inches_to_cm};
pub use recommendation_engine::{
    generate_recommendations, RecommendationEngine, RecommendationEngineTrait,
};
pub use synthesizer::{synthesize_measurements, MeasurementSource, MeasurementSynthesizer};
