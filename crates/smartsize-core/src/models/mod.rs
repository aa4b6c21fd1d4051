// ABOUTME: Core data models for body measurements and fit recommendations
// ABOUTME: Re-exports measurement, recommendation, and sizing label types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! # Data Models
//!
//! Plain data types shared across the workspace. Construction rules live with
//! the types; the logic that fills them lives in `smartsize-intelligence`.

/// Named body measurements and the seven-entry measurement set
pub mod measurement;

/// Ordered recommendation sentences
pub mod recommendation;

/// Size category and fit labels
pub mod sizing;

pub use measurement::{
    value_or_zero, LengthUnit, Measurement, MeasurementName, MeasurementSet,
};
pub use recommendation::RecommendationSet;
pub use sizing::{FitType, SizeCategory};
