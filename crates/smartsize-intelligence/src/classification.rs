// ABOUTME: Size category and fit label classification from body measurements
// ABOUTME: Piecewise band rules plus a SizeProfile summary with metric conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Sizing classification
//!
//! Independent pure rules over measurement values. They are not part of the
//! four recommendation sentences; `SizeProfile` bundles them into a separate
//! summary for display and export.

use serde::{Deserialize, Serialize};
use smartsize_core::models::{value_or_zero, FitType, Measurement, MeasurementName, SizeCategory};

use crate::config::{SizingConfig, SizingThresholds};
use crate::conversions::inches_to_cm;

/// Size band for an upper body width, using the default thresholds
///
/// Bands are half-open: exactly 38 is `M`, exactly 42 is `L`.
#[must_use]
pub fn size_category(upper_body_width: f64) -> SizeCategory {
    size_category_with(upper_body_width, &SizingThresholds::default())
}

/// Size band for an upper body width with explicit thresholds
#[must_use]
pub fn size_category_with(upper_body_width: f64, thresholds: &SizingThresholds) -> SizeCategory {
    if upper_body_width < thresholds.size_small_max {
        SizeCategory::ExtraSmallToSmall
    } else if upper_body_width < thresholds.size_medium_max {
        SizeCategory::Medium
    } else if upper_body_width < thresholds.size_large_max {
        SizeCategory::Large
    } else {
        SizeCategory::ExtraLargePlus
    }
}

/// Fit label from the chest-to-waist difference, using the default thresholds
#[must_use]
pub fn fit_recommendation(upper_body_width: f64, midsection: f64) -> FitType {
    fit_recommendation_with(upper_body_width, midsection, &SizingThresholds::default())
}

/// Fit label from the chest-to-waist difference with explicit thresholds
#[must_use]
pub fn fit_recommendation_with(
    upper_body_width: f64,
    midsection: f64,
    thresholds: &SizingThresholds,
) -> FitType {
    let difference = upper_body_width - midsection;

    if difference > thresholds.fit_tapered_min_diff {
        FitType::Tapered
    } else if difference > thresholds.fit_regular_min_diff {
        FitType::Regular
    } else {
        FitType::Relaxed
    }
}

/// One measurement shown in both units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricConversion {
    /// Which measurement
    pub name: MeasurementName,
    /// Value in inches
    pub inches: f64,
    /// Value in centimetres, one decimal
    pub centimeters: f64,
}

/// Coarse sizing summary for a measurement set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeProfile {
    /// Size band from upper body width
    pub size_category: SizeCategory,
    /// Fit label from upper body width and midsection
    pub fit: FitType,
    /// Every supplied measurement converted to centimetres
    pub conversions: Vec<MetricConversion>,
}

impl SizeProfile {
    /// Build a profile using the global sizing thresholds
    ///
    /// Missing Upper Body Width or Midsection entries count as `0`.
    #[must_use]
    pub fn from_measurements(measurements: &[Measurement]) -> Self {
        Self::from_measurements_with(measurements, &SizingConfig::global().thresholds)
    }

    /// Build a profile with explicit thresholds
    #[must_use]
    pub fn from_measurements_with(
        measurements: &[Measurement],
        thresholds: &SizingThresholds,
    ) -> Self {
        let upper_body_width = value_or_zero(measurements, MeasurementName::UpperBodyWidth);
        let midsection = value_or_zero(measurements, MeasurementName::Midsection);

        let conversions = measurements
            .iter()
            .map(|m| MetricConversion {
                name: m.name,
                inches: m.value,
                centimeters: inches_to_cm(m.value),
            })
            .collect();

        Self {
            size_category: size_category_with(upper_body_width, thresholds),
            fit: fit_recommendation_with(upper_body_width, midsection, thresholds),
            conversions,
        }
    }
}
