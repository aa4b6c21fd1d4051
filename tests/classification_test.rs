// ABOUTME: Integration tests for unit conversion, size categories, fit labels, and size profiles
// ABOUTME: Checks band edges, strict fit thresholds, monotonic conversion, and custom thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::measurement_set;
use smartsize::intelligence::classification::{fit_recommendation_with, size_category_with};
use smartsize::intelligence::config::SizingThresholds;
use smartsize::intelligence::{
    cm_to_inches, fit_recommendation, inches_to_cm, size_category, SizeProfile,
};
use smartsize::models::{FitType, Measurement, MeasurementName, SizeCategory};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_inches_to_cm_reference_values() {
    assert!(close(inches_to_cm(0.0), 0.0));
    assert!(close(inches_to_cm(10.0), 25.4));
    assert!(close(inches_to_cm(1.0), 2.5));
    assert!(close(cm_to_inches(25.4), 10.0));
}

#[test]
fn test_inches_to_cm_monotonic() {
    let mut previous = inches_to_cm(0.0);
    for step in 1..=600 {
        let current = inches_to_cm(f64::from(step) * 0.1);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_size_categories() {
    let cases = [
        (37.0, SizeCategory::ExtraSmallToSmall, "XS-S"),
        (38.0, SizeCategory::Medium, "M"),
        (41.9, SizeCategory::Medium, "M"),
        (42.0, SizeCategory::Large, "L"),
        (45.9, SizeCategory::Large, "L"),
        (46.0, SizeCategory::ExtraLargePlus, "XL+"),
    ];
    for (width, expected, label) in cases {
        let category = size_category(width);
        assert_eq!(category, expected, "width {width}");
        assert_eq!(category.to_string(), label);
    }
}

#[test]
fn test_fit_labels() {
    assert_eq!(fit_recommendation(50.0, 38.0).as_str(), "tapered fit");
    assert_eq!(fit_recommendation(45.0, 38.0).as_str(), "regular fit");
    assert_eq!(fit_recommendation(40.0, 38.0).as_str(), "relaxed fit");
    // thresholds are strict
    assert_eq!(fit_recommendation(48.0, 38.0), FitType::Regular);
    assert_eq!(fit_recommendation(44.0, 38.0), FitType::Relaxed);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = SizingThresholds {
        size_small_max: 36.0,
        size_medium_max: 40.0,
        size_large_max: 44.0,
        fit_tapered_min_diff: 8.0,
        fit_regular_min_diff: 4.0,
    };
    assert_eq!(size_category_with(37.0, &thresholds), SizeCategory::Medium);
    assert_eq!(size_category_with(44.0, &thresholds), SizeCategory::ExtraLargePlus);
    assert_eq!(fit_recommendation_with(47.0, 38.0, &thresholds), FitType::Tapered);
}

#[test]
fn test_size_profile_from_set() {
    let set = measurement_set(&[
        (MeasurementName::UpperBodyWidth, 44.0),
        (MeasurementName::Midsection, 32.0),
    ]);
    let profile = SizeProfile::from_measurements_with(set.as_slice(), &SizingThresholds::default());

    assert_eq!(profile.size_category, SizeCategory::Large);
    assert_eq!(profile.fit, FitType::Tapered);
    assert_eq!(profile.conversions.len(), 7);
    assert_eq!(profile.conversions[0].name, MeasurementName::UpperBodyWidth);
    assert!(close(profile.conversions[0].centimeters, 111.8));
}

#[test]
fn test_size_profile_missing_entries_default_to_zero() {
    let profile = SizeProfile::from_measurements_with(
        &[Measurement::new(MeasurementName::ShoulderSpan, 18.0)],
        &SizingThresholds::default(),
    );
    assert_eq!(profile.size_category, SizeCategory::ExtraSmallToSmall);
    assert_eq!(profile.fit, FitType::Relaxed);
    assert_eq!(profile.conversions.len(), 1);
}
