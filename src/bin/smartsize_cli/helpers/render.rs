// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Output formatting helpers for smartsize-cli
// ABOUTME: Prints the measurement table, numbered recommendations, and the size profile

use smartsize::constants::units::CENTIMETERS_LABEL;
use smartsize::intelligence::{inches_to_cm, SizeProfile};
use smartsize::models::{MeasurementSet, RecommendationSet};

/// Print each measurement as `label: value unit`, with an optional cm column
pub fn display_measurements(measurements: &MeasurementSet, metric: bool) {
    println!("\nYour Measurements");
    println!("{}", "=".repeat(50));
    for measurement in measurements {
        if metric {
            println!(
                "   {measurement} ({} {CENTIMETERS_LABEL})",
                inches_to_cm(measurement.value)
            );
        } else {
            println!("   {measurement}");
        }
        println!("      {}", measurement.description);
    }
}

/// Print the recommendations as a numbered list
pub fn display_recommendations(recommendations: &RecommendationSet) {
    println!("\nClothing Recommendations");
    println!("{}", "=".repeat(50));
    for (index, sentence) in recommendations.iter().enumerate() {
        println!("{}. {sentence}", index + 1);
    }
}

/// Print size category and fit label
pub fn display_size_profile(profile: &SizeProfile) {
    println!("\nSize Profile");
    println!("{}", "=".repeat(50));
    println!("   Size category: {}", profile.size_category);
    println!("   Fit: {}", profile.fit);
}
