// ABOUTME: Clothing-fit recommendation engine turning measurements into advice text
// ABOUTME: Produces four fixed-order sentences, the last one parameterized by shoulder span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Fit recommendation engine
//!
//! Sentences 1-3 are template text; only sentence 4 depends on the data.
//! Upper Body Width, Midsection, and Lower Body Width are extracted alongside
//! Shoulder Span but do not shape the text. Missing entries count as `0`.

use smartsize_core::models::{value_or_zero, Measurement, MeasurementName, RecommendationSet};
use tracing::debug;

use crate::config::recommendation::SHOULDER_SPAN_PLACEHOLDER;
use crate::config::{RecommendationMessages, SizingConfig};

/// Trait for generating fit recommendations
pub trait RecommendationEngineTrait {
    /// Generate the four recommendation sentences for a set of measurements
    fn generate_recommendations(&self, measurements: &[Measurement]) -> RecommendationSet;
}

/// Values the engine reads from a measurement set
#[derive(Debug, Clone, Copy)]
struct FitInputs {
    upper_body_width: f64,
    midsection: f64,
    lower_body_width: f64,
    shoulder_span: f64,
}

impl FitInputs {
    fn extract(measurements: &[Measurement]) -> Self {
        Self {
            upper_body_width: value_or_zero(measurements, MeasurementName::UpperBodyWidth),
            midsection: value_or_zero(measurements, MeasurementName::Midsection),
            lower_body_width: value_or_zero(measurements, MeasurementName::LowerBodyWidth),
            shoulder_span: value_or_zero(measurements, MeasurementName::ShoulderSpan),
        }
    }
}

/// Template-driven recommendation engine
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    messages: RecommendationMessages,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the globally configured messages
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: SizingConfig::global().messages.clone(),
        }
    }

    /// Create an engine with custom message templates
    #[must_use]
    pub const fn with_messages(messages: RecommendationMessages) -> Self {
        Self { messages }
    }

    /// Message templates in use
    #[must_use]
    pub const fn messages(&self) -> &RecommendationMessages {
        &self.messages
    }

    fn shoulder_width_sentence(&self, shoulder_span: f64) -> String {
        // f64 Display prints whole numbers without a trailing ".0"
        self.messages
            .shoulder_width
            .replace(SHOULDER_SPAN_PLACEHOLDER, &shoulder_span.to_string())
    }
}

impl RecommendationEngineTrait for RecommendationEngine {
    fn generate_recommendations(&self, measurements: &[Measurement]) -> RecommendationSet {
        let inputs = FitInputs::extract(measurements);
        debug!(
            upper_body_width = inputs.upper_body_width,
            midsection = inputs.midsection,
            lower_body_width = inputs.lower_body_width,
            shoulder_span = inputs.shoulder_span,
            "Generating fit recommendations"
        );

        RecommendationSet::new([
            self.messages.upper_body.clone(),
            self.messages.proportions.clone(),
            self.messages.lower_body.clone(),
            self.shoulder_width_sentence(inputs.shoulder_span),
        ])
    }
}

/// Generate recommendations with the default message templates
#[must_use]
pub fn generate_recommendations(measurements: &[Measurement]) -> RecommendationSet {
    RecommendationEngine::with_messages(RecommendationMessages::default())
        .generate_recommendations(measurements)
}
