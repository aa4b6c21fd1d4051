// ABOUTME: Recommendation message templates for fit advice
// ABOUTME: Four fixed-order sentences, the last parameterized by shoulder span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Recommendation Message Configuration

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the shoulder span value in `shoulder_width`
pub const SHOULDER_SPAN_PLACEHOLDER: &str = "{shoulder_span}";

/// Template messages for the four recommendation sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Sentence 1: chest/shoulder fit
    pub upper_body: String,
    /// Sentence 2: overall proportions
    pub proportions: String,
    /// Sentence 3: lower body garments
    pub lower_body: String,
    /// Sentence 4: shoulder width, contains `{shoulder_span}`
    pub shoulder_width: String,
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            upper_body: "Based on your upper body measurements, garments with a relaxed fit in the chest/shoulder area would provide optimal comfort.".to_owned(),
            proportions: "Your proportions suggest balanced dimensions. Consider clothing styles that maintain your natural silhouette.".to_owned(),
            lower_body: "For lower body garments, look for items that provide comfortable room while maintaining a streamlined appearance.".to_owned(),
            shoulder_width: "Consider tops with a shoulder width of approximately {shoulder_span} inches for the most comfortable fit.".to_owned(),
        }
    }
}
