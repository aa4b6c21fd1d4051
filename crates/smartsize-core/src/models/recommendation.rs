// ABOUTME: Recommendation set model holding the four ordered advice sentences
// ABOUTME: Display order is meaningful and fixed at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

use serde::{Deserialize, Serialize};
use std::slice;

use crate::errors::ValidationError;

/// Number of sentences in every recommendation set
pub const RECOMMENDATION_COUNT: usize = 4;

/// Four advice sentences derived from one measurement set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RecommendationSet {
    sentences: Vec<String>,
}

impl RecommendationSet {
    /// Wrap four sentences in display order
    #[must_use]
    pub fn new(sentences: [String; RECOMMENDATION_COUNT]) -> Self {
        Self {
            sentences: sentences.into(),
        }
    }

    /// Sentences in display order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }

    /// Iterate sentences in display order
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.sentences.iter()
    }

    /// Always four
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Never true
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl TryFrom<Vec<String>> for RecommendationSet {
    type Error = ValidationError;

    fn try_from(sentences: Vec<String>) -> Result<Self, Self::Error> {
        let actual = sentences.len();
        let sentences: [String; RECOMMENDATION_COUNT] =
            sentences
                .try_into()
                .map_err(|_| ValidationError::WrongCount {
                    expected: RECOMMENDATION_COUNT,
                    actual,
                })?;
        Ok(Self::new(sentences))
    }
}

impl From<RecommendationSet> for Vec<String> {
    fn from(set: RecommendationSet) -> Self {
        set.sentences
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
