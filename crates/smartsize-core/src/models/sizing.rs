// ABOUTME: Coarse sizing labels derived from body measurements
// ABOUTME: SizeCategory bands and FitType labels with their display strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

use serde::{Deserialize, Serialize};
use std::fmt;

/// General clothing size band from upper body width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    /// Extra small to small
    #[serde(rename = "XS-S")]
    ExtraSmallToSmall,
    /// Medium
    #[serde(rename = "M")]
    Medium,
    /// Large
    #[serde(rename = "L")]
    Large,
    /// Extra large and above
    #[serde(rename = "XL+")]
    ExtraLargePlus,
}

impl SizeCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraSmallToSmall => "XS-S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLargePlus => "XL+",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General garment cut suggested by the chest-to-waist difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitType {
    /// Large chest-to-waist difference
    #[serde(rename = "tapered fit")]
    Tapered,
    /// Moderate difference
    #[serde(rename = "regular fit")]
    Regular,
    /// Small or negative difference
    #[serde(rename = "relaxed fit")]
    Relaxed,
}

impl FitType {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tapered => "tapered fit",
            Self::Regular => "regular fit",
            Self::Relaxed => "relaxed fit",
        }
    }
}

impl fmt::Display for FitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
