// ABOUTME: Validation errors raised when constructing a measurement set from external data
// ABOUTME: Covers entry count, duplicate names, altered descriptions, and bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

use thiserror::Error;

use crate::models::MeasurementName;

/// Reasons a list of measurements cannot form a `MeasurementSet`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The set does not hold one entry per measurement name
    #[error("Expected {expected} measurements, found {actual}")]
    WrongCount {
        /// Number of entries a set must hold
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },

    /// A measurement name appears more than once
    #[error("Duplicate measurement: {name}")]
    DuplicateName {
        /// The repeated name
        name: MeasurementName,
    },

    /// Description does not match the canonical text for the name
    #[error("{name} has an unexpected description")]
    UnexpectedDescription {
        /// Offending measurement
        name: MeasurementName,
    },

    /// Measurement value below zero
    #[error("{name} must not be negative, got {value}")]
    NegativeValue {
        /// Offending measurement
        name: MeasurementName,
        /// Supplied value
        value: f64,
    },

    /// Measurement value is NaN or infinite
    #[error("{name} must be a finite number")]
    NonFiniteValue {
        /// Offending measurement
        name: MeasurementName,
    },
}
