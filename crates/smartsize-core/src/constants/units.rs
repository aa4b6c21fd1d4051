// ABOUTME: Unit conversion constants for length measurements
// ABOUTME: Inch/centimetre factor and display precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

/// Centimetres per inch (exact by definition)
pub const CM_PER_INCH: f64 = 2.54;

/// Decimal places kept after an inch/centimetre conversion
pub const CONVERSION_PRECISION: u32 = 1;

/// Label for inches, the unit of every synthesized measurement
pub const INCHES_LABEL: &str = "inches";

/// Label for centimetres
pub const CENTIMETERS_LABEL: &str = "cm";
