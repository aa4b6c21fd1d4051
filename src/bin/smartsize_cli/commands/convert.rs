// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Convert command: inches to centimetres at one decimal
// ABOUTME: Negative input is passed through unchanged in sign

use smartsize::constants::units::{CENTIMETERS_LABEL, INCHES_LABEL};
use smartsize::intelligence::inches_to_cm;

pub fn run(inches: f64) {
    println!(
        "{inches} {INCHES_LABEL} = {} {CENTIMETERS_LABEL}",
        inches_to_cm(inches)
    );
}
