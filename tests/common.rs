// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, temporary image files, and fixed measurement sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `smartsize`

use smartsize::image::ImageToken;
use smartsize::models::{MeasurementName, MeasurementSet};
use std::fs;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Create a placeholder image file; keep the returned dir alive while using the token
pub fn temp_image(file_name: &str) -> (TempDir, ImageToken) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(file_name);
    fs::write(&path, b"placeholder image bytes").expect("write image");
    let token = ImageToken::from_path(&path).expect("valid image token");
    (dir, token)
}

/// A set with every value at the lower bound of its interval, except the overrides
pub fn measurement_set(overrides: &[(MeasurementName, f64)]) -> MeasurementSet {
    MeasurementSet::from_fn(|name| {
        overrides
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(name.range().0, |(_, v)| *v)
    })
}
