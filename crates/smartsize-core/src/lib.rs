// ABOUTME: Core types and constants for the SmartSize measurement platform
// ABOUTME: Foundation crate with error handling, measurement models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

#![deny(unsafe_code)]

//! # SmartSize Core
//!
//! Foundation crate providing shared types and constants for SmartSize.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Measurement intervals, unit factors, and classification thresholds
//! - **models**: Measurement, measurement set, recommendation set, and sizing labels
//! - **formatters**: Output format abstraction (JSON, TOON) for exports

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Measurement, `MeasurementSet`, `RecommendationSet`, etc.)
pub mod models;

/// Output format abstraction (JSON, TOON) for export serialization
pub mod formatters;
