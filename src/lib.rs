// ABOUTME: Main library entry point for the SmartSize measurement demo
// ABOUTME: Wires the sizing core into a session, image selection, export, logging, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

#![deny(unsafe_code)]

//! # SmartSize
//!
//! Upload a photo, receive body measurements and clothing-fit suggestions.
//! There is no computer vision: the photo only gates when measurements are
//! synthesized, and the values are random within plausible ranges.
//!
//! ## Architecture
//!
//! - **smartsize-core**: errors, constants, models, formatters
//! - **smartsize-intelligence**: synthesizer, recommendation engine, classification
//! - **session**: the explicit per-session state (selected image, results, active tab)
//! - **export**: measurement export and re-import
//! - **config / logging**: environment configuration and tracing setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smartsize::config::environment::AppConfig;
//! use smartsize::errors::AppResult;
//! use smartsize::image::ImageToken;
//! use smartsize::session::MeasurementSession;
//! use smartsize::intelligence::MeasurementSynthesizer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let mut session = MeasurementSession::new(config.processing_latency);
//!     session.select_image(ImageToken::from_path("photo.jpg")?);
//!
//!     let mut synthesizer = MeasurementSynthesizer::from_entropy();
//!     session.process(&mut synthesizer).await?;
//!
//!     if let Some(recommendations) = session.recommendations() {
//!         for sentence in recommendations {
//!             println!("{sentence}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

/// Unified error types (re-exported from `smartsize-core`)
pub use smartsize_core::errors;

/// Application constants (re-exported from `smartsize-core`)
pub use smartsize_core::constants;

/// Measurement and recommendation models (re-exported from `smartsize-core`)
pub use smartsize_core::models;

/// Output formatters (re-exported from `smartsize-core`)
pub use smartsize_core::formatters;

/// Synthesis, recommendation, and classification engine
pub use smartsize_intelligence as intelligence;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Opaque handle for the selected photo
pub mod image;

/// Per-session measurement state
pub mod session;

/// Measurement export and import
pub mod export;
