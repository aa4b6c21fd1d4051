// ABOUTME: Logging configuration and structured logging setup for the SmartSize CLI
// ABOUTME: Configures log levels and formatters, writing to stderr so stdout stays clean for output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Structured logging configuration

use crate::config::environment::LogLevel;
use crate::constants::service_names;
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::subscriber::set_global_default;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};
use uuid::Uuid;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level, taken from `AppConfig::log_level`
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::SMARTSIZE_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from the output-shaping environment variables
    ///
    /// The level is not read here; pass `AppConfig::log_level` to [`Self::with_level`].
    #[must_use]
    pub fn from_env() -> Self {
        let format = LogFormat::from_str_or_default(&env::var("LOG_FORMAT").unwrap_or_default());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::SMARTSIZE_CLI.into()),
            environment,
            ..Self::default()
        }
    }

    /// Set the level, as the CLI does from `AppConfig` or `--verbose`
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::default().add_directive(self.level.to_tracing_level().into())
    }

    /// Build the subscriber for the configured format without installing it
    #[must_use]
    pub fn subscriber(&self) -> Box<dyn Subscriber + Send + Sync> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => Box::new(
                registry.with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                ),
            ),
            LogFormat::Pretty => Box::new(
                registry.with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                ),
            ),
            LogFormat::Compact => Box::new(
                registry.with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                ),
            ),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        set_global_default(self.subscriber())?;
        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "SmartSize starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level.to_string(),
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log an image selection
    pub fn log_image_selected(session_id: Uuid, file_name: &str) {
        info!(
            session.id = %session_id,
            image.file_name = %file_name,
            "Image selected"
        );
    }

    /// Log the start of measurement processing
    pub fn log_processing_started(session_id: Uuid, latency: Duration) {
        info!(
            session.id = %session_id,
            processing.latency_ms = %latency.as_millis(),
            "Processing started"
        );
    }

    /// Log completed processing
    pub fn log_processing_completed(
        session_id: Uuid,
        measurement_count: usize,
        recommendation_count: usize,
    ) {
        info!(
            session.id = %session_id,
            results.measurements = measurement_count,
            results.recommendations = recommendation_count,
            "Processing completed"
        );
    }

    /// Log a session reset
    pub fn log_session_reset(session_id: Uuid) {
        info!(session.id = %session_id, "Session reset");
    }

    /// Log an export write or failure
    pub fn log_export(path: &Path, format: &str, success: bool) {
        if success {
            info!(
                export.path = %path.display(),
                export.format = %format,
                "Measurements exported"
            );
        } else {
            warn!(
                export.path = %path.display(),
                export.format = %format,
                "Measurement export failed"
            );
        }
    }
}
