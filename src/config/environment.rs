// ABOUTME: Environment configuration management for runtime settings
// ABOUTME: Parses latency, seed, export format, log level, and deployment mode from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Environment-based configuration

use serde::{Deserialize, Serialize};
use smartsize_core::constants::{env_vars, synthesis};
use smartsize_core::errors::{AppError, AppResult};
use smartsize_core::formatters::OutputFormat;
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level for the CLI subscriber (`RUST_LOG`, default `warn`)
    pub log_level: LogLevel,
    /// Simulated processing delay before results are shown
    pub processing_latency: Duration,
    /// Fixed RNG seed for reproducible measurements
    pub seed: Option<u64>,
    /// Default export format
    pub export_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::Warn,
            processing_latency: Duration::from_millis(synthesis::DEFAULT_PROCESSING_LATENCY_MS),
            seed: None,
            export_format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SMARTSIZE_PROCESSING_LATENCY_MS` or `SMARTSIZE_SEED`
    /// is set but not a non-negative integer
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let latency_ms = match env::var(env_vars::PROCESSING_LATENCY_MS) {
            Ok(raw) => parse_u64(env_vars::PROCESSING_LATENCY_MS, &raw)?,
            Err(_) => synthesis::DEFAULT_PROCESSING_LATENCY_MS,
        };

        let seed = match env::var(env_vars::SEED) {
            Ok(raw) => Some(parse_u64(env_vars::SEED, &raw)?),
            Err(_) => None,
        };

        Ok(Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "warn")),
            processing_latency: Duration::from_millis(latency_ms),
            seed,
            export_format: OutputFormat::from_str_param(&env_var_or(env_vars::EXPORT_FORMAT, "json")),
        })
    }
}

fn parse_u64(key: &str, raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::config(format!("Invalid {key} value: {raw}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
