// ABOUTME: Unit tests for environment configuration and sizing configuration loading
// ABOUTME: Validates defaults, env overrides, parse failures, and threshold validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use serial_test::serial;
use smartsize::config::environment::{AppConfig, Environment, LogLevel};
use smartsize::constants::env_vars;
use smartsize::errors::ErrorCode;
use smartsize::formatters::OutputFormat;
use smartsize::intelligence::SizingConfig;

fn clear_app_env() {
    for key in [
        env_vars::PROCESSING_LATENCY_MS,
        env_vars::SEED,
        env_vars::EXPORT_FORMAT,
        "ENVIRONMENT",
        "RUST_LOG",
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_app_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.processing_latency, Duration::from_millis(3000));
    assert_eq!(config.seed, None);
    assert_eq!(config.export_format, OutputFormat::Json);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
#[serial]
fn test_app_config_overrides() {
    clear_app_env();
    env::set_var(env_vars::PROCESSING_LATENCY_MS, "0");
    env::set_var(env_vars::SEED, "1234");
    env::set_var(env_vars::EXPORT_FORMAT, "toon");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");

    let config = AppConfig::from_env().unwrap();
    assert!(config.processing_latency.is_zero());
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.export_format, OutputFormat::Toon);
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    clear_app_env();
}

#[test]
#[serial]
fn test_app_config_rejects_bad_numbers() {
    clear_app_env();
    env::set_var(env_vars::PROCESSING_LATENCY_MS, "soon");
    let error = AppConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert_eq!(error.exit_code(), 78);

    clear_app_env();
    env::set_var(env_vars::SEED, "-4");
    assert!(AppConfig::from_env().is_err());
    clear_app_env();
}

#[test]
#[serial]
fn test_sizing_config_env_overrides() {
    env::set_var(env_vars::SYNTH_PRECISION, "1");
    env::set_var(env_vars::SIZE_SMALL_MAX, "37");
    let config = SizingConfig::load().unwrap();
    assert_eq!(config.synthesis.precision, 1);
    assert!((config.thresholds.size_small_max - 37.0).abs() < f64::EPSILON);

    env::set_var(env_vars::SIZE_SMALL_MAX, "50");
    assert!(SizingConfig::load().is_err());

    env::set_var(env_vars::SIZE_SMALL_MAX, "wide");
    assert!(SizingConfig::load().is_err());

    env::remove_var(env_vars::SYNTH_PRECISION);
    env::remove_var(env_vars::SIZE_SMALL_MAX);
    assert!(SizingConfig::load().is_ok());
}
