// ABOUTME: Unified error handling with standard error codes and process exit mapping
// ABOUTME: Defines AppError, ErrorCode, and AppResult shared by every SmartSize crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! # Unified Error Handling System
//!
//! Centralized error handling for SmartSize. Core sizing operations never fail;
//! errors arise only at the edges (configuration, image selection, export files,
//! validation of imported measurement sets).

/// Validation errors for the measurement set constructor path
pub mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::formatters::FormatError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed basic validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Data is not in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested file or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Generic configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading or writing a file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for this error (sysexits-style)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // EX_DATAERR
            Self::InvalidInput
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 65,

            // EX_NOINPUT
            Self::ResourceNotFound => 66,

            // EX_CONFIG
            Self::ConfigError | Self::ConfigInvalid => 78,

            // EX_IOERR
            Self::StorageError | Self::SerializationError => 74,

            // EX_SOFTWARE
            Self::InternalError => 70,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// File read/write failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::NegativeValue { .. } | ValidationError::NonFiniteValue { .. } => {
                ErrorCode::ValueOutOfRange
            }
            ValidationError::WrongCount { .. }
            | ValidationError::DuplicateName { .. }
            | ValidationError::UnexpectedDescription { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeasurementName;

    #[test]
    fn test_error_code_exit_code() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 66);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::InternalError.exit_code(), 70);
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::not_found("Image photo.png");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Image photo.png not found"
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let error: AppError = ValidationError::NegativeValue {
            name: MeasurementName::Midsection,
            value: -1.0,
        }
        .into();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.source.is_some());

        let error: AppError = ValidationError::WrongCount {
            expected: 7,
            actual: 3,
        }
        .into();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::SerializationError).unwrap_or_default();
        assert_eq!(json, "\"SERIALIZATION_ERROR\"");
    }
}
