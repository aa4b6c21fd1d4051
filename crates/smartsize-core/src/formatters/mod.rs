// ABOUTME: Output format abstraction for serializing exports to multiple formats
// ABOUTME: Supports JSON (default) and TOON (token-efficient, behind the `toon` feature)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Output Format Abstraction Layer
//!
//! Pluggable serialization formats for measurement exports.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, universal compatibility, the only format that can be re-imported
//! - **TOON**: Token-Oriented Object Notation, compact and human-readable
//!
//! ## Usage
//!
//! ```rust,ignore
//! use smartsize_core::formatters::{OutputFormat, format_output};
//!
//! let output = format_output(&measurements, OutputFormat::Json)?;
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "toon" => Self::Toon,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Format serializable data to the specified output format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails (for JSON format)
/// - TOON encoding fails, or the `toon` feature is not enabled (for TOON format)
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format serializable data to pretty-printed output (for files and display)
///
/// # Errors
/// Returns `FormatError` under the same conditions as [`format_output`]
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        // TOON is already human-readable, use standard formatting
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON support is not enabled; rebuild with --features toon".to_owned(),
        format: OutputFormat::Toon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measurement, MeasurementName};

    #[test]
    fn test_format_from_str_param() {
        assert_eq!(OutputFormat::from_str_param("TOON"), OutputFormat::Toon);
        assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Json);
    }

    #[test]
    fn test_json_output_metadata() {
        let data = vec![Measurement::new(MeasurementName::ArmMeasurement, 24.0)];
        let output = format_output(&data, OutputFormat::Json);
        assert!(output.is_ok());
        if let Ok(output) = output {
            assert_eq!(output.content_type, "application/json");
            assert!(output.data.contains("\"Arm Measurement\""));
        }
    }

    #[cfg(not(feature = "toon"))]
    #[test]
    fn test_toon_requires_feature() {
        let result = format_output(&vec![1, 2, 3], OutputFormat::Toon);
        assert!(result.is_err());
    }
}
