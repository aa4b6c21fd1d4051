// ABOUTME: Measurement export document and file round trip
// ABOUTME: Writes JSON or TOON through the formatters and re-imports validated JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Export and import of session results
//!
//! JSON is the interchange format: only JSON files can be read back. TOON
//! output is for people and requires the `toon` feature.

use crate::errors::{AppError, AppResult};
use crate::formatters::{format_output_pretty, FormattedOutput, OutputFormat};
use crate::intelligence::SizeProfile;
use crate::logging::AppLogger;
use crate::models::{MeasurementSet, RecommendationSet};
use crate::session::MeasurementSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Exported results of one processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementExport {
    /// Session that produced the results
    pub session_id: Uuid,
    /// When the export was taken (RFC 3339)
    pub exported_at: DateTime<Utc>,
    /// Seven measurements, validated on import
    pub measurements: MeasurementSet,
    /// Four recommendation sentences
    pub recommendations: RecommendationSet,
    /// Size category, fit, and metric conversions
    pub size_profile: SizeProfile,
}

impl MeasurementExport {
    /// Build an export from explicit parts, stamped now
    #[must_use]
    pub fn new(
        session_id: Uuid,
        measurements: MeasurementSet,
        recommendations: RecommendationSet,
    ) -> Self {
        let size_profile = SizeProfile::from_measurements(measurements.as_slice());
        Self {
            session_id,
            exported_at: Utc::now(),
            measurements,
            recommendations,
            size_profile,
        }
    }

    /// Snapshot a session's current results
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the session has not been processed
    pub fn from_session(session: &MeasurementSession) -> AppResult<Self> {
        match (session.measurements(), session.recommendations()) {
            (Some(measurements), Some(recommendations)) => Ok(Self::new(
                session.id(),
                measurements.clone(),
                recommendations.clone(),
            )),
            _ => Err(AppError::invalid_input(
                "nothing to export: process an image first",
            )),
        }
    }

    /// Serialize the document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the formatter fails
    pub fn render(&self, format: OutputFormat) -> AppResult<FormattedOutput> {
        Ok(format_output_pretty(self, format)?)
    }

    /// Parse and validate a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the JSON is malformed or the measurement
    /// set or recommendation list fails validation
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write an export to `path`
///
/// # Errors
///
/// Returns an error if serialization or the file write fails
pub async fn write_export(
    path: impl AsRef<Path>,
    export: &MeasurementExport,
    format: OutputFormat,
) -> AppResult<PathBuf> {
    let path = path.as_ref();
    let output = export.render(format)?;

    if let Err(e) = fs::write(path, output.data.as_bytes()).await {
        AppLogger::log_export(path, format.as_str(), false);
        return Err(
            AppError::storage(format!("failed to write {}", path.display())).with_source(e),
        );
    }

    AppLogger::log_export(path, format.as_str(), true);
    Ok(path.to_path_buf())
}

/// Read a JSON export back from `path`
///
/// # Errors
///
/// - `ResourceNotFound` if the file cannot be read
/// - `InvalidFormat` if the contents are not a valid export
pub async fn read_export(path: impl AsRef<Path>) -> AppResult<MeasurementExport> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::not_found(format!("export {}", path.display())).with_source(e))?;
    MeasurementExport::from_json(&contents)
}
