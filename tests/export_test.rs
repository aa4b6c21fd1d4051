// ABOUTME: Integration tests for exporting and re-importing session results
// ABOUTME: Covers JSON file round trip, document shape, and rejection of invalid documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use common::temp_image;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use smartsize::errors::ErrorCode;
use smartsize::export::{read_export, write_export, MeasurementExport};
use smartsize::formatters::OutputFormat;
use smartsize::intelligence::MeasurementSynthesizer;
use smartsize::session::MeasurementSession;

async fn processed_session() -> MeasurementSession {
    let (_dir, image) = temp_image("export.jpg");
    let mut session = MeasurementSession::new(Duration::ZERO);
    session.select_image(image);
    let mut synthesizer = MeasurementSynthesizer::with_rng(ChaCha8Rng::seed_from_u64(21), 0);
    session.process(&mut synthesizer).await.unwrap();
    session
}

#[tokio::test]
async fn test_json_round_trip_preserves_results() {
    let session = processed_session().await;
    let export = MeasurementExport::from_session(&session).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("measurements.json");
    let written = write_export(&path, &export, OutputFormat::Json).await.unwrap();
    assert_eq!(written, path);

    let loaded = read_export(&path).await.unwrap();
    assert_eq!(loaded.session_id, session.id());
    assert_eq!(&loaded.measurements, session.measurements().unwrap());
    assert_eq!(&loaded.recommendations, session.recommendations().unwrap());
    assert_eq!(loaded.size_profile, export.size_profile);
}

#[tokio::test]
async fn test_document_shape() {
    let session = processed_session().await;
    let export = MeasurementExport::from_session(&session).unwrap();
    let rendered = export.render(OutputFormat::Json).unwrap();
    assert_eq!(rendered.content_type, "application/json");

    let doc: Value = serde_json::from_str(&rendered.data).unwrap();
    assert_eq!(doc["measurements"].as_array().unwrap().len(), 7);
    assert_eq!(doc["recommendations"].as_array().unwrap().len(), 4);
    assert_eq!(doc["measurements"][0]["name"], "Upper Body Width");
    assert_eq!(doc["measurements"][0]["unit"], "inches");
    assert!(doc["exported_at"].as_str().unwrap().contains('T'));
    assert!(doc["size_profile"]["size_category"].is_string());
}

#[tokio::test]
async fn test_export_requires_results() {
    let session = MeasurementSession::new(Duration::ZERO);
    let error = MeasurementExport::from_session(&session).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_invalid_documents_rejected() {
    let session = processed_session().await;
    let export = MeasurementExport::from_session(&session).unwrap();
    let json = export.render(OutputFormat::Json).unwrap().data;

    let mut missing_entry: Value = serde_json::from_str(&json).unwrap();
    missing_entry["measurements"].as_array_mut().unwrap().pop();
    let error = MeasurementExport::from_json(&missing_entry.to_string()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let mut negative: Value = serde_json::from_str(&json).unwrap();
    negative["measurements"][1]["value"] = Value::from(-3.0);
    assert!(MeasurementExport::from_json(&negative.to_string()).is_err());

    let mut three_sentences: Value = serde_json::from_str(&json).unwrap();
    three_sentences["recommendations"]
        .as_array_mut()
        .unwrap()
        .pop();
    assert!(MeasurementExport::from_json(&three_sentences.to_string()).is_err());

    assert!(MeasurementExport::from_json("not json").is_err());
}

#[tokio::test]
async fn test_import_rejects_centimetre_documents() {
    let session = processed_session().await;
    let export = MeasurementExport::from_session(&session).unwrap();
    let json = export.render(OutputFormat::Json).unwrap().data;

    let mut metric: Value = serde_json::from_str(&json).unwrap();
    for entry in metric["measurements"].as_array_mut().unwrap() {
        let inches = entry["value"].as_f64().unwrap();
        entry["value"] = Value::from(inches * 2.54);
        entry["unit"] = Value::from("cm");
    }
    let error = MeasurementExport::from_json(&metric.to_string()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_import_rejects_altered_descriptions() {
    let session = processed_session().await;
    let export = MeasurementExport::from_session(&session).unwrap();
    let json = export.render(OutputFormat::Json).unwrap().data;

    let mut relabelled: Value = serde_json::from_str(&json).unwrap();
    relabelled["measurements"][3]["description"] = Value::from("Neck circumference");
    let error = MeasurementExport::from_json(&relabelled.to_string()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("Shoulder Span"));
}

#[tokio::test]
async fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = read_export(dir.path().join("absent.json")).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}
