// ABOUTME: Per-session measurement state: selected image, results, and active tab
// ABOUTME: Processing awaits a configurable latency, then synthesizes and recommends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Measurement session
//!
//! One session corresponds to one user working through upload then results.
//! State is owned by the session value; nothing is kept process-wide.

use crate::errors::{AppError, AppResult};
use crate::image::ImageToken;
use crate::intelligence::{
    MeasurementSource, RecommendationEngine, RecommendationEngineTrait, SizeProfile,
};
use crate::logging::AppLogger;
use crate::models::{MeasurementSet, RecommendationSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

/// Which view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    /// Photo selection (initial)
    #[default]
    Upload,
    /// Measurements and recommendations
    Results,
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload => write!(f, "upload"),
            Self::Results => write!(f, "results"),
        }
    }
}

/// Explicit session state
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    id: Uuid,
    image: Option<ImageToken>,
    measurements: Option<MeasurementSet>,
    recommendations: Option<RecommendationSet>,
    active_tab: ActiveTab,
    processing: bool,
    latency: Duration,
    engine: RecommendationEngine,
}

impl MeasurementSession {
    /// Start a session with the given processing latency
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_engine(latency, RecommendationEngine::new())
    }

    /// Start a session with a specific recommendation engine
    #[must_use]
    pub fn with_engine(latency: Duration, engine: RecommendationEngine) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: None,
            measurements: None,
            recommendations: None,
            active_tab: ActiveTab::Upload,
            processing: false,
            latency,
            engine,
        }
    }

    /// Store the selected image; earlier results are kept
    pub fn select_image(&mut self, image: ImageToken) {
        AppLogger::log_image_selected(self.id, image.file_name());
        self.image = Some(image);
    }

    /// Wait out the latency, then produce measurements and recommendations
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no image has been selected
    pub async fn process<S>(&mut self, source: &mut S) -> AppResult<()>
    where
        S: MeasurementSource + ?Sized,
    {
        if self.image.is_none() {
            return Err(AppError::invalid_input(
                "select an image before processing",
            ));
        }

        let _flag = ProcessingFlag::raise(&mut self.processing);
        AppLogger::log_processing_started(self.id, self.latency);
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        let measurements = source.synthesize();
        let recommendations = self
            .engine
            .generate_recommendations(measurements.as_slice());

        AppLogger::log_processing_completed(self.id, measurements.len(), recommendations.len());
        self.measurements = Some(measurements);
        self.recommendations = Some(recommendations);
        self.active_tab = ActiveTab::Results;
        Ok(())
    }

    /// Results tab is enabled only once measurements exist
    #[must_use]
    pub const fn results_available(&self) -> bool {
        self.measurements.is_some()
    }

    /// Back to the initial state; the session id is kept
    pub fn reset(&mut self) {
        AppLogger::log_session_reset(self.id);
        self.image = None;
        self.measurements = None;
        self.recommendations = None;
        self.active_tab = ActiveTab::Upload;
        self.processing = false;
    }

    /// Switch views; `Results` is refused until results exist
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when selecting `Results` with no measurements
    pub fn set_active_tab(&mut self, tab: ActiveTab) -> AppResult<()> {
        if tab == ActiveTab::Results && !self.results_available() {
            return Err(AppError::invalid_input("no results to show yet"));
        }
        self.active_tab = tab;
        Ok(())
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Selected image, if any
    #[must_use]
    pub const fn image(&self) -> Option<&ImageToken> {
        self.image.as_ref()
    }

    /// Measurements from the last processing run
    #[must_use]
    pub const fn measurements(&self) -> Option<&MeasurementSet> {
        self.measurements.as_ref()
    }

    /// Recommendations from the last processing run
    #[must_use]
    pub const fn recommendations(&self) -> Option<&RecommendationSet> {
        self.recommendations.as_ref()
    }

    /// Size profile for the current measurements
    #[must_use]
    pub fn size_profile(&self) -> Option<SizeProfile> {
        self.measurements
            .as_ref()
            .map(|set| SizeProfile::from_measurements(set.as_slice()))
    }

    /// Current view
    #[must_use]
    pub const fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    /// Whether a processing run is in flight
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// Configured processing latency
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

/// Holds `processing` high until dropped, including when `process` is cancelled mid-wait
struct ProcessingFlag<'a>(&'a mut bool);

impl<'a> ProcessingFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for ProcessingFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_upload() {
        let session = MeasurementSession::new(Duration::ZERO);
        assert_eq!(session.active_tab(), ActiveTab::Upload);
        assert!(!session.results_available());
        assert!(!session.is_processing());
        assert!(session.image().is_none());
    }

    #[test]
    fn test_results_tab_locked_without_results() {
        let mut session = MeasurementSession::new(Duration::ZERO);
        assert!(session.set_active_tab(ActiveTab::Results).is_err());
        assert!(session.set_active_tab(ActiveTab::Upload).is_ok());
    }

    #[test]
    fn test_processing_flag_lowers_on_drop() {
        let mut processing = false;
        {
            let flag = ProcessingFlag::raise(&mut processing);
            assert!(*flag.0);
        }
        assert!(!processing);
    }
}
