// ABOUTME: Measurement synthesizer producing bounded random body measurements
// ABOUTME: Seven fixed-order entries drawn uniformly per interval and rounded to precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Measurement synthesis
//!
//! Values are fabricated: nothing is derived from the uploaded image. Each
//! entry is a uniform draw inside its name's closed interval, rounded with
//! [`round_half_up`] to the configured precision (0 by default, so every value
//! is a whole number).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smartsize_core::models::MeasurementSet;
use tracing::debug;

use crate::config::SizingConfig;
use crate::conversions::round_half_up;

/// Anything that can produce a measurement set
///
/// The synthesizer is the only implementation; a real vision pipeline would
/// plug in here.
pub trait MeasurementSource {
    /// Produce a fresh measurement set
    fn synthesize(&mut self) -> MeasurementSet;
}

/// Random measurement generator
pub struct MeasurementSynthesizer<R: Rng = ChaCha8Rng> {
    rng: R,
    precision: u32,
}

impl MeasurementSynthesizer<ChaCha8Rng> {
    /// Synthesizer seeded from OS entropy, precision from the global config
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(
            ChaCha8Rng::from_entropy(),
            SizingConfig::global().synthesis.precision,
        )
    }

    /// Reproducible synthesizer: the same seed yields the same sequence of sets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(
            ChaCha8Rng::seed_from_u64(seed),
            SizingConfig::global().synthesis.precision,
        )
    }
}

impl<R: Rng> MeasurementSynthesizer<R> {
    /// Synthesizer over any RNG with an explicit precision
    pub const fn with_rng(rng: R, precision: u32) -> Self {
        Self { rng, precision }
    }

    /// Decimal places applied to generated values
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Generate a measurement set in display order
    pub fn synthesize(&mut self) -> MeasurementSet {
        let precision = self.precision;
        let rng = &mut self.rng;
        let set = MeasurementSet::from_fn(|name| {
            let (min, max) = name.range();
            random_value(&mut *rng, min, max, precision)
        });

        debug!(
            values = ?set.iter().map(|m| m.value).collect::<Vec<_>>(),
            precision,
            "Synthesized measurement set"
        );
        set
    }
}

impl<R: Rng> MeasurementSource for MeasurementSynthesizer<R> {
    fn synthesize(&mut self) -> MeasurementSet {
        Self::synthesize(self)
    }
}

/// Uniform draw in `[min, max]` rounded to `precision` decimals
///
/// Callers must pass `min <= max`.
pub fn random_value<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, precision: u32) -> f64 {
    let raw = rng.gen_range(min..=max);
    round_half_up(raw, precision)
}

/// Generate a measurement set from fresh entropy
#[must_use]
pub fn synthesize_measurements() -> MeasurementSet {
    MeasurementSynthesizer::from_entropy().synthesize()
}
