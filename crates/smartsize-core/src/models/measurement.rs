// ABOUTME: Body measurement models with the fixed seven-name enumeration
// ABOUTME: Measurement, MeasurementName, LengthUnit, and the validated MeasurementSet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::slice;
use std::str::FromStr;

use crate::constants::{measurement_ranges, units};
use crate::errors::ValidationError;

/// The seven body measurements SmartSize reports
///
/// Variant order is the display order of a `MeasurementSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeasurementName {
    /// Around the widest part of the upper body
    #[serde(rename = "Upper Body Width")]
    UpperBodyWidth,
    /// Around the narrowest part of the natural waistline
    #[serde(rename = "Midsection")]
    Midsection,
    /// Around the widest part of the lower body
    #[serde(rename = "Lower Body Width")]
    LowerBodyWidth,
    /// Across the back from shoulder point to shoulder point
    #[serde(rename = "Shoulder Span")]
    ShoulderSpan,
    /// Shoulder point to wrist
    #[serde(rename = "Arm Measurement")]
    ArmMeasurement,
    /// Base of the neck to the natural waistline
    #[serde(rename = "Torso Measurement")]
    TorsoMeasurement,
    /// Top of the leg to the ankle
    #[serde(rename = "Leg Measurement")]
    LegMeasurement,
}

impl MeasurementName {
    /// Every name in display order
    pub const ALL: [Self; 7] = [
        Self::UpperBodyWidth,
        Self::Midsection,
        Self::LowerBodyWidth,
        Self::ShoulderSpan,
        Self::ArmMeasurement,
        Self::TorsoMeasurement,
        Self::LegMeasurement,
    ];

    /// Human-readable label, also the serialized form
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UpperBodyWidth => "Upper Body Width",
            Self::Midsection => "Midsection",
            Self::LowerBodyWidth => "Lower Body Width",
            Self::ShoulderSpan => "Shoulder Span",
            Self::ArmMeasurement => "Arm Measurement",
            Self::TorsoMeasurement => "Torso Measurement",
            Self::LegMeasurement => "Leg Measurement",
        }
    }

    /// Static explanation of what is measured
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UpperBodyWidth => {
                "The horizontal measurement around the widest part of the upper body"
            }
            Self::Midsection => {
                "The horizontal measurement around the narrowest part of the natural waistline"
            }
            Self::LowerBodyWidth => {
                "The horizontal measurement around the widest part of the lower body"
            }
            Self::ShoulderSpan => {
                "The horizontal distance across the back from shoulder point to shoulder point"
            }
            Self::ArmMeasurement => "The length from shoulder point to wrist",
            Self::TorsoMeasurement => {
                "The vertical distance from the base of the neck to the natural waistline"
            }
            Self::LegMeasurement => "The vertical distance from the top of the leg to the ankle",
        }
    }

    /// Closed synthesis interval `(min, max)` in inches
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        match self {
            Self::UpperBodyWidth => measurement_ranges::UPPER_BODY_WIDTH,
            Self::Midsection => measurement_ranges::MIDSECTION,
            Self::LowerBodyWidth => measurement_ranges::LOWER_BODY_WIDTH,
            Self::ShoulderSpan => measurement_ranges::SHOULDER_SPAN,
            Self::ArmMeasurement => measurement_ranges::ARM_MEASUREMENT,
            Self::TorsoMeasurement => measurement_ranges::TORSO_MEASUREMENT,
            Self::LegMeasurement => measurement_ranges::LEG_MEASUREMENT,
        }
    }

    /// Whether `value` lies inside the synthesis interval
    #[must_use]
    pub fn in_range(&self, value: f64) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }
}

impl fmt::Display for MeasurementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MeasurementName {
    type Err = String;

    /// Parse a label case-insensitively ("shoulder span", "Shoulder Span")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown measurement name: {wanted}"))
    }
}

/// Unit attached to a measurement value
///
/// Measurements are stored in inches only; centimetres exist solely as a
/// derived display column, so a document labelled with any other unit fails
/// to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Inches, the unit of every measurement
    #[default]
    #[serde(rename = "inches")]
    Inches,
}

impl LengthUnit {
    /// Unit label appended at render time
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inches => units::INCHES_LABEL,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named physical quantity
///
/// The value is stored as a plain number; the unit label is appended only
/// when rendering.
///
/// # Examples
///
/// ```rust
/// use smartsize_core::models::{LengthUnit, Measurement, MeasurementName};
///
/// let span = Measurement::new(MeasurementName::ShoulderSpan, 18.0);
/// assert_eq!(span.unit, LengthUnit::Inches);
/// assert_eq!(span.to_string(), "Shoulder Span: 18 inches");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Which measurement this is
    pub name: MeasurementName,
    /// Non-negative magnitude
    pub value: f64,
    /// Unit label
    pub unit: LengthUnit,
    /// Explanation of what is measured
    pub description: String,
}

impl Measurement {
    /// Build a measurement in inches with the canonical description for `name`
    #[must_use]
    pub fn new(name: MeasurementName, value: f64) -> Self {
        Self {
            name,
            value,
            unit: LengthUnit::Inches,
            description: name.description().to_owned(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.value, self.unit)
    }
}

/// Look up a value by name, falling back to `0.0` when absent or not finite
///
/// Recommendation and profile generation use this lenient default instead of
/// failing on partial input.
#[must_use]
pub fn value_or_zero(measurements: &[Measurement], name: MeasurementName) -> f64 {
    measurements
        .iter()
        .find(|m| m.name == name)
        .map(|m| m.value)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Exactly seven measurements, one per `MeasurementName`, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Measurement>", into = "Vec<Measurement>")]
pub struct MeasurementSet {
    entries: Vec<Measurement>,
}

impl MeasurementSet {
    /// Validate and order a list of measurements
    ///
    /// Entries are reordered into display order. Values outside the synthesis
    /// intervals are accepted; negative and non-finite values are not.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the list does not hold exactly one entry per
    /// name, if a description differs from the canonical text for its name,
    /// or if any value is negative, NaN, or infinite.
    pub fn new(mut entries: Vec<Measurement>) -> Result<Self, ValidationError> {
        if entries.len() != MeasurementName::ALL.len() {
            return Err(ValidationError::WrongCount {
                expected: MeasurementName::ALL.len(),
                actual: entries.len(),
            });
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name) {
                return Err(ValidationError::DuplicateName { name: entry.name });
            }
            if !entry.value.is_finite() {
                return Err(ValidationError::NonFiniteValue { name: entry.name });
            }
            if entry.description != entry.name.description() {
                return Err(ValidationError::UnexpectedDescription { name: entry.name });
            }
            if entry.value < 0.0 {
                return Err(ValidationError::NegativeValue {
                    name: entry.name,
                    value: entry.value,
                });
            }
        }

        entries.sort_by_key(|m| m.name);
        Ok(Self { entries })
    }

    /// Build a set by asking `value_for` for each name in display order
    ///
    /// The caller is responsible for returning non-negative finite values.
    pub fn from_fn(mut value_for: impl FnMut(MeasurementName) -> f64) -> Self {
        let entries = MeasurementName::ALL
            .into_iter()
            .map(|name| Measurement::new(name, value_for(name)))
            .collect();
        Self { entries }
    }

    /// Entry for `name`
    #[must_use]
    pub fn get(&self, name: MeasurementName) -> Option<&Measurement> {
        self.entries.iter().find(|m| m.name == name)
    }

    /// Value for `name`
    #[must_use]
    pub fn value(&self, name: MeasurementName) -> Option<f64> {
        self.get(name).map(|m| m.value)
    }

    /// Entries in display order
    #[must_use]
    pub fn as_slice(&self) -> &[Measurement] {
        &self.entries
    }

    /// Iterate entries in display order
    pub fn iter(&self) -> slice::Iter<'_, Measurement> {
        self.entries.iter()
    }

    /// Always seven for a valid set
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a valid set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<Measurement>> for MeasurementSet {
    type Error = ValidationError;

    fn try_from(entries: Vec<Measurement>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<MeasurementSet> for Vec<Measurement> {
    fn from(set: MeasurementSet) -> Self {
        set.entries
    }
}

impl AsRef<[Measurement]> for MeasurementSet {
    fn as_ref(&self) -> &[Measurement] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a MeasurementSet {
    type Item = &'a Measurement;
    type IntoIter = slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entries() -> Vec<Measurement> {
        MeasurementName::ALL
            .into_iter()
            .map(|name| Measurement::new(name, name.range().0))
            .collect()
    }

    #[test]
    fn test_name_labels_round_trip() {
        for name in MeasurementName::ALL {
            assert_eq!(name.label().parse::<MeasurementName>(), Ok(name));
        }
        assert_eq!(
            "shoulder span".parse::<MeasurementName>(),
            Ok(MeasurementName::ShoulderSpan)
        );
        assert!("Neck".parse::<MeasurementName>().is_err());
    }

    #[test]
    fn test_new_reorders_into_display_order() {
        let mut entries = full_entries();
        entries.reverse();
        let set = MeasurementSet::new(entries);
        assert!(set.is_ok());
        let names: Vec<_> = set.iter().flat_map(|s| s.iter()).map(|m| m.name).collect();
        assert_eq!(names, MeasurementName::ALL.to_vec());
    }

    #[test]
    fn test_new_rejects_duplicates_and_bad_values() {
        let mut entries = full_entries();
        entries[6] = Measurement::new(MeasurementName::Midsection, 30.0);
        assert_eq!(
            MeasurementSet::new(entries),
            Err(ValidationError::DuplicateName {
                name: MeasurementName::Midsection
            })
        );

        let mut entries = full_entries();
        entries[0].value = -2.0;
        assert!(matches!(
            MeasurementSet::new(entries),
            Err(ValidationError::NegativeValue { .. })
        ));

        let mut entries = full_entries();
        entries[3].value = f64::NAN;
        assert!(matches!(
            MeasurementSet::new(entries),
            Err(ValidationError::NonFiniteValue { .. })
        ));

        assert_eq!(
            MeasurementSet::new(full_entries()[..3].to_vec()),
            Err(ValidationError::WrongCount {
                expected: 7,
                actual: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_altered_description() {
        let mut entries = full_entries();
        entries[2].description = "Hip circumference".to_owned();
        assert_eq!(
            MeasurementSet::new(entries),
            Err(ValidationError::UnexpectedDescription {
                name: MeasurementName::LowerBodyWidth
            })
        );
    }

    #[test]
    fn test_unit_only_accepts_inches() {
        assert!(serde_json::from_str::<LengthUnit>("\"inches\"").is_ok());
        assert!(serde_json::from_str::<LengthUnit>("\"cm\"").is_err());
    }

    #[test]
    fn test_value_or_zero_treats_nan_as_zero() {
        let partial = vec![Measurement::new(MeasurementName::ShoulderSpan, f64::NAN)];
        assert!(value_or_zero(&partial, MeasurementName::ShoulderSpan).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_or_zero_defaults_missing_entries() {
        let partial = vec![Measurement::new(MeasurementName::ShoulderSpan, 17.0)];
        assert!((value_or_zero(&partial, MeasurementName::ShoulderSpan) - 17.0).abs() < f64::EPSILON);
        assert!(value_or_zero(&partial, MeasurementName::Midsection).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measurement_serializes_with_labels() {
        let json = serde_json::to_value(Measurement::new(MeasurementName::LegMeasurement, 30.0))
            .unwrap_or_default();
        assert_eq!(json["name"], "Leg Measurement");
        assert_eq!(json["unit"], "inches");
        assert_eq!(json["value"], 30.0);
    }
}
