// ABOUTME: Static registry mapping semantic health data kinds to vendor type/field pairs
// ABOUTME: The closed vocabulary every bridge request must resolve through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Type Registry
//!
//! The bridge exposes a stable, vendor-independent vocabulary of health
//! data kinds. Each kind resolves to exactly one vendor (record type,
//! field) pair, fixed at compile time. The three sleep kinds share one
//! vendor record type and are told apart downstream by segment filtering;
//! `Workout` resolves to the activity-segment type and pulls calorie and
//! distance record types in at read time.
//!
//! Unknown keys are a caller bug and fail hard with
//! [`BridgeError::UnknownKind`] - there is no silent default.

mod activities;

pub use activities::{
    activity_key_for_vendor, vendor_activity_for_key, ACTIVITY_CATALOG, ACTIVITY_KEY_OTHER,
    VENDOR_ACTIVITY_UNKNOWN,
};

use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, BridgeResult};

/// Semantic health data kinds understood by the bridge.
///
/// This is a closed set; the bridge wire protocol addresses kinds by their
/// SCREAMING_SNAKE_CASE key (see [`HealthDataKind::from_key`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthDataKind {
    /// Active calories burned.
    ActiveEnergyBurned,
    /// Blood glucose level, exposed in mg/dL.
    BloodGlucose,
    /// Blood oxygen saturation percentage.
    BloodOxygen,
    /// Diastolic blood pressure.
    BloodPressureDiastolic,
    /// Systolic blood pressure.
    BloodPressureSystolic,
    /// Body fat percentage.
    BodyFatPercentage,
    /// Body temperature.
    BodyTemperature,
    /// Distance covered, in meters.
    DistanceDelta,
    /// Heart rate in beats per minute.
    HeartRate,
    /// Body height.
    Height,
    /// Vendor "move minutes" activity duration.
    MoveMinutes,
    /// Sleep session time, reported per whole session.
    SleepAsleep,
    /// Awake intervals inside a sleep session.
    SleepAwake,
    /// Time in bed, from sleep sub-segments when present.
    SleepInBed,
    /// Step count delta.
    Steps,
    /// Water intake volume.
    Water,
    /// Body weight.
    Weight,
    /// Workout sessions with energy and distance totals.
    Workout,
}

impl HealthDataKind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 18] = [
        Self::ActiveEnergyBurned,
        Self::BloodGlucose,
        Self::BloodOxygen,
        Self::BloodPressureDiastolic,
        Self::BloodPressureSystolic,
        Self::BodyFatPercentage,
        Self::BodyTemperature,
        Self::DistanceDelta,
        Self::HeartRate,
        Self::Height,
        Self::MoveMinutes,
        Self::SleepAsleep,
        Self::SleepAwake,
        Self::SleepInBed,
        Self::Steps,
        Self::Water,
        Self::Weight,
        Self::Workout,
    ];

    /// Parse a wire key into a kind.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::UnknownKind`] for any key outside the closed
    /// set.
    pub fn from_key(key: &str) -> BridgeResult<Self> {
        match key {
            "ACTIVE_ENERGY_BURNED" => Ok(Self::ActiveEnergyBurned),
            "BLOOD_GLUCOSE" => Ok(Self::BloodGlucose),
            "BLOOD_OXYGEN" => Ok(Self::BloodOxygen),
            "BLOOD_PRESSURE_DIASTOLIC" => Ok(Self::BloodPressureDiastolic),
            "BLOOD_PRESSURE_SYSTOLIC" => Ok(Self::BloodPressureSystolic),
            "BODY_FAT_PERCENTAGE" => Ok(Self::BodyFatPercentage),
            "BODY_TEMPERATURE" => Ok(Self::BodyTemperature),
            "DISTANCE_DELTA" => Ok(Self::DistanceDelta),
            "HEART_RATE" => Ok(Self::HeartRate),
            "HEIGHT" => Ok(Self::Height),
            "MOVE_MINUTES" => Ok(Self::MoveMinutes),
            "SLEEP_ASLEEP" => Ok(Self::SleepAsleep),
            "SLEEP_AWAKE" => Ok(Self::SleepAwake),
            "SLEEP_IN_BED" => Ok(Self::SleepInBed),
            "STEPS" => Ok(Self::Steps),
            "WATER" => Ok(Self::Water),
            "WEIGHT" => Ok(Self::Weight),
            "WORKOUT" => Ok(Self::Workout),
            other => Err(BridgeError::UnknownKind(other.to_owned())),
        }
    }

    /// The wire key for this kind.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ActiveEnergyBurned => "ACTIVE_ENERGY_BURNED",
            Self::BloodGlucose => "BLOOD_GLUCOSE",
            Self::BloodOxygen => "BLOOD_OXYGEN",
            Self::BloodPressureDiastolic => "BLOOD_PRESSURE_DIASTOLIC",
            Self::BloodPressureSystolic => "BLOOD_PRESSURE_SYSTOLIC",
            Self::BodyFatPercentage => "BODY_FAT_PERCENTAGE",
            Self::BodyTemperature => "BODY_TEMPERATURE",
            Self::DistanceDelta => "DISTANCE_DELTA",
            Self::HeartRate => "HEART_RATE",
            Self::Height => "HEIGHT",
            Self::MoveMinutes => "MOVE_MINUTES",
            Self::SleepAsleep => "SLEEP_ASLEEP",
            Self::SleepAwake => "SLEEP_AWAKE",
            Self::SleepInBed => "SLEEP_IN_BED",
            Self::Steps => "STEPS",
            Self::Water => "WATER",
            Self::Weight => "WEIGHT",
            Self::Workout => "WORKOUT",
        }
    }

    /// Resolve the vendor (record type, field) pair for this kind.
    #[must_use]
    pub const fn resolve(self) -> (VendorDataType, VendorField) {
        match self {
            Self::ActiveEnergyBurned => (VendorDataType::CaloriesExpended, VendorField::Calories),
            Self::BloodGlucose => (VendorDataType::BloodGlucose, VendorField::BloodGlucoseLevel),
            Self::BloodOxygen => (
                VendorDataType::OxygenSaturation,
                VendorField::OxygenSaturation,
            ),
            Self::BloodPressureDiastolic => (
                VendorDataType::BloodPressure,
                VendorField::BloodPressureDiastolic,
            ),
            Self::BloodPressureSystolic => (
                VendorDataType::BloodPressure,
                VendorField::BloodPressureSystolic,
            ),
            Self::BodyFatPercentage => (VendorDataType::BodyFatPercentage, VendorField::Percentage),
            Self::BodyTemperature => (VendorDataType::BodyTemperature, VendorField::BodyTemperature),
            Self::DistanceDelta => (VendorDataType::DistanceDelta, VendorField::Distance),
            Self::HeartRate => (VendorDataType::HeartRateBpm, VendorField::Bpm),
            Self::Height => (VendorDataType::Height, VendorField::Height),
            Self::MoveMinutes => (VendorDataType::MoveMinutes, VendorField::Duration),
            Self::SleepAsleep | Self::SleepAwake | Self::SleepInBed => {
                (VendorDataType::SleepSegment, VendorField::SleepSegmentType)
            }
            Self::Steps => (VendorDataType::StepCountDelta, VendorField::Steps),
            Self::Water => (VendorDataType::Hydration, VendorField::Volume),
            Self::Weight => (VendorDataType::Weight, VendorField::Weight),
            Self::Workout => (VendorDataType::ActivitySegment, VendorField::Activity),
        }
    }

    /// Whether this kind is one of the sleep kinds backed by sleep sessions.
    #[must_use]
    pub const fn is_sleep(self) -> bool {
        matches!(self, Self::SleepAsleep | Self::SleepAwake | Self::SleepInBed)
    }

    /// Whether this kind needs the sleep-session composite scope when
    /// requesting permissions (the three sleep kinds and workouts).
    #[must_use]
    pub const fn needs_session_scope(self) -> bool {
        self.is_sleep() || matches!(self, Self::Workout)
    }
}

/// Vendor record types addressed by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorDataType {
    /// com.google.calories.expended
    CaloriesExpended,
    /// com.google.blood_glucose
    BloodGlucose,
    /// com.google.oxygen_saturation
    OxygenSaturation,
    /// com.google.blood_pressure
    BloodPressure,
    /// com.google.body.fat.percentage
    BodyFatPercentage,
    /// com.google.body.temperature
    BodyTemperature,
    /// com.google.distance.delta
    DistanceDelta,
    /// com.google.heart_rate.bpm
    HeartRateBpm,
    /// com.google.height
    Height,
    /// com.google.active_minutes
    MoveMinutes,
    /// com.google.sleep.segment
    SleepSegment,
    /// com.google.step_count.delta
    StepCountDelta,
    /// com.google.hydration
    Hydration,
    /// com.google.weight
    Weight,
    /// com.google.activity.segment
    ActivitySegment,
}

impl VendorDataType {
    /// Vendor wire name of this record type.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::CaloriesExpended => "com.google.calories.expended",
            Self::BloodGlucose => "com.google.blood_glucose",
            Self::OxygenSaturation => "com.google.oxygen_saturation",
            Self::BloodPressure => "com.google.blood_pressure",
            Self::BodyFatPercentage => "com.google.body.fat.percentage",
            Self::BodyTemperature => "com.google.body.temperature",
            Self::DistanceDelta => "com.google.distance.delta",
            Self::HeartRateBpm => "com.google.heart_rate.bpm",
            Self::Height => "com.google.height",
            Self::MoveMinutes => "com.google.active_minutes",
            Self::SleepSegment => "com.google.sleep.segment",
            Self::StepCountDelta => "com.google.step_count.delta",
            Self::Hydration => "com.google.hydration",
            Self::Weight => "com.google.weight",
            Self::ActivitySegment => "com.google.activity.segment",
        }
    }
}

/// Vendor fields extracted from data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorField {
    /// Calories burned (kcal).
    Calories,
    /// Blood glucose level, stored by the vendor in mmol/L.
    BloodGlucoseLevel,
    /// Oxygen saturation percentage.
    OxygenSaturation,
    /// Diastolic pressure (mmHg).
    BloodPressureDiastolic,
    /// Systolic pressure (mmHg).
    BloodPressureSystolic,
    /// Generic percentage field.
    Percentage,
    /// Body temperature (celsius).
    BodyTemperature,
    /// Distance (meters).
    Distance,
    /// Heart rate (bpm).
    Bpm,
    /// Height (meters).
    Height,
    /// Duration (milliseconds, integer format).
    Duration,
    /// Sleep segment type code (integer format).
    SleepSegmentType,
    /// Step count (integer format).
    Steps,
    /// Liquid volume (liters).
    Volume,
    /// Weight (kilograms).
    Weight,
    /// Activity constant (string format).
    Activity,
}

/// Storage format of a vendor field, driving write-side value coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// 32-bit integer storage; written values truncate.
    Int,
    /// Floating point storage.
    Float,
    /// String storage; never written through the numeric write path.
    Text,
}

impl VendorField {
    /// Vendor wire name of this field.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::BloodGlucoseLevel => "blood_glucose_level",
            Self::OxygenSaturation => "oxygen_saturation",
            Self::BloodPressureDiastolic => "blood_pressure_diastolic",
            Self::BloodPressureSystolic => "blood_pressure_systolic",
            Self::Percentage => "percentage",
            Self::BodyTemperature => "body_temperature",
            Self::Distance => "distance",
            Self::Bpm => "bpm",
            Self::Height => "height",
            Self::Duration => "duration",
            Self::SleepSegmentType => "sleep_segment_type",
            Self::Steps => "steps",
            Self::Volume => "volume",
            Self::Weight => "weight",
            Self::Activity => "activity",
        }
    }

    /// Storage format of this field in the vendor model.
    #[must_use]
    pub const fn format(self) -> FieldFormat {
        match self {
            Self::Duration | Self::SleepSegmentType | Self::Steps => FieldFormat::Int,
            Self::Activity => FieldFormat::Text,
            _ => FieldFormat::Float,
        }
    }
}
