// ABOUTME: Output record types produced by the response normalizer
// ABOUTME: Flat wire shapes with the exact field names the bridge caller expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// A numeric record value preserving the vendor's field format.
///
/// Integer-format vendor fields (steps, durations, segment types) stay
/// integers on the wire; float fields stay floats. Untagged serialization
/// emits the bare number either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    /// Integer-format field value.
    Int(i64),
    /// Float-format field value.
    Float(f64),
}

impl RecordValue {
    /// The value as an f64, widening integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A single normalized health data record.
///
/// Produced only by the response normalizer; `date_from <= date_to` holds
/// for every record it emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRecord {
    /// Extracted numeric value.
    pub value: RecordValue,
    /// Start of the sample's time range, epoch milliseconds.
    pub date_from: i64,
    /// End of the sample's time range, epoch milliseconds.
    pub date_to: i64,
    /// Unit label, when the kind carries a fixed one (e.g. sleep minutes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Originating source name: app package, else device model, else empty.
    pub source_name: String,
    /// Originating source stream identifier.
    pub source_id: String,
}

/// A normalized workout session record.
///
/// Field names mix cases deliberately: they are the wire contract
/// inherited from the plugin protocol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRecord {
    /// Semantic activity key reverse-mapped from the vendor constant.
    #[serde(rename = "workoutActivityType")]
    pub activity_type: String,
    /// Summed energy total; absent when the sum is exactly zero (the
    /// vendor model cannot distinguish zero from no data).
    #[serde(rename = "totalEnergyBurned")]
    pub total_energy_burned: Option<f64>,
    /// Fixed unit label for the energy total.
    #[serde(rename = "totalEnergyBurnedUnit")]
    pub total_energy_burned_unit: String,
    /// Summed distance total; absent when the sum is exactly zero.
    #[serde(rename = "totalDistance")]
    pub total_distance: Option<f64>,
    /// Fixed unit label for the distance total.
    #[serde(rename = "totalDistanceUnit")]
    pub total_distance_unit: String,
    /// Session start, epoch milliseconds.
    pub date_from: i64,
    /// Session end, epoch milliseconds.
    pub date_to: i64,
    /// Fixed session unit label.
    pub unit: String,
    /// Originating app package of the session.
    pub source_name: String,
    /// Vendor session identifier.
    pub source_id: String,
}

/// Either record shape, serialized flat for the bridge caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BridgeRecord {
    /// Simple or sleep record.
    Health(HealthRecord),
    /// Workout session record.
    Workout(WorkoutRecord),
}
