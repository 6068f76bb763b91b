// ABOUTME: Typed inbound request payloads deserialized from bridge method-call arguments
// ABOUTME: Argument names are the camelCase wire contract of the plugin protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;

use crate::errors::{BridgeError, BridgeResult};

/// A raw method call crossing the bridge: a method name plus a JSON
/// argument object.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodCall {
    /// Bridge method name (e.g. `getData`, `requestAuthorization`).
    pub method: String,
    /// Untyped argument payload; decoded per method.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl MethodCall {
    /// Build a call from a method name and serializable arguments.
    ///
    /// Intended for in-process callers and tests; over-the-wire calls
    /// arrive already shaped.
    #[must_use]
    pub fn new(method: &str, arguments: serde_json::Value) -> Self {
        Self {
            method: method.to_owned(),
            arguments,
        }
    }

    /// Decode the argument payload for the named method.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidArguments`] when the payload does not
    /// match the expected shape.
    pub fn decode<T>(&self, method: &'static str) -> BridgeResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_value(self.arguments.clone())
            .map_err(|source| BridgeError::InvalidArguments { method, source })
    }
}

/// Arguments of a read query (`getData`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadRequest {
    /// Semantic data-type key.
    pub data_type_key: String,
    /// Window start, epoch milliseconds.
    pub start_time: i64,
    /// Window end, epoch milliseconds.
    pub end_time: i64,
}

/// Arguments of an interval-only query (`getTotalStepsInInterval`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRequest {
    /// Interval start, epoch milliseconds.
    pub start_time: i64,
    /// Interval end, epoch milliseconds.
    pub end_time: i64,
}

/// Arguments of a single-value write (`writeData`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    /// Semantic data-type key.
    pub data_type_key: String,
    /// Sample start, epoch milliseconds.
    pub start_time: i64,
    /// Sample end, epoch milliseconds; equal to start for instant samples.
    pub end_time: i64,
    /// Value in the bridge's unit domain (mg/dL for glucose).
    pub value: f64,
}

/// Arguments of a workout session write (`writeWorkoutData`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutWriteRequest {
    /// Free-form activity key matched against the catalog.
    pub activity_type: String,
    /// Session start, epoch milliseconds.
    pub start_time: i64,
    /// Session end, epoch milliseconds.
    pub end_time: i64,
    /// Optional total energy burned (kcal).
    #[serde(default)]
    pub total_energy_burned: Option<i64>,
    /// Optional total distance (meters).
    #[serde(default)]
    pub total_distance: Option<i64>,
}

/// Arguments of a permission request (`requestAuthorization`,
/// `hasPermissions`): parallel arrays of equal length.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionsRequest {
    /// Semantic data-type keys.
    pub types: Vec<String>,
    /// Wire-encoded access modes (0=read, 1=write, 2=read-write).
    pub permissions: Vec<i64>,
}
