// ABOUTME: Vendor request and response DTOs for the Google Fit boundary
// ABOUTME: Plain immutable values replacing the SDK's builder-pattern object graphs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::{VendorDataType, VendorField};

/// A vendor field value in one of the platform's storage formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer-format value.
    Int(i64),
    /// Float-format value.
    Float(f64),
    /// String-format value (activity constants).
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value; `None` for string-format fields.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Integer view of the value; `None` unless integer-format.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(_) | Self::Text(_) => None,
        }
    }
}

/// Identity of the data source a sample originated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Package name of the recording app, when known.
    #[serde(default)]
    pub app_package_name: Option<String>,
    /// Device model of the recording device, when known.
    #[serde(default)]
    pub device_model: Option<String>,
    /// Stream identifier of the source.
    pub stream_identifier: String,
}

impl DataSource {
    /// Source display name: app package, else device model, else empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.app_package_name
            .as_deref()
            .or(self.device_model.as_deref())
            .unwrap_or("")
    }
}

/// One raw sample returned by the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Sample start, epoch milliseconds.
    pub start_millis: i64,
    /// Sample end, epoch milliseconds.
    pub end_millis: i64,
    /// Field values keyed by vendor field wire name.
    #[serde(default)]
    pub values: BTreeMap<String, FieldValue>,
    /// Originating source of the sample.
    pub origin: DataSource,
}

impl DataPoint {
    /// Value of a vendor field on this point, if present.
    #[must_use]
    pub fn field(&self, field: VendorField) -> Option<&FieldValue> {
        self.values.get(field.wire_name())
    }
}

/// A set of samples of one vendor record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    /// Vendor record type wire name.
    pub data_type: String,
    /// Samples, in vendor order.
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl DataSet {
    /// Whether this set holds samples of the given vendor record type.
    #[must_use]
    pub fn is_of_type(&self, data_type: VendorDataType) -> bool {
        self.data_type == data_type.wire_name()
    }
}

/// A time-partitioned aggregation bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Aggregated data sets inside the bucket.
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
}

/// Response of a history read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataReadResponse {
    /// Plain (non-aggregated) data sets.
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
    /// Aggregation buckets, present only for aggregate reads.
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

impl DataReadResponse {
    /// All points of the given vendor record type across data sets.
    pub fn points_of(&self, data_type: VendorDataType) -> impl Iterator<Item = &DataPoint> {
        self.data_sets
            .iter()
            .filter(move |set| set.is_of_type(data_type))
            .flat_map(|set| set.points.iter())
    }
}

/// A vendor session: a composite record spanning a time interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Vendor session identifier.
    pub identifier: String,
    /// Package name of the app that recorded the session.
    #[serde(default)]
    pub app_package_name: Option<String>,
    /// Vendor activity constant of the session.
    pub activity: String,
    /// Session start, epoch milliseconds.
    pub start_millis: i64,
    /// Session end, epoch milliseconds.
    pub end_millis: i64,
}

/// A session together with its attached data sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBundle {
    /// The session record.
    pub session: Session,
    /// Data sets attached to the session (sub-segments, calories, distance).
    #[serde(default)]
    pub data_sets: Vec<DataSet>,
}

/// Response of a session read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReadResponse {
    /// Sessions in the queried window, each with its data sets.
    #[serde(default)]
    pub sessions: Vec<SessionBundle>,
}

/// Which session class a session read targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionFilter {
    /// Sleep sessions.
    Sleep,
    /// Activity (workout) sessions.
    Activity,
}

/// Aggregation parameters for a derived read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSpec {
    /// Package identity of the derived source.
    pub source_package: String,
    /// Stream name of the derived source.
    pub stream_name: String,
    /// Record type to aggregate.
    pub data_type: VendorDataType,
    /// Bucket width, milliseconds.
    pub bucket_millis: i64,
}

/// A history read request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataReadRequest {
    /// Record types to read.
    pub data_types: Vec<VendorDataType>,
    /// Window start, epoch milliseconds.
    pub start_millis: i64,
    /// Window end, epoch milliseconds.
    pub end_millis: i64,
    /// Aggregation parameters; plain reads leave this unset.
    #[serde(default)]
    pub aggregate: Option<AggregateSpec>,
}

/// A session read request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReadRequest {
    /// Window start, epoch milliseconds.
    pub start_millis: i64,
    /// Window end, epoch milliseconds.
    pub end_millis: i64,
    /// Session class to include.
    pub filter: SessionFilter,
    /// Record types to read alongside the sessions.
    pub read_types: Vec<VendorDataType>,
}

/// A new sample to insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDataPoint {
    /// Record type written to.
    pub data_type: VendorDataType,
    /// Field written.
    pub field: VendorField,
    /// Value in the vendor's storage format and unit domain.
    pub value: FieldValue,
    /// Sample start, epoch milliseconds.
    pub start_millis: i64,
    /// Sample end, epoch milliseconds; equal to start for instant samples.
    pub end_millis: i64,
}

/// An insert of one sample under the writing app's source identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataInsertRequest {
    /// Package name of the writing app.
    pub app_package_name: String,
    /// Optional stream name distinguishing parallel writes.
    #[serde(default)]
    pub stream_name: Option<String>,
    /// The sample to insert.
    pub point: NewDataPoint,
}

/// An insert of a session plus its attached data sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInsertRequest {
    /// Generated session identifier.
    pub identifier: String,
    /// Vendor activity constant of the session.
    pub activity: String,
    /// Package name of the writing app.
    pub app_package_name: String,
    /// Session start, epoch milliseconds.
    pub start_millis: i64,
    /// Session end, epoch milliseconds.
    pub end_millis: i64,
    /// Samples inserted with the session (segment, distance, energy).
    pub data: Vec<DataInsertRequest>,
}
