// ABOUTME: Converters from vendor response DTOs to bridge records
// ABOUTME: Pure, stateless extraction - samples, sleep sessions, workouts, aggregate buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Vendor response normalization.
//!
//! Four extraction algorithms, one per vendor response shape. All of them
//! are pure functions over already-received DTOs: no I/O, no shared state,
//! safe to run concurrently for unrelated requests.

use tracing::warn;

use super::constants::{SLEEP_SEGMENT_AWAKE, SLEEP_SEGMENT_OUT_OF_BED};
use super::models::{
    DataPoint, DataReadResponse, FieldValue, Session, SessionBundle, SessionReadResponse,
};
use crate::constants::{MMOLL_TO_MGDL, UNIT_KILOCALORIE, UNIT_METER, UNIT_MINUTES};
use crate::models::{HealthRecord, RecordValue, WorkoutRecord};
use crate::registry::{
    activity_key_for_vendor, FieldFormat, HealthDataKind, VendorDataType, VendorField,
    ACTIVITY_KEY_OTHER,
};

/// Converter utilities from vendor responses to bridge records.
pub struct GfitConverters;

impl GfitConverters {
    /// Extract simple samples: one record per point of the kind's vendor
    /// record type.
    ///
    /// Glucose values convert from the vendor's mmol/L to the bridge's
    /// mg/dL. Points whose field is missing or string-formatted are
    /// skipped with a warning; the record model is numeric.
    #[must_use]
    pub fn samples(response: &DataReadResponse, kind: HealthDataKind) -> Vec<HealthRecord> {
        let (data_type, field) = kind.resolve();
        response
            .points_of(data_type)
            .filter_map(|point| {
                let Some(value) = Self::numeric_value(point, field) else {
                    warn!(
                        "skipping {} sample without numeric {} field",
                        data_type.wire_name(),
                        field.wire_name()
                    );
                    return None;
                };
                Some(HealthRecord {
                    value,
                    date_from: point.start_millis,
                    date_to: point.end_millis,
                    unit: None,
                    source_name: point.origin.display_name().to_owned(),
                    source_id: point.origin.stream_identifier.clone(),
                })
            })
            .collect()
    }

    /// Extract sleep records from a session read.
    ///
    /// - `SleepAsleep`: one record per session spanning the whole session.
    /// - `SleepInBed`: one record per sub-segment excluding "out of bed"
    ///   segments; whole-session fallback when the session carries no
    ///   sub-segment data sets.
    /// - `SleepAwake`: one record per "awake" sub-segment; sessions
    ///   without matching sub-segments contribute nothing.
    ///
    /// Values are durations in epoch-minute difference, unit `MINUTES`.
    /// Non-sleep kinds yield no records.
    #[must_use]
    pub fn sleep(response: &SessionReadResponse, kind: HealthDataKind) -> Vec<HealthRecord> {
        let mut records = Vec::new();
        for bundle in &response.sessions {
            match kind {
                HealthDataKind::SleepAsleep => {
                    records.push(Self::whole_session_record(&bundle.session));
                }
                HealthDataKind::SleepInBed => {
                    if bundle.data_sets.is_empty() {
                        records.push(Self::whole_session_record(&bundle.session));
                    } else {
                        records.extend(Self::segment_records(bundle, |code| {
                            code != Some(SLEEP_SEGMENT_OUT_OF_BED)
                        }));
                    }
                }
                HealthDataKind::SleepAwake => {
                    records.extend(
                        Self::segment_records(bundle, |code| code == Some(SLEEP_SEGMENT_AWAKE)),
                    );
                }
                _ => {}
            }
        }
        records
    }

    /// Extract workout records from a session read.
    ///
    /// Calorie and distance values are summed across every data set
    /// attached to the session. A sum of exactly zero reports as absent:
    /// the vendor model cannot distinguish zero from no data.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact zero is the vendor's "no data" sentinel
    pub fn workouts(response: &SessionReadResponse) -> Vec<WorkoutRecord> {
        response
            .sessions
            .iter()
            .map(|bundle| {
                let energy = Self::sum_field(bundle, VendorDataType::CaloriesExpended, VendorField::Calories);
                let distance = Self::sum_field(bundle, VendorDataType::DistanceDelta, VendorField::Distance);
                let session = &bundle.session;
                WorkoutRecord {
                    activity_type: activity_key_for_vendor(&session.activity)
                        .unwrap_or(ACTIVITY_KEY_OTHER)
                        .to_owned(),
                    total_energy_burned: (energy != 0.0).then_some(energy),
                    total_energy_burned_unit: UNIT_KILOCALORIE.to_owned(),
                    total_distance: (distance != 0.0).then_some(distance),
                    total_distance_unit: UNIT_METER.to_owned(),
                    date_from: session.start_millis,
                    date_to: session.end_millis,
                    unit: UNIT_MINUTES.to_owned(),
                    source_name: session.app_package_name.clone().unwrap_or_default(),
                    source_id: session.identifier.clone(),
                }
            })
            .collect()
    }

    /// Extract the aggregated step total from a bucketed read.
    ///
    /// The query buckets the whole interval into a single bucket; the
    /// total is the first point of the first data set of the first bucket.
    /// An absent bucket or point means no data for the interval - not an
    /// error.
    #[must_use]
    pub fn aggregate_steps(response: &DataReadResponse) -> Option<i64> {
        response
            .buckets
            .first()?
            .data_sets
            .first()?
            .points
            .first()?
            .field(VendorField::Steps)
            .and_then(FieldValue::as_i64)
    }

    /// Coerce a caller-supplied value into the vendor storage format for
    /// the kind's field.
    ///
    /// Glucose inverts the read-side conversion (mg/dL back to mmol/L).
    /// Integer-format fields truncate. The numeric write path never
    /// targets string-format fields.
    #[must_use]
    pub fn write_value(kind: HealthDataKind, value: f64) -> FieldValue {
        let (_, field) = kind.resolve();
        let raw = if field == VendorField::BloodGlucoseLevel {
            value / MMOLL_TO_MGDL
        } else {
            value
        };
        match field.format() {
            FieldFormat::Int => FieldValue::Int(raw as i64),
            FieldFormat::Float | FieldFormat::Text => FieldValue::Float(raw),
        }
    }

    /// Duration between two epoch-millisecond instants, in whole epoch
    /// minutes (truncating each endpoint, matching the vendor SDK's time
    /// unit conversion).
    #[must_use]
    pub const fn minutes_between(start_millis: i64, end_millis: i64) -> i64 {
        end_millis / 60_000 - start_millis / 60_000
    }

    fn numeric_value(point: &DataPoint, field: VendorField) -> Option<RecordValue> {
        match point.field(field)? {
            FieldValue::Int(v) => Some(RecordValue::Int(*v)),
            FieldValue::Float(v) => {
                // Glucose is stored as mmol/L by the vendor; the bridge
                // exposes mg/dL.
                if field == VendorField::BloodGlucoseLevel {
                    Some(RecordValue::Float(*v * MMOLL_TO_MGDL))
                } else {
                    Some(RecordValue::Float(*v))
                }
            }
            FieldValue::Text(_) => None,
        }
    }

    fn whole_session_record(session: &Session) -> HealthRecord {
        HealthRecord {
            value: RecordValue::Int(Self::minutes_between(
                session.start_millis,
                session.end_millis,
            )),
            date_from: session.start_millis,
            date_to: session.end_millis,
            unit: Some(UNIT_MINUTES.to_owned()),
            source_name: session.app_package_name.clone().unwrap_or_default(),
            source_id: session.identifier.clone(),
        }
    }

    fn segment_records<'a>(
        bundle: &'a SessionBundle,
        keep: impl Fn(Option<i64>) -> bool + 'a,
    ) -> impl Iterator<Item = HealthRecord> + 'a {
        bundle
            .data_sets
            .iter()
            .flat_map(|set| set.points.iter())
            .filter(move |point| {
                keep(point
                    .field(VendorField::SleepSegmentType)
                    .and_then(FieldValue::as_i64))
            })
            .map(|point| HealthRecord {
                value: RecordValue::Int(Self::minutes_between(
                    point.start_millis,
                    point.end_millis,
                )),
                date_from: point.start_millis,
                date_to: point.end_millis,
                unit: Some(UNIT_MINUTES.to_owned()),
                source_name: match point.origin.display_name() {
                    "" => "unknown".to_owned(),
                    name => name.to_owned(),
                },
                source_id: point.origin.stream_identifier.clone(),
            })
    }

    fn sum_field(bundle: &SessionBundle, data_type: VendorDataType, field: VendorField) -> f64 {
        bundle
            .data_sets
            .iter()
            .filter(|set| set.is_of_type(data_type))
            .flat_map(|set| set.points.iter())
            .filter_map(|point| point.field(field).and_then(FieldValue::as_f64))
            .sum()
    }
}
