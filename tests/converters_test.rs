// ABOUTME: Tests for vendor response normalization - samples, sleep, workouts, aggregates
// ABOUTME: Covers glucose conversion, segment filtering, zero-sum policy, and source fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{app_source, data_set, point, read_response, session, session_response, sleep_segment};
use fitbridge_core::constants::{MMOLL_TO_MGDL, UNIT_KILOCALORIE, UNIT_METER, UNIT_MINUTES};
use fitbridge_core::gfit::{
    Bucket, DataReadResponse, DataSource, FieldValue, GfitConverters, SessionBundle,
};
use fitbridge_core::models::RecordValue;
use fitbridge_core::registry::{HealthDataKind, VendorDataType, VendorField};

const HOUR_MS: i64 = 3_600_000;

#[test]
fn simple_samples_extract_value_and_time_range() {
    let response = read_response(vec![data_set(
        VendorDataType::HeartRateBpm,
        vec![point(
            1_000,
            61_000,
            VendorField::Bpm,
            FieldValue::Float(72.5),
            app_source("com.example.tracker", "hr-stream"),
        )],
    )]);

    let records = GfitConverters::samples(&response, HealthDataKind::HeartRate);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.value, RecordValue::Float(72.5));
    assert_eq!(record.date_from, 1_000);
    assert_eq!(record.date_to, 61_000);
    assert!(record.date_from <= record.date_to);
    assert_eq!(record.source_name, "com.example.tracker");
    assert_eq!(record.source_id, "hr-stream");
    assert_eq!(record.unit, None);
}

#[test]
fn samples_ignore_data_sets_of_other_types() {
    let response = read_response(vec![
        data_set(
            VendorDataType::StepCountDelta,
            vec![point(
                0,
                1_000,
                VendorField::Steps,
                FieldValue::Int(100),
                app_source("a", "s1"),
            )],
        ),
        data_set(
            VendorDataType::HeartRateBpm,
            vec![point(
                0,
                1_000,
                VendorField::Bpm,
                FieldValue::Float(60.0),
                app_source("a", "s2"),
            )],
        ),
    ]);

    let records = GfitConverters::samples(&response, HealthDataKind::Steps);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, RecordValue::Int(100));
}

#[test]
fn source_name_falls_back_to_device_model_then_empty() {
    let device_only = DataSource {
        app_package_name: None,
        device_model: Some("Pixel Watch".to_owned()),
        stream_identifier: "s1".to_owned(),
    };
    let anonymous = DataSource {
        app_package_name: None,
        device_model: None,
        stream_identifier: "s2".to_owned(),
    };
    let response = read_response(vec![data_set(
        VendorDataType::Weight,
        vec![
            point(0, 0, VendorField::Weight, FieldValue::Float(80.0), device_only),
            point(0, 0, VendorField::Weight, FieldValue::Float(81.0), anonymous),
        ],
    )]);

    let records = GfitConverters::samples(&response, HealthDataKind::Weight);
    assert_eq!(records[0].source_name, "Pixel Watch");
    assert_eq!(records[1].source_name, "");
}

#[test]
fn non_numeric_sample_fields_are_skipped() {
    let response = read_response(vec![data_set(
        VendorDataType::Weight,
        vec![point(
            0,
            0,
            VendorField::Weight,
            FieldValue::Text("heavy".to_owned()),
            app_source("a", "s"),
        )],
    )]);
    assert!(GfitConverters::samples(&response, HealthDataKind::Weight).is_empty());
}

#[test]
fn glucose_reads_convert_to_mgdl() {
    let response = read_response(vec![data_set(
        VendorDataType::BloodGlucose,
        vec![point(
            0,
            0,
            VendorField::BloodGlucoseLevel,
            FieldValue::Float(5.5),
            app_source("a", "s"),
        )],
    )]);
    let records = GfitConverters::samples(&response, HealthDataKind::BloodGlucose);
    assert_eq!(records[0].value, RecordValue::Float(5.5 * MMOLL_TO_MGDL));
}

#[test]
fn glucose_round_trips_within_float_tolerance() {
    let written = GfitConverters::write_value(HealthDataKind::BloodGlucose, 95.0);
    let response = read_response(vec![data_set(
        VendorDataType::BloodGlucose,
        vec![point(
            0,
            0,
            VendorField::BloodGlucoseLevel,
            written,
            app_source("a", "s"),
        )],
    )]);
    let records = GfitConverters::samples(&response, HealthDataKind::BloodGlucose);
    let read_back = records[0].value.as_f64();
    assert!((read_back - 95.0).abs() < 1e-9, "got {read_back}");
}

#[test]
fn write_value_truncates_integer_format_fields() {
    assert_eq!(
        GfitConverters::write_value(HealthDataKind::Steps, 1234.9),
        FieldValue::Int(1234)
    );
    assert_eq!(
        GfitConverters::write_value(HealthDataKind::Weight, 80.5),
        FieldValue::Float(80.5)
    );
}

fn three_segment_session() -> SessionBundle {
    // One 8-hour session with an awake, an asleep, and an out-of-bed
    // sub-segment.
    SessionBundle {
        session: session("sleep-1", "sleep", 0, 8 * HOUR_MS),
        data_sets: vec![data_set(
            VendorDataType::SleepSegment,
            vec![
                sleep_segment(0, HOUR_MS, 1),
                sleep_segment(HOUR_MS, 7 * HOUR_MS, 2),
                sleep_segment(7 * HOUR_MS, 8 * HOUR_MS, 3),
            ],
        )],
    }
}

#[test]
fn sleep_in_bed_excludes_out_of_bed_segments() {
    let response = session_response(vec![three_segment_session()]);
    let records = GfitConverters::sleep(&response, HealthDataKind::SleepInBed);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].value, RecordValue::Int(60));
    assert_eq!(records[1].value, RecordValue::Int(360));
    for record in &records {
        assert_eq!(record.unit.as_deref(), Some(UNIT_MINUTES));
    }
}

#[test]
fn sleep_awake_keeps_only_awake_segments() {
    let response = session_response(vec![three_segment_session()]);
    let records = GfitConverters::sleep(&response, HealthDataKind::SleepAwake);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, RecordValue::Int(60));
    assert_eq!(records[0].date_from, 0);
    assert_eq!(records[0].date_to, HOUR_MS);
}

#[test]
fn sleep_asleep_spans_the_whole_session_regardless_of_segments() {
    let response = session_response(vec![three_segment_session()]);
    let records = GfitConverters::sleep(&response, HealthDataKind::SleepAsleep);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, RecordValue::Int(480));
    assert_eq!(records[0].date_from, 0);
    assert_eq!(records[0].date_to, 8 * HOUR_MS);
    assert_eq!(records[0].source_id, "sleep-1");
}

#[test]
fn sleep_in_bed_falls_back_to_whole_session_without_segments() {
    let bundle = SessionBundle {
        session: session("sleep-2", "sleep", 0, 6 * HOUR_MS),
        data_sets: Vec::new(),
    };
    let response = session_response(vec![bundle]);
    let records = GfitConverters::sleep(&response, HealthDataKind::SleepInBed);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, RecordValue::Int(360));
}

#[test]
fn sleep_awake_without_matching_segments_yields_nothing() {
    let bundle = SessionBundle {
        session: session("sleep-3", "sleep", 0, 6 * HOUR_MS),
        data_sets: vec![data_set(
            VendorDataType::SleepSegment,
            vec![sleep_segment(0, 6 * HOUR_MS, 2)],
        )],
    };
    let response = session_response(vec![bundle]);
    assert!(GfitConverters::sleep(&response, HealthDataKind::SleepAwake).is_empty());
}

#[test]
fn workout_sums_calories_and_distance_per_session() {
    let origin = app_source("com.example.tracker", "workout");
    let bundle = SessionBundle {
        session: session("run-1", "running", 0, HOUR_MS),
        data_sets: vec![
            data_set(
                VendorDataType::CaloriesExpended,
                vec![
                    point(0, 1_000, VendorField::Calories, FieldValue::Float(100.0), origin.clone()),
                    point(1_000, 2_000, VendorField::Calories, FieldValue::Float(50.0), origin.clone()),
                ],
            ),
            data_set(
                VendorDataType::DistanceDelta,
                vec![point(0, 2_000, VendorField::Distance, FieldValue::Float(200.0), origin)],
            ),
        ],
    };
    let records = GfitConverters::workouts(&session_response(vec![bundle]));
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.activity_type, "RUNNING");
    assert_eq!(record.total_energy_burned, Some(150.0));
    assert_eq!(record.total_energy_burned_unit, UNIT_KILOCALORIE);
    assert_eq!(record.total_distance, Some(200.0));
    assert_eq!(record.total_distance_unit, UNIT_METER);
    assert_eq!(record.source_id, "run-1");
}

#[test]
fn workout_zero_sums_report_as_absent() {
    let bundle = SessionBundle {
        session: session("yoga-1", "yoga", 0, HOUR_MS),
        data_sets: Vec::new(),
    };
    let records = GfitConverters::workouts(&session_response(vec![bundle]));
    assert_eq!(records[0].total_energy_burned, None);
    assert_eq!(records[0].total_distance, None);
    assert_eq!(records[0].activity_type, "YOGA");
}

#[test]
fn workout_with_uncataloged_activity_maps_to_other() {
    let bundle = SessionBundle {
        session: session("x-1", "hoverboarding", 0, HOUR_MS),
        data_sets: Vec::new(),
    };
    let records = GfitConverters::workouts(&session_response(vec![bundle]));
    assert_eq!(records[0].activity_type, "OTHER");
}

#[test]
fn aggregate_steps_from_a_single_bucket() {
    let response = DataReadResponse {
        data_sets: Vec::new(),
        buckets: vec![Bucket {
            data_sets: vec![data_set(
                VendorDataType::StepCountDelta,
                vec![point(
                    0,
                    HOUR_MS,
                    VendorField::Steps,
                    FieldValue::Int(42),
                    app_source("com.google.android.gms", "estimated_steps"),
                )],
            )],
        }],
    };
    assert_eq!(GfitConverters::aggregate_steps(&response), Some(42));
}

#[test]
fn aggregate_steps_absent_bucket_is_no_data_not_an_error() {
    assert_eq!(
        GfitConverters::aggregate_steps(&DataReadResponse::default()),
        None
    );

    let empty_bucket = DataReadResponse {
        data_sets: Vec::new(),
        buckets: vec![Bucket::default()],
    };
    assert_eq!(GfitConverters::aggregate_steps(&empty_bucket), None);
}

#[test]
fn minutes_between_truncates_like_the_vendor_time_units() {
    assert_eq!(GfitConverters::minutes_between(0, 8 * HOUR_MS), 480);
    // Each endpoint truncates to whole epoch minutes before subtracting.
    assert_eq!(GfitConverters::minutes_between(30_000, 90_000), 1);
    assert_eq!(GfitConverters::minutes_between(59_999, 60_000), 1);
    assert_eq!(GfitConverters::minutes_between(0, 59_999), 0);
}
