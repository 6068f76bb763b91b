// ABOUTME: Bridge-facing data models for the health bridge core
// ABOUTME: Re-exports output records and typed inbound request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types crossing the bridge in either direction. Output records
//! ([`HealthRecord`], [`WorkoutRecord`]) are produced only by the response
//! normalizer and never mutated after creation; their serialized field
//! names are the plugin's wire contract. Inbound payloads deserialize from
//! method-call arguments into typed request structs.

mod record;
mod request;

pub use record::{BridgeRecord, HealthRecord, RecordValue, WorkoutRecord};
pub use request::{
    IntervalRequest, MethodCall, PermissionsRequest, ReadRequest, WorkoutWriteRequest,
    WriteRequest,
};
