// ABOUTME: Shared test helpers - a hand-rolled mock FitnessClient and vendor response builders
// ABOUTME: The mock captures issued requests and serves canned responses or failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use fitbridge_core::gfit::{
    DataInsertRequest, DataPoint, DataReadRequest, DataReadResponse, DataSet, DataSource,
    FieldValue, FitnessClient, Session, SessionBundle, SessionInsertRequest, SessionReadRequest,
    SessionReadResponse, VendorError,
};
use fitbridge_core::permissions::ScopeSet;
use fitbridge_core::registry::{VendorDataType, VendorField};

/// Mock vendor client serving canned responses.
///
/// `None` in a response slot makes the corresponding call fail with a
/// `VendorError`, exercising the fail-soft paths.
#[derive(Default)]
pub struct MockFitnessClient {
    pub data_response: Mutex<Option<DataReadResponse>>,
    pub session_response: Mutex<Option<SessionReadResponse>>,
    pub insert_ok: AtomicBool,
    pub permissions_granted: Mutex<Option<bool>>,
    pub prompt_ok: AtomicBool,

    pub seen_data_requests: Mutex<Vec<DataReadRequest>>,
    pub seen_session_requests: Mutex<Vec<SessionReadRequest>>,
    pub seen_inserts: Mutex<Vec<DataInsertRequest>>,
    pub seen_session_inserts: Mutex<Vec<SessionInsertRequest>>,
    pub seen_prompt_codes: Mutex<Vec<u32>>,
}

impl MockFitnessClient {
    /// A client whose every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// A client serving the given history read response.
    pub fn with_data(response: DataReadResponse) -> Self {
        let client = Self::healthy();
        *client.data_response.lock().unwrap() = Some(response);
        client
    }

    /// A client serving the given session read response.
    pub fn with_sessions(response: SessionReadResponse) -> Self {
        let client = Self::healthy();
        *client.session_response.lock().unwrap() = Some(response);
        client
    }

    /// A client where writes succeed and permission checks report granted.
    pub fn healthy() -> Self {
        let client = Self::default();
        client.insert_ok.store(true, Ordering::SeqCst);
        client.prompt_ok.store(true, Ordering::SeqCst);
        *client.permissions_granted.lock().unwrap() = Some(true);
        client
    }
}

#[async_trait]
impl FitnessClient for MockFitnessClient {
    async fn read_data(&self, request: DataReadRequest) -> Result<DataReadResponse, VendorError> {
        self.seen_data_requests.lock().unwrap().push(request);
        self.data_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| VendorError::CallFailed("mock read_data failure".to_owned()))
    }

    async fn read_sessions(
        &self,
        request: SessionReadRequest,
    ) -> Result<SessionReadResponse, VendorError> {
        self.seen_session_requests.lock().unwrap().push(request);
        self.session_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| VendorError::CallFailed("mock read_sessions failure".to_owned()))
    }

    async fn insert_data(&self, request: DataInsertRequest) -> Result<(), VendorError> {
        self.seen_inserts.lock().unwrap().push(request);
        if self.insert_ok.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(VendorError::CallFailed("mock insert_data failure".to_owned()))
        }
    }

    async fn insert_session(&self, request: SessionInsertRequest) -> Result<(), VendorError> {
        self.seen_session_inserts.lock().unwrap().push(request);
        if self.insert_ok.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(VendorError::CallFailed(
                "mock insert_session failure".to_owned(),
            ))
        }
    }

    async fn has_permissions(&self, _scopes: &ScopeSet) -> Result<bool, VendorError> {
        self.permissions_granted
            .lock()
            .unwrap()
            .ok_or_else(|| VendorError::CallFailed("mock has_permissions failure".to_owned()))
    }

    async fn request_permissions(
        &self,
        _scopes: &ScopeSet,
        request_code: u32,
    ) -> Result<(), VendorError> {
        self.seen_prompt_codes.lock().unwrap().push(request_code);
        if self.prompt_ok.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(VendorError::PermissionPrompt(
                "mock prompt failure".to_owned(),
            ))
        }
    }
}

/// A data source with an app package and stream identifier.
pub fn app_source(package: &str, stream: &str) -> DataSource {
    DataSource {
        app_package_name: Some(package.to_owned()),
        device_model: None,
        stream_identifier: stream.to_owned(),
    }
}

/// A data point with a single field value.
pub fn point(
    start_millis: i64,
    end_millis: i64,
    field: VendorField,
    value: FieldValue,
    origin: DataSource,
) -> DataPoint {
    let mut values = BTreeMap::new();
    values.insert(field.wire_name().to_owned(), value);
    DataPoint {
        start_millis,
        end_millis,
        values,
        origin,
    }
}

/// A data set of one vendor record type.
pub fn data_set(data_type: VendorDataType, points: Vec<DataPoint>) -> DataSet {
    DataSet {
        data_type: data_type.wire_name().to_owned(),
        points,
    }
}

/// A history read response with plain data sets.
pub fn read_response(data_sets: Vec<DataSet>) -> DataReadResponse {
    DataReadResponse {
        data_sets,
        buckets: Vec::new(),
    }
}

/// A session spanning the given window.
pub fn session(identifier: &str, activity: &str, start_millis: i64, end_millis: i64) -> Session {
    Session {
        identifier: identifier.to_owned(),
        app_package_name: Some("com.example.tracker".to_owned()),
        activity: activity.to_owned(),
        start_millis,
        end_millis,
    }
}

/// A session read response from bundles.
pub fn session_response(sessions: Vec<SessionBundle>) -> SessionReadResponse {
    SessionReadResponse { sessions }
}

/// A sleep sub-segment point with the given segment type code.
pub fn sleep_segment(start_millis: i64, end_millis: i64, segment_type: i64) -> DataPoint {
    point(
        start_millis,
        end_millis,
        VendorField::SleepSegmentType,
        FieldValue::Int(segment_type),
        app_source("com.example.tracker", "sleep-segments"),
    )
}
