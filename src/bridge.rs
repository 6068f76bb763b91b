// ABOUTME: The bridge handler - method dispatch, permission tokens, bounded vendor concurrency
// ABOUTME: Enforces the asymmetric error policy: structural errors propagate, environmental ones degrade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bridge Handler
//!
//! [`HealthBridge`] owns the vendor seam and exposes the plugin's
//! operations. Two policies shape every code path here:
//!
//! 1. **Asymmetric errors.** Malformed requests (unknown kind, bad access
//!    mode, arity mismatch, undecodable arguments) are caller bugs and
//!    propagate as [`BridgeError`]. Environmental failures (vendor call
//!    failure, no host attached) degrade to an empty or negative
//!    success-shaped result and are only logged.
//! 2. **Bounded vendor concurrency.** Every vendor call passes through a
//!    fixed pool of permits, capping outstanding SDK work the way the
//!    host platform's worker pool did.
//!
//! Permission prompts resolve through explicit one-shot tokens keyed by
//! request code: the host forwards the OS callback to
//! [`HealthBridge::on_permission_result`], which resolves the pending
//! request exactly once. A newer prompt for the same request code
//! supersedes an unresolved older one; the superseded caller observes a
//! denial.

use std::future::Future;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::{oneshot, RwLock, Semaphore};
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::{
    AGGREGATE_STEPS_PACKAGE, AGGREGATE_STEPS_STREAM, PERMISSIONS_REQUEST_CODE,
    VENDOR_CALL_PERMITS,
};
use crate::errors::{BridgeError, BridgeResult};
use crate::gfit::{
    AggregateSpec, DataInsertRequest, DataReadRequest, FieldValue, FitnessClient, GfitConverters,
    NewDataPoint, SessionFilter, SessionInsertRequest, SessionReadRequest,
};
use crate::models::{
    BridgeRecord, IntervalRequest, MethodCall, PermissionsRequest, ReadRequest,
    WorkoutWriteRequest, WriteRequest,
};
use crate::permissions::{decode_permission_pairs, ScopeSet};
use crate::registry::{vendor_activity_for_key, HealthDataKind, VendorDataType, VendorField};

/// Stream names labelling this plugin's workout writes.
const STREAM_ACTIVITY: &str = "fitbridge-activity";
const STREAM_DISTANCE: &str = "fitbridge-distance";
const STREAM_CALORIES: &str = "fitbridge-calories";

/// State of the attached host (the platform activity/context).
///
/// Present only between `attach` and `detach`; operations that need a
/// host degrade fail-soft while it is absent.
#[derive(Debug, Clone)]
pub struct HostBinding {
    /// Package name under which writes are recorded.
    pub package_name: String,
    /// Whether the host holds the fine-location permission gating
    /// restricted distance data.
    pub fine_location_granted: bool,
}

/// The bridge handler.
pub struct HealthBridge {
    client: Arc<dyn FitnessClient>,
    binding: RwLock<Option<HostBinding>>,
    pending: DashMap<u32, oneshot::Sender<bool>>,
    vendor_permits: Semaphore,
}

impl HealthBridge {
    /// Create a bridge over a vendor client.
    #[must_use]
    pub fn new(client: Arc<dyn FitnessClient>) -> Self {
        Self {
            client,
            binding: RwLock::new(None),
            pending: DashMap::new(),
            vendor_permits: Semaphore::new(VENDOR_CALL_PERMITS),
        }
    }

    /// Attach a host binding. Operations requiring a host work from now on.
    pub async fn attach(&self, binding: HostBinding) {
        info!("host attached: {}", binding.package_name);
        *self.binding.write().await = Some(binding);
    }

    /// Detach the host binding. Pending permission tokens stay registered;
    /// they resolve whenever the OS callback arrives.
    pub async fn detach(&self) {
        info!("host detached");
        *self.binding.write().await = None;
    }

    /// Route an OS-level permission result to its pending request.
    ///
    /// Returns `true` when a pending token was resolved by this call.
    #[must_use]
    pub fn on_permission_result(&self, request_code: u32, granted: bool) -> bool {
        self.pending.remove(&request_code).is_some_and(|(_, tx)| {
            if granted {
                info!("permission request {request_code}: access granted");
            } else {
                info!("permission request {request_code}: access denied");
            }
            tx.send(granted).is_ok()
        })
    }

    /// Dispatch a raw method call.
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`] for unknown methods, undecodable
    /// arguments, and the structural request errors of the individual
    /// operations. Environmental failures never surface here.
    pub async fn dispatch(&self, call: &MethodCall) -> BridgeResult<Value> {
        match call.method.as_str() {
            "requestAuthorization" => {
                let request = call.decode::<PermissionsRequest>("requestAuthorization")?;
                Ok(Value::Bool(self.request_authorization(&request).await?))
            }
            "hasPermissions" => {
                let request = call.decode::<PermissionsRequest>("hasPermissions")?;
                Ok(Value::Bool(self.has_permissions(&request).await?))
            }
            "getData" => {
                let request = call.decode::<ReadRequest>("getData")?;
                Ok(to_wire(&self.get_data(&request).await?))
            }
            "writeData" => {
                let request = call.decode::<WriteRequest>("writeData")?;
                Ok(Value::Bool(self.write_data(&request).await?))
            }
            "writeWorkoutData" => {
                let request = call.decode::<WorkoutWriteRequest>("writeWorkoutData")?;
                Ok(Value::Bool(self.write_workout_data(&request).await?))
            }
            "getTotalStepsInInterval" => {
                let request = call.decode::<IntervalRequest>("getTotalStepsInInterval")?;
                Ok(to_wire(&self.get_total_steps_in_interval(&request).await?))
            }
            other => Err(BridgeError::UnsupportedMethod(other.to_owned())),
        }
    }

    /// Check whether every requested scope is currently granted.
    ///
    /// # Errors
    ///
    /// Structural request errors only (unknown kind, invalid access mode,
    /// arity mismatch). A missing host or vendor failure answers `false`.
    pub async fn has_permissions(&self, request: &PermissionsRequest) -> BridgeResult<bool> {
        let pairs = decode_permission_pairs(&request.types, &request.permissions)?;
        if self.binding.read().await.is_none() {
            warn!("hasPermissions with no host attached");
            return Ok(false);
        }
        let scopes = ScopeSet::resolve(&pairs);
        match self.vendor_call(self.client.has_permissions(&scopes)).await {
            Ok(granted) => Ok(granted),
            Err(e) => {
                warn!("permission check failed: {e}");
                Ok(false)
            }
        }
    }

    /// Request authorization for the given kinds and access modes.
    ///
    /// Returns immediately when every scope is already granted; otherwise
    /// starts the OS prompt and awaits its one-shot token.
    ///
    /// # Errors
    ///
    /// Structural request errors only; every environmental failure
    /// answers `false`.
    pub async fn request_authorization(&self, request: &PermissionsRequest) -> BridgeResult<bool> {
        let pairs = decode_permission_pairs(&request.types, &request.permissions)?;
        if self.binding.read().await.is_none() {
            warn!("requestAuthorization with no host attached");
            return Ok(false);
        }
        let scopes = ScopeSet::resolve(&pairs);
        match self.vendor_call(self.client.has_permissions(&scopes)).await {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(e) => {
                warn!("permission check failed: {e}");
                return Ok(false);
            }
        }

        let (tx, rx) = oneshot::channel();
        // A replaced sender drops here, resolving the superseded awaiter
        // with a denial.
        self.pending.insert(PERMISSIONS_REQUEST_CODE, tx);
        if let Err(e) = self
            .vendor_call(
                self.client
                    .request_permissions(&scopes, PERMISSIONS_REQUEST_CODE),
            )
            .await
        {
            warn!("permission prompt failed: {e}");
            self.pending.remove(&PERMISSIONS_REQUEST_CODE);
            return Ok(false);
        }
        Ok(rx.await.unwrap_or(false))
    }

    /// Read records of one kind in a time window.
    ///
    /// # Errors
    ///
    /// [`BridgeError::UnknownKind`] for keys outside the registry. A
    /// missing host or vendor failure answers an empty list.
    pub async fn get_data(&self, request: &ReadRequest) -> BridgeResult<Vec<BridgeRecord>> {
        let kind = HealthDataKind::from_key(&request.data_type_key)?;
        let Some(binding) = self.binding.read().await.clone() else {
            warn!("getData with no host attached");
            return Ok(Vec::new());
        };
        info!(
            "reading {} in window {}",
            kind.key(),
            window_label(request.start_time, request.end_time)
        );

        if kind.is_sleep() {
            let vendor_request = SessionReadRequest {
                start_millis: request.start_time,
                end_millis: request.end_time,
                filter: SessionFilter::Sleep,
                read_types: vec![VendorDataType::SleepSegment],
            };
            match self.vendor_call(self.client.read_sessions(vendor_request)).await {
                Ok(response) => Ok(GfitConverters::sleep(&response, kind)
                    .into_iter()
                    .map(BridgeRecord::Health)
                    .collect()),
                Err(e) => {
                    warn!("sleep session read failed: {e}");
                    Ok(Vec::new())
                }
            }
        } else if kind == HealthDataKind::Workout {
            let mut read_types = vec![
                VendorDataType::ActivitySegment,
                VendorDataType::CaloriesExpended,
            ];
            // Distance is restricted vendor data; only read it when the
            // host holds fine location.
            if binding.fine_location_granted {
                read_types.push(VendorDataType::DistanceDelta);
            }
            let vendor_request = SessionReadRequest {
                start_millis: request.start_time,
                end_millis: request.end_time,
                filter: SessionFilter::Activity,
                read_types,
            };
            match self.vendor_call(self.client.read_sessions(vendor_request)).await {
                Ok(response) => Ok(GfitConverters::workouts(&response)
                    .into_iter()
                    .map(BridgeRecord::Workout)
                    .collect()),
                Err(e) => {
                    warn!("workout session read failed: {e}");
                    Ok(Vec::new())
                }
            }
        } else {
            let (data_type, _) = kind.resolve();
            let vendor_request = DataReadRequest {
                data_types: vec![data_type],
                start_millis: request.start_time,
                end_millis: request.end_time,
                aggregate: None,
            };
            match self.vendor_call(self.client.read_data(vendor_request)).await {
                Ok(response) => Ok(GfitConverters::samples(&response, kind)
                    .into_iter()
                    .map(BridgeRecord::Health)
                    .collect()),
                Err(e) => {
                    warn!("data read failed: {e}");
                    Ok(Vec::new())
                }
            }
        }
    }

    /// Write a single value of one kind.
    ///
    /// # Errors
    ///
    /// [`BridgeError::UnknownKind`] for keys outside the registry. A
    /// missing host or vendor failure answers `false`.
    pub async fn write_data(&self, request: &WriteRequest) -> BridgeResult<bool> {
        let kind = HealthDataKind::from_key(&request.data_type_key)?;
        let Some(binding) = self.binding.read().await.clone() else {
            warn!("writeData with no host attached");
            return Ok(false);
        };
        let (data_type, field) = kind.resolve();
        let insert = DataInsertRequest {
            app_package_name: binding.package_name,
            stream_name: None,
            point: NewDataPoint {
                data_type,
                field,
                value: GfitConverters::write_value(kind, request.value),
                start_millis: request.start_time,
                end_millis: request.end_time,
            },
        };
        match self.vendor_call(self.client.insert_data(insert)).await {
            Ok(()) => {
                info!("data set added for {}", kind.key());
                Ok(true)
            }
            Err(e) => {
                warn!("data insert failed: {e}");
                Ok(false)
            }
        }
    }

    /// Write a workout session with optional energy and distance totals.
    ///
    /// The activity key is matched against the catalog, degrading to the
    /// vendor's unknown sentinel; this operation has no structural
    /// failure beyond undecodable arguments.
    ///
    /// # Errors
    ///
    /// Currently none beyond argument decoding in [`Self::dispatch`];
    /// kept fallible for parity with the other operations.
    pub async fn write_workout_data(&self, request: &WorkoutWriteRequest) -> BridgeResult<bool> {
        let Some(binding) = self.binding.read().await.clone() else {
            warn!("writeWorkoutData with no host attached");
            return Ok(false);
        };
        let activity = vendor_activity_for_key(&request.activity_type);

        let mut data = vec![DataInsertRequest {
            app_package_name: binding.package_name.clone(),
            stream_name: Some(STREAM_ACTIVITY.to_owned()),
            point: NewDataPoint {
                data_type: VendorDataType::ActivitySegment,
                field: VendorField::Activity,
                value: FieldValue::Text(activity.to_owned()),
                start_millis: request.start_time,
                end_millis: request.end_time,
            },
        }];
        if let Some(distance) = request.total_distance {
            data.push(DataInsertRequest {
                app_package_name: binding.package_name.clone(),
                stream_name: Some(STREAM_DISTANCE.to_owned()),
                point: NewDataPoint {
                    data_type: VendorDataType::DistanceDelta,
                    field: VendorField::Distance,
                    value: FieldValue::Float(distance as f64),
                    start_millis: request.start_time,
                    end_millis: request.end_time,
                },
            });
        }
        if let Some(energy) = request.total_energy_burned {
            data.push(DataInsertRequest {
                app_package_name: binding.package_name.clone(),
                stream_name: Some(STREAM_CALORIES.to_owned()),
                point: NewDataPoint {
                    data_type: VendorDataType::CaloriesExpended,
                    field: VendorField::Calories,
                    value: FieldValue::Float(energy as f64),
                    start_millis: request.start_time,
                    end_millis: request.end_time,
                },
            });
        }

        let insert = SessionInsertRequest {
            identifier: Uuid::new_v4().to_string(),
            activity: activity.to_owned(),
            app_package_name: binding.package_name,
            start_millis: request.start_time,
            end_millis: request.end_time,
            data,
        };
        match self.vendor_call(self.client.insert_session(insert)).await {
            Ok(()) => {
                info!("workout session added: {activity}");
                Ok(true)
            }
            Err(e) => {
                warn!("workout insert failed: {e}");
                Ok(false)
            }
        }
    }

    /// Total steps in an interval via the vendor's derived aggregate.
    ///
    /// # Errors
    ///
    /// Currently none beyond argument decoding in [`Self::dispatch`]; a
    /// missing host, vendor failure, or empty bucket answers `None`.
    pub async fn get_total_steps_in_interval(
        &self,
        request: &IntervalRequest,
    ) -> BridgeResult<Option<i64>> {
        if self.binding.read().await.is_none() {
            warn!("getTotalStepsInInterval with no host attached");
            return Ok(None);
        }
        let vendor_request = DataReadRequest {
            data_types: vec![VendorDataType::StepCountDelta],
            start_millis: request.start_time,
            end_millis: request.end_time,
            aggregate: Some(AggregateSpec {
                source_package: AGGREGATE_STEPS_PACKAGE.to_owned(),
                stream_name: AGGREGATE_STEPS_STREAM.to_owned(),
                data_type: VendorDataType::StepCountDelta,
                bucket_millis: request.end_time - request.start_time,
            }),
        };
        match self.vendor_call(self.client.read_data(vendor_request)).await {
            Ok(response) => {
                let total = GfitConverters::aggregate_steps(&response);
                let window = window_label(request.start_time, request.end_time);
                match total {
                    Some(steps) => info!("returning {steps} steps for {window}"),
                    None => info!("no steps for {window}"),
                }
                Ok(total)
            }
            Err(e) => {
                warn!("aggregate steps read failed: {e}");
                Ok(None)
            }
        }
    }

    /// Run a vendor call under the bounded permit pool.
    async fn vendor_call<T, E>(
        &self,
        fut: impl Future<Output = Result<T, E>>,
    ) -> Result<T, E> {
        // The semaphore is never closed; a failed acquire only means we
        // proceed without bounding, which cannot happen in practice.
        let _permit = self.vendor_permits.acquire().await.ok();
        fut.await
    }
}

/// Serialize an outbound value onto the wire. The record types serialize
/// infallibly; a non-finite float degrades to `null`.
fn to_wire<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Human-readable label for an epoch-millisecond window, for logs.
fn window_label(start_millis: i64, end_millis: i64) -> String {
    let format = |millis: i64| {
        Utc.timestamp_millis_opt(millis).single().map_or_else(
            || millis.to_string(),
            |instant| instant.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
    };
    format!("{} to {}", format(start_millis), format(end_millis))
}
