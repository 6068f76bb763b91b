// ABOUTME: Permission scope resolution from semantic data kinds and access modes
// ABOUTME: Accumulates the minimal vendor scope set, including composite session scopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Permission Resolver
//!
//! Translates a list of (kind, access mode) requests into the minimal set
//! of vendor permission scopes. Scope accumulation has set semantics:
//! resolution is idempotent and order-independent, duplicates collapse.
//!
//! Composite record kinds carry an extra requirement from the vendor:
//! sleep kinds and workouts need a session-level scope on top of the leaf
//! record type's scope - sleep-session read always, sleep-session write
//! when the requested mode includes write.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, BridgeResult};
use crate::registry::{HealthDataKind, VendorDataType};

/// Access mode requested for a data kind, as encoded on the bridge wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Read-only access (wire value 0).
    Read,
    /// Write-only access (wire value 1).
    Write,
    /// Read and write access (wire value 2).
    ReadWrite,
}

impl AccessMode {
    /// Decode a wire integer into an access mode.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidAccessMode`] for values outside 0..=2.
    pub const fn from_wire(value: i64) -> BridgeResult<Self> {
        match value {
            0 => Ok(Self::Read),
            1 => Ok(Self::Write),
            2 => Ok(Self::ReadWrite),
            other => Err(BridgeError::InvalidAccessMode(other)),
        }
    }

    /// Whether this mode grants reads.
    #[must_use]
    pub const fn includes_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Whether this mode grants writes.
    #[must_use]
    pub const fn includes_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// A single direction of access inside a resolved scope set.
///
/// `ReadWrite` requests expand into both directions; the vendor model has
/// no combined scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Read direction.
    Read,
    /// Write direction.
    Write,
}

/// Vendor session-level scopes required by composite record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionScope {
    /// Sleep session access.
    Sleep,
    /// Activity (workout) session access.
    Activity,
}

/// An accumulated, order-insensitive set of vendor permission scopes.
///
/// Built incrementally, then treated as immutable once resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopeSet {
    data: BTreeSet<(VendorDataType, Access)>,
    sessions: BTreeSet<(SessionScope, Access)>,
}

impl ScopeSet {
    /// Empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a list of (kind, mode) requests into a scope set.
    ///
    /// Set semantics make this idempotent: resolving the same requests
    /// twice, or in a different order, yields an equal set.
    #[must_use]
    pub fn resolve(requests: &[(HealthDataKind, AccessMode)]) -> Self {
        let mut scopes = Self::new();
        for &(kind, mode) in requests {
            scopes.add(kind, mode);
        }
        scopes
    }

    /// Add one (kind, mode) request to the set.
    pub fn add(&mut self, kind: HealthDataKind, mode: AccessMode) {
        let (data_type, _) = kind.resolve();
        if mode.includes_read() {
            self.data.insert((data_type, Access::Read));
        }
        if mode.includes_write() {
            self.data.insert((data_type, Access::Write));
        }
        // Session-based record kinds need a sleep-session scope on top of
        // the leaf record type: read always, write when requested.
        if kind.needs_session_scope() {
            self.sessions.insert((SessionScope::Sleep, Access::Read));
            if mode.includes_write() {
                self.sessions.insert((SessionScope::Sleep, Access::Write));
            }
        }
    }

    /// Scope set required to read one kind, as derived on the read path.
    ///
    /// Sleep reads add the sleep-session read scope. Workout reads add the
    /// activity-session read scope plus the calorie record type, and the
    /// distance record type only when the host has fine-location granted
    /// (distance is restricted vendor data).
    #[must_use]
    pub fn for_read(kind: HealthDataKind, fine_location_granted: bool) -> Self {
        let mut scopes = Self::new();
        let (data_type, _) = kind.resolve();
        scopes.data.insert((data_type, Access::Read));
        if kind.is_sleep() {
            scopes.sessions.insert((SessionScope::Sleep, Access::Read));
        } else if kind == HealthDataKind::Workout {
            scopes
                .sessions
                .insert((SessionScope::Activity, Access::Read));
            scopes
                .data
                .insert((VendorDataType::CaloriesExpended, Access::Read));
            if fine_location_granted {
                scopes
                    .data
                    .insert((VendorDataType::DistanceDelta, Access::Read));
            }
        }
        scopes
    }

    /// Scope set required to write one kind.
    ///
    /// Sleep writes carry the sleep-session read scope alongside the leaf
    /// write scope, matching the vendor requirement.
    #[must_use]
    pub fn for_write(kind: HealthDataKind) -> Self {
        let mut scopes = Self::new();
        let (data_type, _) = kind.resolve();
        scopes.data.insert((data_type, Access::Write));
        if kind.is_sleep() {
            scopes.sessions.insert((SessionScope::Sleep, Access::Read));
        }
        scopes
    }

    /// Whether the set contains a data-type scope.
    #[must_use]
    pub fn contains(&self, data_type: VendorDataType, access: Access) -> bool {
        self.data.contains(&(data_type, access))
    }

    /// Whether the set contains a session scope.
    #[must_use]
    pub fn contains_session(&self, scope: SessionScope, access: Access) -> bool {
        self.sessions.contains(&(scope, access))
    }

    /// Data-type scopes in deterministic order.
    pub fn data_scopes(&self) -> impl Iterator<Item = (VendorDataType, Access)> + '_ {
        self.data.iter().copied()
    }

    /// Session scopes in deterministic order.
    pub fn session_scopes(&self) -> impl Iterator<Item = (SessionScope, Access)> + '_ {
        self.sessions.iter().copied()
    }

    /// True when no scopes were accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.sessions.is_empty()
    }
}

/// Decode the parallel `types` / `permissions` arrays of a permission
/// request into typed (kind, mode) pairs.
///
/// # Errors
///
/// Returns [`BridgeError::ArityMismatch`] when the arrays differ in
/// length, [`BridgeError::UnknownKind`] for keys outside the registry, and
/// [`BridgeError::InvalidAccessMode`] for modes outside the enum.
pub fn decode_permission_pairs(
    types: &[String],
    permissions: &[i64],
) -> BridgeResult<Vec<(HealthDataKind, AccessMode)>> {
    if types.len() != permissions.len() {
        return Err(BridgeError::ArityMismatch {
            types: types.len(),
            permissions: permissions.len(),
        });
    }
    types
        .iter()
        .zip(permissions)
        .map(|(key, &mode)| Ok((HealthDataKind::from_key(key)?, AccessMode::from_wire(mode)?)))
        .collect()
}
