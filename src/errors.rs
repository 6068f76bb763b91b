// ABOUTME: Unified error type for the bridge translation layer
// ABOUTME: Structural caller errors only - vendor failures degrade fail-soft and never appear here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bridge Error Handling
//!
//! `BridgeError` covers structural errors: a request that is malformed or
//! references vocabulary the bridge does not know. These indicate a caller
//! or integration bug and always propagate to the caller as explicit
//! errors.
//!
//! Environmental failures (a vendor call that fails, an operation issued
//! while no host is attached) are deliberately NOT represented here. They
//! degrade to an empty or negative success-shaped result and are only
//! logged. Keeping the two classes apart is a load-bearing property of the
//! bridge contract; see the handler in [`crate::bridge`].

use thiserror::Error;

/// Result alias used across the bridge surface.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Structural errors surfaced to the bridge caller.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A semantic data-type key outside the closed registry set.
    #[error("unsupported data type key: {0}")]
    UnknownKind(String),

    /// An access-mode value outside the defined read/write/read-write set.
    #[error("unknown access mode: {0}")]
    InvalidAccessMode(i64),

    /// Parallel `types` / `permissions` arrays of differing length.
    #[error("permission request arity mismatch: {types} types vs {permissions} permissions")]
    ArityMismatch {
        /// Length of the `types` array.
        types: usize,
        /// Length of the `permissions` array.
        permissions: usize,
    },

    /// A method name the bridge does not implement.
    #[error("method not implemented: {0}")]
    UnsupportedMethod(String),

    /// Method arguments that fail to deserialize into the expected shape.
    #[error("invalid arguments for {method}: {source}")]
    InvalidArguments {
        /// The bridge method whose arguments were rejected.
        method: &'static str,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

impl BridgeError {
    /// Stable machine-readable code for the bridge caller.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownKind(_) => "UNKNOWN_KIND",
            Self::InvalidAccessMode(_) => "INVALID_ACCESS_MODE",
            Self::ArityMismatch { .. } => "ARITY_MISMATCH",
            Self::UnsupportedMethod(_) => "NOT_IMPLEMENTED",
            Self::InvalidArguments { .. } => "INVALID_ARGUMENTS",
        }
    }
}
