// ABOUTME: The FitnessClient trait - the single seam to the vendor SDK
// ABOUTME: Implementations wrap the platform SDK; failures surface as VendorError and degrade fail-soft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use thiserror::Error;

use super::models::{
    DataInsertRequest, DataReadRequest, DataReadResponse, SessionInsertRequest, SessionReadRequest,
    SessionReadResponse,
};
use crate::permissions::ScopeSet;

/// Failure reported by the vendor SDK boundary.
///
/// Every variant is environmental: the bridge logs it and answers the
/// caller with an empty or negative success-shaped result, never an error.
#[derive(Debug, Error)]
pub enum VendorError {
    /// An issued read or write call failed.
    #[error("vendor call failed: {0}")]
    CallFailed(String),

    /// The permission prompt could not be started.
    #[error("permission prompt failed: {0}")]
    PermissionPrompt(String),
}

/// The vendor SDK seam.
///
/// The bridge issues one awaited call per operation; the implementation is
/// expected to adapt whatever callback or task machinery the platform SDK
/// uses into that single call. Implementations must be `Send + Sync`; the
/// bridge bounds how many calls it keeps in flight.
#[async_trait]
pub trait FitnessClient: Send + Sync {
    /// Read raw history samples, optionally aggregated into buckets.
    ///
    /// # Errors
    ///
    /// [`VendorError::CallFailed`] when the platform call fails.
    async fn read_data(&self, request: DataReadRequest) -> Result<DataReadResponse, VendorError>;

    /// Read sessions and their attached data sets.
    ///
    /// # Errors
    ///
    /// [`VendorError::CallFailed`] when the platform call fails.
    async fn read_sessions(
        &self,
        request: SessionReadRequest,
    ) -> Result<SessionReadResponse, VendorError>;

    /// Insert a single sample.
    ///
    /// # Errors
    ///
    /// [`VendorError::CallFailed`] when the platform call fails.
    async fn insert_data(&self, request: DataInsertRequest) -> Result<(), VendorError>;

    /// Insert a session with its attached data sets.
    ///
    /// # Errors
    ///
    /// [`VendorError::CallFailed`] when the platform call fails.
    async fn insert_session(&self, request: SessionInsertRequest) -> Result<(), VendorError>;

    /// Whether the account currently holds every scope in the set.
    ///
    /// # Errors
    ///
    /// [`VendorError::CallFailed`] when the platform call fails.
    async fn has_permissions(&self, scopes: &ScopeSet) -> Result<bool, VendorError>;

    /// Start the OS-level permission prompt for the scope set.
    ///
    /// The outcome arrives asynchronously through the host's permission
    /// callback and is routed back by request code; this call only starts
    /// the flow.
    ///
    /// # Errors
    ///
    /// [`VendorError::PermissionPrompt`] when the prompt cannot start.
    async fn request_permissions(
        &self,
        scopes: &ScopeSet,
        request_code: u32,
    ) -> Result<(), VendorError>;
}
