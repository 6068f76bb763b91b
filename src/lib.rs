// ABOUTME: Main library entry point for the fitbridge health data bridge core
// ABOUTME: Type registry, permission resolution, and vendor response normalization for Google Fit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitbridge Core
//!
//! The translation core of a mobile health-data bridge plugin: a stable,
//! vendor-independent vocabulary of health data kinds on one side, the
//! Google Fit platform on the other, and the pure mapping layer between
//! them.
//!
//! ## Architecture
//!
//! - **Registry** ([`registry`]): the closed set of semantic data kinds
//!   and their fixed vendor (record type, field) pairs, plus the workout
//!   activity catalog.
//! - **Permissions** ([`permissions`]): derives the minimal vendor scope
//!   set from (kind, access mode) requests, including the composite
//!   session scopes sleep and workout kinds require.
//! - **Vendor boundary** ([`gfit`]): request/response DTOs, the
//!   [`gfit::FitnessClient`] seam standing in for the platform SDK, and
//!   the pure converters that normalize vendor responses into flat bridge
//!   records.
//! - **Handler** ([`bridge`]): method dispatch, one-shot permission
//!   tokens, bounded vendor-call concurrency, and the asymmetric error
//!   policy (malformed requests error; environmental failures degrade to
//!   empty results).
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitbridge_core::bridge::{HealthBridge, HostBinding};
//! use fitbridge_core::models::ReadRequest;
//! # use fitbridge_core::gfit::FitnessClient;
//! # async fn example(client: Arc<dyn FitnessClient>) -> Result<(), fitbridge_core::errors::BridgeError> {
//! let bridge = HealthBridge::new(client);
//! bridge
//!     .attach(HostBinding {
//!         package_name: "com.example.app".to_owned(),
//!         fine_location_granted: false,
//!     })
//!     .await;
//!
//! let records = bridge
//!     .get_data(&ReadRequest {
//!         data_type_key: "HEART_RATE".to_owned(),
//!         start_time: 1_700_000_000_000,
//!         end_time: 1_700_086_400_000,
//!     })
//!     .await?;
//! println!("{} heart rate samples", records.len());
//! # Ok(())
//! # }
//! ```

/// The bridge handler: dispatch, permission tokens, vendor concurrency.
pub mod bridge;

/// Fixed protocol constants.
pub mod constants;

/// Structural error types surfaced to the bridge caller.
pub mod errors;

/// Vendor (Google Fit) boundary: DTOs, client seam, converters.
pub mod gfit;

/// Bridge-facing data models.
pub mod models;

/// Permission scope resolution.
pub mod permissions;

/// Semantic data kind registry and workout activity catalog.
pub mod registry;
