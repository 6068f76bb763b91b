// ABOUTME: Vendor (Google Fit) boundary - response DTOs, the SDK client seam, and converters
// ABOUTME: Everything vendor-shaped lives here; the rest of the crate speaks semantic vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vendor Boundary
//!
//! The vendor platform is reached through exactly one seam, the
//! [`FitnessClient`] trait. Everything on this side of the seam is a plain
//! immutable value: requests are constructed up front (no builder chains),
//! responses are serde DTOs, and the converters that shape responses into
//! bridge records are pure and synchronous.
//!
//! A failure behind the seam is environmental by definition. It is logged
//! and degrades to "no data" - it never propagates as an error to the
//! bridge caller.

pub mod constants;
mod converters;
mod models;

mod client;

pub use client::{FitnessClient, VendorError};
pub use converters::GfitConverters;
pub use models::{
    AggregateSpec, Bucket, DataInsertRequest, DataPoint, DataReadRequest, DataReadResponse,
    DataSet, DataSource, FieldValue, NewDataPoint, Session, SessionBundle, SessionFilter,
    SessionInsertRequest, SessionReadRequest, SessionReadResponse,
};
