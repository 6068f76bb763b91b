// ABOUTME: Fixed protocol constants shared across the bridge translation layer
// ABOUTME: Unit labels, glucose conversion factor, and vendor source identities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Protocol constants.
//!
//! Values here are fixed by the bridge wire contract or by the vendor
//! platform and must not be derived at runtime.

/// Request code attached to vendor permission prompts so the OS-level
/// callback can be routed back to the pending bridge request.
pub const PERMISSIONS_REQUEST_CODE: u32 = 1111;

/// Conversion factor between the vendor's native glucose unit (mmol/L)
/// and the unit exposed on the bridge (mg/dL). 1 mmol/L = 18 mg/dL.
pub const MMOLL_TO_MGDL: f64 = 18.0;

/// Unit label attached to sleep duration records.
pub const UNIT_MINUTES: &str = "MINUTES";

/// Unit label attached to workout energy totals.
pub const UNIT_KILOCALORIE: &str = "KILOCALORIE";

/// Unit label attached to workout distance totals.
pub const UNIT_METER: &str = "METER";

/// Package identity of the vendor's derived step-count data source.
pub const AGGREGATE_STEPS_PACKAGE: &str = "com.google.android.gms";

/// Stream name of the vendor's derived step-count data source.
pub const AGGREGATE_STEPS_STREAM: &str = "estimated_steps";

/// Number of vendor calls allowed in flight at once. Mirrors the bounded
/// worker pool the host platform used for offloading blocking SDK calls.
pub const VENDOR_CALL_PERMITS: usize = 4;
