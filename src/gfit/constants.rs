// ABOUTME: Vendor sentinel values fixed by the Google Fit data model
// ABOUTME: Sleep segment type codes used by the session extraction rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Vendor sentinels.

/// Sleep segment type: user awake inside a sleep session.
pub const SLEEP_SEGMENT_AWAKE: i64 = 1;

/// Sleep segment type: user asleep (generic).
pub const SLEEP_SEGMENT_SLEEPING: i64 = 2;

/// Sleep segment type: user out of bed during a sleep session.
pub const SLEEP_SEGMENT_OUT_OF_BED: i64 = 3;
