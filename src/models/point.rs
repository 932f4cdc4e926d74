// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! GPS location point models for storage and ingestion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Insert-order identity assigned by the point store. Strictly increasing
/// across the whole store; within a session it is the only export ordering
/// key.
pub type PointId = u64;

/// Stored GPS report. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Store-assigned insert identity
    pub point_id: PointId,
    /// Tracking session this point belongs to (a "route")
    pub session_id: String,
    /// Device/user that produced the session
    pub reporter_name: String,
    /// Device-reported timestamp; absent for malformed reports.
    /// Used for route spans and latest-position ordering only, never for
    /// within-session export order (device clocks are unreliable).
    pub recorded_at: Option<DateTime<Utc>>,
    /// Server timestamp assigned at ingest
    pub received_at: DateTime<Utc>,
    /// Decimal degrees, 7 decimal places
    pub latitude: f64,
    /// Decimal degrees, 7 decimal places
    pub longitude: f64,
    /// Reporter-native units
    pub speed: u32,
    /// Degrees, [0, 360)
    pub direction: u16,
    /// One-decimal precision
    pub distance: f64,
    pub location_method: String,
    /// Meters
    pub accuracy: u32,
    pub extra_info: String,
    pub event_type: String,
    pub phone_number: Option<String>,
}

/// Incoming location report from a device, before the store assigns an
/// identity. Length bounds mirror the columns of the legacy locations table.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LocationReport {
    #[validate(length(min = 1, max = 50))]
    pub session_id: String,
    #[validate(length(min = 1, max = 50))]
    pub reporter_name: String,
    pub recorded_at: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    #[validate(range(max = 359))]
    pub direction: u16,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub location_method: String,
    #[serde(default)]
    pub accuracy: u32,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub extra_info: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub event_type: String,
    #[validate(length(max = 50))]
    pub phone_number: Option<String>,
}
