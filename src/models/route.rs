// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Derived route metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one route, derived from its points on demand.
///
/// Exists iff the (session, reporter) pair has at least one point with a
/// device-reported timestamp. Span times come from `recorded_at`, not
/// insertion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub session_id: String,
    pub reporter_name: String,
    /// Minimum `recorded_at` across the route's points
    pub start_time: DateTime<Utc>,
    /// Maximum `recorded_at` across the route's points
    pub end_time: DateTime<Utc>,
}
