// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Device check-in/check-out events (the legacy logger table).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a device is starting or ending a tracking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckAction {
    CheckIn,
    CheckOut,
}

/// One logged device event. The core never interprets these beyond
/// deduplicating by (reporter, session, nonce); each event triggers at most
/// one point append upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEvent {
    pub reporter_name: String,
    pub session_id: String,
    /// Client-chosen replay guard
    pub nonce: String,
    pub action: CheckAction,
    /// Server timestamp assigned when the event was logged
    pub logged_at: DateTime<Utc>,
}
