// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Append-only log of device check-in/check-out events.
//!
//! The legacy plugin kept these in a separate logger table keyed by
//! (phone, session, nonce). The log is opaque to the rest of the system;
//! its only semantic is nonce deduplication so a replayed event triggers
//! at most one point append upstream.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use crate::models::CheckEvent;

#[derive(Default)]
struct LogInner {
    events: Mutex<Vec<CheckEvent>>,
    seen: DashMap<(String, String, String), ()>,
}

/// Shared, append-only event log.
#[derive(Clone, Default)]
pub struct IngestLog {
    inner: Arc<LogInner>,
}

impl IngestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event. Returns `false` when the (reporter, session, nonce)
    /// key was already seen; the event is still logged either way.
    pub fn record(&self, event: CheckEvent) -> bool {
        let key = (
            event.reporter_name.clone(),
            event.session_id.clone(),
            event.nonce.clone(),
        );
        let fresh = self.inner.seen.insert(key, ()).is_none();

        if !fresh {
            tracing::warn!(
                reporter = %event.reporter_name,
                session_id = %event.session_id,
                nonce = %event.nonce,
                "Replayed ingest event"
            );
        }

        self.inner.events.lock().unwrap().push(event);
        fresh
    }

    /// Snapshot of all logged events in arrival order.
    pub fn events(&self) -> Vec<CheckEvent> {
        self.inner.events.lock().unwrap().clone()
    }
}
