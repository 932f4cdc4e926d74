// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Append-only store of GPS location points, keyed by session.
//!
//! Points are immutable once appended. Within a session the stored order is
//! insertion order, which is also identity order: identities are allocated
//! while the session shard is locked, so concurrent appends can neither lose
//! data nor interleave out of identity order. `delete_session` removes the
//! whole session entry under the same shard lock, so a reader never observes
//! a partially deleted session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use crate::error::AppError;
use crate::models::{LocationPoint, LocationReport, PointId, RouteSummary};

/// Coordinates are stored at 7 decimal places, distances at 1.
const COORD_DECIMALS: i32 = 7;
const DISTANCE_DECIMALS: i32 = 1;

struct StoreInner {
    /// Next identity to hand out; identities start at 1.
    next_id: AtomicU64,
    /// Session id -> points in insertion order.
    sessions: DashMap<String, Vec<LocationPoint>>,
}

/// Concurrent point store.
///
/// Cheap to clone; clones share the same underlying data. An offline store
/// (see [`PointStore::new_offline`]) fails every operation closed with
/// `StoreUnavailable`, mirroring an unreachable database.
#[derive(Clone)]
pub struct PointStore {
    inner: Option<Arc<StoreInner>>,
}

impl PointStore {
    /// Create an empty, connected store.
    pub fn new() -> Self {
        Self {
            inner: Some(Arc::new(StoreInner {
                next_id: AtomicU64::new(1),
                sessions: DashMap::new(),
            })),
        }
    }

    /// Create a store whose backing storage is unreachable.
    ///
    /// Every operation returns `StoreUnavailable`; used to test fail-closed
    /// behavior.
    pub fn new_offline() -> Self {
        Self { inner: None }
    }

    fn inner(&self) -> Result<&Arc<StoreInner>, AppError> {
        self.inner
            .as_ref()
            .ok_or_else(|| AppError::StoreUnavailable("point store not connected".to_string()))
    }

    /// Append a location report, assigning its insert identity.
    ///
    /// Rejects reports without a session or reporter identity; nothing is
    /// written in that case.
    pub fn append(&self, report: LocationReport) -> Result<PointId, AppError> {
        if report.session_id.trim().is_empty() {
            return Err(AppError::Validation(
                "session_id must not be empty".to_string(),
            ));
        }
        if report.reporter_name.trim().is_empty() {
            return Err(AppError::Validation(
                "reporter_name must not be empty".to_string(),
            ));
        }

        let inner = self.inner()?;

        // Hold the session entry while allocating the identity so that
        // within-session vec order always matches identity order.
        let mut entry = inner.sessions.entry(report.session_id.clone()).or_default();
        let point_id = inner.next_id.fetch_add(1, Ordering::Relaxed);

        let point = LocationPoint {
            point_id,
            session_id: report.session_id,
            reporter_name: report.reporter_name,
            recorded_at: report.recorded_at,
            received_at: Utc::now(),
            latitude: round_to(report.latitude, COORD_DECIMALS),
            longitude: round_to(report.longitude, COORD_DECIMALS),
            speed: report.speed,
            direction: report.direction % 360,
            distance: round_to(report.distance, DISTANCE_DECIMALS),
            location_method: report.location_method,
            accuracy: report.accuracy,
            extra_info: report.extra_info,
            event_type: report.event_type,
            phone_number: report.phone_number,
        };

        tracing::debug!(
            point_id,
            session_id = %point.session_id,
            reporter = %point.reporter_name,
            "Appended location point"
        );

        entry.push(point);
        Ok(point_id)
    }

    /// All points of a session in insertion order. Unknown sessions yield an
    /// empty vec, not an error.
    pub fn points_for_session(&self, session_id: &str) -> Result<Vec<LocationPoint>, AppError> {
        let inner = self.inner()?;
        Ok(inner
            .sessions
            .get(session_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    /// The most recently inserted point of every session that has at least
    /// one point with a device timestamp, ordered by `recorded_at` ascending
    /// (identity breaks ties).
    pub fn latest_point_per_session(&self) -> Result<Vec<LocationPoint>, AppError> {
        let inner = self.inner()?;

        let mut latest: Vec<LocationPoint> = Vec::new();
        for entry in inner.sessions.iter() {
            // Vec order equals identity order, so the last eligible point is
            // the one with the greatest identity.
            if let Some(point) = entry.value().iter().rev().find(|p| p.recorded_at.is_some()) {
                latest.push(point.clone());
            }
        }

        latest.sort_by(|a, b| {
            a.recorded_at
                .cmp(&b.recorded_at)
                .then_with(|| a.point_id.cmp(&b.point_id))
        });
        Ok(latest)
    }

    /// Unordered route spans, one per (session, reporter) pair with at least
    /// one device-timestamped point. The route index sorts these for display.
    pub fn route_spans(&self) -> Result<Vec<RouteSummary>, AppError> {
        let inner = self.inner()?;

        let mut spans: HashMap<(String, String), RouteSummary> = HashMap::new();
        for entry in inner.sessions.iter() {
            for point in entry.value() {
                let Some(recorded_at) = point.recorded_at else {
                    continue;
                };
                let key = (point.session_id.clone(), point.reporter_name.clone());
                spans
                    .entry(key)
                    .and_modify(|span| {
                        span.start_time = span.start_time.min(recorded_at);
                        span.end_time = span.end_time.max(recorded_at);
                    })
                    .or_insert_with(|| RouteSummary {
                        session_id: point.session_id.clone(),
                        reporter_name: point.reporter_name.clone(),
                        start_time: recorded_at,
                        end_time: recorded_at,
                    });
            }
        }

        Ok(spans.into_values().collect())
    }

    /// Delete every point of a session. Idempotent: deleting an unknown
    /// session succeeds with count 0.
    pub fn delete_session(&self, session_id: &str) -> Result<usize, AppError> {
        let inner = self.inner()?;
        let deleted = inner
            .sessions
            .remove(session_id)
            .map(|(_, points)| points.len())
            .unwrap_or(0);

        if deleted > 0 {
            tracing::info!(session_id, deleted, "Deleted session");
        }
        Ok(deleted)
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn report(session: &str, reporter: &str, minute: u32) -> LocationReport {
        LocationReport {
            session_id: session.to_string(),
            reporter_name: reporter.to_string(),
            recorded_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 10, minute, 0).unwrap()),
            latitude: 47.6366310,
            longitude: -122.2145580,
            speed: 3,
            direction: 90,
            distance: 1.25,
            location_method: "gps".to_string(),
            accuracy: 10,
            extra_info: String::new(),
            event_type: String::new(),
            phone_number: None,
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = PointStore::new();
        let first = store.append(report("S1", "alice", 0)).unwrap();
        let second = store.append(report("S1", "alice", 1)).unwrap();
        assert!(second > first);

        let points = store.points_for_session("S1").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].point_id, first);
        assert_eq!(points[1].point_id, second);
    }

    #[test]
    fn test_append_rejects_empty_identities() {
        let store = PointStore::new();
        let err = store.append(report("", "alice", 0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = store.append(report("S1", "  ", 0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_append_rounds_fixed_precision() {
        let store = PointStore::new();
        let mut raw = report("S1", "alice", 0);
        raw.latitude = 47.63663149999;
        raw.distance = 1.24999;
        store.append(raw).unwrap();

        let points = store.points_for_session("S1").unwrap();
        assert_eq!(points[0].latitude, 47.6366315);
        assert_eq!(points[0].distance, 1.2);
    }

    #[test]
    fn test_unknown_session_is_empty_not_error() {
        let store = PointStore::new();
        assert!(store.points_for_session("nope").unwrap().is_empty());
    }

    #[test]
    fn test_latest_point_per_session_skips_untimestamped() {
        let store = PointStore::new();
        store.append(report("S1", "alice", 0)).unwrap();
        let last_id = store.append(report("S1", "alice", 5)).unwrap();

        // An untimestamped trailing point is not eligible as "latest".
        let mut malformed = report("S1", "alice", 6);
        malformed.recorded_at = None;
        store.append(malformed).unwrap();

        // A session with only malformed points never appears.
        let mut only_malformed = report("S2", "bob", 0);
        only_malformed.recorded_at = None;
        store.append(only_malformed).unwrap();

        let latest = store.latest_point_per_session().unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].point_id, last_id);
    }

    #[test]
    fn test_latest_point_per_session_ordered_by_recorded_at() {
        let store = PointStore::new();
        store.append(report("S1", "alice", 30)).unwrap();
        store.append(report("S2", "bob", 10)).unwrap();
        store.append(report("S3", "carol", 20)).unwrap();

        let latest = store.latest_point_per_session().unwrap();
        let sessions: Vec<&str> = latest.iter().map(|p| p.session_id.as_str()).collect();
        assert_eq!(sessions, vec!["S2", "S3", "S1"]);
    }

    #[test]
    fn test_route_spans_min_max() {
        let store = PointStore::new();
        store.append(report("S1", "alice", 10)).unwrap();
        store.append(report("S1", "alice", 0)).unwrap();
        store.append(report("S1", "alice", 5)).unwrap();

        let spans = store.route_spans().unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(
            spans[0].start_time,
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(
            spans[0].end_time,
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 10, 0).unwrap()
        );
    }

    #[test]
    fn test_route_spans_split_by_reporter() {
        let store = PointStore::new();
        store.append(report("S1", "alice", 0)).unwrap();
        store.append(report("S1", "bob", 1)).unwrap();

        let spans = store.route_spans().unwrap();
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_delete_session_idempotent() {
        let store = PointStore::new();
        store.append(report("S1", "alice", 0)).unwrap();
        store.append(report("S1", "alice", 1)).unwrap();

        assert_eq!(store.delete_session("S1").unwrap(), 2);
        assert!(store.points_for_session("S1").unwrap().is_empty());
        assert_eq!(store.delete_session("S1").unwrap(), 0);
    }

    #[test]
    fn test_offline_store_fails_closed() {
        let store = PointStore::new_offline();
        assert!(matches!(
            store.append(report("S1", "alice", 0)).unwrap_err(),
            AppError::StoreUnavailable(_)
        ));
        assert!(matches!(
            store.points_for_session("S1").unwrap_err(),
            AppError::StoreUnavailable(_)
        ));
        assert!(matches!(
            store.delete_session("S1").unwrap_err(),
            AppError::StoreUnavailable(_)
        ));
    }
}
