// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

use gps_plotter::config::Config;
use gps_plotter::models::LocationReport;
use gps_plotter::routes::create_router;
use gps_plotter::services::{GeoJsonExporter, IngestLog, RouteIndex};
use gps_plotter::store::PointStore;
use gps_plotter::AppState;
use std::sync::Arc;

/// Create a test app with a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(PointStore::new())
}

/// Create a test app over a specific store (e.g. an offline one).
#[allow(dead_code)]
pub fn create_test_app_with_store(store: PointStore) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let route_index = RouteIndex::new(store.clone());
    let exporter = GeoJsonExporter::new(store.clone());
    let ingest_log = IngestLog::new();

    let state = Arc::new(AppState {
        config,
        store,
        route_index,
        exporter,
        ingest_log,
    });

    (create_router(state.clone()), state)
}

/// A valid location report for session/reporter, recorded at the given
/// minute offset of a fixed test day.
#[allow(dead_code)]
pub fn sample_report(session: &str, reporter: &str, minute: u32) -> LocationReport {
    use chrono::TimeZone;

    LocationReport {
        session_id: session.to_string(),
        reporter_name: reporter.to_string(),
        recorded_at: Some(
            chrono::Utc
                .with_ymd_and_hms(2024, 6, 1, 10, minute, 0)
                .unwrap(),
        ),
        latitude: 47.6366310,
        longitude: -122.2145580,
        speed: 2,
        direction: 180,
        distance: 0.4,
        location_method: "gps".to_string(),
        accuracy: 12,
        extra_info: String::new(),
        event_type: String::new(),
        phone_number: None,
    }
}
