// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! GeoJSON export of route points.
//!
//! Replaces the legacy database-session counter: `geojson_counter` is a
//! per-call enumeration of the already-ordered point sequence, so it starts
//! at 1 on every export and can never leak across requests.

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::error::AppError;
use crate::models::LocationPoint;
use crate::store::PointStore;
use crate::time_utils::format_gps_time;

/// Renders point sequences as GeoJSON FeatureCollections.
///
/// Output order is the order the store hands points over: insertion order
/// for a single session, `recorded_at` order for latest-per-session. Which
/// feature is a route's terminal point is the caller's concern; only order
/// and counters are guaranteed here.
#[derive(Clone)]
pub struct GeoJsonExporter {
    store: PointStore,
}

impl GeoJsonExporter {
    pub fn new(store: PointStore) -> Self {
        Self { store }
    }

    /// Export one session's points as a FeatureCollection.
    ///
    /// Fails with `NotFound` when the session has no points.
    pub fn export_session(&self, session_id: &str) -> Result<FeatureCollection, AppError> {
        let points = self.store.points_for_session(session_id)?;
        if points.is_empty() {
            return Err(AppError::NotFound(format!(
                "no points recorded for session {}",
                session_id
            )));
        }
        Ok(collect_features(&points))
    }

    /// Export the latest point of every session as a FeatureCollection.
    ///
    /// An empty store yields an empty collection; that is a normal state.
    pub fn export_latest_per_session(&self) -> Result<FeatureCollection, AppError> {
        let points = self.store.latest_point_per_session()?;
        Ok(collect_features(&points))
    }
}

fn collect_features(points: &[LocationPoint]) -> FeatureCollection {
    let features = points
        .iter()
        .enumerate()
        .map(|(rank, point)| to_feature(point, rank as u64 + 1))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Build one point Feature. `counter` is the 1-based rank within this export.
fn to_feature(point: &LocationPoint, counter: u64) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("speed".to_string(), json!(point.speed));
    properties.insert("direction".to_string(), json!(point.direction));
    properties.insert("distance".to_string(), json!(point.distance));
    properties.insert(
        "location_method".to_string(),
        json!(point.location_method),
    );
    properties.insert(
        "gps_time".to_string(),
        match point.recorded_at {
            Some(recorded_at) => json!(format_gps_time(recorded_at)),
            None => serde_json::Value::Null,
        },
    );
    properties.insert("reporter_name".to_string(), json!(point.reporter_name));
    properties.insert("phone_number".to_string(), json!(point.phone_number));
    properties.insert("accuracy".to_string(), json!(point.accuracy));
    properties.insert("geojson_counter".to_string(), json!(counter));
    properties.insert("extra_info".to_string(), json!(point.extra_info));

    Feature {
        bbox: None,
        // GeoJSON coordinate order: longitude first.
        geometry: Some(Geometry::new(Value::Point(vec![
            point.longitude,
            point.latitude,
        ]))),
        id: Some(Id::String(point.session_id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}
