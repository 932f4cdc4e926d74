// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Viewer API routes: route list, GeoJSON exports, route deletion.

use crate::error::Result;
use crate::time_utils::format_gps_time;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Viewer routes for the map frontend.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/routes", get(list_routes))
        .route("/api/routes/{session_id}/geojson", get(get_route_geojson))
        .route("/api/routes/{session_id}", delete(delete_route))
        .route("/api/positions/latest", get(get_latest_positions))
}

// ─── Route List ──────────────────────────────────────────────

/// One selectable route in the list.
#[derive(Serialize)]
pub struct RouteListItem {
    pub session_id: String,
    pub reporter_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Display span, e.g. "(Jan 3 2007 11:43AM - Jan 3 2007 12:10PM)"
    pub times: String,
}

#[derive(Serialize)]
pub struct RouteListResponse {
    pub routes: Vec<RouteListItem>,
}

/// List known routes, newest first.
async fn list_routes(State(state): State<Arc<AppState>>) -> Result<Json<RouteListResponse>> {
    let routes = state
        .route_index
        .list_routes()?
        .into_iter()
        .map(|summary| RouteListItem {
            times: format!(
                "({} - {})",
                format_gps_time(summary.start_time),
                format_gps_time(summary.end_time)
            ),
            session_id: summary.session_id,
            reporter_name: summary.reporter_name,
            start_time: summary.start_time,
            end_time: summary.end_time,
        })
        .collect();

    Ok(Json(RouteListResponse { routes }))
}

// ─── GeoJSON Exports ─────────────────────────────────────────

/// Get one route as a GeoJSON FeatureCollection, points in insertion order.
async fn get_route_geojson(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<geojson::FeatureCollection>> {
    tracing::debug!(session_id = %session_id, "Exporting route");
    let collection = state.exporter.export_session(&session_id)?;
    Ok(Json(collection))
}

/// Get the latest position of every session as a GeoJSON FeatureCollection.
async fn get_latest_positions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<geojson::FeatureCollection>> {
    let collection = state.exporter.export_latest_per_session()?;
    Ok(Json(collection))
}

// ─── Route Deletion ──────────────────────────────────────────

#[derive(Serialize)]
pub struct DeleteRouteResponse {
    pub session_id: String,
    pub deleted: usize,
}

/// Delete a route and all its points. Idempotent.
async fn delete_route(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<DeleteRouteResponse>> {
    let deleted = state.store.delete_session(&session_id)?;
    Ok(Json(DeleteRouteResponse {
        session_id,
        deleted,
    }))
}
