// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Ingestion routes for reporting devices.

use crate::error::{AppError, Result};
use crate::models::{CheckAction, CheckEvent, LocationReport, PointId};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Ingestion routes (app-id gated in routes/mod.rs).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ingest/location", post(report_location))
        .route("/ingest/event", post(report_event))
}

// ─── Location Reports ────────────────────────────────────────

#[derive(Serialize)]
pub struct LocationAck {
    pub point_id: PointId,
}

/// Accept one location report and append it to the point store.
///
/// A failed append is always reported to the device; nothing is dropped
/// silently.
async fn report_location(
    State(state): State<Arc<AppState>>,
    Json(report): Json<LocationReport>,
) -> Result<Json<LocationAck>> {
    report
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let point_id = state.store.append(report)?;
    Ok(Json(LocationAck { point_id }))
}

// ─── Check-in / Check-out Events ─────────────────────────────

#[derive(Deserialize, Validate)]
pub struct EventRequest {
    #[validate(length(min = 1, max = 50))]
    pub reporter_name: String,
    #[validate(length(min = 1, max = 50))]
    pub session_id: String,
    #[validate(length(min = 1, max = 50))]
    pub nonce: String,
    pub action: CheckAction,
}

#[derive(Serialize)]
pub struct EventAck {
    pub accepted: bool,
    /// True when this (reporter, session, nonce) was already seen; the
    /// caller must not trigger another append for it.
    pub duplicate: bool,
}

/// Log a device check-in/check-out event.
async fn report_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EventRequest>,
) -> Result<Json<EventAck>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fresh = state.ingest_log.record(CheckEvent {
        reporter_name: request.reporter_name,
        session_id: request.session_id,
        nonce: request.nonce,
        action: request.action,
        logged_at: chrono::Utc::now(),
    });

    Ok(Json(EventAck {
        accepted: true,
        duplicate: !fresh,
    }))
}
