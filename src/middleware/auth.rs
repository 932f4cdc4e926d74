// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! App-id check for the ingestion surface.
//!
//! Coarse authorization only: reporting devices must present the shared app
//! identifier from configuration. This replaces the mutable plugin option
//! the legacy system read at request time.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Header carrying the shared app identifier.
pub const APP_ID_HEADER: &str = "x-gps-app-id";

/// Reject ingestion requests that do not carry the configured app id.
pub async fn require_app_id(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let provided = req
        .headers()
        .get(APP_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(app_id) if app_id == state.config.app_id => Ok(next.run(req).await),
        Some(_) => {
            tracing::warn!("Ingest request with wrong app id");
            Err(AppError::Unauthorized)
        }
        None => Err(AppError::Unauthorized),
    }
}
