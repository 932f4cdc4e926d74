// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! GPS Plotter: record GPS location reports and serve them as routes.
//!
//! This crate provides the backend for ingesting session-scoped location
//! points, listing the resulting routes, and exporting them as GeoJSON
//! FeatureCollections for a web map.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::{GeoJsonExporter, IngestLog, RouteIndex};
use store::PointStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: PointStore,
    pub route_index: RouteIndex,
    pub exporter: GeoJsonExporter,
    pub ingest_log: IngestLog,
}
