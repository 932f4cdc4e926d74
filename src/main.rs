// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! GPS Plotter API Server
//!
//! Records GPS location reports from mobile clients and serves routes and
//! latest positions as GeoJSON for the map frontend.

use gps_plotter::{
    config::Config,
    services::{GeoJsonExporter, IngestLog, RouteIndex},
    store::PointStore,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting GPS Plotter API");

    // Initialize the point store and the services reading through it
    let store = PointStore::new();
    let route_index = RouteIndex::new(store.clone());
    let exporter = GeoJsonExporter::new(store.clone());
    let ingest_log = IngestLog::new();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        route_index,
        exporter,
        ingest_log,
    });

    // Build router
    let app = gps_plotter::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gps_plotter=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
