// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Services module - business logic layer.

pub mod export;
pub mod ingest;
pub mod route_index;

pub use export::GeoJsonExporter;
pub use ingest::IngestLog;
pub use route_index::RouteIndex;
