// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Route listing: derived summaries over the point store.

use crate::error::AppError;
use crate::models::RouteSummary;
use crate::store::PointStore;

/// Lists known routes with display metadata, newest first.
///
/// Summaries are recomputed from the store on every call (pull model);
/// nothing is maintained incrementally.
#[derive(Clone)]
pub struct RouteIndex {
    store: PointStore,
}

impl RouteIndex {
    pub fn new(store: PointStore) -> Self {
        Self { store }
    }

    /// All routes, ordered by `start_time` descending; ties broken by
    /// `session_id` ascending for determinism. Sessions without any
    /// device-timestamped point are excluded. No routes is an empty list,
    /// not an error.
    pub fn list_routes(&self) -> Result<Vec<RouteSummary>, AppError> {
        let mut routes = self.store.route_spans()?;
        routes.sort_by(|a, b| {
            b.start_time
                .cmp(&a.start_time)
                .then_with(|| a.session_id.cmp(&b.session_id))
        });
        Ok(routes)
    }
}
