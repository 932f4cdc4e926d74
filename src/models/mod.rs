// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Data models for the application.

pub mod event;
pub mod point;
pub mod route;

pub use event::{CheckAction, CheckEvent};
pub use point::{LocationPoint, LocationReport, PointId};
pub use route::RouteSummary;
