// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Storage layer: the append-only point store.

pub mod points;

pub use points::PointStore;
