// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Middleware for app-id authorization and security headers.

pub mod auth;
pub mod security;
