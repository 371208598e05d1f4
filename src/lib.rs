//! HMS Web - hotel management front end
//!
//! A Dioxus single-page client for the hotel management REST API.
//!
//! This library provides:
//! - An HTTP client adapter with bearer-credential handling
//! - A session resolver shared by every screen
//! - Guest screens (rooms, bookings, service requests)
//! - Staff dashboards gated by role (reception, admin)
//! - Web UI (Dioxus + Tailwind CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// REST client (shared between server SSR and WASM client)
pub mod api;

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
