//! Seatbook - seat reservation web client
//!
//! This library provides:
//! - Typed, fail-soft access to browser `localStorage`
//! - Navigation and unauthorized-access bridges for non-UI code
//! - Auth-gated route guards
//! - Small observable stores (loading, user, session)
//! - Localization with runtime locale detection
//! - An HTTP API client with 401 interception
//! - Web UI (Dioxus fullstack + router, Pico CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Framework-agnostic client core
pub mod api;
pub mod bridge;
pub mod config;
pub mod i18n;
pub mod storage;
pub mod stores;
