//! Relay service for Google Forms submissions.
//!
//! Receives form submissions over an authenticated HTTP endpoint and posts them
//! to a Discord channel as rich embeds with Allow/Deny review buttons. The
//! crate is split into the same layers as the HTTP backend it grew out of:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Formatting, dispatch, and relay-client logic
//! - **Model Layer** (`model/`) - Embed payloads, form submissions, and API DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token request guard
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (secret, message dispatcher)
//! - **Router** (`router`) - Axum route configuration and CORS
//! - **Bot** (`bot`) - Lazily initialized Discord gateway handle
//!
//! Button interactions are deliberately not handled here; a separate bot process
//! owns the `form_allow` / `form_deny` custom ids.

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod testkit;
