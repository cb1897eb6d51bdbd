//! Browser-facing services.
//!
//! - [`auth`] - identity service requests and session persistence
//! - [`theme`] - light/dark theme persistence
//! - [`error`] - error types for the browser plumbing

pub mod auth;
pub mod error;
pub mod theme;
