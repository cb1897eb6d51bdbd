//! Browser utility modules.
//!
//! Provides:
//! - [`dom`] - window, storage and URL hash access
//! - [`storage`] - JSON values in localStorage
//! - [`fetch`] - JSON requests to the identity service
//! - [`log`] - console logging

pub mod dom;
pub mod fetch;
pub mod log;
pub mod storage;
