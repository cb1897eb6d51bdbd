//! Platform-neutral core of the AquaCloud client.
//!
//! This crate holds everything the web UI renders from but that does not
//! need a browser:
//! - [`models`] - providers, entries, auth session and routes
//! - [`catalog`] - provider registry plus listing lookup
//! - [`browser`] - the source/destination file-browser state machine
//! - [`transfer`] - transfer session id and start gating
//! - [`dashboard`] - dashboard mock data and chart geometry

pub mod browser;
pub mod catalog;
pub mod dashboard;
pub mod error;
mod log;
pub mod models;
pub mod transfer;

pub use browser::{Crumb, ListingTicket, Pane, PaneId, TransferBrowser};
pub use catalog::{Catalog, ListingSource, StaticListings};
pub use error::{AuthError, BrowseError, CatalogError};
pub use models::{
    AppRoute, AuthState, Credentials, DirectoryKey, Entry, EntryKind, Provider, ProviderRegistry,
    User,
};
pub use transfer::{SessionId, TransferSession};
