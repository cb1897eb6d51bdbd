//! Domain types shared by the core and the web UI.
//!
//! - [`Provider`], [`ProviderRegistry`] - cloud storage endpoints
//! - [`Entry`], [`EntryKind`], [`DirectoryKey`] - directory listings
//! - [`AuthState`], [`User`], [`Credentials`] - identity session
//! - [`AppRoute`], [`NavItem`] - hash-based navigation

mod auth;
mod entry;
mod provider;
mod route;

pub use auth::{AuthState, Credentials, User};
pub use entry::{DirectoryKey, Entry, EntryKind, FileCategory};
pub use provider::{NOT_SELECTED, Provider, ProviderRegistry};
pub use route::{AppRoute, NAV_ITEMS, NavItem, redirect_for};
