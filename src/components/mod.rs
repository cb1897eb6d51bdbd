//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and the auth route guard (main entry point)
//! - [`landing`] - Public landing page
//! - [`auth_modal`] - Sign in / sign up dialog
//! - [`layout`] - Sidebar layout shared by the signed-in pages
//! - [`dashboard`] - Overview metrics and charts
//! - [`transfer`] - Two-pane transfer setup screen
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth_modal;
pub mod dashboard;
pub mod icons;
pub mod landing;
pub mod layout;
pub mod not_found;
pub mod router;
pub mod theme_toggle;
pub mod transfer;

pub use router::AppRouter;
