//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Mock listing data is bundled into the core crate at compile time.

use std::sync::LazyLock;

use aquacloud_core::Catalog;

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown in headers and the sidebar.
pub const APP_NAME: &str = "AquaCloud";

/// Footer tagline.
pub const APP_TAGLINE: &str = "Transfer data as naturally as water flows";

/// Support address shown on the landing page contact section.
pub const CONTACT_EMAIL: &str = "hello@aquacloud.com";

/// Support phone line shown on the landing page contact section.
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

// =============================================================================
// Identity Service
// =============================================================================

/// Firebase Web API key, injected at build time.
///
/// Without it every identity request fails with a configuration error
/// instead of reaching the network.
pub const FIREBASE_API_KEY: Option<&str> = option_env!("AQUACLOUD_FIREBASE_API_KEY");

/// Firebase project id, injected at build time. Needed for Google sign-in.
pub const FIREBASE_PROJECT_ID: Option<&str> = option_env!("AQUACLOUD_FIREBASE_PROJECT_ID");

/// Firebase auth domain override; defaults to `<project>.firebaseapp.com`.
pub const FIREBASE_AUTH_DOMAIN: Option<&str> = option_env!("AQUACLOUD_FIREBASE_AUTH_DOMAIN");

/// Identity Toolkit REST endpoint root.
pub const IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Secure token endpoint used to refresh a persisted session.
pub const TOKEN_ENDPOINT: &str = "https://securetoken.googleapis.com/v1/token";

/// Global object installed by `assets/js/aqua-auth.js` for popup sign-in.
pub const AUTH_BRIDGE_GLOBAL: &str = "aquaAuth";

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key for the signed-in user.
pub const USER_SESSION_KEY: &str = "aquacloud.user";

/// localStorage key for the colour theme.
pub const THEME_KEY: &str = "theme";

// =============================================================================
// UI Configuration
// =============================================================================

/// Simulated send time of the contact form (milliseconds).
pub const CONTACT_SEND_MS: u32 = 1000;

/// How long the contact form shows its acknowledgement (milliseconds).
pub const CONTACT_ACK_MS: u32 = 3000;

/// Media query used when no theme has been stored yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Mock Data
// =============================================================================

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::bundled);

/// Providers and directory listings backing the transfer screen.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
