//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup: theme, session restore, and routing.

use aquacloud_core::{AuthState, User};
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::components::auth_modal::{AuthMode, AuthModal};
use crate::config::PREFERS_DARK_QUERY;
use crate::core::auth;
use crate::core::theme::{self, Theme};
use crate::utils::log;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. It is the only place the session lives;
/// components never talk to storage for auth state directly.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Identity session. `Loading` until the persisted session is checked.
    pub auth: RwSignal<AuthState>,

    /// Colour theme.
    pub theme: RwSignal<Theme>,

    /// Auth dialog, open in the given mode.
    pub auth_modal: RwSignal<Option<AuthMode>>,
}

impl AppContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            auth: RwSignal::new(AuthState::Loading),
            theme: RwSignal::new(theme),
            auth_modal: RwSignal::new(None),
        }
    }

    /// Record a successful sign-in and close the dialog.
    pub fn signed_in(&self, user: User) {
        log::info(&format!("Signed in as {}", user.email));
        self.auth.set(AuthState::SignedIn(user));
        self.auth_modal.set(None);
    }

    /// Drop the session. The route guard takes the user back to the landing page.
    pub fn logout(&self) {
        auth::logout();
        self.auth.set(AuthState::SignedOut);
    }

    pub fn open_auth(&self, mode: AuthMode) {
        self.auth_modal.set(Some(mode));
    }

    pub fn close_auth(&self) {
        self.auth_modal.set(None);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        theme::save(next);
        self.theme.set(next);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Applies the stored (or system) theme
/// - Restores the persisted session in the background
/// - Renders the router and the auth dialog
#[component]
pub fn App() -> impl IntoView {
    let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
    let initial_theme = theme::load().unwrap_or(if prefers_dark.get_untracked() {
        Theme::Dark
    } else {
        Theme::Light
    });

    let ctx = AppContext::new(initial_theme);
    provide_context(ctx);

    Effect::new(move || theme::apply(ctx.theme.get()));

    spawn_local(async move {
        let state = match auth::restore().await {
            Some(user) => AuthState::SignedIn(user),
            None => AuthState::SignedOut,
        };
        ctx.auth.set(state);
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: var(--bg, #f8fafc);
                    color: var(--text, #0f172a);
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: rgba(100, 116, 139, 0.1);
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #dc2626;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: linear-gradient(90deg, #2563eb, #9333ea);
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
            <AuthModal />
        </ErrorBoundary>
    }
}
