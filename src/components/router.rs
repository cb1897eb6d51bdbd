//! Application router component.
//!
//! Handles URL-based routing with hash history so the app can be served as
//! static files. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/path`
//! - **Guard on every change**: `redirect_for` runs whenever the route or the
//!   auth state changes; redirects replace the history entry
//! - **hashchange events**: Browser back/forward buttons work automatically

use aquacloud_core::AppRoute;
use aquacloud_core::models::redirect_for;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::Landing;
use crate::components::layout::{DashboardLayout, LoadingScreen};
use crate::components::not_found::NotFound;
use crate::components::transfer::NewTransferPage;
use crate::utils::dom;

/// Browser-side navigation for [`AppRoute`].
pub trait RouteExt {
    /// Route for the current URL hash.
    fn current() -> Self;
    /// Navigate, adding a history entry.
    fn push(&self);
    /// Navigate, replacing the current history entry.
    fn replace(&self);
}

impl RouteExt for AppRoute {
    fn current() -> Self {
        AppRoute::from_hash(&dom::get_hash())
    }

    fn push(&self) {
        dom::set_hash(&self.to_hash());
    }

    fn replace(&self) {
        dom::replace_hash(&self.to_hash());
    }
}

/// Current route, provided to pages that highlight navigation.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → Landing page
/// - `#/dashboard` → Dashboard (signed in)
/// - `#/dashboard/new-transfer` → Transfer setup (signed in)
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Route guard. Redirects replace history so Back does not bounce.
    Effect::new(move || {
        let current = route.get();
        let target = ctx.auth.with(|auth| redirect_for(&current, auth));
        if let Some(target) = target {
            target.replace();
            route.set(target);
        }
    });

    let route_memo = Memo::new(move |_| route.get());
    provide_context(RouteContext(route_memo));

    let is_loading = Signal::derive(move || ctx.auth.with(|a| a.is_loading()));

    move || {
        let current = route_memo.get();

        // Protected pages wait for the session check instead of flashing
        // the landing page.
        if current.requires_auth() && is_loading.get() {
            return view! { <LoadingScreen /> }.into_any();
        }

        match current {
            AppRoute::Home => view! { <Landing /> }.into_any(),
            AppRoute::Dashboard => view! {
                <DashboardLayout>
                    <DashboardPage />
                </DashboardLayout>
            }
            .into_any(),
            AppRoute::NewTransfer => view! {
                <DashboardLayout>
                    <NewTransferPage />
                </DashboardLayout>
            }
            .into_any(),
            AppRoute::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
        }
    }
}
