//! Signed-in page chrome.
//!
//! - [`DashboardLayout`] - sidebar plus content area
//! - [`PageHeader`] - title row with theme toggle and user badge
//! - [`LoadingScreen`] - shown while the session is being restored

mod sidebar;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::theme_toggle::ThemeToggle;

pub use sidebar::Sidebar;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class=css::shell>
            <Sidebar />
            <div class=css::main>{children()}</div>
        </div>
    }
}

/// Page title row. Children render before the theme toggle.
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let email = Signal::derive(move || {
        ctx.auth
            .with(|a| a.user().map(|u| u.email.clone()).unwrap_or_default())
    });

    view! {
        <header class=css::header>
            <div>
                <h1 class=css::title>{title}</h1>
                <p class=css::subtitle>{subtitle}</p>
            </div>
            <div class=css::headerActions>
                {children.map(|children| children())}
                <ThemeToggle />
                <span class=css::user>
                    <Icon icon=ic::USER />
                    {email}
                </span>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class=css::loading>
            <span class=css::loadingIcon><Icon icon=ic::CLOUD /></span>
            <p>"Loading..."</p>
        </div>
    }
}
