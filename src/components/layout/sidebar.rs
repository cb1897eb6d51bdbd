//! Dashboard sidebar: brand, provider connection status, navigation and
//! the signed-in user.

use aquacloud_core::AppRoute;
use aquacloud_core::models::NAV_ITEMS;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::{RouteContext, RouteExt};
use crate::config::{APP_NAME, catalog};

stylance::import_crate_style!(css, "src/components/layout/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let active_nav = Signal::derive(move || route_ctx.0.with(|r| r.nav_id()));
    let user_name = Signal::derive(move || ctx.auth.with(|a| a.display_name()));
    let user_email = Signal::derive(move || {
        ctx.auth
            .with(|a| a.user().map(|u| u.email.clone()).unwrap_or_default())
    });

    view! {
        <aside class=css::sidebar>
            <div class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::CLOUD /></span>
                <span class=css::brandName>{APP_NAME}</span>
            </div>

            <div class=css::providers>
                {catalog().providers().all().map(|provider| {
                    let (icon, status_class) = if provider.connected {
                        (ic::LINK, css::connected)
                    } else {
                        (ic::UNLINK, css::disconnected)
                    };
                    view! {
                        <div class=css::provider>
                            <span class=css::providerName>
                                <span class=status_class><Icon icon=icon /></span>
                                {provider.display_name.clone()}
                            </span>
                            <span class=format!("{} {}", css::status, status_class)>
                                {provider.status_label()}
                            </span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <nav class=css::nav>
                <div class=css::navLabel>"Navigation"</div>
                {NAV_ITEMS.iter().map(|item| {
                    let id = item.id;
                    let class = move || {
                        if active_nav.get() == Some(id) {
                            format!("{} {}", css::navItem, css::navItemActive)
                        } else {
                            css::navItem.to_string()
                        }
                    };
                    let target = AppRoute::from_hash(item.path);
                    view! {
                        <button class=class on:click=move |_| target.push()>
                            <Icon icon=ic::for_nav(id) />
                            <span>{item.label}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class=css::profile>
                <div class=css::profileRow>
                    <span class=css::avatar><Icon icon=ic::USER /></span>
                    <div class=css::profileText>
                        <div class=css::profileName>{user_name}</div>
                        <div class=css::profileEmail>{user_email}</div>
                    </div>
                </div>
                <button class=css::logout on:click=move |_| ctx.logout()>
                    <Icon icon=ic::LOGOUT />
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
