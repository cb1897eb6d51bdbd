//! Fallback page for unknown routes.

use aquacloud_core::AppRoute;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::RouteExt;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::icon><Icon icon=ic::CLOUD /></span>
                <h1 class=css::title>"404"</h1>
                <p class=css::message>
                    "Nothing lives at " <code class=css::path>{path}</code> " yet."
                </p>
                <button class=css::button on:click=move |_| AppRoute::Home.push()>
                    <Icon icon=ic::HOME />
                    "Back to home"
                </button>
            </div>
        </div>
    }
}
