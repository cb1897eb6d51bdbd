//! Light/dark theme switch.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/theme_toggle.module.css");

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dark = Signal::derive(move || ctx.theme.get().is_dark());
    let title = Signal::derive(move || {
        if is_dark.get() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    });

    view! {
        <button
            class=css::toggle
            on:click=move |_| ctx.toggle_theme()
            title=title
            aria-label=title
        >
            {move || {
                let icon = if is_dark.get() { ic::SUN } else { ic::MOON };
                view! { <Icon icon=icon /> }
            }}
        </button>
    }
}
