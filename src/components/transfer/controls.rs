//! Transfer controls and the (always empty) queue.

use aquacloud_core::transfer::{estimated_cost, selection_summary};
use aquacloud_core::{PaneId, TransferSession};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::catalog;
use crate::utils::log;

use super::css;

#[component]
pub fn TransferControls(session: RwSignal<TransferSession>) -> impl IntoView {
    let can_start = Memo::new(move |_| session.with(|s| s.can_start()));

    let on_start = move |_: MouseEvent| {
        session.with_untracked(|s| {
            log::info(&format!(
                "Transfer requested in {}: {} ({})",
                s.id,
                selection_summary(s.browser.selected_count(PaneId::Source)),
                s.providers_line(catalog().providers())
            ));
        });
    };

    view! {
        <div class=css::card>
            <h3 class=css::cardTitle>"Transfer Controls"</h3>

            <div class=css::columns>
                {PaneId::ALL.into_iter().map(|pane| {
                    let summary = move || {
                        session.with(|s| selection_summary(s.browser.selected_count(pane)))
                    };
                    view! {
                        <div class=css::summary>
                            <Icon icon=ic::CLOUD />
                            <span>{pane.label()} ": " {summary}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class=css::cost>
                <span class=css::costIcon><Icon icon=ic::DOLLAR /></span>
                {format!("Estimated Cost: {}", estimated_cost())}
            </div>

            <button
                class=css::startButton
                disabled=move || !can_start.get()
                on:click=on_start
            >
                <Icon icon=ic::PLAY />
                "Start Transfer"
            </button>
        </div>
    }
}

#[component]
pub fn TransferQueue() -> impl IntoView {
    view! {
        <div class=css::card>
            <h3 class=css::cardTitle>"Transfer Queue"</h3>
            <div class=css::emptyQueue>"No transfers in queue."</div>
        </div>
    }
}
