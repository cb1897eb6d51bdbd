//! New transfer setup screen.
//!
//! One [`TransferSession`] signal drives the whole page. Both browser panes,
//! the provider pickers and the controls read from and write to it.

mod controls;
mod pane;

use aquacloud_core::{PaneId, TransferSession};
use leptos::ev::Event;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::layout::PageHeader;
use crate::config::catalog;

use controls::{TransferControls, TransferQueue};
use pane::FileBrowserPane;

stylance::import_crate_style!(css, "src/components/transfer/transfer.module.css");

#[component]
pub fn NewTransferPage() -> impl IntoView {
    let session = RwSignal::new(TransferSession::new());

    view! {
        <PageHeader
            title="New File Transfer"
            subtitle="Select your source and destination, then start transferring files."
        />
        <div class=css::page>
            <SessionCard session=session />

            <div class=css::columns>
                {PaneId::ALL
                    .into_iter()
                    .map(|pane| view! { <ProviderSelect session=session pane=pane /> })
                    .collect_view()}
            </div>

            <div class=css::columns>
                {PaneId::ALL
                    .into_iter()
                    .map(|pane| view! { <FileBrowserPane session=session pane=pane /> })
                    .collect_view()}
            </div>

            <TransferControls session=session />
            <TransferQueue />
        </div>
    }
}

#[component]
fn SessionCard(session: RwSignal<TransferSession>) -> impl IntoView {
    let session_id = session.with_untracked(|s| s.id.to_string());
    let providers = move || session.with(|s| s.providers_line(catalog().providers()));
    let transfers = move || session.with(|s| s.browser.selected_count(PaneId::Source));

    view! {
        <div class=css::card>
            <h3 class=css::cardTitle>"Current Transfer Session"</h3>
            <div class=css::sessionRows>
                <div class=css::sessionRow>
                    <span class=css::sessionLabel>"Session ID:"</span>
                    <code class=css::sessionId>{format!("{}...", session_id)}</code>
                </div>
                <div class=css::sessionRow>
                    <span class=css::muted>"Providers: " {providers}</span>
                </div>
                <div class=css::muted>"Transfers in this session: " {transfers}</div>
            </div>
        </div>
    }
}

/// Provider dropdown for one pane. The empty option clears the pane.
#[component]
fn ProviderSelect(session: RwSignal<TransferSession>, pane: PaneId) -> impl IntoView {
    let value = move || {
        session.with(|s| {
            s.browser
                .pane(pane)
                .provider_id()
                .unwrap_or_default()
                .to_string()
        })
    };

    let on_change = move |ev: Event| {
        let provider_id = event_target_value(&ev);
        session.update(|s| {
            if provider_id.is_empty() {
                s.browser.pane_mut(pane).clear_provider();
            } else {
                s.browser.select_provider(pane, &provider_id, catalog());
            }
        });
    };

    view! {
        <div class=css::selectWrap>
            <select class=css::select prop:value=value on:change=on_change>
                <option value="">{format!("Select {} Cloud Provider", pane.label())}</option>
                {catalog().providers().all().map(|provider| view! {
                    <option value=provider.id.clone()>{provider.display_name.clone()}</option>
                }).collect_view()}
            </select>
            <span class=css::selectIcon><Icon icon=ic::CHEVRON_DOWN /></span>
        </div>
    }
}
