//! One side of the transfer: search box, breadcrumbs and the listing.

use aquacloud_core::{Crumb, Entry, PaneId, TransferSession};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::catalog;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/transfer/pane.module.css");

#[component]
pub fn FileBrowserPane(session: RwSignal<TransferSession>, pane: PaneId) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let title = move || {
        let name = session.with(|s| {
            catalog()
                .providers()
                .display_name(s.browser.pane(pane).provider_id())
        });
        format!("{}: {}", pane.label(), name)
    };
    let is_browsing = Signal::derive(move || session.with(|s| s.browser.pane(pane).is_browsing()));

    view! {
        <div class=css::pane>
            <div class=css::paneHeader>
                <h3 class=css::paneTitle>{title}</h3>
                <span class=css::direction>
                    <Icon icon=ic::ARROW_RIGHT />
                    <Icon icon=ic::ARROW_LEFT />
                </span>
            </div>

            <Show
                when=move || is_browsing.get()
                fallback=move || view! {
                    <div class=css::empty>
                        {format!(
                            "Please select a {} cloud provider to browse files.",
                            pane.label().to_lowercase()
                        )}
                    </div>
                }
            >
                <div class=css::search>
                    <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        class=css::searchInput
                        type="text"
                        placeholder="Search files..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <Breadcrumbs session=session pane=pane />
                <Listing session=session pane=pane query=query />
            </Show>
        </div>
    }
}

#[component]
fn Breadcrumbs(session: RwSignal<TransferSession>, pane: PaneId) -> impl IntoView {
    let go = move |crumb: Crumb| {
        session.update(|s| {
            if let Err(e) = s.browser.navigate_to_breadcrumb(pane, crumb, catalog()) {
                log::warn(&format!("{} pane: {}", pane, e));
            }
        });
    };

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            <button class=css::crumb on:click=move |_| go(Crumb::Root) title="Root">
                <Icon icon=ic::HOME />
            </button>
            {move || {
                session
                    .with(|s| s.browser.pane(pane).breadcrumbs())
                    .into_iter()
                    .map(|(crumb, name)| view! {
                        <span class=css::crumbSep><Icon icon=ic::CHEVRON_RIGHT /></span>
                        <button class=css::crumb on:click=move |_| go(crumb)>{name}</button>
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn Listing(
    session: RwSignal<TransferSession>,
    pane: PaneId,
    query: RwSignal<String>,
) -> impl IntoView {
    let rows = move || {
        query.with(|q| {
            session.with(|s| {
                s.browser
                    .pane(pane)
                    .visible(q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class=css::table>
            <div class=css::tableHeader>
                <span>"Name"</span>
                <span class=css::center>"Size"</span>
                <span class=css::center>"Last Modified"</span>
            </div>
            <div class=css::rows>
                <For
                    each=rows
                    key=|entry: &Entry| (entry.id.clone(), entry.name.clone(), entry.selected)
                    children=move |entry| view! { <EntryRow session=session pane=pane entry=entry /> }
                />
            </div>
        </div>
    }
}

#[component]
fn EntryRow(session: RwSignal<TransferSession>, pane: PaneId, entry: Entry) -> impl IntoView {
    let id = StoredValue::new(entry.id.clone());
    let is_folder = entry.is_folder();

    let toggle = move || {
        session.update(|s| {
            id.with_value(|id| s.browser.toggle_select(pane, id));
        });
    };

    // Folders open on click; files toggle their selection.
    let on_click = move |_: MouseEvent| {
        if !is_folder {
            toggle();
            return;
        }
        session.update(|s| {
            if let Err(e) = id.with_value(|id| s.browser.navigate_into(pane, id, catalog())) {
                log::warn(&format!("{} pane: {}", pane, e));
            }
        });
    };

    let class = if entry.selected {
        format!("{} {}", css::row, css::rowSelected)
    } else {
        css::row.to_string()
    };
    let name_class = if is_folder { css::folderName } else { css::fileName };

    view! {
        <div class=class on:click=on_click>
            <span class=css::nameCell>
                <input
                    type="checkbox"
                    class=css::checkbox
                    prop:checked=entry.selected
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        toggle();
                    }
                />
                <span class=css::icon><Icon icon=ic::for_category(entry.category()) /></span>
                <span class=name_class>{entry.name.clone()}</span>
            </span>
            <span class=css::meta>{entry.size_label().to_string()}</span>
            <span class=css::meta>{entry.modified_label().to_string()}</span>
        </div>
    }
}
