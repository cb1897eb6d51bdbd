//! Dashboard overview page.
//!
//! Everything shown here is sample data from `aquacloud_core::dashboard`.

mod charts;

use aquacloud_core::AppRoute;
use aquacloud_core::dashboard::{RECENT_TRANSFERS, STAT_CARDS, TransferStatus};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::layout::PageHeader;
use crate::components::router::RouteExt;
use crate::config::catalog;

use charts::{PerformanceChart, UsageChart};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <PageHeader title="Dashboard" subtitle="Overview of your cloud transfers">
            <button class=css::primaryButton on:click=move |_| AppRoute::NewTransfer.push()>
                <Icon icon=ic::PLUS />
                "New Transfer"
            </button>
        </PageHeader>
        <div class=css::page>
            <section class=css::stats>
                {STAT_CARDS.iter().map(|card| view! {
                    <div class=css::statCard>
                        <div class=css::statValue>{card.value}</div>
                        <div class=css::statLabel>{card.label}</div>
                        <div class=css::statCaption>{card.caption}</div>
                    </div>
                }).collect_view()}
            </section>

            <section class=css::charts>
                <div class=css::card>
                    <h2 class=css::cardTitle>"Transfer Performance"</h2>
                    <PerformanceChart />
                </div>
                <div class=css::card>
                    <h2 class=css::cardTitle>"Platform Usage"</h2>
                    <UsageChart />
                </div>
            </section>

            <section class=css::columns>
                <ConnectedProviders />
                <RecentTransfers />
            </section>
        </div>
    }
}

#[component]
fn ConnectedProviders() -> impl IntoView {
    view! {
        <div class=css::card>
            <h2 class=css::cardTitle>"Cloud Providers"</h2>
            <ul class=css::providerList>
                {catalog().providers().all().map(|provider| {
                    let (icon, class) = if provider.connected {
                        (ic::LINK, css::connected)
                    } else {
                        (ic::UNLINK, css::disconnected)
                    };
                    view! {
                        <li class=css::providerRow>
                            <span class=css::providerName>
                                <Icon icon=ic::STORAGE />
                                {provider.display_name.clone()}
                            </span>
                            <span class=class>
                                <Icon icon=icon />
                                {provider.status_label()}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}

fn status_view(status: TransferStatus) -> impl IntoView {
    let (icon, class) = match status {
        TransferStatus::Completed => (ic::COMPLETED, css::statusCompleted),
        TransferStatus::InProgress => (ic::PENDING, css::statusPending),
        TransferStatus::Failed => (ic::FAILED, css::statusFailed),
    };
    view! {
        <span class=format!("{} {}", css::status, class)>
            <Icon icon=icon />
            {status.label()}
        </span>
    }
}

#[component]
fn RecentTransfers() -> impl IntoView {
    view! {
        <div class=css::card>
            <h2 class=css::cardTitle>"Recent Transfers"</h2>
            <div class=css::tableWrap>
                <table class=css::table>
                    <thead>
                        <tr>
                            <th>"File"</th>
                            <th>"Route"</th>
                            <th>"Size"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {RECENT_TRANSFERS.iter().map(|t| view! {
                            <tr>
                                <td class=css::fileName>{t.file_name}</td>
                                <td class=css::route>
                                    {t.source}
                                    <Icon icon=ic::ARROW_RIGHT />
                                    {t.destination}
                                </td>
                                <td>{t.size}</td>
                                <td>{status_view(t.status)}</td>
                                <td class=css::muted>{t.date}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
