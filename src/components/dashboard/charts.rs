//! SVG charts for the dashboard. Geometry comes from
//! `aquacloud_core::dashboard::chart`.

use aquacloud_core::dashboard::chart::{self, Donut};
use aquacloud_core::dashboard::{PLATFORM_USAGE, TRANSFER_PERFORMANCE};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/dashboard/charts.module.css");

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 220.0;
const PAD_LEFT: f64 = 40.0;
const PAD_BOTTOM: f64 = 24.0;
const TICK_STEP: f64 = 50.0;
const TICK_COUNT: usize = 5;

/// Monthly speed against the running average (MB/s).
#[component]
pub fn PerformanceChart() -> impl IntoView {
    let speed: Vec<f64> = TRANSFER_PERFORMANCE.iter().map(|p| p.speed).collect();
    let avg: Vec<f64> = TRANSFER_PERFORMANCE.iter().map(|p| p.avg).collect();
    let max = chart::nice_max(speed.iter().chain(avg.iter()).copied(), TICK_STEP);

    let plot_w = WIDTH - PAD_LEFT;
    let plot_h = HEIGHT - PAD_BOTTOM;
    let speed_points = chart::line_points(&speed, plot_w, plot_h, max);
    let avg_points = chart::line_points(&avg, plot_w, plot_h, max);
    let x_step = plot_w / (TRANSFER_PERFORMANCE.len().max(2) - 1) as f64;

    view! {
        <svg class=css::chart viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
            {chart::ticks(max, TICK_COUNT).into_iter().map(|tick| {
                let y = plot_h - tick / max * plot_h;
                view! {
                    <g>
                        <line
                            class=css::grid
                            x1=PAD_LEFT.to_string()
                            x2=WIDTH.to_string()
                            y1=y.to_string()
                            y2=y.to_string()
                        />
                        <text
                            class=css::axis
                            x=(PAD_LEFT - 6.0).to_string()
                            y=(y + 4.0).to_string()
                            text-anchor="end"
                        >
                            {format!("{}", tick)}
                        </text>
                    </g>
                }
            }).collect_view()}
            {TRANSFER_PERFORMANCE.iter().enumerate().map(|(i, p)| view! {
                <text
                    class=css::axis
                    x=(PAD_LEFT + x_step * i as f64).to_string()
                    y=(HEIGHT - 6.0).to_string()
                    text-anchor="middle"
                >
                    {p.month}
                </text>
            }).collect_view()}
            <g transform=format!("translate({} 0)", PAD_LEFT)>
                <polyline class=css::avgLine points=avg_points />
                <polyline class=css::speedLine points=speed_points />
            </g>
        </svg>
        <div class=css::legend>
            <span class=css::legendItem>
                <span class=css::swatchSpeed></span>
                "Speed (MB/s)"
            </span>
            <span class=css::legendItem>
                <span class=css::swatchAvg></span>
                "Average"
            </span>
        </div>
    }
}

const DONUT: Donut = Donut {
    cx: 100.0,
    cy: 100.0,
    inner: 60.0,
    outer: 95.0,
    pad_deg: 2.0,
};

/// Share of transferred data per provider.
#[component]
pub fn UsageChart() -> impl IntoView {
    let shares: Vec<f64> = PLATFORM_USAGE.iter().map(|p| p.value).collect();
    let paths = DONUT.segments(&shares);

    view! {
        <div class=css::donutWrap>
            <svg class=css::donut viewBox="0 0 200 200" role="img">
                {paths.into_iter().zip(PLATFORM_USAGE).map(|(d, share)| view! {
                    <path
                        d=d
                        fill=share.color
                        aria-label=format!("{}: {}%", share.name, share.value)
                    />
                }).collect_view()}
            </svg>
            <ul class=css::usageLegend>
                {PLATFORM_USAGE.iter().map(|share| view! {
                    <li class=css::legendItem>
                        <span class=css::swatch style=format!("background: {}", share.color)></span>
                        <span class=css::legendName>{share.name}</span>
                        <span class=css::legendValue>{format!("{}%", share.value)}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
