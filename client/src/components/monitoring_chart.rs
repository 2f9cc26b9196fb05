//! Layered area chart over one or more percentage series.
//!
//! Data shaping (merge, scales, curves, ticks) lives in the `charts` crate;
//! this component only turns that geometry into SVG and tracks the hovered
//! row for the tooltip.

use leptos::prelude::*;

use charts::geometry::{ChartLayout, VIEW_WIDTH};
use charts::{ChartData, DEFAULT_COLOR, DEFAULT_HEIGHT, DEFAULT_LABEL, DEFAULT_UNIT, Series, SeriesPoint};

#[cfg(test)]
#[path = "monitoring_chart_test.rs"]
mod monitoring_chart_test;

const STROKE_WIDTH: f64 = 2.5;
const AXIS_TEXT_COLOR: &str = "#94a3b8";
const GRID_COLOR: &str = "#f1f5f9";

/// Fresh per-instance id used to scope gradient definitions.
#[must_use]
pub fn new_chart_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Pick the input shape: `series` wins when supplied, otherwise `data` is
/// wrapped as one series, otherwise the chart is empty.
#[must_use]
pub fn resolve_chart_data(
    data: Option<Vec<SeriesPoint>>,
    series: Option<Vec<Series>>,
    label: Option<String>,
    color: Option<String>,
) -> ChartData {
    match (series, data) {
        (Some(series), _) => ChartData::Multi(series),
        (None, Some(points)) => ChartData::Single {
            points,
            label: label.unwrap_or_else(|| DEFAULT_LABEL.to_owned()),
            color: color.unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
        },
        (None, None) => ChartData::Multi(Vec::new()),
    }
}

#[component]
pub fn MonitoringChart(
    #[prop(optional)] data: Option<Vec<SeriesPoint>>,
    #[prop(optional)] series: Option<Vec<Series>>,
    #[prop(optional, into)] color: Option<String>,
    #[prop(default = DEFAULT_HEIGHT)] height: f64,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] unit: Option<String>,
    #[prop(optional)] show_legend: bool,
) -> impl IntoView {
    let chart_id = new_chart_id();
    let unit = unit.unwrap_or_else(|| DEFAULT_UNIT.to_owned());
    let input = resolve_chart_data(data, series, label, color);
    let series = input.series();
    let rows = input.rows();
    let layout = ChartLayout::new(VIEW_WIDTH, height);
    let count = rows.len();

    let hovered = RwSignal::new(None::<usize>);

    let gradients = series
        .iter()
        .map(|s| {
            view! {
                <linearGradient id=charts::gradient_id(&chart_id, &s.key) x1="0" y1="0" x2="0" y2="1">
                    <stop offset="5%" stop-color=s.color.clone() stop-opacity="0.15"></stop>
                    <stop offset="95%" stop-color=s.color.clone() stop-opacity="0"></stop>
                </linearGradient>
            }
        })
        .collect_view();

    let grid = layout
        .y_ticks()
        .into_iter()
        .map(|tick| {
            view! {
                <line
                    x1=layout.plot_left()
                    x2=layout.plot_right()
                    y1=tick.position
                    y2=tick.position
                    stroke=GRID_COLOR
                    stroke-dasharray="3 3"
                ></line>
                <text
                    x=layout.plot_left() - 8.0
                    y=tick.position + 3.0
                    text-anchor="end"
                    font-size="10"
                    fill=AXIS_TEXT_COLOR
                >
                    {tick.label}
                </text>
            }
        })
        .collect_view();

    let x_labels = layout
        .x_ticks(&rows)
        .into_iter()
        .map(|tick| {
            view! {
                <text
                    x=tick.position
                    y=layout.plot_bottom() + 16.0
                    text-anchor="middle"
                    font-size="10"
                    fill=AXIS_TEXT_COLOR
                >
                    {tick.label}
                </text>
            }
        })
        .collect_view();

    let areas = series
        .iter()
        .flat_map(|s| {
            let fill = format!("url(#{})", charts::gradient_id(&chart_id, &s.key));
            let stroke = s.color.clone();
            layout
                .series_segments(&rows, &s.key)
                .into_iter()
                .map(move |segment| {
                    view! {
                        <path d=segment.area fill=fill.clone() stroke="none"></path>
                        <path
                            d=segment.line
                            fill="none"
                            stroke=stroke.clone()
                            stroke-width=STROKE_WIDTH
                            stroke-linecap="round"
                        ></path>
                    }
                })
        })
        .collect_view();

    let bands = (0..count)
        .map(|index| {
            let (x0, x1) = layout.hover_band(index, count);
            view! {
                <rect
                    x=x0
                    y=layout.plot_top()
                    width=x1 - x0
                    height=layout.plot_bottom() - layout.plot_top()
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(index))
                ></rect>
            }
        })
        .collect_view();

    let cursor = move || {
        hovered.get().map(|index| {
            let x = layout.x_at(index, count);
            view! {
                <line
                    x1=x
                    x2=x
                    y1=layout.plot_top()
                    y2=layout.plot_bottom()
                    stroke="#cbd5e1"
                    stroke-dasharray="4 4"
                ></line>
            }
        })
    };

    let tooltip_series = series.clone();
    let tooltip_rows = rows.clone();
    let tooltip = move || {
        let index = hovered.get()?;
        let row = tooltip_rows.get(index)?;
        let tip = charts::tooltip(row, &tooltip_series, &unit);
        let left = layout.x_at(index, count) / VIEW_WIDTH * 100.0;
        Some(view! {
            <div
                class="pointer-events-none absolute top-2 -translate-x-1/2 rounded-lg border border-slate-200 bg-white/95 px-3 py-2 shadow-lg"
                style=format!("left: {left:.2}%")
            >
                <p class="text-[10px] font-bold text-slate-400 mb-1">{tip.time}</p>
                {tip
                    .entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="flex items-center gap-2 text-xs">
                                <span class="w-2 h-2 rounded-full" style=format!("background-color: {}", entry.color)></span>
                                <span class="text-slate-500">{entry.name}</span>
                                <span class="font-mono font-bold text-slate-900">{entry.text}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        })
    };

    let legend = show_legend.then(|| {
        let entries = series
            .iter()
            .map(|s| {
                view! {
                    <div class="flex items-center gap-2 text-[10px] font-bold text-slate-500 uppercase tracking-widest">
                        <span class="w-2.5 h-2.5 rounded-full" style=format!("background-color: {}", s.color)></span>
                        {s.name.clone()}
                    </div>
                }
            })
            .collect_view();
        view! { <div class="flex flex-wrap gap-4 mt-3 justify-center">{entries}</div> }
    });

    view! {
        <div class="relative w-full">
            <svg
                viewBox=format!("0 0 {VIEW_WIDTH} {height}")
                preserveAspectRatio="none"
                class="w-full block"
                style=format!("height: {height}px")
                on:mouseleave=move |_| hovered.set(None)
            >
                <defs>{gradients}</defs>
                {grid}
                {x_labels}
                {areas}
                {cursor}
                {bands}
            </svg>
            {tooltip}
            {legend}
        </div>
    }
}
