//! Cluster monitoring: KPI cards, utilization trends, accelerators and tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads one `MonitoringSnapshot` per visit and derives every panel from it.
//! The cluster filter narrows node KPIs and the accelerator list; metric
//! history is console-wide.

use leptos::prelude::*;

use inventory::{HeterogeneousResource, MetricKind, Task};

use crate::components::badge::{Badge, StatusValue};
use crate::components::custom_select::{CustomSelect, SelectOption};
use crate::components::monitoring_chart::MonitoringChart;
use crate::components::stat_card::{StatCard, StatVariant};
use crate::state::inventory::{InventoryHandle, use_inventory};
use crate::state::monitoring::{
    ALL_CLUSTERS, CPU_ALERT_PERCENT, GPU_ALERT_PERCENT, MEMORY_ALERT_PERCENT, MonitoringState,
    STORAGE_ALERT_PERCENT, metric_color,
};
use crate::util::usage::UsageLevel;

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

const TREND_CHART_HEIGHT: f64 = 360.0;
const METRIC_CHART_HEIGHT: f64 = 160.0;

/// Filter options: every cluster plus the catch-all entry first.
#[must_use]
pub fn cluster_options(state: &MonitoringState) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_CLUSTERS, "All clusters"))
        .chain(state.data.clusters.iter().map(|c| SelectOption::new(c.id.clone(), c.display_name.clone())))
        .collect()
}

/// KPI text for an optional percentage.
#[must_use]
pub fn percent_text(percent: Option<u32>) -> String {
    percent.map_or_else(|| "--".to_owned(), |p| format!("{p}%"))
}

fn request_snapshot(state: RwSignal<MonitoringState>, inventory: InventoryHandle) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result =
            crate::util::latency::load(|| Ok(crate::state::monitoring::MonitoringSnapshot::read(inventory.repo()))).await;
        if let Err(e) = &result {
            leptos::logging::warn!("monitoring snapshot load failed: {e}");
        }
        state.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, inventory);
}

#[component]
pub fn MonitoringPage() -> impl IntoView {
    let state = expect_context::<RwSignal<MonitoringState>>();

    if state.with_untracked(|s| s.loading) {
        request_snapshot(state, use_inventory());
    }

    let stats = Memo::new(move |_| state.with(MonitoringState::node_stats));
    let gpu_percent = Memo::new(move |_| state.with(|s| s.latest_percent(MetricKind::Gpu)));
    let options = Signal::derive(move || state.with(cluster_options));
    let filter = Signal::derive(move || state.with(|s| s.cluster_filter.clone()));
    let on_filter = Callback::new(move |cluster_id: String| state.update(|s| s.set_cluster_filter(&cluster_id)));

    let gpu_alert = Signal::derive(move || gpu_percent.get().is_some_and(|p| p > GPU_ALERT_PERCENT));

    let trend = move || {
        let series = state.with(MonitoringState::trend_series);
        view! { <MonitoringChart series=series height=TREND_CHART_HEIGHT show_legend=true/> }
    };

    let metric_cards = move || {
        MetricKind::ALL
            .into_iter()
            .map(|kind| {
                let points = state.with(|s| s.metric_points(kind));
                view! {
                    <div class="bg-white border border-slate-200 rounded-3xl p-6 shadow-sm">
                        <h4 class="text-[10px] font-black text-slate-400 uppercase tracking-[0.2em] mb-4">{kind.label()}</h4>
                        <MonitoringChart
                            data=points
                            color=metric_color(kind)
                            label=kind.label()
                            height=METRIC_CHART_HEIGHT
                        />
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-10 pb-20 max-w-[1600px] mx-auto">
            <div class="flex flex-col gap-8">
                <div class="flex justify-between items-end border-b border-slate-200 pb-6">
                    <div>
                        <h1 class="text-3xl font-extrabold text-slate-900 tracking-tight">"Cluster Monitoring"</h1>
                        <p class="text-sm font-medium text-slate-500 mt-2 tracking-wide">
                            "Real-time telemetry and resource utilization"
                        </p>
                    </div>
                    <CustomSelect
                        options=options
                        value=filter
                        on_change=on_filter
                        placeholder="Select cluster"
                        class="w-64"
                    />
                </div>
                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|error| {
                            view! {
                                <div class="p-4 rounded-2xl border bg-red-50 border-red-100 text-xs font-bold text-red-700">
                                    {error}
                                </div>
                            }
                        })
                }}
            </div>

            <div class="grid grid-cols-2 md:grid-cols-3 xl:grid-cols-5 gap-6">
                <StatCard
                    title="GPU load"
                    value=Signal::derive(move || percent_text(gpu_percent.get()))
                    variant=StatVariant::Primary
                    subtext=Signal::derive(move || {
                        Some(if gpu_alert.get() { "Critical overload detected" } else { "Accelerator compute" }.to_owned())
                    })
                    is_alert=gpu_alert
                />
                <StatCard
                    title="CPU utilization"
                    value=Signal::derive(move || format!("{}%", stats.get().cpu_percent))
                    subtext="vCPU average".to_owned()
                    is_alert=Signal::derive(move || stats.get().cpu_percent > CPU_ALERT_PERCENT)
                />
                <StatCard
                    title="Memory commit"
                    value=Signal::derive(move || format!("{}%", stats.get().memory_percent))
                    subtext="Memory in use".to_owned()
                    is_alert=Signal::derive(move || stats.get().memory_percent > MEMORY_ALERT_PERCENT)
                />
                <StatCard
                    title="Storage"
                    value=Signal::derive(move || format!("{}%", stats.get().storage_percent))
                    subtext="Capacity usage".to_owned()
                    is_alert=Signal::derive(move || stats.get().storage_percent > STORAGE_ALERT_PERCENT)
                />
                <StatCard
                    title="Node health"
                    value=Signal::derive(move || format!("{}%", stats.get().health_percent))
                    subtext=Signal::derive(move || {
                        let s = stats.get();
                        Some(format!("{} / {} ready", s.ready, s.total))
                    })
                    is_alert=Signal::derive(move || {
                        let s = stats.get();
                        s.total > 0 && s.health_percent < 100
                    })
                />
            </div>

            <div class="bg-white border border-slate-200 rounded-3xl p-8 shadow-sm">
                <h3 class="text-lg font-black text-slate-900 tracking-tight mb-1">"Resource load history"</h3>
                <p class="text-[10px] text-slate-400 font-bold uppercase tracking-[0.2em] mb-8">
                    "Sampling: 5 min per point"
                </p>
                {trend}
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">{metric_cards}</div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">
                <AcceleratorTable accelerators=Signal::derive(move || state.with(MonitoringState::visible_accelerators))/>
                <RecentTasks tasks=Signal::derive(move || state.with(|s| s.data.tasks.clone()))/>
            </div>
        </div>
    }
}

#[component]
fn AcceleratorTable(#[prop(into)] accelerators: Signal<Vec<HeterogeneousResource>>) -> impl IntoView {
    let rows = move || {
        accelerators
            .get()
            .into_iter()
            .map(|acc| {
                let level = UsageLevel::from_percent(u32::from(acc.utilization));
                view! {
                    <tr class="hover:bg-slate-50 transition-colors">
                        <td class="px-5 py-4">
                            <div class="text-xs font-black text-slate-900 tracking-tight">{acc.name}</div>
                            <div class="text-[10px] font-mono font-bold text-slate-400">{acc.model}</div>
                        </td>
                        <td class="px-5 py-4 text-[10px] font-black text-slate-500 uppercase">{acc.kind.label()}</td>
                        <td class=format!("px-5 py-4 font-mono text-xs font-black {}", level.text_class())>
                            {format!("{}%", acc.utilization)}
                        </td>
                        <td class="px-5 py-4 font-mono text-[11px] text-slate-500">{format!("{}°C", acc.temperature)}</td>
                        <td class="px-5 py-4">
                            <Badge status=StatusValue::from(acc.health)>{acc.health.label()}</Badge>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="bg-white border border-slate-200 rounded-3xl overflow-hidden shadow-sm">
            <h3 class="px-6 pt-6 pb-4 text-sm font-black text-slate-900 uppercase tracking-widest">"Accelerators"</h3>
            <table class="w-full text-left">
                <thead class="bg-slate-50 border-y border-slate-200 text-[10px] font-black text-slate-500 uppercase tracking-[0.2em]">
                    <tr>
                        <th class="px-5 py-3">"Device"</th>
                        <th class="px-5 py-3">"Type"</th>
                        <th class="px-5 py-3">"Util"</th>
                        <th class="px-5 py-3">"Temp"</th>
                        <th class="px-5 py-3">"Health"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-100">{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn RecentTasks(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let rows = move || {
        tasks
            .get()
            .into_iter()
            .map(|task| {
                view! {
                    <div class="px-6 py-4 flex items-center justify-between gap-4">
                        <div class="min-w-0">
                            <div class="text-xs font-black text-slate-900 tracking-tight truncate">{task.name}</div>
                            <div class="text-[10px] font-bold text-slate-400 truncate">
                                {format!("{} · {}", task.resource_pool_name, task.submitter)}
                            </div>
                        </div>
                        <div class="flex items-center gap-4 shrink-0">
                            <span class="font-mono text-[11px] font-bold text-slate-500">{format!("{}%", task.progress)}</span>
                            <Badge status=StatusValue::from(task.status)>{task.status.label()}</Badge>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="bg-white border border-slate-200 rounded-3xl overflow-hidden shadow-sm">
            <h3 class="px-6 pt-6 pb-4 text-sm font-black text-slate-900 uppercase tracking-widest border-b border-slate-200">
                "Recent tasks"
            </h3>
            <div class="divide-y divide-slate-100">{rows}</div>
        </div>
    }
}
