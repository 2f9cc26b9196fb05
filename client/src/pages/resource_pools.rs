//! Resource-pool list with create/edit wizard and detail panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Rows come from the inventory repository through the
//! simulated-latency loader; wizard submissions are persisted through the same
//! repository and merged back into `PoolsState`.

use leptos::prelude::*;

use inventory::{PoolSubmission, ResourcePool};

use crate::components::badge::{Badge, StatusValue};
use crate::components::manage_pool_drawer::ManagePoolDrawer;
use crate::components::pool_detail_drawer::PoolDetailDrawer;
use crate::state::inventory::{InventoryHandle, use_inventory};
use crate::state::pools::PoolsState;
use crate::util::latency;
use crate::util::usage::{UsageLevel, usage_percent};

#[cfg(test)]
#[path = "resource_pools_test.rs"]
mod resource_pools_test;

/// Compact `used / quota` cell text with its percentage.
#[must_use]
pub fn quota_cell(used: u32, quota: u32, unit: &str) -> String {
    format!("{used}/{quota}{unit} ({}%)", usage_percent(u64::from(used), u64::from(quota)))
}

fn request_pools(pools: RwSignal<PoolsState>, inventory: InventoryHandle) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = latency::load(|| Ok(inventory.repo().pools())).await;
        if let Err(e) = &result {
            leptos::logging::warn!("resource pool load failed: {e}");
        }
        pools.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (pools, inventory);
}

#[component]
pub fn ResourcePoolsPage() -> impl IntoView {
    let pools = expect_context::<RwSignal<PoolsState>>();
    let inventory = StoredValue::new(use_inventory());

    if pools.with_untracked(|s| s.loading) {
        request_pools(pools, inventory.get_value());
    }

    let wizard_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<ResourcePool>);
    let detail_id = RwSignal::new(None::<String>);
    let detail_pool = Signal::derive(move || detail_id.get().and_then(|id| pools.with(|s| s.find(&id).cloned())));

    let open_create = move |_| {
        editing.set(None);
        wizard_open.set(true);
    };

    let on_submit = Callback::new(move |submission: PoolSubmission| {
        let result = inventory.with_value(|inv| inv.repo().save_submission(&submission, &latency::today_stamp()));
        if let Err(e) = &result {
            leptos::logging::warn!("resource pool save failed: {e}");
        }
        pools.update(|s| s.apply_save(result));
        wizard_open.set(false);
    });
    let on_cancel = Callback::new(move |()| wizard_open.set(false));
    let close_detail = Callback::new(move |()| detail_id.set(None));

    let rows = move || {
        pools
            .get()
            .items
            .into_iter()
            .map(|pool| {
                let id = pool.id.clone();
                let for_edit = pool.clone();
                view! {
                    <tr
                        class="group hover:bg-slate-50 transition-colors cursor-pointer"
                        on:click=move |_| detail_id.set(Some(id.clone()))
                    >
                        <td class="px-6 py-4">
                            <div class="text-xs font-black text-slate-900 tracking-tight">{pool.display_name.clone()}</div>
                            <div class="text-[10px] font-mono font-bold text-slate-400">{pool.name.clone()}</div>
                        </td>
                        <td class="px-6 py-4 text-xs font-bold text-slate-600">{pool.cluster_name.clone()}</td>
                        <td class="px-6 py-4">
                            <Badge status=StatusValue::from(pool.status)>{pool.status.label()}</Badge>
                        </td>
                        <td class="px-6 py-4 font-mono text-[11px] font-bold text-slate-500">
                            {pool.node_selector.len()}
                        </td>
                        <td class=format!(
                            "px-6 py-4 font-mono text-[11px] font-bold {}",
                            UsageLevel::from_percent(usage_percent(u64::from(pool.used.cpu), u64::from(pool.quota.cpu))).text_class(),
                        )>{quota_cell(pool.used.cpu, pool.quota.cpu, "C")}</td>
                        <td class=format!(
                            "px-6 py-4 font-mono text-[11px] font-bold {}",
                            UsageLevel::from_percent(usage_percent(u64::from(pool.used.gpu), u64::from(pool.quota.gpu))).text_class(),
                        )>{quota_cell(pool.used.gpu, pool.quota.gpu, "")}</td>
                        <td class="px-6 py-4 text-right">
                            <button
                                class="px-3 py-1.5 text-[10px] font-black uppercase tracking-widest text-slate-500 border border-slate-200 rounded-lg hover:text-primary-600 hover:border-primary-300 transition-all"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    editing.set(Some(for_edit.clone()));
                                    wizard_open.set(true);
                                }
                            >
                                "Edit"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-8 max-w-[1600px] mx-auto">
            <ManagePoolDrawer is_open=wizard_open initial=editing on_submit=on_submit on_cancel=on_cancel/>
            <PoolDetailDrawer
                is_open=Signal::derive(move || detail_pool.with(Option::is_some))
                on_close=close_detail
                pool=detail_pool
            />

            <div class="flex justify-between items-end border-b border-slate-200 pb-6">
                <div>
                    <h1 class="text-3xl font-extrabold text-slate-900 tracking-tight">"Resource Pools"</h1>
                    <p class="text-sm font-medium text-slate-500 mt-2">
                        "Logical partitions of cluster capacity bound to tenants"
                    </p>
                </div>
                <button
                    class="px-5 py-2.5 bg-slate-900 text-white rounded-xl text-[10px] font-black uppercase tracking-widest hover:bg-primary-600 transition-all shadow-xl active:scale-95"
                    on:click=open_create
                >
                    "+ Create pool"
                </button>
            </div>

            {move || {
                pools
                    .with(|s| s.error.clone())
                    .map(|error| {
                        view! {
                            <div class="p-4 rounded-2xl border bg-red-50 border-red-100 text-xs font-bold text-red-700">
                                {error}
                            </div>
                        }
                    })
            }}

            <div class="bg-white border border-slate-200 rounded-3xl overflow-hidden shadow-sm">
                <table class="w-full text-left">
                    <thead class="bg-slate-50 border-b border-slate-200 text-[10px] font-black text-slate-500 uppercase tracking-[0.2em]">
                        <tr>
                            <th class="px-6 py-4">"Pool"</th>
                            <th class="px-6 py-4">"Cluster"</th>
                            <th class="px-6 py-4">"Status"</th>
                            <th class="px-6 py-4">"Nodes"</th>
                            <th class="px-6 py-4">"CPU"</th>
                            <th class="px-6 py-4">"GPU"</th>
                            <th class="px-6 py-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        <Show
                            when=move || !pools.with(|s| s.loading)
                            fallback=|| {
                                view! {
                                    <tr>
                                        <td colspan="7" class="p-12 text-center text-[10px] font-black uppercase tracking-widest text-slate-300">
                                            "Loading resource pools…"
                                        </td>
                                    </tr>
                                }
                            }
                        >
                            {rows}
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
