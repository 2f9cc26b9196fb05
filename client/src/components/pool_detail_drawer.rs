//! Read-only resource-pool panel: status, quota usage and bound nodes.

use leptos::prelude::*;

use inventory::{Node, NodeStatus, ResourcePool};

use crate::components::badge::{Badge, StatusValue};
use crate::components::drawer::{Drawer, DrawerWidth};
use crate::components::usage_bar::UsageBar;
use crate::state::inventory::use_inventory;

#[cfg(test)]
#[path = "pool_detail_drawer_test.rs"]
mod pool_detail_drawer_test;

/// Nodes of the pool's cluster whose name is in its node selector, in
/// cluster order.
#[must_use]
pub fn assigned_nodes(pool: &ResourcePool, cluster_nodes: Vec<Node>) -> Vec<Node> {
    cluster_nodes.into_iter().filter(|n| pool.node_selector.contains(&n.name)).collect()
}

fn detail_row(label: &'static str, value: String, mono: bool) -> impl IntoView {
    let value_class = if mono { "text-sm text-slate-900 font-bold font-mono" } else { "text-sm text-slate-900 font-bold" };
    view! {
        <div class="flex justify-between py-3 border-b border-slate-100 last:border-0 items-center">
            <span class="text-[10px] text-slate-500 font-black uppercase tracking-widest">{label}</span>
            <span class=value_class>{value}</span>
        </div>
    }
}

#[component]
fn AssignedNodes(nodes: Vec<Node>) -> impl IntoView {
    if nodes.is_empty() {
        return view! {
            <div class="p-12 text-center text-slate-300 font-black uppercase tracking-widest text-[10px]">
                "No nodes bound to this pool"
            </div>
        }
        .into_any();
    }
    let rows = nodes
        .into_iter()
        .map(|node| {
            let dot = if node.status == NodeStatus::Ready {
                "inline-flex h-2 w-2 rounded-full bg-emerald-500"
            } else {
                "inline-flex h-2 w-2 rounded-full bg-red-500 animate-pulse"
            };
            view! {
                <tr class="hover:bg-slate-50/50 transition-colors">
                    <td class="px-5 py-4 font-black text-slate-900 text-xs font-mono">{node.name}</td>
                    <td class="px-5 py-4 font-mono text-[11px] text-slate-500 text-center">{node.ip}</td>
                    <td class="px-5 py-4 text-center"><span class=dot></span></td>
                    <td class="px-5 py-4 text-right font-mono text-[10px] font-bold text-slate-500">
                        {format!("{}vCPU / {}GB", node.cpu.total, node.mem.total)}
                    </td>
                </tr>
            }
        })
        .collect_view();
    view! {
        <table class="w-full text-left">
            <thead class="bg-slate-50 border-b border-slate-100 text-[10px] font-black uppercase tracking-widest text-slate-400">
                <tr>
                    <th class="px-5 py-4">"Node"</th>
                    <th class="px-5 py-4 text-center">"IP"</th>
                    <th class="px-5 py-4 text-center">"Status"</th>
                    <th class="px-5 py-4 text-right">"Spec"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-slate-50">{rows}</tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn PoolDetailDrawer(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    /// `None` renders nothing.
    #[prop(into)]
    pool: Signal<Option<ResourcePool>>,
) -> impl IntoView {
    let inventory = StoredValue::new(use_inventory());

    move || {
        pool.get().map(|pool| {
            let nodes = assigned_nodes(&pool, inventory.with_value(|inv| inv.repo().nodes(&pool.cluster_id)));
            let node_count = nodes.len();

            let description = if pool.description.is_empty() {
                "Dedicated logical resource partition".to_owned()
            } else {
                pool.description.clone()
            };
            let subtitle = pool.display_name.clone();
            let quota = pool.quota;
            let used = pool.used;

            view! {
                <Drawer
                    is_open=is_open
                    on_close=on_close
                    title="Resource Pool".to_owned()
                    description=subtitle
                    width=DrawerWidth::TwoXl
                >
                    <div class="space-y-8">
                        <div class="bg-slate-900 rounded-3xl p-6 border border-slate-800 shadow-xl">
                            <div class="flex justify-between items-start mb-6">
                                <div>
                                    <h3 class="text-lg font-black text-white tracking-tight leading-none mb-2">
                                        {pool.display_name.clone()}
                                    </h3>
                                    <p class="text-xs text-slate-400 max-w-md font-medium">{description.clone()}</p>
                                </div>
                                <Badge status=StatusValue::from(pool.status)>{pool.status.label()}</Badge>
                            </div>
                            <div class="grid grid-cols-3 gap-6 pt-6 border-t border-white/10">
                                <div>
                                    <div class="text-[9px] text-slate-500 font-black uppercase tracking-widest mb-1.5">"Cluster"</div>
                                    <div class="text-xs font-black text-white uppercase tracking-tight">{pool.cluster_name.clone()}</div>
                                </div>
                                <div>
                                    <div class="text-[9px] text-slate-500 font-black uppercase tracking-widest mb-1.5">"Tenant"</div>
                                    <div class="text-xs font-black text-emerald-400 uppercase tracking-tight">{pool.tenant_name.clone()}</div>
                                </div>
                                <div>
                                    <div class="text-[9px] text-slate-500 font-black uppercase tracking-widest mb-1.5">"Created"</div>
                                    <div class="text-xs font-black text-slate-300 font-mono tracking-tighter">{pool.created_at.clone()}</div>
                                </div>
                            </div>
                        </div>

                        <div>
                            <h4 class="text-[10px] font-black text-slate-400 uppercase tracking-[0.2em] mb-4 px-1">"Resource usage"</h4>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <UsageBar label="Compute (CPU)" used=u64::from(used.cpu) total=u64::from(quota.cpu) unit="C"/>
                                <UsageBar label="Memory (RAM)" used=u64::from(used.memory) total=u64::from(quota.memory) unit="G"/>
                                <UsageBar label="Accelerators (GPU)" used=u64::from(used.gpu) total=u64::from(quota.gpu)/>
                                <UsageBar label="Storage" used=u64::from(used.storage) total=u64::from(quota.storage) unit="G"/>
                            </div>
                        </div>

                        <div>
                            <h4 class="text-[10px] font-black text-slate-400 uppercase tracking-[0.2em] mb-4 px-1">
                                {format!("Assigned nodes ({node_count})")}
                            </h4>
                            <div class="bg-white rounded-2xl border border-slate-200 shadow-sm overflow-hidden">
                                <AssignedNodes nodes=nodes.clone()/>
                            </div>
                        </div>

                        <div class="bg-white rounded-2xl border border-slate-200 px-6 py-2 shadow-sm">
                            {detail_row("Pool ID", pool.id.clone(), true)}
                            {detail_row("Oversubscription", "1.0x (isolated)".to_owned(), false)}
                            {detail_row("Last updated", pool.updated_at.clone(), true)}
                        </div>
                    </div>
                </Drawer>
            }
        })
    }
}
