//! Create/edit resource-pool wizard hosted in a [`Drawer`].
//!
//! DESIGN
//! ======
//! The wizard state machine lives in `inventory::wizard`; this component only
//! renders it. A [`WizardSession`] follows `is_open`, so opening always starts
//! from a fresh draft and re-renders while open never reset it. Cancel paths
//! (close button, backdrop, Escape) go to `on_cancel`; only the final step's
//! save button reaches `on_submit`.

use leptos::prelude::*;

use inventory::{PoolStatus, PoolSubmission, PoolWizard, QuotaField, ResourcePool, WizardMode, WizardSession, WizardStep};

use crate::components::drawer::{Drawer, DrawerWidth};
use crate::state::inventory::use_inventory;

#[cfg(test)]
#[path = "manage_pool_drawer_test.rs"]
mod manage_pool_drawer_test;

const INPUT_CLASS: &str = "w-full px-4 py-2.5 bg-slate-50 border border-slate-200 rounded-xl text-xs font-bold focus:bg-white focus:border-primary-500 focus:ring-4 focus:ring-primary-500/5 outline-none transition-all";
const LABEL_CLASS: &str = "text-[10px] font-black text-slate-500 uppercase tracking-widest flex items-center gap-1.5 ml-1";

#[must_use]
pub fn drawer_title(is_edit: bool) -> &'static str {
    if is_edit { "Edit Resource Pool" } else { "Create Resource Pool" }
}

#[must_use]
pub fn drawer_description(mode: &WizardMode) -> String {
    match mode {
        WizardMode::Create => "Define and isolate logical compute resources".to_owned(),
        WizardMode::Edit { pool_id } => format!("Instance ID: {pool_id}"),
    }
}

/// Indicator marker: current step highlighted, finished steps green.
#[must_use]
pub fn step_marker_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold mb-2 bg-primary-600 text-white shadow-lg shadow-primary-500/30"
    } else if step < current {
        "w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold mb-2 bg-emerald-500 text-white"
    } else {
        "w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold mb-2 bg-slate-100 text-slate-400"
    }
}

#[must_use]
pub fn status_option_class(option: PoolStatus, current: PoolStatus) -> &'static str {
    match (option, option == current) {
        (PoolStatus::Active, true) => {
            "flex-1 flex items-center justify-center gap-2 py-3 rounded-xl text-[10px] font-black uppercase tracking-[0.2em] bg-white text-emerald-600 shadow-lg ring-1 ring-slate-200"
        }
        (PoolStatus::Disabled, true) => {
            "flex-1 flex items-center justify-center gap-2 py-3 rounded-xl text-[10px] font-black uppercase tracking-[0.2em] bg-white text-red-500 shadow-lg ring-1 ring-slate-200"
        }
        (_, false) => {
            "flex-1 flex items-center justify-center gap-2 py-3 rounded-xl text-[10px] font-black uppercase tracking-[0.2em] text-slate-400 hover:text-slate-600"
        }
    }
}

#[must_use]
pub fn node_check_class(checked: bool) -> &'static str {
    if checked {
        "w-5 h-5 rounded-lg border-2 flex items-center justify-center text-white text-[10px] bg-primary-600 border-primary-600"
    } else {
        "w-5 h-5 rounded-lg border-2 flex items-center justify-center bg-white border-slate-300"
    }
}

#[must_use]
pub fn node_check_mark(checked: bool) -> Option<&'static str> {
    checked.then_some("✓")
}

/// Advances the wizard, logging a rejected transition.
pub fn advance_or_warn(wizard: &mut PoolWizard) -> Option<WizardStep> {
    match wizard.advance() {
        Ok(step) => Some(step),
        Err(e) => {
            leptos::logging::warn!("wizard step rejected: {e}");
            None
        }
    }
}

fn read<R>(session: RwSignal<WizardSession>, f: impl FnOnce(&PoolWizard) -> R) -> Option<R> {
    session.with(|s| s.wizard().map(f))
}

fn edit(session: RwSignal<WizardSession>, f: impl FnOnce(&mut PoolWizard)) {
    session.update(|s| {
        s.with_wizard(f);
    });
}

#[component]
pub fn ManagePoolDrawer(
    #[prop(into)] is_open: Signal<bool>,
    /// Pool to edit; `None` opens in create mode.
    #[prop(optional, into)]
    initial: Signal<Option<ResourcePool>>,
    on_submit: Callback<PoolSubmission>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = RwSignal::new(WizardSession::default());

    Effect::new(move || {
        let open = is_open.get();
        let initial = initial.get_untracked();
        session.update(|s| {
            s.sync(open, initial.as_ref());
        });
    });

    let step = Memo::new(move |_| read(session, PoolWizard::step));

    let title = Signal::derive(move || drawer_title(read(session, |w| w.mode().is_edit()).unwrap_or(false)).to_owned());
    let description = Signal::derive(move || read(session, |w| drawer_description(w.mode())));

    let submit = move |_| {
        if let Some(Ok(submission)) = session.with_untracked(|s| s.wizard().map(PoolWizard::submit)) {
            on_submit.run(submission);
        }
    };

    let footer = ViewFn::from(move || {
        let on_last = move || step.get() == Some(WizardStep::Quota);
        view! {
            <div class="flex justify-between w-full">
                <button
                    class="px-6 py-2 bg-white border border-slate-200 text-slate-700 rounded-xl text-[10px] font-black uppercase tracking-widest hover:bg-slate-50 disabled:opacity-50 disabled:cursor-not-allowed transition-all"
                    disabled=move || !read(session, PoolWizard::can_go_back).unwrap_or(false)
                    on:click=move |_| edit(session, |w| {
                        w.back();
                    })
                >
                    "Back"
                </button>
                <Show
                    when=on_last
                    fallback=move || {
                        view! {
                            <button
                                class="px-6 py-2 bg-slate-900 text-white rounded-xl text-[10px] font-black uppercase tracking-widest hover:bg-primary-600 disabled:opacity-50 disabled:cursor-not-allowed transition-all active:scale-95"
                                disabled=move || !read(session, PoolWizard::can_advance).unwrap_or(false)
                                on:click=move |_| edit(session, |w| {
                                    advance_or_warn(w);
                                })
                            >
                                "Next ›"
                            </button>
                        }
                    }
                >
                    <button
                        class="px-6 py-2 bg-primary-600 text-white rounded-xl text-[10px] font-black uppercase tracking-widest hover:bg-primary-700 transition-all active:scale-95"
                        on:click=submit
                    >
                        {move || {
                            if read(session, |w| w.mode().is_edit()).unwrap_or(false) { "Save changes" } else { "Create pool" }
                        }}
                    </button>
                </Show>
            </div>
        }
    });

    view! {
        <Drawer
            is_open=is_open
            on_close=on_cancel
            title=title
            description=description
            width=DrawerWidth::TwoXl
            footer=footer
        >
            {move || step.get().map(|current| view! { <StepIndicator current=current/> })}
            <div class="space-y-6">
                {move || {
                    step.get()
                        .map(|current| match current {
                            WizardStep::BasicInfo => view! { <BasicInfoStep session=session/> }.into_any(),
                            WizardStep::ClusterAndNodes => view! { <ClusterStep session=session/> }.into_any(),
                            WizardStep::Quota => view! { <QuotaStep session=session/> }.into_any(),
                        })
                }}
            </div>
        </Drawer>
    }
}

#[component]
fn StepIndicator(current: WizardStep) -> impl IntoView {
    let markers = WizardStep::ALL
        .into_iter()
        .map(|step| {
            let marker = if step < current { "✓".to_owned() } else { step.number().to_string() };
            let label_class = if step == current {
                "text-[10px] font-medium text-primary-700"
            } else {
                "text-[10px] font-medium text-slate-500"
            };
            view! {
                <div class="flex flex-col items-center relative z-10">
                    <div class=step_marker_class(step, current)>{marker}</div>
                    <span class=label_class>{step.label()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="relative flex items-center justify-between mb-8 px-4">
            {markers}
            <div class="absolute top-4 left-10 right-10 h-0.5 bg-slate-100"></div>
            <div
                class="absolute top-4 left-10 h-0.5 bg-primary-500 transition-all duration-300"
                style=format!("width: {}%", current.progress_percent())
            ></div>
        </div>
    }
}

#[component]
fn BasicInfoStep(session: RwSignal<WizardSession>) -> impl IntoView {
    let status = move || read(session, |w| w.draft().status).unwrap_or_default();

    let status_button = move |option: PoolStatus| {
        view! {
            <button
                type="button"
                class=move || status_option_class(option, status())
                on:click=move |_| edit(session, |w| w.set_status(option))
            >
                {option.label()}
            </button>
        }
    };

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
                <div class="space-y-1.5">
                    <label class=LABEL_CLASS>"Pool name " <span class="text-red-500">"*"</span></label>
                    <input
                        type="text"
                        class=format!("{INPUT_CLASS} font-mono")
                        placeholder="e.g. inference-pool-01"
                        prop:value=move || read(session, |w| w.draft().name.clone()).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(session, |w| w.set_name(value));
                        }
                    />
                </div>
                <div class="space-y-1.5">
                    <label class=LABEL_CLASS>"Display name"</label>
                    <input
                        type="text"
                        class=INPUT_CLASS
                        placeholder="e.g. LLM inference pool"
                        prop:value=move || read(session, |w| w.draft().display_name.clone()).unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(session, |w| w.set_display_name(value));
                        }
                    />
                </div>
            </div>
            <div class="space-y-1.5">
                <label class=LABEL_CLASS>"Description"</label>
                <textarea
                    rows="2"
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Business context or partitioning notes"
                    prop:value=move || read(session, |w| w.draft().description.clone()).unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(session, |w| w.set_description(value));
                    }
                ></textarea>
            </div>
            <div class="space-y-3">
                <label class=LABEL_CLASS>"Status"</label>
                <div class="flex bg-slate-100 p-1.5 rounded-2xl border border-slate-200 shadow-inner">
                    {status_button(PoolStatus::Active)}
                    {status_button(PoolStatus::Disabled)}
                </div>
                <p class="text-[11px] font-bold leading-relaxed text-slate-500">
                    {move || {
                        if status() == PoolStatus::Disabled {
                            "Disabled pools receive no new tasks. Running tasks follow the cluster eviction policy."
                        } else {
                            "The scheduler dispatches workloads to this pool within tenant quotas."
                        }
                    }}
                </p>
            </div>
        </div>
    }
}

#[component]
fn ClusterStep(session: RwSignal<WizardSession>) -> impl IntoView {
    let inventory = StoredValue::new(use_inventory());
    let clusters = inventory.with_value(|inv| inv.repo().clusters());
    let selected_cluster = Memo::new(move |_| read(session, |w| w.draft().cluster_id.clone()).flatten());

    let cluster_cards = clusters
        .into_iter()
        .map(|cluster| {
            let id = cluster.id.clone();
            let is_selected = {
                let id = id.clone();
                move || selected_cluster.get().as_deref() == Some(id.as_str())
            };
            view! {
                <div
                    class=move || {
                        if is_selected() {
                            "p-4 rounded-2xl border cursor-pointer transition-all bg-primary-50 border-primary-500 ring-4 ring-primary-500/10"
                        } else {
                            "p-4 rounded-2xl border cursor-pointer transition-all bg-white border-slate-200 hover:border-primary-300"
                        }
                    }
                    on:click=move |_| edit(session, |w| w.select_cluster(&id))
                >
                    <div class="text-[13px] font-black text-slate-900 tracking-tight">{cluster.display_name}</div>
                    <div class="text-[9px] font-black text-slate-400 uppercase tracking-widest mt-1">
                        {format!("{} · {}", cluster.region, cluster.k8s_version)}
                    </div>
                </div>
            }
        })
        .collect_view();

    let node_list = move || {
        let cluster_id = selected_cluster.get()?;
        let nodes = inventory.with_value(|inv| inv.repo().nodes(&cluster_id));
        let count = move || read(session, |w| w.draft().node_selector.len()).unwrap_or(0);
        let rows = if nodes.is_empty() {
            view! {
                <div class="p-10 text-center text-[10px] font-black uppercase tracking-widest text-slate-300">
                    "No nodes online"
                </div>
            }
            .into_any()
        } else {
            nodes
                .into_iter()
                .map(|node| {
                    let name = StoredValue::new(node.name.clone());
                    let checked = move || {
                        name.with_value(|name| read(session, |w| w.is_node_selected(name))).unwrap_or(false)
                    };
                    let gpu = node.gpu.map(|gpu| {
                        view! {
                            <span class="px-2 py-1 bg-emerald-50 border border-emerald-100 rounded-lg text-[9px] font-black text-emerald-700 uppercase tracking-widest">
                                {format!("GPU x{}", gpu.count)}
                            </span>
                        }
                    });
                    view! {
                        <div
                            class="flex items-center justify-between px-5 py-4 border-b border-slate-100 last:border-0 cursor-pointer hover:bg-white transition-all"
                            on:click=move |_| name.with_value(|name| edit(session, |w| w.toggle_node(name)))
                        >
                            <div class="flex items-center gap-4">
                                <div class=move || node_check_class(checked())>{move || node_check_mark(checked())}</div>
                                <div>
                                    <div class="text-xs font-mono font-black text-slate-900 tracking-tight">{node.name}</div>
                                    <div class="text-[10px] text-slate-400 font-mono font-bold mt-0.5">{node.ip}</div>
                                </div>
                            </div>
                            <div class="flex gap-2">
                                <span class="px-2 py-1 bg-white border border-slate-200 rounded-lg text-[9px] font-black text-slate-500 uppercase tracking-widest">
                                    {format!("{}C / {}G", node.cpu.total, node.mem.total)}
                                </span>
                                {gpu}
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        };
        Some(view! {
            <div class="space-y-3">
                <label class=LABEL_CLASS>
                    {move || format!("Nodes ({}) ", count())}
                    <span class="text-red-500">"*"</span>
                </label>
                <div class="bg-slate-50/50 rounded-2xl border border-slate-200 overflow-hidden max-h-[300px] overflow-y-auto">
                    {rows}
                </div>
            </div>
        })
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-3">
                <label class=LABEL_CLASS>"Target cluster " <span class="text-red-500">"*"</span></label>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{cluster_cards}</div>
            </div>
            {node_list}
        </div>
    }
}

#[component]
fn QuotaStep(session: RwSignal<WizardSession>) -> impl IntoView {
    let fields = QuotaField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="space-y-2">
                    <label class=LABEL_CLASS>{field.label()}</label>
                    <input
                        type="number"
                        min="0"
                        class=format!("{INPUT_CLASS} font-mono")
                        prop:value=move || read(session, |w| field.get(&w.draft().quota).to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            edit(session, |w| {
                                w.set_quota(field, &raw);
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="bg-slate-900 rounded-2xl p-5 border border-slate-800 text-slate-300 shadow-xl">
                <p class="text-[11px] font-bold leading-relaxed">
                    "Quotas cap the hardware this pool may claim. Keep a 1:1 ratio in production to protect SLAs."
                </p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">{fields}</div>
        </div>
    }
}
