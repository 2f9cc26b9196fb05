//! Used/total capacity bar for quota panels.

use leptos::prelude::*;

use crate::util::usage::{UsageLevel, usage_percent};

#[component]
pub fn UsageBar(
    #[prop(into)] label: String,
    used: u64,
    total: u64,
    /// Suffix appended to both figures (`C`, `G`).
    #[prop(optional, into)]
    unit: String,
) -> impl IntoView {
    let percent = usage_percent(used, total);
    let level = UsageLevel::from_percent(percent);

    view! {
        <div class="p-4 bg-white border border-slate-100 rounded-2xl shadow-sm">
            <div class="flex justify-between text-[10px] mb-2 font-black uppercase tracking-widest text-slate-400">
                <span>{label}</span>
                <span class=level.text_class()>{format!("{percent}%")}</span>
            </div>
            <div class="h-1.5 w-full bg-slate-100 rounded-full overflow-hidden mb-2">
                <div
                    class=format!("h-full rounded-full transition-all duration-700 {}", level.bar_class())
                    style=format!("width: {percent}%")
                ></div>
            </div>
            <div class="flex justify-between text-[9px] font-mono font-bold text-slate-400 uppercase">
                <span>{format!("{used}{unit} used")}</span>
                <span>{format!("cap: {total}{unit}")}</span>
            </div>
        </div>
    }
}
