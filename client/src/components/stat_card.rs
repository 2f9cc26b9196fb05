//! KPI card with optional trend chip and alert treatment.

use leptos::prelude::*;

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Neutral => "",
        }
    }

    #[must_use]
    pub fn chip_class(self) -> &'static str {
        match self {
            Self::Up => "bg-emerald-50 text-emerald-600 border-emerald-100",
            Self::Down => "bg-red-50 text-red-600 border-red-100",
            Self::Neutral => "bg-slate-50 text-slate-500 border-slate-100",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatVariant {
    #[default]
    Default,
    Primary,
    Dark,
}

impl StatVariant {
    fn is_dark(self) -> bool {
        matches!(self, Self::Primary | Self::Dark)
    }
}

#[must_use]
pub fn card_class(variant: StatVariant, alert: bool) -> &'static str {
    match (variant.is_dark(), alert) {
        (true, true) => "relative overflow-hidden p-6 rounded-2xl border bg-slate-950 border-red-500 ring-1 ring-red-500/60 shadow-xl",
        (true, false) => "relative overflow-hidden p-6 rounded-2xl border bg-slate-900 border-slate-800 shadow-xl",
        (false, true) => "relative overflow-hidden p-5 rounded-2xl border bg-white border-red-500 ring-1 ring-red-500 shadow-lg",
        (false, false) => {
            "relative overflow-hidden p-5 rounded-2xl border bg-white border-slate-200 shadow-sm hover:border-primary-400 hover:shadow-md transition-all"
        }
    }
}

#[must_use]
pub fn title_class(variant: StatVariant, alert: bool) -> &'static str {
    match (variant.is_dark(), alert) {
        (_, true) => "text-[10px] font-bold uppercase tracking-[0.2em] mb-1.5 text-red-500",
        (true, false) => "text-[10px] font-bold uppercase tracking-[0.2em] mb-1.5 text-slate-400",
        (false, false) => "text-[10px] font-bold uppercase tracking-[0.15em] mb-1.5 text-slate-400",
    }
}

#[must_use]
pub fn value_class(variant: StatVariant, alert: bool) -> &'static str {
    match (variant.is_dark(), alert) {
        (true, true) => "text-5xl font-bold font-mono tracking-tighter text-red-500",
        (true, false) => "text-5xl font-bold font-mono tracking-tighter text-white",
        (false, true) => "text-3xl font-bold font-mono tracking-tighter text-red-600",
        (false, false) => "text-3xl font-bold font-mono tracking-tighter text-slate-900",
    }
}

#[must_use]
pub fn subtext_class(variant: StatVariant, alert: bool) -> &'static str {
    match (variant.is_dark(), alert) {
        (_, true) => "mt-5 pt-3 border-t text-[10px] font-semibold flex items-center gap-1.5 border-red-100 text-red-400",
        (true, false) => "mt-5 pt-3 border-t text-[10px] font-semibold flex items-center gap-1.5 border-slate-800 text-slate-500",
        (false, false) => "mt-5 pt-3 border-t text-[10px] font-semibold flex items-center gap-1.5 border-slate-50 text-slate-400",
    }
}

fn subtext_dot_class(alert: bool) -> &'static str {
    if alert { "w-1 h-1 rounded-full bg-red-500 animate-pulse" } else { "w-1 h-1 rounded-full bg-slate-300" }
}

/// The trend chip is replaced by the alert marker while alerting.
#[must_use]
pub fn shows_trend(trend_value: Option<&str>, alert: bool) -> bool {
    !alert && trend_value.is_some_and(|v| !v.is_empty())
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] subtext: MaybeProp<String>,
    #[prop(optional)] trend: Trend,
    #[prop(optional, into)] trend_value: Option<String>,
    #[prop(optional)] variant: StatVariant,
    #[prop(optional, into)] is_alert: Signal<bool>,
) -> impl IntoView {
    let trend_value = StoredValue::new(trend_value);

    let chip = move || {
        let alert = is_alert.get();
        let text = trend_value.get_value();
        if alert {
            return Some(view! {
                <span class="flex items-center gap-1.5 text-[9px] font-black px-2 py-0.5 rounded-full uppercase tracking-[0.2em] border bg-red-500/10 border-red-500/30 text-red-500">
                    <span class="w-1.5 h-1.5 rounded-full bg-red-500 animate-ping"></span>
                    "Alert"
                </span>
            }
            .into_any());
        }
        if !shows_trend(text.as_deref(), alert) {
            return None;
        }
        Some(view! {
            <span class=format!("flex items-center gap-1 text-[10px] font-bold px-2 py-0.5 rounded-full border {}", trend.chip_class())>
                {trend.glyph()}
                " "
                {text}
            </span>
        }
        .into_any())
    };

    view! {
        <div class=move || card_class(variant, is_alert.get())>
            <div class="flex justify-end items-start mb-4 min-h-5">{chip}</div>
            <p class=move || title_class(variant, is_alert.get())>{title}</p>
            <h3 class=move || value_class(variant, is_alert.get())>{move || value.get()}</h3>
            {move || {
                subtext
                    .get()
                    .map(|text| {
                        let alert = is_alert.get();
                        view! {
                            <div class=subtext_class(variant, alert)>
                                <span class=subtext_dot_class(alert)></span>
                                {text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
