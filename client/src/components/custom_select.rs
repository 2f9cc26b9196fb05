//! Dropdown select that closes on pick and on any press outside of it.

use leptos::prelude::*;

#[cfg(test)]
#[path = "custom_select_test.rs"]
mod custom_select_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Label of the selected option, or the placeholder when nothing matches.
#[must_use]
pub fn selected_label(options: &[SelectOption], value: &str, placeholder: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map_or_else(|| placeholder.to_owned(), |o| o.label.clone())
}

#[component]
pub fn CustomSelect(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !container.contains(target.as_ref()) {
                is_open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let label = move || selected_label(&options.get(), &value.get(), &placeholder);

    view! {
        <div class=format!("relative {class}") node_ref=container_ref>
            <button
                type="button"
                class="w-full flex items-center justify-between gap-3 px-4 py-2 bg-white border border-slate-200 rounded-xl text-[11px] font-black uppercase tracking-widest text-slate-700 hover:border-primary-500 transition-all focus:outline-none"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <span class="truncate">{label}</span>
                <span class=move || {
                    if is_open.get() {
                        "text-slate-400 transition-transform rotate-180"
                    } else {
                        "text-slate-400 transition-transform"
                    }
                }>"▾"</span>
            </button>
            <Show when=move || is_open.get()>
                <div class="absolute z-50 w-full mt-2 bg-white border border-slate-200 rounded-2xl shadow-xl overflow-hidden">
                    <div class="max-h-60 overflow-y-auto py-1.5">
                        <For
                            each=move || options.get()
                            key=|option| option.value.clone()
                            children=move |option| {
                                let selected = {
                                    let option_value = option.value.clone();
                                    move || value.get() == option_value
                                };
                                let picked = option.value.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selected() {
                                                "w-full flex items-center justify-between px-4 py-2 text-[10px] font-bold uppercase tracking-widest text-left bg-primary-50 text-primary-600"
                                            } else {
                                                "w-full flex items-center justify-between px-4 py-2 text-[10px] font-bold uppercase tracking-widest text-left text-slate-600 hover:bg-slate-50"
                                            }
                                        }
                                        on:click=move |_| {
                                            on_change.run(picked.clone());
                                            is_open.set(false);
                                        }
                                    >
                                        {option.label}
                                        <Show when=selected.clone()>
                                            <span>"✓"</span>
                                        </Show>
                                    </button>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
