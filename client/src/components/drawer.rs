//! Right-anchored side panel rendered through a portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every detail and edit panel in the console is a `Drawer`. Visibility is
//! owned by the caller through `is_open`; the drawer only owns the side
//! effects of being open (Escape listener, body scroll lock), which it holds
//! through an [`OverlaySlot`] for exactly as long as `is_open` is true and the
//! component is mounted.

use leptos::portal::Portal;
use leptos::prelude::*;

use crate::util::overlay::{OverlaySlot, OverlaySurface};

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerWidth {
    #[default]
    Md,
    Lg,
    Xl,
    TwoXl,
}

impl DrawerWidth {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Md => "max-w-md",
            Self::Lg => "max-w-lg",
            Self::Xl => "max-w-xl",
            Self::TwoXl => "max-w-2xl",
        }
    }
}

/// Pointer target that can end a drawer session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissSource {
    Backdrop,
    CloseButton,
    /// Anywhere inside the panel, header and footer included.
    Panel,
}

impl DismissSource {
    #[must_use]
    pub fn closes(self) -> bool {
        match self {
            Self::Backdrop | Self::CloseButton => true,
            Self::Panel => false,
        }
    }
}

/// Runs `on_close` when a click on `source` dismisses the drawer.
pub fn dismiss(source: DismissSource, on_close: impl FnOnce()) -> bool {
    let closes = source.closes();
    if closes {
        on_close();
    }
    closes
}

/// Side panel with backdrop, header, scrollable body and optional footer.
#[component]
pub fn Drawer(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] description: MaybeProp<String>,
    #[prop(optional)] width: DrawerWidth,
    #[prop(optional, into)] footer: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let surface = use_context::<OverlaySurface>().unwrap_or_default();
    let slot = OverlaySlot::default();

    let effect_slot = slot.clone();
    Effect::new(move || {
        let open = is_open.get();
        effect_slot.sync(open, &surface, move || on_close.run(()));
    });
    on_cleanup(move || slot.clear());

    let panel_class = format!(
        "relative w-full {} h-full bg-white shadow-2xl flex flex-col animate-in slide-in-from-right duration-300",
        width.class()
    );

    let panel = move || {
        let children = children.clone();
        let footer = footer.clone();
        let panel_class = panel_class.clone();
        view! {
            <Portal>
                <div class="fixed inset-0 z-50 flex justify-end">
                    <div
                        class="absolute inset-0 bg-slate-900/40 backdrop-blur-sm"
                        on:click=move |_| {
                            dismiss(DismissSource::Backdrop, || on_close.run(()));
                        }
                    ></div>
                    <div
                        class=panel_class.clone()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dismiss(DismissSource::Panel, || on_close.run(()));
                        }
                    >
                        <div class="flex items-start justify-between px-6 py-5 border-b border-slate-100">
                            <div>
                                <h2 class="text-lg font-bold text-slate-900">{move || title.get()}</h2>
                                {move || {
                                    description
                                        .get()
                                        .map(|text| view! { <p class="mt-1 text-xs text-slate-500">{text}</p> })
                                }}
                            </div>
                            <button
                                class="p-2 rounded-lg text-slate-400 hover:text-slate-900 hover:bg-slate-100 transition-colors"
                                title="Close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    dismiss(DismissSource::CloseButton, || on_close.run(()));
                                }
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="flex-1 overflow-y-auto px-6 py-6">{children()}</div>
                        {footer
                            .as_ref()
                            .map(|footer| {
                                view! {
                                    <div class="px-6 py-4 border-t border-slate-100 bg-slate-50/60">
                                        {footer.run()}
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </Portal>
        }
    };

    view! { {move || is_open.get().then(panel.clone())} }
}
