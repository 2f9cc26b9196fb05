//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{monitoring::MonitoringPage, resource_pools::ResourcePoolsPage};
use crate::state::{inventory::InventoryHandle, monitoring::MonitoringState, pools::PoolsState};
use crate::util::overlay::OverlaySurface;

const NAV_LINK_CLASS: &str = "flex items-center px-3 py-2.5 rounded-lg text-sm text-slate-600 hover:bg-slate-50 hover:text-slate-900 transition-all aria-[current=page]:bg-primary-50 aria-[current=page]:text-primary-700 aria-[current=page]:font-semibold";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-slate-50 text-slate-900 antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the inventory repository, the overlay surface and page state,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(InventoryHandle::fixtures());
    provide_context(OverlaySurface::new());
    provide_context(RwSignal::new(PoolsState::pending()));
    provide_context(RwSignal::new(MonitoringState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/compute-console.css"/>
        <Title text="Compute Console"/>

        <Router>
            <header class="h-14 bg-white/80 backdrop-blur-md border-b border-slate-200 fixed top-0 inset-x-0 z-40 flex items-center px-6 shadow-sm">
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 bg-primary-600 rounded-lg flex items-center justify-center text-white font-black shadow-lg shadow-primary-600/20">
                        "C"
                    </div>
                    <div class="flex flex-col">
                        <span class="text-sm font-bold text-slate-900 leading-tight tracking-tight">"Compute Console"</span>
                        <span class="text-[10px] font-semibold text-slate-500 uppercase tracking-widest leading-none mt-0.5">
                            "Platform"
                        </span>
                    </div>
                </div>
            </header>
            <aside class="w-64 fixed left-0 top-14 bottom-0 bg-white border-r border-slate-200 py-6 px-4 z-30">
                <h4 class="px-3 mb-3 text-[10px] font-bold text-slate-400 uppercase tracking-wider">"Compute"</h4>
                <nav class="space-y-1">
                    <A href="/" attr:class=NAV_LINK_CLASS>"Resource pools"</A>
                    <A href="/monitoring" attr:class=NAV_LINK_CLASS>"Monitoring"</A>
                </nav>
            </aside>
            <main class="pl-64 pt-14">
                <div class="p-8">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ResourcePoolsPage/>
                        <Route path=StaticSegment("monitoring") view=MonitoringPage/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}
