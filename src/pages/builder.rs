//! Builder surface — fixed, always-expanded side navigation around the
//! full template mount. The content pane is offset by the sidebar width.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::routing::extracted_template_id;
use crate::state::use_active_template;
use crate::templates::{TemplateRenderer, TEMPLATES};

#[component]
pub fn BuilderPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let active = use_active_template();

    // Same id resolution as the preview surface.
    Effect::new(move || {
        let path_param = params.with(|p| p.get("template_id"));
        let query_param = query.with(|q| q.get("template"));
        if let Some(id) = extracted_template_id(path_param.as_deref(), query_param.as_deref()) {
            active.set(id);
        }
    });

    let template_id = Signal::derive(move || active.get());

    view! {
        <div class="min-h-screen bg-slate-100">
            <aside class="fixed top-0 left-0 h-screen w-64 bg-slate-950 text-slate-200 flex flex-col z-40">
                <div class="px-5 py-6 border-b border-slate-800">
                    <span class="font-bold text-white text-lg tracking-tight">"Convite Studio"</span>
                    <p class="text-xs text-slate-400 mt-1">"Modo construtor"</p>
                </div>
                <nav class="flex-1 overflow-y-auto p-4 space-y-1">
                    {TEMPLATES.iter().map(|meta| {
                        let id = meta.id;
                        view! {
                            <button
                                class=move || {
                                    if active.get() == id {
                                        "w-full text-left px-4 py-3 text-sm rounded-lg bg-blue-900/30 text-blue-300 font-medium"
                                    } else {
                                        "w-full text-left px-4 py-3 text-sm rounded-lg text-slate-400 hover:bg-slate-900 hover:text-white"
                                    }
                                }
                                on:click=move |_| active.set(id.to_string())
                            >
                                <span class="block">{meta.name}</span>
                                <span class="block text-xs opacity-60 mt-0.5">{meta.description}</span>
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <div class="p-4 border-t border-slate-800">
                    <A
                        href="/config"
                        attr:class="block text-center text-sm px-4 py-2 rounded-lg bg-slate-800 text-slate-200 hover:bg-slate-700"
                    >
                        "Abrir painel"
                    </A>
                </div>
            </aside>

            // Offset by the fixed sidebar width.
            <main class="ml-64 h-screen">
                <TemplateRenderer template_id />
            </main>
        </div>
    }
}
