//! Config surface — overlay navigation plus a panel switcher, where one
//! panel is a device-framed iframe preview of the public invitation.
//!
//! The frame is a deliberately isolated browsing context: it runs a
//! second instance of this app and re-resolves its own URL. Nothing is
//! pushed into it; the composed source URL is the whole contract, so an
//! embedded preview and a directly opened tab always agree.

mod analytics;
mod content;
mod dashboard;
mod presents;
mod review;
mod rsvp;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::routing::{compose_preview_url, extracted_template_id};
use crate::state::{
    load_device_mode, store_device_mode, use_active_template, ActivePanel, DeviceMode,
};
use crate::templates::TEMPLATES;

#[component]
pub fn ConfigPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let active = use_active_template();

    // Session-local panel selection; only the device mode is durable.
    let (panel, set_panel) = signal(ActivePanel::default());
    let (device, set_device) = signal(load_device_mode());

    // The template may arrive as a path param (three-segment route) or
    // via the legacy ?template= form on the config root.
    Effect::new(move || {
        let path_param = params.with(|p| p.get("template_id"));
        let query_param = query.with(|q| q.get("template"));
        if let Some(id) = extracted_template_id(path_param.as_deref(), query_param.as_deref()) {
            active.set(id);
        }
    });

    let client_slug = Memo::new(move |_| params.with(|p| p.get("client_slug")));
    let frame_src =
        Memo::new(move |_| compose_preview_url(client_slug.get().as_deref(), &active.get()));

    view! {
        <div class="min-h-screen bg-slate-100 text-slate-900">
            // Overlay navigation: floats above whichever panel is active.
            <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/90 backdrop-blur-md text-slate-200">
                <div class="max-w-7xl mx-auto px-4 h-14 flex items-center gap-6 overflow-x-auto">
                    <span class="font-bold text-white whitespace-nowrap">"Convite Studio"</span>
                    <nav class="flex items-center gap-1">
                        {ActivePanel::ALL.into_iter().map(|p| view! {
                            <button
                                class=move || {
                                    if panel.get() == p {
                                        "px-3 py-1.5 text-sm rounded-full bg-white text-slate-950 font-medium whitespace-nowrap"
                                    } else {
                                        "px-3 py-1.5 text-sm rounded-full text-slate-400 hover:text-white whitespace-nowrap"
                                    }
                                }
                                on:click=move |_| set_panel.set(p)
                            >
                                {p.label()}
                            </button>
                        }).collect_view()}
                    </nav>
                </div>
            </header>

            <main class="pt-20 px-4 pb-8 max-w-7xl mx-auto">
                {move || match panel.get() {
                    ActivePanel::Dashboard => view! {
                        <dashboard::DashboardPanel set_panel />
                    }.into_any(),
                    ActivePanel::Templates => view! {
                        <PreviewPanel device set_device frame_src />
                    }.into_any(),
                    ActivePanel::TemplatesSelector => view! {
                        <SelectorPanel set_panel />
                    }.into_any(),
                    ActivePanel::Analytics => view! { <analytics::AnalyticsPanel /> }.into_any(),
                    ActivePanel::Rsvp => view! { <rsvp::RsvpPanel /> }.into_any(),
                    ActivePanel::Presents => view! { <presents::PresentsPanel /> }.into_any(),
                    ActivePanel::Content => view! { <content::ContentPanel /> }.into_any(),
                    ActivePanel::Review => view! { <review::ReviewPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Live preview panel: device toggle plus the framed invitation.
#[component]
fn PreviewPanel(
    device: ReadSignal<DeviceMode>,
    set_device: WriteSignal<DeviceMode>,
    frame_src: Memo<String>,
) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <div class="flex gap-1 bg-white rounded-full border p-1">
                    {DeviceMode::ALL.into_iter().map(|mode| view! {
                        <button
                            class=move || {
                                if device.get() == mode {
                                    "px-4 py-1.5 text-sm rounded-full bg-slate-900 text-white"
                                } else {
                                    "px-4 py-1.5 text-sm rounded-full text-slate-500 hover:text-slate-900"
                                }
                            }
                            on:click=move |_| {
                                set_device.set(mode);
                                store_device_mode(mode);
                            }
                        >
                            {mode.label()}
                        </button>
                    }).collect_view()}
                </div>
                <a
                    href=move || frame_src.get()
                    target="_blank"
                    class="text-sm text-blue-600 hover:underline"
                >
                    "Abrir em nova aba"
                </a>
            </div>
            <DeviceFrame device frame_src />
        </div>
    }
}

/// The iframe, wrapped in device chrome for mobile/tablet.
///
/// The whole subtree is rebuilt whenever the source URL or the device
/// mode changes — the frame must fully unmount and remount so no scroll
/// or animation state leaks across template switches, and a remount is
/// the only way to make the independent frame re-resolve its route.
#[component]
fn DeviceFrame(device: ReadSignal<DeviceMode>, frame_src: Memo<String>) -> impl IntoView {
    view! {
        {move || {
            let src = frame_src.get();
            let frame = view! {
                <iframe
                    src=src.clone()
                    class="w-full h-full bg-white border-0"
                    title="Pré-visualização do convite"
                ></iframe>
            };
            match device.get() {
                DeviceMode::Mobile => view! {
                    <div class="mx-auto w-[390px] h-[844px] max-h-[80vh] rounded-[3rem] border-[12px] border-slate-900 overflow-hidden shadow-2xl bg-slate-900">
                        {frame}
                    </div>
                }.into_any(),
                DeviceMode::Tablet => view! {
                    <div class="mx-auto w-[820px] h-[1180px] max-h-[80vh] rounded-[2rem] border-[14px] border-slate-800 overflow-hidden shadow-2xl bg-slate-800">
                        {frame}
                    </div>
                }.into_any(),
                DeviceMode::Desktop => view! {
                    <div class="w-full h-[calc(100vh-10rem)] rounded-xl overflow-hidden border bg-white shadow">
                        {frame}
                    </div>
                }.into_any(),
            }
        }}
    }
}

/// Template picker: writes the active template and jumps to the preview.
#[component]
fn SelectorPanel(set_panel: WriteSignal<ActivePanel>) -> impl IntoView {
    let active = use_active_template();

    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {TEMPLATES.iter().map(|meta| {
                let id = meta.id;
                view! {
                    <button
                        class=move || {
                            if active.get() == id {
                                "text-left bg-white rounded-2xl border-2 border-blue-500 p-6 shadow-sm"
                            } else {
                                "text-left bg-white rounded-2xl border p-6 hover:border-slate-400"
                            }
                        }
                        on:click=move |_| {
                            active.set(id.to_string());
                            set_panel.set(ActivePanel::Templates);
                        }
                    >
                        <h3 class="font-semibold mb-1">{meta.name}</h3>
                        <p class="text-sm text-slate-500">{meta.description}</p>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
