//! Content panel — rich-text editor for the ceremony sections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CeremonyText};
use crate::components::{ErrorBanner, Spinner};

#[component]
pub(super) fn ContentPanel() -> impl IntoView {
    let (texts, set_texts) = signal(Vec::<CeremonyText>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (saved, set_saved) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_ceremony_texts().await {
            Ok(list) => {
                let _ = set_texts.try_set(list);
            }
            Err(e) => {
                log::warn!("ceremony text fetch failed: {e}");
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });

    let edit = move |id: String, content: String| {
        set_texts.update(|list| {
            if let Some(text) = list.iter_mut().find(|t| t.id == id) {
                text.content = content;
            }
        });
    };

    let save = move |id: String| {
        let Some(text) = texts.get_untracked().into_iter().find(|t| t.id == id) else {
            return;
        };
        spawn_local(async move {
            match api::update_ceremony_text(&text.id, &text.content).await {
                Ok(updated) => {
                    let _ = set_saved.try_set(Some(updated.ceremony_type.clone()));
                    let _ = set_error.try_set(None);
                    let _ = set_texts.try_update(|list| {
                        if let Some(t) = list.iter_mut().find(|t| t.id == updated.id) {
                            *t = updated;
                        }
                    });
                }
                Err(e) => {
                    log::warn!("ceremony text update failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">"Textos do convite"</h1>
            <ErrorBanner message=error on_dismiss=set_error />
            {move || {
                saved.get().map(|ceremony_type| view! {
                    <p class="text-sm text-green-700 mb-4">
                        {format!("Texto de \"{ceremony_type}\" salvo.")}
                    </p>
                })
            }}
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let list = texts.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-slate-500">
                            "Nenhum texto personalizado; os modelos usam os textos padrão."
                        </p>
                    }.into_any();
                }
                view! {
                    <div class="space-y-4">
                        {list.into_iter().map(|text| {
                            let id_edit = text.id.clone();
                            let id_save = text.id.clone();
                            view! {
                                <div class="bg-white rounded-2xl border p-6">
                                    <h3 class="font-semibold mb-2 capitalize">{text.ceremony_type.clone()}</h3>
                                    <textarea
                                        class="w-full border rounded-lg px-3 py-2 text-sm"
                                        rows="4"
                                        prop:value=text.content.clone()
                                        on:input=move |ev| edit(id_edit.clone(), event_target_value(&ev))
                                    ></textarea>
                                    <button
                                        class="mt-3 text-sm px-4 py-2 rounded-lg bg-slate-900 text-white"
                                        on:click=move |_| save(id_save.clone())
                                    >
                                        "Salvar"
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
