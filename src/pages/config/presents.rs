//! Presents panel — gift catalog CRUD with soft delete.
//!
//! The optional image field accepts a data URL; on submit it is sent
//! through the image-upload RPC and the returned public URL is stored on
//! the gift.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Gift, GiftInput};
use crate::components::{ErrorBanner, Spinner};

#[component]
pub(super) fn PresentsPanel() -> impl IntoView {
    let (gifts, set_gifts) = signal(Vec::<Gift>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image_data, set_image_data) = signal(String::new());
    let (saving, set_saving) = signal(false);
    // Some(id) puts the form in edit mode for that gift.
    let (editing, set_editing) = signal(None::<String>);

    let clear_form = move || {
        let _ = set_name.try_set(String::new());
        let _ = set_description.try_set(String::new());
        let _ = set_price.try_set(String::new());
        let _ = set_image_data.try_set(String::new());
        let _ = set_editing.try_set(None);
    };

    spawn_local(async move {
        match api::fetch_gifts().await {
            Ok(list) => {
                let _ = set_gifts.try_set(list);
            }
            Err(e) => {
                log::warn!("gift list fetch failed: {e}");
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });

    let save = move |_| {
        let gift_name = name.get_untracked().trim().to_string();
        let Ok(gift_price) = price.get_untracked().trim().parse::<f64>() else {
            set_error.set(Some("Informe um preço válido.".into()));
            return;
        };
        if gift_name.is_empty() {
            set_error.set(Some("Informe o nome do presente.".into()));
            return;
        }
        let gift_description = description.get_untracked().trim().to_string();
        let image = image_data.get_untracked().trim().to_string();
        let editing_id = editing.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let image_url = if image.is_empty() {
                Ok(None)
            } else {
                api::upload_image(&format!("{gift_name}.png"), &image)
                    .await
                    .map(|uploaded| Some(uploaded.url))
            };
            let result = match image_url {
                Ok(image_url) => {
                    let input = GiftInput {
                        name: gift_name,
                        description: gift_description,
                        price: gift_price,
                        image_url,
                    };
                    match &editing_id {
                        Some(id) => api::update_gift(id, &input).await,
                        None => api::create_gift(&input).await,
                    }
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(gift) => {
                    let _ = set_gifts.try_update(|list| {
                        match list.iter_mut().find(|g| g.id == gift.id) {
                            Some(existing) => *existing = gift,
                            None => list.push(gift),
                        }
                    });
                    let _ = set_error.try_set(None);
                    clear_form();
                }
                Err(e) => {
                    log::warn!("gift save failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_saving.try_set(false);
        });
    };

    let start_edit = move |gift: Gift| {
        set_name.set(gift.name);
        set_description.set(gift.description);
        set_price.set(format!("{:.2}", gift.price));
        set_image_data.set(String::new());
        set_editing.set(Some(gift.id));
    };

    let deactivate = move |id: String| {
        spawn_local(async move {
            match api::deactivate_gift(&id).await {
                Ok(updated) => {
                    let _ = set_gifts.try_update(|list| {
                        if let Some(g) = list.iter_mut().find(|g| g.id == updated.id) {
                            *g = updated;
                        }
                    });
                }
                Err(e) => {
                    log::warn!("gift deactivation failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">"Lista de presentes"</h1>
            <ErrorBanner message=error on_dismiss=set_error />

            <div class="bg-white rounded-2xl border p-6 mb-6 grid md:grid-cols-2 gap-3">
                <input
                    class="border rounded-lg px-3 py-2"
                    placeholder="Nome do presente"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    class="border rounded-lg px-3 py-2"
                    placeholder="Preço (R$)"
                    prop:value=price
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    class="border rounded-lg px-3 py-2 md:col-span-2"
                    placeholder="Descrição"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <input
                    class="border rounded-lg px-3 py-2 md:col-span-2"
                    placeholder="Imagem (data URL, opcional)"
                    prop:value=image_data
                    on:input=move |ev| set_image_data.set(event_target_value(&ev))
                />
                <button
                    class="md:col-span-2 bg-slate-900 text-white rounded-lg py-2 disabled:opacity-50"
                    disabled=saving
                    on:click=save
                >
                    {move || {
                        if saving.get() {
                            "Salvando..."
                        } else if editing.get().is_some() {
                            "Salvar alterações"
                        } else {
                            "Adicionar presente"
                        }
                    }}
                </button>
                {move || {
                    editing.get().map(|_| view! {
                        <button
                            class="md:col-span-2 text-sm text-slate-500 hover:text-slate-900"
                            on:click=move |_| clear_form()
                        >
                            "Cancelar edição"
                        </button>
                    })
                }}
            </div>

            {move || {
                if loading.get() && gifts.get().is_empty() {
                    return view! { <Spinner /> }.into_any();
                }
                view! {
                    <ul class="grid md:grid-cols-2 gap-4">
                        {gifts.get().into_iter().map(|gift| {
                            let id = gift.id.clone();
                            let active = gift.active;
                            let editable = gift.clone();
                            view! {
                                <li class=if active {
                                    "bg-white rounded-2xl border p-5"
                                } else {
                                    "bg-white rounded-2xl border p-5 opacity-50"
                                }>
                                    <div class="flex justify-between items-start gap-4">
                                        <div>
                                            <h3 class="font-semibold">{gift.name}</h3>
                                            <p class="text-sm text-slate-500 mb-1">{gift.description}</p>
                                            <p class="text-sm font-medium">{format!("R$ {:.2}", gift.price)}</p>
                                        </div>
                                        {active.then(|| view! {
                                            <div class="flex gap-2 shrink-0">
                                                <button
                                                    class="text-xs px-3 py-1.5 rounded-lg bg-slate-100 text-slate-700"
                                                    on:click=move |_| start_edit(editable.clone())
                                                >
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="text-xs px-3 py-1.5 rounded-lg bg-red-100 text-red-800"
                                                    on:click=move |_| deactivate(id.clone())
                                                >
                                                    "Remover"
                                                </button>
                                            </div>
                                        })}
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
