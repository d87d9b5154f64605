//! Review panel — guestbook moderation: approve, unapprove, soft-delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, GuestMessage};
use crate::components::{ErrorBanner, Spinner};

#[component]
pub(super) fn ReviewPanel() -> impl IntoView {
    let (messages, set_messages) = signal(Vec::<GuestMessage>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_all_messages().await {
            Ok(list) => {
                let _ = set_messages.try_set(list);
            }
            Err(e) => {
                log::warn!("moderation list fetch failed: {e}");
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
        let _ = set_loading.try_set(false);
    });

    let moderate = move |id: String, approved: bool| {
        spawn_local(async move {
            match api::set_message_approval(&id, approved).await {
                Ok(updated) => {
                    let _ = set_messages.try_update(|list| {
                        if let Some(m) = list.iter_mut().find(|m| m.id == updated.id) {
                            *m = updated;
                        }
                    });
                }
                Err(e) => {
                    log::warn!("moderation failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    let remove = move |id: String| {
        spawn_local(async move {
            match api::delete_message(&id).await {
                Ok(deleted) => {
                    let _ = set_messages.try_update(|list| list.retain(|m| m.id != deleted.id));
                }
                Err(e) => {
                    log::warn!("message delete failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">"Moderação de recados"</h1>
            <ErrorBanner message=error on_dismiss=set_error />
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let list = messages.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-slate-500">"Nenhum recado recebido."</p>
                    }.into_any();
                }
                view! {
                    <ul class="space-y-3">
                        {list.into_iter().map(|message| {
                            let id_approve = message.id.clone();
                            let id_remove = message.id.clone();
                            let approved = message.approved;
                            view! {
                                <li class="bg-white rounded-2xl border p-5">
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <p class="text-sm mb-1">{message.content}</p>
                                            <p class="text-xs text-slate-500">
                                                {format!("{} — {}", message.author, message.created_at)}
                                            </p>
                                        </div>
                                        <div class="flex gap-2 shrink-0">
                                            <button
                                                class=if approved {
                                                    "text-xs px-3 py-1.5 rounded-lg bg-amber-100 text-amber-800"
                                                } else {
                                                    "text-xs px-3 py-1.5 rounded-lg bg-green-100 text-green-800"
                                                }
                                                on:click=move |_| moderate(id_approve.clone(), !approved)
                                            >
                                                {if approved { "Ocultar" } else { "Aprovar" }}
                                            </button>
                                            <button
                                                class="text-xs px-3 py-1.5 rounded-lg bg-red-100 text-red-800"
                                                on:click=move |_| remove(id_remove.clone())
                                            >
                                                "Excluir"
                                            </button>
                                        </div>
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
