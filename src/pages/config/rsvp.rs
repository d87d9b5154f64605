//! RSVP panel — the admin listing of confirmed guests.
//!
//! Owns its own loading/error state; a failed refresh shows a
//! dismissible message and keeps the last successfully loaded list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RsvpEntry};
use crate::components::{ErrorBanner, Spinner};

#[component]
pub(super) fn RsvpPanel() -> impl IntoView {
    let (entries, set_entries) = signal(Vec::<RsvpEntry>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_confirmed_rsvps().await {
                Ok(list) => {
                    let _ = set_entries.try_set(list);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("rsvp list fetch failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };
    load();

    let total_guests = move || entries.get().iter().map(|e| e.guests).sum::<u32>();

    view! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">"Confirmações de presença"</h1>
                <button
                    class="text-sm px-4 py-2 rounded-lg bg-white border hover:border-slate-400"
                    on:click=move |_| load()
                >
                    "Atualizar"
                </button>
            </div>
            <ErrorBanner message=error on_dismiss=set_error />
            {move || {
                if loading.get() && entries.get().is_empty() {
                    return view! { <Spinner /> }.into_any();
                }
                let list = entries.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-slate-500">"Nenhuma confirmação até agora."</p>
                    }.into_any();
                }
                view! {
                    <div class="bg-white rounded-2xl border overflow-hidden">
                        <div class="px-6 py-3 border-b text-sm text-slate-500">
                            {format!("{} confirmações, {} convidados", list.len(), total_guests())}
                        </div>
                        <ul>
                            {list.into_iter().map(|entry| view! {
                                <li class="px-6 py-3 border-b last:border-b-0 flex justify-between text-sm">
                                    <span class="font-medium">{entry.name}</span>
                                    <span class="text-slate-500">
                                        {format!("{} pessoa(s) — {}", entry.guests, entry.confirmed_at)}
                                    </span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
