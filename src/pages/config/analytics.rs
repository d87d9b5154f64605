//! Analytics panel — headline counters fed by the RSVP and message lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, Spinner};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    rsvps: usize,
    guests: u32,
    messages: usize,
    pending_messages: usize,
}

#[component]
pub(super) fn AnalyticsPanel() -> impl IntoView {
    let (totals, set_totals) = signal(None::<Totals>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        let rsvps = api::fetch_confirmed_rsvps().await;
        let messages = api::fetch_all_messages().await;
        match (rsvps, messages) {
            (Ok(rsvps), Ok(messages)) => {
                let _ = set_totals.try_set(Some(Totals {
                    rsvps: rsvps.len(),
                    guests: rsvps.iter().map(|e| e.guests).sum(),
                    messages: messages.len(),
                    pending_messages: messages.iter().filter(|m| !m.approved).count(),
                }));
            }
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("analytics fetch failed: {e}");
                let _ = set_error.try_set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div>
            <h1 class="text-2xl font-bold mb-4">"Estatísticas"</h1>
            <ErrorBanner message=error on_dismiss=set_error />
            {move || match totals.get() {
                None if error.get().is_none() => view! { <Spinner /> }.into_any(),
                None => view! {
                    <p class="text-slate-500">"Sem dados para exibir."</p>
                }.into_any(),
                Some(t) => view! {
                    <div class="grid md:grid-cols-4 gap-4">
                        <StatCard label="Confirmações" value=t.rsvps.to_string() />
                        <StatCard label="Convidados" value=t.guests.to_string() />
                        <StatCard label="Recados" value=t.messages.to_string() />
                        <StatCard label="Aguardando moderação" value=t.pending_messages.to_string() />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl border p-6">
            <p class="text-3xl font-bold">{value}</p>
            <p class="text-sm text-slate-500 mt-1">{label}</p>
        </div>
    }
}
