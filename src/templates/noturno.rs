//! Template 6 — dark background with luminous accents for evening receptions.

use leptos::prelude::*;

use super::use_ceremony_texts;
use crate::ceremony::{section_content, DEFAULT_SECTIONS};
use crate::components::guest::{Guestbook, RsvpForm};
use crate::components::{Remote, Spinner};

fn sections(texts: Vec<crate::api::CeremonyText>) -> AnyView {
    DEFAULT_SECTIONS
        .iter()
        .map(|section| {
            view! {
                <section class="max-w-2xl mx-auto px-6 py-12 text-center">
                    <h2 class="text-xl uppercase tracking-widest text-amber-300 mb-5">{section.title}</h2>
                    <p class="text-slate-300 leading-loose">{section_content(section, &texts)}</p>
                </section>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub(super) fn Noturno() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-slate-950 text-slate-100">
            <header class="text-center pt-28 pb-14 px-6">
                <p class="text-amber-300 tracking-[0.5em] uppercase text-xs mb-6">"Sob as estrelas"</p>
                <h1 class="text-5xl md:text-6xl font-light mb-6">"A noite é nossa"</h1>
                <p class="text-slate-400">"Uma recepção à luz de velas para celebrar o nosso sim."</p>
            </header>
            {move || match texts.get() {
                Remote::Loading => view! { <Spinner /> }.into_any(),
                Remote::Ready(list) => sections(list),
                Remote::Failed(_) => sections(Vec::new()),
            }}
            <div class="bg-slate-900/60">
                <RsvpForm />
                <Guestbook />
            </div>
        </div>
    }
}
