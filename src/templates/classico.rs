//! Template 1 — serif typography over ivory, traditional chrome.

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
                <section class="max-w-2xl mx-auto px-6 py-12 text-center border-t border-stone-300">
                    <h2 class="text-2xl tracking-widest uppercase mb-6">{section.title}</h2>
                    <p class="leading-loose text-stone-600">{section_content(section, &texts)}</p>
                </section>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub(super) fn Classico() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-[#faf6ef] text-stone-800 font-serif">
            <header class="text-center pt-24 pb-16 px-6">
                <p class="tracking-[0.4em] uppercase text-sm text-stone-500 mb-6">"Convite de casamento"</p>
                <h1 class="text-5xl md:text-6xl mb-6">"Vamos nos casar"</h1>
                <p class="italic text-stone-500">"E queremos você ao nosso lado neste dia."</p>
            </header>
            {move || match texts.get() {
                Remote::Loading => view! { <Spinner /> }.into_any(),
                Remote::Ready(list) => sections(list),
                Remote::Failed(_) => sections(Vec::new()),
            }}
            <RsvpForm />
            <Guestbook />
            <footer class="text-center text-xs text-stone-400 py-10">"Com amor, os noivos"</footer>
        </div>
    }
}
