//! Template 2 — soft greens and floral framing for open-air ceremonies.

use leptos::prelude::*;

use super::use_ceremony_texts;
use crate::ceremony::{section_content, DEFAULT_SECTIONS};
use crate::components::guest::{Guestbook, RsvpForm};
use crate::components::{Remote, Spinner};

fn sections(texts: Vec<crate::api::CeremonyText>) -> AnyView {
    view! {
        <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto px-6 py-12">
            {DEFAULT_SECTIONS.iter().map(|section| view! {
                <section class="bg-white/70 border border-emerald-200 rounded-3xl p-8">
                    <h2 class="text-xl font-semibold text-emerald-900 mb-4">{section.title}</h2>
                    <p class="text-emerald-800/80 leading-relaxed">{section_content(section, &texts)}</p>
                </section>
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub(super) fn Botanico() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-emerald-50 text-emerald-950">
            <header class="text-center pt-20 pb-12 px-6">
                <div class="text-4xl mb-4">"🌿"</div>
                <h1 class="text-5xl font-light mb-4">"Celebre conosco"</h1>
                <p class="text-emerald-700">"Um dia entre flores, família e amigos."</p>
            </header>
            {move || match texts.get() {
                Remote::Loading => view! { <Spinner /> }.into_any(),
                Remote::Ready(list) => sections(list),
                Remote::Failed(_) => sections(Vec::new()),
            }}
            <RsvpForm />
            <Guestbook />
        </div>
    }
}
