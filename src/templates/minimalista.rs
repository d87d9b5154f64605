//! Template 3 — black on white, generous whitespace, nothing extra.

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
                <section class="max-w-xl mx-auto px-6 py-16">
                    <h2 class="text-sm uppercase tracking-[0.3em] text-neutral-400 mb-6">
                        {section.title}
                    </h2>
                    <p class="text-lg leading-relaxed">{section_content(section, &texts)}</p>
                </section>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub(super) fn Minimalista() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-white text-neutral-900">
            <header class="max-w-xl mx-auto px-6 pt-32 pb-16">
                <h1 class="text-6xl font-light tracking-tight mb-8">"Sim."</h1>
                <p class="text-neutral-500">"Vamos nos casar — e a sua presença importa."</p>
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
