//! Template 4 — roses and golds, love-letter register.

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
                <section class="max-w-2xl mx-auto px-8 py-10">
                    <div class="bg-white rounded-2xl shadow-sm border border-rose-100 p-10 text-center">
                        <h2 class="text-2xl text-rose-900 font-serif italic mb-4">{section.title}</h2>
                        <p class="text-rose-950/70 leading-loose">{section_content(section, &texts)}</p>
                    </div>
                </section>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub(super) fn Romantico() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-rose-50 text-rose-950">
            <header class="text-center pt-24 pb-12 px-6">
                <p class="text-rose-400 text-3xl mb-4">"♥"</p>
                <h1 class="text-5xl font-serif italic mb-4">"Era uma vez nós dois"</h1>
                <p class="text-rose-700">"E agora queremos escrever o próximo capítulo com você por perto."</p>
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
