//! Template 7 — vivid colors and foliage for seaside weddings.

use leptos::prelude::*;

use super::use_ceremony_texts;
use crate::ceremony::{section_content, DEFAULT_SECTIONS};
use crate::components::guest::{Guestbook, RsvpForm};
use crate::components::{Remote, Spinner};

fn sections(texts: Vec<crate::api::CeremonyText>) -> AnyView {
    view! {
        <div class="max-w-4xl mx-auto px-6 py-10 space-y-8">
            {DEFAULT_SECTIONS.iter().map(|section| view! {
                <section class="bg-gradient-to-r from-teal-100 to-cyan-100 rounded-[2rem] p-10">
                    <h2 class="text-2xl font-bold text-teal-900 mb-3">{section.title}</h2>
                    <p class="text-teal-900/70 leading-relaxed">{section_content(section, &texts)}</p>
                </section>
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub(super) fn Tropical() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-cyan-50 text-teal-950">
            <header class="text-center pt-20 pb-10 px-6">
                <div class="text-4xl mb-3">"🌴"</div>
                <h1 class="text-5xl font-extrabold text-teal-800 mb-4">"Casamento à beira-mar"</h1>
                <p class="text-teal-700">"Sol, mar e a melhor companhia: a sua."</p>
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
