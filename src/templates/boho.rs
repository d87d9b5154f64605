//! Template 5 — earthy tones and handmade texture for relaxed parties.

use leptos::prelude::*;

use super::use_ceremony_texts;
use crate::ceremony::{section_content, DEFAULT_SECTIONS};
use crate::components::guest::{Guestbook, RsvpForm};
use crate::components::{Remote, Spinner};

fn sections(texts: Vec<crate::api::CeremonyText>) -> AnyView {
    DEFAULT_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let align = if i % 2 == 0 { "md:mr-24" } else { "md:ml-24" };
            view! {
                <section class=format!("max-w-2xl mx-auto px-6 py-10 {align}")>
                    <h2 class="text-2xl text-amber-900 mb-3 border-b-2 border-dashed border-amber-300 inline-block pb-1">
                        {section.title}
                    </h2>
                    <p class="text-amber-950/70 leading-relaxed mt-4">{section_content(section, &texts)}</p>
                </section>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
pub(super) fn Boho() -> impl IntoView {
    let texts = use_ceremony_texts();

    view! {
        <div class="min-h-full bg-amber-50 text-amber-950">
            <header class="text-center pt-20 pb-10 px-6">
                <h1 class="text-5xl mb-4" style="font-family: Georgia, serif;">"Vem celebrar"</h1>
                <p class="text-amber-700">"Pé na grama, coração cheio e música até tarde."</p>
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
