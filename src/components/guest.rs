//! Guest-facing widgets embedded by every template: RSVP form and public
//! guestbook. Both own their loading/error state; a backend failure shows
//! an inline message and never unmounts the surrounding template.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, GuestMessageInput, RsvpInput};
use crate::components::{ErrorBanner, Remote, Spinner};

#[component]
pub fn RsvpForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (guests, set_guests) = signal(1u32);
    let (submitted, set_submitted) = signal(false);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |_| {
        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            set_error.set(Some("Informe seu nome para confirmar presença.".into()));
            return;
        }
        set_pending.set(true);
        let input = RsvpInput { name: trimmed, guests: guests.get_untracked() };
        spawn_local(async move {
            match api::submit_rsvp(&input).await {
                Ok(_) => {
                    let _ = set_submitted.try_set(true);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("rsvp submission failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <section class="max-w-md mx-auto px-6 py-10 text-center">
            <h3 class="text-xl font-semibold mb-4">"Confirme sua presença"</h3>
            <ErrorBanner message=error on_dismiss=set_error />
            {move || {
                if submitted.get() {
                    view! {
                        <p class="text-green-700">"Presença confirmada. Até lá!"</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="space-y-3">
                            <input
                                class="w-full border rounded-lg px-3 py-2"
                                placeholder="Seu nome"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <input
                                class="w-full border rounded-lg px-3 py-2"
                                type="number"
                                min="1"
                                prop:value=move || guests.get().to_string()
                                on:input=move |ev| {
                                    let parsed = event_target_value(&ev).parse().unwrap_or(1);
                                    set_guests.set(parsed.max(1));
                                }
                            />
                            <button
                                class="w-full bg-slate-900 text-white rounded-lg py-2 disabled:opacity-50"
                                disabled=pending
                                on:click=submit
                            >
                                {move || if pending.get() { "Enviando..." } else { "Confirmar" }}
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn Guestbook() -> impl IntoView {
    let (messages, set_messages) = signal(Remote::<Vec<api::GuestMessage>>::Loading);
    let (author, set_author) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (sent, set_sent) = signal(false);

    spawn_local(async move {
        match api::fetch_public_messages().await {
            Ok(list) => {
                let _ = set_messages.try_set(Remote::Ready(list));
            }
            Err(e) => {
                log::warn!("guestbook fetch failed: {e}");
                let _ = set_messages.try_set(Remote::Failed(e.to_string()));
            }
        }
    });

    let submit = move |_| {
        let input = GuestMessageInput {
            author: author.get_untracked().trim().to_string(),
            content: content.get_untracked().trim().to_string(),
        };
        if input.author.is_empty() || input.content.is_empty() {
            set_error.set(Some("Preencha nome e recado.".into()));
            return;
        }
        spawn_local(async move {
            match api::submit_message(&input).await {
                // Messages await moderation, so the list is not refetched.
                Ok(_) => {
                    let _ = set_sent.try_set(true);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::warn!("guestbook submission failed: {e}");
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <section class="max-w-xl mx-auto px-6 py-10">
            <h3 class="text-xl font-semibold text-center mb-6">"Recados para o casal"</h3>
            {move || match messages.get() {
                Remote::Loading => view! { <Spinner /> }.into_any(),
                Remote::Failed(_) => view! {
                    <p class="text-sm text-center text-slate-500">
                        "Não foi possível carregar os recados agora."
                    </p>
                }.into_any(),
                Remote::Ready(list) => view! {
                    <ul class="space-y-4 mb-8">
                        {list.into_iter().map(|message| view! {
                            <li class="border rounded-lg px-4 py-3">
                                <p class="text-sm">{message.content}</p>
                                <p class="text-xs text-slate-500 mt-1">{message.author}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
            <ErrorBanner message=error on_dismiss=set_error />
            {move || {
                if sent.get() {
                    view! {
                        <p class="text-center text-green-700">
                            "Recado enviado! Ele aparece depois da aprovação dos noivos."
                        </p>
                    }.into_any()
                } else {
                    view! {
                        <div class="space-y-3">
                            <input
                                class="w-full border rounded-lg px-3 py-2"
                                placeholder="Seu nome"
                                prop:value=author
                                on:input=move |ev| set_author.set(event_target_value(&ev))
                            />
                            <textarea
                                class="w-full border rounded-lg px-3 py-2"
                                rows="3"
                                placeholder="Deixe seu recado"
                                prop:value=content
                                on:input=move |ev| set_content.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                class="w-full bg-slate-900 text-white rounded-lg py-2"
                                on:click=submit
                            >
                                "Enviar recado"
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
