//! Dashboard panel — shortcut cards into the other panels.

use leptos::prelude::*;

use crate::state::ActivePanel;

const SHORTCUTS: &[(ActivePanel, &str)] = &[
    (ActivePanel::Templates, "Veja o convite como seus convidados verão, em qualquer dispositivo."),
    (ActivePanel::TemplatesSelector, "Troque o modelo visual do convite."),
    (ActivePanel::Content, "Edite os textos da cerimônia e da festa."),
    (ActivePanel::Presents, "Gerencie a lista de presentes."),
    (ActivePanel::Rsvp, "Acompanhe as confirmações de presença."),
    (ActivePanel::Review, "Modere os recados deixados pelos convidados."),
    (ActivePanel::Analytics, "Números gerais do seu convite."),
];

#[component]
pub(super) fn DashboardPanel(set_panel: WriteSignal<ActivePanel>) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold mb-2">"Bem-vindos ao seu convite"</h1>
            <p class="text-slate-500 mb-8">"Tudo o que o casal precisa, em um só lugar."</p>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {SHORTCUTS.iter().map(|&(panel, blurb)| view! {
                    <button
                        class="text-left bg-white rounded-2xl border p-6 hover:border-slate-400 transition-colors"
                        on:click=move |_| set_panel.set(panel)
                    >
                        <h3 class="font-semibold mb-1">{panel.label()}</h3>
                        <p class="text-sm text-slate-500">{blurb}</p>
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
