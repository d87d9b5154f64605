//! Template catalog and renderer
//!
//! The catalog is static and ordered; it is the single authoritative
//! listing for every "choose a template" UI. Each entry carries a view
//! factory so the renderer mounts exactly one template tree for the
//! current id, with a defined default when the id is unrecognized.

mod boho;
mod botanico;
mod classico;
mod minimalista;
mod noturno;
mod romantico;
mod tropical;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CeremonyText};
use crate::components::Remote;

/// Display metadata plus the renderable unit for one invitation design.
pub struct TemplateMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    render: fn() -> AnyView,
}

/// The catalog. Order matters: it drives picker UIs, and the first entry
/// is the fallback for unregistered ids.
pub static TEMPLATES: [TemplateMeta; 7] = [
    TemplateMeta {
        id: "template-1",
        name: "Clássico",
        description: "Tipografia serifada sobre tons de marfim, elegância tradicional.",
        render: || view! { <classico::Classico /> }.into_any(),
    },
    TemplateMeta {
        id: "template-2",
        name: "Botânico",
        description: "Verdes suaves e molduras florais para cerimônias ao ar livre.",
        render: || view! { <botanico::Botanico /> }.into_any(),
    },
    TemplateMeta {
        id: "template-3",
        name: "Minimalista",
        description: "Preto no branco, espaço generoso, nada além do essencial.",
        render: || view! { <minimalista::Minimalista /> }.into_any(),
    },
    TemplateMeta {
        id: "template-4",
        name: "Romântico",
        description: "Rosas e dourados com clima de carta de amor.",
        render: || view! { <romantico::Romantico /> }.into_any(),
    },
    TemplateMeta {
        id: "template-5",
        name: "Boho",
        description: "Tons terrosos e texturas artesanais para festas descontraídas.",
        render: || view! { <boho::Boho /> }.into_any(),
    },
    TemplateMeta {
        id: "template-6",
        name: "Noturno",
        description: "Fundo escuro e detalhes luminosos para recepções à noite.",
        render: || view! { <noturno::Noturno /> }.into_any(),
    },
    TemplateMeta {
        id: "template-7",
        name: "Tropical",
        description: "Cores vivas e folhagens para casamentos à beira-mar.",
        render: || view! { <tropical::Tropical /> }.into_any(),
    },
];

pub fn is_registered(id: &str) -> bool {
    TEMPLATES.iter().any(|meta| meta.id == id)
}

/// Plain lookup with a defined default: unrecognized ids mount the first
/// catalog entry rather than rendering nothing.
pub fn template_by_id(id: &str) -> &'static TemplateMeta {
    TEMPLATES.iter().find(|meta| meta.id == id).unwrap_or(&TEMPLATES[0])
}

/// Mount exactly one template tree for the current id.
///
/// The subtree is rebuilt whenever the id changes, so the outgoing
/// template fully unmounts before the incoming one mounts and each mount
/// replays the enter transition. Switching again mid-transition simply
/// restarts the animation.
#[component]
pub fn TemplateRenderer(#[prop(into)] template_id: Signal<String>) -> impl IntoView {
    view! {
        <div class="h-full w-full overflow-y-auto">
            {move || {
                let meta = template_by_id(&template_id.get());
                view! {
                    <div class="template-enter min-h-full">
                        {(meta.render)()}
                    </div>
                }
            }}
        </div>
    }
}

/// Fetch the remote ceremony texts once per template mount.
///
/// Superseded loads (the operator switched templates before the response
/// landed) write through `try_set` into a disposed scope and are simply
/// discarded; the mounted template always reflects its own fetch.
pub(crate) fn use_ceremony_texts() -> ReadSignal<Remote<Vec<CeremonyText>>> {
    let (texts, set_texts) = signal(Remote::Loading);
    spawn_local(async move {
        match api::fetch_ceremony_texts().await {
            Ok(list) => {
                let _ = set_texts.try_set(Remote::Ready(list));
            }
            Err(e) => {
                // Static defaults still render; this is a degraded state,
                // not a failure of the template.
                log::warn!("ceremony texts unavailable: {e}");
                let _ = set_texts.try_set(Remote::Failed(e.to_string()));
            }
        }
    });
    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_stable() {
        for (i, meta) in TEMPLATES.iter().enumerate() {
            assert_eq!(meta.id, format!("template-{}", i + 1));
        }
    }

    #[test]
    fn every_registered_id_resolves_to_its_own_entry() {
        for meta in TEMPLATES.iter() {
            assert_eq!(template_by_id(meta.id).id, meta.id);
            assert!(is_registered(meta.id));
        }
    }

    #[test]
    fn unregistered_ids_resolve_to_the_first_entry() {
        assert_eq!(template_by_id("template-42").id, "template-1");
        assert_eq!(template_by_id("").id, "template-1");
        assert!(!is_registered("template-42"));
    }
}
