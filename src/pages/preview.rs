//! Preview surface — bare, full-viewport mount with no chrome.
//!
//! This is the exact view a guest gets for an invitation URL, and the
//! view the config surface's iframe loads. There must be no difference
//! between the two: the URL alone decides what renders.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::routing::extracted_template_id;
use crate::state::use_active_template;
use crate::templates::TemplateRenderer;

#[component]
pub fn PreviewPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let active = use_active_template();

    // Route resolution overwrites the active template only when the
    // navigation carried one; the path param beats the legacy
    // ?template= form.
    Effect::new(move || {
        let path_param = params.with(|p| p.get("template_id"));
        let query_param = query.with(|q| q.get("template"));
        if let Some(id) = extracted_template_id(path_param.as_deref(), query_param.as_deref()) {
            active.set(id);
        }
    });

    let template_id = Signal::derive(move || active.get());

    view! {
        <main class="h-screen w-full">
            <TemplateRenderer template_id />
        </main>
    }
}
