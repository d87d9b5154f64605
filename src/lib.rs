pub mod api;
pub mod ceremony;
pub mod components;
pub mod meta;
pub mod pages;
pub mod routing;
pub mod state;
pub mod templates;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use meta::MetadataSync;
use pages::builder::BuilderPage;
use pages::config::ConfigPage;
use pages::preview::PreviewPage;
use state::provide_active_template;

/// Route table in precedence order — this mirrors
/// [`routing::match_route`] one-to-one and the two must stay in sync.
/// The specific three-segment admin patterns come before the generic
/// `/:client_slug/:template_id` pattern, which would otherwise swallow
/// admin paths as tenant slugs; the legacy aliases and roots follow, and
/// the catch-all redirects (not renders) to the config dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_active_template();

    view! {
        <Router>
            <MetadataSync />
            <Routes fallback=|| view! { <Redirect path="/config" /> }>
                <Route path=path!("/builder/:client_slug/:template_id") view=BuilderPage />
                <Route path=path!("/config/:client_slug/:template_id") view=ConfigPage />
                <Route path=path!("/builder") view=BuilderPage />
                <Route path=path!("/config") view=ConfigPage />
                <Route path=path!("/preview") view=PreviewPage />
                // Legacy single-segment aliases; all still live bookmarks.
                <Route path=path!("/religioso") view=PreviewPage />
                <Route path=path!("/festa") view=PreviewPage />
                <Route path=path!("/cerimonia-religiosa") view=PreviewPage />
                <Route path=path!("/cerimonia-festiva") view=PreviewPage />
                <Route path=path!("/presentes") view=PreviewPage />
                <Route path=path!("/lista-de-presentes") view=PreviewPage />
                <Route path=path!("/listadepresentes") view=PreviewPage />
                <Route path=path!("/:client_slug/:template_id") view=PreviewPage />
                <Route path=path!("/") view=PreviewPage />
            </Routes>
        </Router>
    }
}
