//! Document metadata synchronizer
//!
//! On every navigation the current path is classified as administrative
//! (`/config`, `/builder`) or public invitation, a metadata plan is
//! computed, and the document's `<title>`, `<meta>` and `<link>` tags are
//! reconciled against it. Reconciliation is idempotent: the first
//! matching tag is updated in place, missing tags are created, extras
//! are removed. Planning is pure and the reconcile routine runs over a
//! [`TagStore`] abstraction so the whole thing is unit-testable without
//! a DOM; the DOM store is a thin guarded adapter.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::{self, SurfaceContext, LEGACY_PREVIEW_ALIASES};

/// Tab title restored whenever an invitation route is left.
pub const BASELINE_TITLE: &str = "Convite Studio";

/// Display name used when no couple name can be derived from the path.
pub const FALLBACK_COUPLE_NAME: &str = "Os Noivos";

const FAVICON_PUBLIC: &str = "/assets/favicon-convite.svg";
const FAVICON_ADMIN: &str = "/assets/favicon-studio.svg";

/// Identity of a head tag; two tags with the same identity are duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagId {
    MetaName(&'static str),
    MetaProperty(&'static str),
    Link(&'static str),
}

/// A head tag in its desired state: identity plus content (or href).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub id: TagId,
    pub value: String,
}

impl TagSpec {
    fn meta(name: &'static str, value: impl Into<String>) -> Self {
        Self { id: TagId::MetaName(name), value: value.into() }
    }

    fn og(property: &'static str, value: impl Into<String>) -> Self {
        Self { id: TagId::MetaProperty(property), value: value.into() }
    }

    fn link(rel: &'static str, value: impl Into<String>) -> Self {
        Self { id: TagId::Link(rel), value: value.into() }
    }
}

/// Desired document metadata for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPlan {
    pub title: String,
    pub tags: Vec<TagSpec>,
}

/// Derive a display name from a tenant slug: hyphen-split, each segment
/// capitalized. Reserved path words never name a couple.
pub fn couple_name_from_slug(slug: &str) -> String {
    let reserved = slug.is_empty()
        || matches!(slug, "preview" | "builder" | "config")
        || LEGACY_PREVIEW_ALIASES.contains(&slug);
    if reserved {
        return FALLBACK_COUPLE_NAME.to_string();
    }
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compute the metadata plan for a path.
pub fn plan_for_path(path: &str, slug: Option<&str>) -> MetaPlan {
    if routing::is_admin_path(path) {
        return MetaPlan {
            title: format!("{BASELINE_TITLE} — Painel"),
            tags: vec![
                TagSpec::meta("description", "Painel de administração do convite digital."),
                TagSpec::meta("robots", "noindex, nofollow"),
                TagSpec::link("icon", FAVICON_ADMIN),
                TagSpec::link("apple-touch-icon", FAVICON_ADMIN),
            ],
        };
    }

    let couple = slug.map(couple_name_from_slug).unwrap_or_else(|| FALLBACK_COUPLE_NAME.to_string());
    let title = format!("Casamento de {couple}");
    let description = format!("Convite de casamento de {couple}. Confirme sua presença e deixe um recado para o casal.");
    MetaPlan {
        tags: vec![
            TagSpec::meta("description", description.clone()),
            TagSpec::meta("keywords", format!("casamento, convite, {couple}, rsvp, lista de presentes")),
            TagSpec::meta("robots", "index, follow"),
            TagSpec::og("og:title", title.clone()),
            TagSpec::og("og:description", description),
            TagSpec::og("og:type", "website"),
            TagSpec::og("og:site_name", BASELINE_TITLE),
            TagSpec::link("icon", FAVICON_PUBLIC),
            TagSpec::link("apple-touch-icon", FAVICON_PUBLIC),
        ],
        title,
    }
}

/// Mutable view over a document head, small enough to fake in tests.
pub trait TagStore {
    /// Number of tags currently carrying this identity.
    fn count(&self, id: &TagId) -> usize;
    /// Update the first tag with this identity to the desired value.
    fn update_first(&mut self, spec: &TagSpec);
    /// Append a new tag.
    fn insert(&mut self, spec: &TagSpec);
    /// Remove every tag with this identity except the first.
    fn remove_extras(&mut self, id: &TagId);
    fn set_title(&mut self, title: &str);
}

/// Reconcile a store against a plan. Safe to call repeatedly with the
/// same plan: the store ends up with exactly one tag per identity.
pub fn reconcile<S: TagStore>(store: &mut S, plan: &MetaPlan) {
    store.set_title(&plan.title);
    for spec in &plan.tags {
        if store.count(&spec.id) == 0 {
            store.insert(spec);
        } else {
            store.update_first(spec);
            store.remove_extras(&spec.id);
        }
    }
}

/// Teardown: restore the baseline title. Tags are left for the next
/// route's own plan to reconcile.
pub fn restore_baseline<S: TagStore>(store: &mut S) {
    store.set_title(BASELINE_TITLE);
}

/// Route-keyed effect keeping the document head in sync with the current
/// location. Restores the baseline title on teardown so invitation
/// branding never leaks into an unrelated context.
#[component]
pub fn MetadataSync() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        let context = SurfaceContext::resolve(&path, None);
        let plan = plan_for_path(&path, context.client_slug.as_deref());
        apply_plan(&plan);
    });

    on_cleanup(|| restore_baseline_title());

    ()
}

/// Apply a plan to the real document head; a no-op off-browser.
pub fn apply_plan(plan: &MetaPlan) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(mut store) = dom::DomTagStore::current() {
            reconcile(&mut store, plan);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = plan;
    }
}

pub fn restore_baseline_title() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(mut store) = dom::DomTagStore::current() {
            restore_baseline(&mut store);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{TagId, TagSpec, TagStore};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element};

    /// [`TagStore`] over the live document head.
    pub struct DomTagStore {
        document: Document,
    }

    impl DomTagStore {
        pub fn current() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Some(Self { document })
        }

        fn selector(id: &TagId) -> String {
            match id {
                TagId::MetaName(name) => format!("meta[name='{name}']"),
                TagId::MetaProperty(property) => format!("meta[property='{property}']"),
                TagId::Link(rel) => format!("link[rel='{rel}']"),
            }
        }

        fn apply_value(element: &Element, spec: &TagSpec) {
            let attr = match spec.id {
                TagId::Link(_) => "href",
                _ => "content",
            };
            let _ = element.set_attribute(attr, &spec.value);
        }

        fn matches(&self, id: &TagId) -> Vec<Element> {
            let mut found = Vec::new();
            if let Ok(list) = self.document.query_selector_all(&Self::selector(id)) {
                for i in 0..list.length() {
                    if let Some(element) =
                        list.item(i).and_then(|node| node.dyn_into::<Element>().ok())
                    {
                        found.push(element);
                    }
                }
            }
            found
        }
    }

    impl TagStore for DomTagStore {
        fn count(&self, id: &TagId) -> usize {
            self.matches(id).len()
        }

        fn update_first(&mut self, spec: &TagSpec) {
            if let Some(element) = self.matches(&spec.id).into_iter().next() {
                Self::apply_value(&element, spec);
            }
        }

        fn insert(&mut self, spec: &TagSpec) {
            let Some(head) = self.document.head() else { return };
            let tag_name = match spec.id {
                TagId::Link(_) => "link",
                _ => "meta",
            };
            let Ok(element) = self.document.create_element(tag_name) else { return };
            match &spec.id {
                TagId::MetaName(name) => {
                    let _ = element.set_attribute("name", name);
                }
                TagId::MetaProperty(property) => {
                    let _ = element.set_attribute("property", property);
                }
                TagId::Link(rel) => {
                    let _ = element.set_attribute("rel", rel);
                }
            }
            Self::apply_value(&element, spec);
            let _ = head.append_child(&element);
        }

        fn remove_extras(&mut self, id: &TagId) {
            for element in self.matches(id).into_iter().skip(1) {
                element.remove();
            }
        }

        fn set_title(&mut self, title: &str) {
            self.document.set_title(title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory head for exercising the reconcile routine.
    #[derive(Default)]
    struct FakeHead {
        title: String,
        tags: Vec<TagSpec>,
    }

    impl TagStore for FakeHead {
        fn count(&self, id: &TagId) -> usize {
            self.tags.iter().filter(|t| &t.id == id).count()
        }

        fn update_first(&mut self, spec: &TagSpec) {
            if let Some(tag) = self.tags.iter_mut().find(|t| t.id == spec.id) {
                tag.value = spec.value.clone();
            }
        }

        fn insert(&mut self, spec: &TagSpec) {
            self.tags.push(spec.clone());
        }

        fn remove_extras(&mut self, id: &TagId) {
            let mut seen = false;
            self.tags.retain(|t| {
                if &t.id != id {
                    return true;
                }
                if seen {
                    false
                } else {
                    seen = true;
                    true
                }
            });
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }
    }

    #[test]
    fn couple_name_is_derived_by_capitalizing_hyphen_segments() {
        assert_eq!(couple_name_from_slug("ana-bonilla"), "Ana Bonilla");
        assert_eq!(couple_name_from_slug("joana-pedro"), "Joana Pedro");
        assert_eq!(couple_name_from_slug("maria"), "Maria");
    }

    #[test]
    fn reserved_words_use_the_fallback_name() {
        assert_eq!(couple_name_from_slug("preview"), FALLBACK_COUPLE_NAME);
        assert_eq!(couple_name_from_slug("config"), FALLBACK_COUPLE_NAME);
        assert_eq!(couple_name_from_slug("festa"), FALLBACK_COUPLE_NAME);
        assert_eq!(couple_name_from_slug(""), FALLBACK_COUPLE_NAME);
    }

    #[test]
    fn admin_paths_get_the_panel_plan() {
        let plan = plan_for_path("/config/joana-pedro/template-3", Some("joana-pedro"));
        assert_eq!(plan.title, format!("{BASELINE_TITLE} — Painel"));
        assert!(plan
            .tags
            .iter()
            .any(|t| t.id == TagId::MetaName("robots") && t.value.contains("noindex")));
    }

    #[test]
    fn public_paths_get_couple_branded_metadata() {
        let plan = plan_for_path("/ana-bonilla/template-2", Some("ana-bonilla"));
        assert_eq!(plan.title, "Casamento de Ana Bonilla");
        assert!(plan
            .tags
            .iter()
            .any(|t| t.id == TagId::MetaProperty("og:title") && t.value.contains("Ana Bonilla")));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let plan = plan_for_path("/ana-bonilla/template-2", Some("ana-bonilla"));
        let mut head = FakeHead::default();

        reconcile(&mut head, &plan);
        reconcile(&mut head, &plan);

        assert_eq!(head.title, plan.title);
        for spec in &plan.tags {
            assert_eq!(head.count(&spec.id), 1, "duplicate tag for {:?}", spec.id);
        }
        assert_eq!(head.count(&TagId::Link("icon")), 1);
    }

    #[test]
    fn reconcile_updates_stale_values_and_removes_duplicates() {
        let mut head = FakeHead::default();
        head.insert(&TagSpec::meta("description", "stale"));
        head.insert(&TagSpec::meta("description", "stale duplicate"));
        head.insert(&TagSpec::link("icon", "/old.ico"));

        let plan = plan_for_path("/joana-pedro/template-1", Some("joana-pedro"));
        reconcile(&mut head, &plan);

        assert_eq!(head.count(&TagId::MetaName("description")), 1);
        let description = head
            .tags
            .iter()
            .find(|t| t.id == TagId::MetaName("description"))
            .unwrap();
        assert!(description.value.contains("Joana Pedro"));
        let icon = head.tags.iter().find(|t| t.id == TagId::Link("icon")).unwrap();
        assert_ne!(icon.value, "/old.ico");
    }

    #[test]
    fn teardown_restores_the_baseline_title_exactly() {
        let mut head = FakeHead::default();
        reconcile(&mut head, &plan_for_path("/ana-bonilla/template-2", Some("ana-bonilla")));
        assert_eq!(head.title, "Casamento de Ana Bonilla");

        let tags_before = head.tags.clone();
        restore_baseline(&mut head);

        assert_eq!(head.title, BASELINE_TITLE);
        // Tags are the next route's responsibility, not the teardown's.
        assert_eq!(head.tags, tags_before);
    }

    #[test]
    fn navigating_between_plans_keeps_a_single_robots_tag() {
        let mut head = FakeHead::default();
        reconcile(&mut head, &plan_for_path("/ana-bonilla/template-2", Some("ana-bonilla")));
        reconcile(&mut head, &plan_for_path("/config", None));

        assert_eq!(head.count(&TagId::MetaName("robots")), 1);
        let robots = head.tags.iter().find(|t| t.id == TagId::MetaName("robots")).unwrap();
        assert!(robots.value.contains("noindex"));
        assert_eq!(head.title, format!("{BASELINE_TITLE} — Painel"));
    }
}
