//! Route-to-surface resolution
//!
//! Pure counterpart of the router table in `lib.rs`: given a raw path it
//! decides which surface layout mounts and which `{clientSlug, templateId}`
//! pair the path carries. The two must stay in sync — the iframe preview
//! and the metadata synchronizer resolve raw paths through this module
//! instead of reading router state, so that an embedded frame and a
//! directly-opened tab agree on what a URL renders.

use crate::templates;

/// Template mounted when a route carries no id or an unregistered one.
pub const DEFAULT_TEMPLATE_ID: &str = "template-1";

/// Single-segment legacy paths that still resolve to the public preview.
///
/// `/festa` vs `/cerimonia-festiva` (and the other pairs) look redundant
/// but both may be live bookmarks; keep every alias.
pub const LEGACY_PREVIEW_ALIASES: &[&str] = &[
    "religioso",
    "festa",
    "cerimonia-religiosa",
    "cerimonia-festiva",
    "presentes",
    "lista-de-presentes",
    "listadepresentes",
];

/// The three top-level page compositions that can wrap a rendered template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Preview,
    Builder,
    Config,
}

/// Outcome of matching a raw path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Surface {
        surface: Surface,
        client_slug: Option<String>,
        template_id: Option<String>,
    },
    /// Unknown paths redirect (not render) to the config dashboard.
    RedirectToConfig,
}

/// Everything a navigation carries, recomputed per location change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceContext {
    pub client_slug: Option<String>,
    pub template_id: Option<String>,
    pub query_template: Option<String>,
    pub path: String,
}

impl SurfaceContext {
    /// Derive the context for one location. Never stored; recomputed on
    /// every navigation.
    pub fn resolve(path: &str, query_template: Option<&str>) -> Self {
        let (client_slug, template_id) = match match_route(path) {
            RouteMatch::Surface { client_slug, template_id, .. } => (client_slug, template_id),
            RouteMatch::RedirectToConfig => (None, None),
        };
        Self {
            client_slug,
            template_id,
            query_template: query_template.map(str::to_string),
            path: path.to_string(),
        }
    }

    /// The template this navigation should mount, defaults applied.
    pub fn resolved_template_id(&self) -> String {
        resolve_template_id(self.template_id.as_deref(), self.query_template.as_deref())
    }
}

/// Match a path against the ordered route table.
///
/// Ordering is significant: the three-segment admin patterns must win
/// over the generic `/:clientSlug/:templateId` pattern, which itself wins
/// over nothing — single-segment admin roots and legacy aliases are
/// structurally distinct from it. Two-segment paths under `/builder` or
/// `/config` intentionally fall through to the generic pattern (slug =
/// "builder"): only the three-segment admin patterns outrank it.
pub fn match_route(path: &str) -> RouteMatch {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["builder", slug, template] => RouteMatch::Surface {
            surface: Surface::Builder,
            client_slug: Some((*slug).to_string()),
            template_id: Some((*template).to_string()),
        },
        ["config", slug, template] => RouteMatch::Surface {
            surface: Surface::Config,
            client_slug: Some((*slug).to_string()),
            template_id: Some((*template).to_string()),
        },
        ["builder"] => RouteMatch::Surface {
            surface: Surface::Builder,
            client_slug: None,
            template_id: None,
        },
        ["config"] => RouteMatch::Surface {
            surface: Surface::Config,
            client_slug: None,
            template_id: None,
        },
        ["preview"] => RouteMatch::Surface {
            surface: Surface::Preview,
            client_slug: None,
            template_id: None,
        },
        [alias] if LEGACY_PREVIEW_ALIASES.contains(alias) => RouteMatch::Surface {
            surface: Surface::Preview,
            client_slug: None,
            template_id: None,
        },
        [slug, template] => RouteMatch::Surface {
            surface: Surface::Preview,
            client_slug: Some((*slug).to_string()),
            template_id: Some((*template).to_string()),
        },
        [] => RouteMatch::Surface {
            surface: Surface::Preview,
            client_slug: None,
            template_id: None,
        },
        _ => RouteMatch::RedirectToConfig,
    }
}

/// Resolve the template id a surface should mount.
///
/// The path parameter beats the legacy `?template=` query parameter;
/// unregistered ids fall back to [`DEFAULT_TEMPLATE_ID`] instead of
/// rendering nothing.
pub fn resolve_template_id(path_param: Option<&str>, query_param: Option<&str>) -> String {
    let requested = path_param.or(query_param);
    match requested {
        Some(id) if templates::is_registered(id) => id.to_string(),
        Some(id) => {
            log::warn!("unregistered template id {id:?}, falling back to {DEFAULT_TEMPLATE_ID}");
            DEFAULT_TEMPLATE_ID.to_string()
        }
        None => DEFAULT_TEMPLATE_ID.to_string(),
    }
}

/// Template id a navigation extracted, defaults applied; `None` when the
/// route carries no template intent at all, in which case the current
/// active selection is preserved rather than overwritten.
pub fn extracted_template_id(
    path_param: Option<&str>,
    query_param: Option<&str>,
) -> Option<String> {
    if path_param.is_none() && query_param.is_none() {
        return None;
    }
    Some(resolve_template_id(path_param, query_param))
}

/// Compose the URL the device preview frame is given.
///
/// The URL is the frame's only communication channel: when a slug is
/// known the frame gets the exact public invitation route, otherwise the
/// generic preview route with the legacy query parameter.
pub fn compose_preview_url(slug: Option<&str>, template: &str) -> String {
    match slug {
        Some(slug) if !slug.is_empty() => format!("/{slug}/{template}"),
        _ => format!("/preview?template={template}"),
    }
}

/// Whether a path belongs to the operator-facing surfaces.
pub fn is_admin_path(path: &str) -> bool {
    let trimmed = path.trim_start_matches('/');
    trimmed == "config"
        || trimmed == "builder"
        || trimmed.starts_with("config/")
        || trimmed.starts_with("builder/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_of(path: &str) -> Surface {
        match match_route(path) {
            RouteMatch::Surface { surface, .. } => surface,
            RouteMatch::RedirectToConfig => panic!("expected a surface for {path}"),
        }
    }

    #[test]
    fn specific_admin_route_wins_over_generic_pattern() {
        let m = match_route("/config/joana-pedro/template-3");
        assert_eq!(
            m,
            RouteMatch::Surface {
                surface: Surface::Config,
                client_slug: Some("joana-pedro".into()),
                template_id: Some("template-3".into()),
            }
        );
    }

    #[test]
    fn builder_route_extracts_slug_and_template() {
        let m = match_route("/builder/ana-bonilla/template-2");
        assert_eq!(
            m,
            RouteMatch::Surface {
                surface: Surface::Builder,
                client_slug: Some("ana-bonilla".into()),
                template_id: Some("template-2".into()),
            }
        );
    }

    #[test]
    fn generic_two_segment_path_is_a_public_invitation() {
        let m = match_route("/joana-pedro/template-5");
        assert_eq!(
            m,
            RouteMatch::Surface {
                surface: Surface::Preview,
                client_slug: Some("joana-pedro".into()),
                template_id: Some("template-5".into()),
            }
        );
    }

    #[test]
    fn two_segment_admin_prefixed_path_falls_through_to_generic() {
        // Only three-segment admin patterns outrank the generic one.
        let m = match_route("/builder/joana-pedro");
        assert_eq!(
            m,
            RouteMatch::Surface {
                surface: Surface::Preview,
                client_slug: Some("builder".into()),
                template_id: Some("joana-pedro".into()),
            }
        );
    }

    #[test]
    fn admin_roots_and_preview_resolve_without_params() {
        assert_eq!(surface_of("/builder"), Surface::Builder);
        assert_eq!(surface_of("/config"), Surface::Config);
        assert_eq!(surface_of("/preview"), Surface::Preview);
    }

    #[test]
    fn every_legacy_alias_resolves_to_preview() {
        for alias in LEGACY_PREVIEW_ALIASES {
            assert_eq!(surface_of(&format!("/{alias}")), Surface::Preview);
        }
    }

    #[test]
    fn root_is_the_default_public_preview() {
        assert_eq!(surface_of("/"), Surface::Preview);
    }

    #[test]
    fn unmatched_paths_redirect_to_config() {
        assert_eq!(
            match_route("/a/b/c/d"),
            RouteMatch::RedirectToConfig
        );
        assert_eq!(
            match_route("/preview/extra/segments/here"),
            RouteMatch::RedirectToConfig
        );
    }

    #[test]
    fn path_param_beats_query_param() {
        assert_eq!(
            resolve_template_id(Some("template-3"), Some("template-5")),
            "template-3"
        );
    }

    #[test]
    fn query_param_is_used_when_path_param_is_absent() {
        assert_eq!(resolve_template_id(None, Some("template-4")), "template-4");
    }

    #[test]
    fn unregistered_ids_fall_back_to_the_default() {
        assert_eq!(resolve_template_id(Some("template-99"), None), DEFAULT_TEMPLATE_ID);
        assert_eq!(resolve_template_id(Some(""), None), DEFAULT_TEMPLATE_ID);
        assert_eq!(resolve_template_id(None, None), DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn navigation_without_a_template_preserves_the_active_selection() {
        assert_eq!(extracted_template_id(None, None), None);
    }

    #[test]
    fn navigation_with_a_template_overwrites_with_defaults_applied() {
        assert_eq!(
            extracted_template_id(Some("template-3"), None).as_deref(),
            Some("template-3")
        );
        assert_eq!(
            extracted_template_id(None, Some("template-2")).as_deref(),
            Some("template-2")
        );
        // An unregistered id still counts as intent; it lands on the default.
        assert_eq!(
            extracted_template_id(Some("template-99"), None).as_deref(),
            Some(DEFAULT_TEMPLATE_ID)
        );
    }

    #[test]
    fn config_root_honors_the_legacy_query_parameter() {
        let ctx = SurfaceContext::resolve("/config", Some("template-2"));
        assert_eq!(surface_of("/config"), Surface::Config);
        assert_eq!(ctx.resolved_template_id(), "template-2");
        assert_eq!(
            extracted_template_id(ctx.template_id.as_deref(), ctx.query_template.as_deref())
                .as_deref(),
            Some("template-2")
        );
    }

    #[test]
    fn every_registered_template_resolves_to_itself() {
        for meta in templates::TEMPLATES.iter() {
            assert_eq!(resolve_template_id(Some(meta.id), None), meta.id);
        }
    }

    #[test]
    fn preview_url_uses_the_invitation_route_when_a_slug_is_known() {
        assert_eq!(
            compose_preview_url(Some("ana-bonilla"), "template-2"),
            "/ana-bonilla/template-2"
        );
    }

    #[test]
    fn preview_url_falls_back_to_the_query_shape_without_a_slug() {
        assert_eq!(
            compose_preview_url(None, "template-2"),
            "/preview?template=template-2"
        );
        assert_eq!(
            compose_preview_url(Some(""), "template-2"),
            "/preview?template=template-2"
        );
    }

    #[test]
    fn surface_context_is_derived_from_path_and_query() {
        let ctx = SurfaceContext::resolve("/ana-bonilla/template-2", None);
        assert_eq!(ctx.client_slug.as_deref(), Some("ana-bonilla"));
        assert_eq!(ctx.resolved_template_id(), "template-2");

        let ctx = SurfaceContext::resolve("/preview", Some("template-4"));
        assert_eq!(ctx.client_slug, None);
        assert_eq!(ctx.resolved_template_id(), "template-4");

        let ctx = SurfaceContext::resolve("/nao/existe/por/aqui", Some("template-9"));
        assert_eq!(ctx.client_slug, None);
        assert_eq!(ctx.resolved_template_id(), DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn admin_paths_are_classified_as_administrative() {
        assert!(is_admin_path("/config"));
        assert!(is_admin_path("/builder/ana-bonilla/template-2"));
        assert!(!is_admin_path("/ana-bonilla/template-2"));
        assert!(!is_admin_path("/preview"));
        // A tenant slug that merely starts with an admin word is public.
        assert!(!is_admin_path("/configuracao-festa/template-1"));
    }
}
