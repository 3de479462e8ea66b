//! Template selection and route resolution.
//!
//! Every portfolio route goes through [`resolve_route`]: prerequisites are
//! checked, the page is guarded against the navigation list, and only then is
//! one of the three templates asked to render.

mod corporate;
mod creative;
mod fallback;
pub mod html;
mod minimal;

pub use corporate::CorporateTemplate;
pub use creative::CreativeTemplate;
pub use minimal::MinimalTemplate;

use folio_types::{
    GuardDecision, PageConfig, Route, SectionConfig, StoredConfig, StyleId, UserDetails,
    guard_route, sections_for_page,
};

/// Redirect chains longer than this are cut off.
const MAX_REDIRECTS: usize = 4;

/// The one data contract every template renders from.
pub struct RenderContext<'a> {
    pub page: &'a PageConfig,
    pub nav: &'a [PageConfig],
    pub sections: Vec<&'a SectionConfig>,
    pub user: &'a UserDetails,
    pub primary: &'a str,
    pub secondary: &'a str,
    pub year: i32,
}

impl RenderContext<'_> {
    pub fn section_enabled(&self, id: &str) -> bool {
        self.sections.iter().any(|section| section.id == id)
    }

    pub fn is_current(&self, page: &PageConfig) -> bool {
        page.id == self.page.id
    }
}

pub trait Template: Send + Sync {
    fn style(&self) -> StyleId;
    fn render(&self, ctx: &RenderContext<'_>) -> String;
}

static MINIMAL: MinimalTemplate = MinimalTemplate;
static CREATIVE: CreativeTemplate = CreativeTemplate;
static CORPORATE: CorporateTemplate = CorporateTemplate;

pub fn template_for(style: StyleId) -> &'static dyn Template {
    match style {
        StyleId::Minimal => &MINIMAL,
        StyleId::Creative => &CREATIVE,
        StyleId::Corporate => &CORPORATE,
    }
}

/// Exact match on the stored style id.
pub fn select_template(style_id: &str) -> Option<&'static dyn Template> {
    StyleId::parse(style_id).map(template_for)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The builder root itself.
    Builder,
    Redirect(Route),
    Render {
        style: StyleId,
        page_id: String,
        html: String,
    },
    /// Stored style names no template; `html` links back to the builder.
    TemplateNotFound { style: String, html: String },
}

/// Decide what a route shows for the given stored configuration.
pub fn resolve_route(config: &StoredConfig, route: &Route, year: i32) -> RouteOutcome {
    let page_id = match route {
        Route::BuilderRoot => return RouteOutcome::Builder,
        Route::Portfolio(page_id) => page_id,
    };

    let (Some(style), Some((primary, secondary))) = (config.style.as_deref(), config.colors())
    else {
        tracing::debug!(page = %page_id, "builder not finished; redirecting to builder");
        return RouteOutcome::Redirect(Route::BuilderRoot);
    };

    let nav = config.navigation();
    if let GuardDecision::Redirect(target) = guard_route(&nav, page_id) {
        tracing::debug!(page = %page_id, target = %target, "page not viewable; redirecting");
        return RouteOutcome::Redirect(target);
    }

    let Some(template) = select_template(style) else {
        tracing::warn!(style = %style, "no template for stored style");
        return RouteOutcome::TemplateNotFound {
            style: style.to_string(),
            html: fallback::render_not_found(style),
        };
    };

    let Some(page) = nav.iter().find(|page| &page.id == page_id) else {
        return RouteOutcome::Redirect(Route::BuilderRoot);
    };

    let ctx = RenderContext {
        page,
        nav: &nav,
        sections: sections_for_page(&config.sections, page_id),
        user: &config.user_details,
        primary,
        secondary,
        year,
    };

    RouteOutcome::Render {
        style: template.style(),
        page_id: page_id.clone(),
        html: template.render(&ctx),
    }
}

/// Resolve a route, following redirects. Returns the visited routes and the final outcome.
pub fn follow_route(config: &StoredConfig, route: Route, year: i32) -> (Vec<Route>, RouteOutcome) {
    let mut visited = vec![route];
    loop {
        let current = visited.last().cloned().unwrap_or(Route::BuilderRoot);
        let outcome = resolve_route(config, &current, year);
        match outcome {
            RouteOutcome::Redirect(target) if visited.len() <= MAX_REDIRECTS => {
                visited.push(target);
            }
            other => return (visited, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::toggle_page;

    fn configured(style: &str) -> StoredConfig {
        StoredConfig {
            style: Some(style.to_string()),
            primary_color: Some("#112233".to_string()),
            secondary_color: Some("#445566".to_string()),
            ..StoredConfig::default()
        }
    }

    #[test]
    fn test_select_template_exact_match() {
        assert_eq!(select_template("minimal").map(|t| t.style()), Some(StyleId::Minimal));
        assert_eq!(select_template("creative").map(|t| t.style()), Some(StyleId::Creative));
        assert_eq!(
            select_template("corporate").map(|t| t.style()),
            Some(StyleId::Corporate)
        );
        assert!(select_template("Corporate").is_none());
        assert!(select_template("").is_none());
    }

    #[test]
    fn test_missing_style_redirects_to_builder() {
        let config = StoredConfig::default();
        assert_eq!(
            resolve_route(&config, &Route::Portfolio("home".into()), 2026),
            RouteOutcome::Redirect(Route::BuilderRoot)
        );
    }

    #[test]
    fn test_missing_colors_redirect_to_builder() {
        let config = StoredConfig {
            secondary_color: None,
            ..configured("minimal")
        };
        assert_eq!(
            resolve_route(&config, &Route::Portfolio("home".into()), 2026),
            RouteOutcome::Redirect(Route::BuilderRoot)
        );
    }

    #[test]
    fn test_disabled_page_redirects_to_first_enabled() {
        let mut config = configured("creative");
        config.pages = toggle_page(&config.pages, "contact");

        let (visited, outcome) = follow_route(&config, Route::Portfolio("contact".into()), 2026);
        assert_eq!(
            visited,
            vec![
                Route::Portfolio("contact".into()),
                Route::Portfolio("home".into())
            ]
        );
        assert!(matches!(outcome, RouteOutcome::Render { ref page_id, .. } if page_id == "home"));
    }

    #[test]
    fn test_no_enabled_pages_ends_at_builder() {
        let mut config = configured("minimal");
        for page in &mut config.pages {
            page.enabled = false;
        }
        let (visited, outcome) = follow_route(&config, Route::Portfolio("home".into()), 2026);
        assert_eq!(visited.last(), Some(&Route::BuilderRoot));
        assert_eq!(outcome, RouteOutcome::Builder);
    }

    #[test]
    fn test_unknown_style_renders_fallback() {
        let config = configured("vaporwave");
        match resolve_route(&config, &Route::Portfolio("home".into()), 2026) {
            RouteOutcome::TemplateNotFound { style, html } => {
                assert_eq!(style, "vaporwave");
                assert!(html.contains("Template not found"));
                assert!(html.contains("href=\"/\""));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_every_template_renders_every_page() {
        for style in StyleId::ALL {
            let config = configured(style.as_str());
            for page in config.navigation() {
                let outcome = resolve_route(&config, &Route::Portfolio(page.id.clone()), 2026);
                let RouteOutcome::Render { html, style: rendered, .. } = outcome else {
                    panic!("{} / {} did not render", style, page.id);
                };
                assert_eq!(rendered, style);
                assert!(html.starts_with("<!DOCTYPE html>"));
                assert!(html.contains("#112233"));
                assert!(html.contains("Alex Morgan"));
                assert!(html.contains("2026"));
            }
        }
    }

    #[test]
    fn test_nav_lists_enabled_pages_in_order() {
        let mut config = configured("corporate");
        config.pages = toggle_page(&config.pages, "skills");
        config.pages = folio_types::reorder(&config.pages, 3, 0).unwrap();

        let RouteOutcome::Render { html, .. } =
            resolve_route(&config, &Route::Portfolio("home".into()), 2026)
        else {
            panic!("home did not render");
        };
        let projects = html.find("href=\"/portfolio/projects\"").unwrap();
        let home = html.find("href=\"/portfolio/home\"").unwrap();
        assert!(projects < home);
        assert!(!html.contains("href=\"/portfolio/skills\""));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let mut config = configured("minimal");
        config.user_details.name = "<script>alert(1)</script>".to_string();
        let RouteOutcome::Render { html, .. } =
            resolve_route(&config, &Route::Portfolio("about".into()), 2026)
        else {
            panic!("about did not render");
        };
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
