use crate::page::PageConfig;
use serde::Serialize;
use std::fmt;

const PORTFOLIO_PREFIX: &str = "portfolio";

/// Navigable location: the builder, or one page of the generated portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum Route {
    BuilderRoot,
    Portfolio(String),
}

impl Route {
    /// Accepts `/`, `/portfolio/<id>`, `portfolio/<id>` and a bare page id.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Route::BuilderRoot;
        }

        let mut segments = trimmed.splitn(2, '/');
        match (segments.next(), segments.next()) {
            (Some(PORTFOLIO_PREFIX), Some(page)) => Route::Portfolio(page.to_string()),
            (Some(PORTFOLIO_PREFIX), None) => Route::Portfolio(String::new()),
            _ => Route::Portfolio(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::BuilderRoot => "/".to_string(),
            Route::Portfolio(page) => format!("/{}/{}", PORTFOLIO_PREFIX, page),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether `requested` may be shown given the navigation list.
///
/// A page that is not in `nav` (disabled, unknown, or empty id) redirects to
/// the first enabled page, or to the builder root when nothing is enabled.
pub fn guard_route(nav: &[PageConfig], requested: &str) -> GuardDecision {
    if nav.iter().any(|page| page.id == requested) {
        return GuardDecision::Allow;
    }

    match nav.first() {
        Some(first) => GuardDecision::Redirect(Route::Portfolio(first.id.clone())),
        None => GuardDecision::Redirect(Route::BuilderRoot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{default_pages, navigation, toggle_page};

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::BuilderRoot);
        assert_eq!(Route::parse(""), Route::BuilderRoot);
        assert_eq!(
            Route::parse("/portfolio/projects"),
            Route::Portfolio("projects".to_string())
        );
        assert_eq!(
            Route::parse("portfolio/about/"),
            Route::Portfolio("about".to_string())
        );
        assert_eq!(Route::parse("contact"), Route::Portfolio("contact".to_string()));
        assert_eq!(Route::parse("/portfolio"), Route::Portfolio(String::new()));
    }

    #[test]
    fn test_path_formatting() {
        assert_eq!(Route::BuilderRoot.path(), "/");
        assert_eq!(Route::Portfolio("skills".into()).to_string(), "/portfolio/skills");
    }

    #[test]
    fn test_disabled_page_redirects_to_first_enabled() {
        let pages = toggle_page(&default_pages(), "contact");
        let nav = navigation(&pages);

        assert_eq!(guard_route(&nav, "about"), GuardDecision::Allow);
        assert_eq!(
            guard_route(&nav, "contact"),
            GuardDecision::Redirect(Route::Portfolio("home".to_string()))
        );
        assert_eq!(
            guard_route(&nav, "does-not-exist"),
            GuardDecision::Redirect(Route::Portfolio("home".to_string()))
        );
    }

    #[test]
    fn test_empty_navigation_redirects_to_builder() {
        assert_eq!(
            guard_route(&[], "home"),
            GuardDecision::Redirect(Route::BuilderRoot)
        );
    }
}
